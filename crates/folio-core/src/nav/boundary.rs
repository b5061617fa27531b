//! Inner wheel handling: manual scrolling and boundary dwell
//!
//! Native scroll chaining does not hand wheel input to the outer handler at
//! a predictable moment, so inner events are always decided here. At an edge
//! the first ticks are absorbed (and a hint armed); once the dwell window has
//! elapsed they pass through to the outer translator.

use std::time::{Duration, Instant};

use super::hint::{Direction, Hint};
use super::session::ScrollSession;
use super::tabs::TabSet;
use super::wheel::WheelEvent;

/// Scroll position and dimensions of the content pane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn is_overflowing(&self) -> bool {
        self.scroll_height > self.client_height
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn at_bottom(&self, tolerance: f64) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - tolerance
    }
}

/// Decision for one inner wheel event
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryOutcome {
    /// Content does not overflow: native behavior, the event bubbles on
    Native,
    /// Inside the post-switch guard window: absorbed, nothing else happens
    Guarded,
    /// At the edge the gesture points past. `absorbed` is false once the
    /// dwell window has elapsed. `arm_hint` is set on first contact when an
    /// adjacent tab exists in that direction.
    Boundary {
        absorbed: bool,
        arm_hint: Option<Hint>,
    },
    /// Not at an edge: scroll by `delta` and absorb
    Scrolled { delta: f64 },
}

impl BoundaryOutcome {
    /// Whether the event continues to the outer translator
    pub fn propagates(&self) -> bool {
        matches!(
            self,
            BoundaryOutcome::Native | BoundaryOutcome::Boundary { absorbed: false, .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct BoundaryDetector {
    dwell: Duration,
    line_height: f64,
    bottom_tolerance: f64,
}

impl BoundaryDetector {
    pub fn new(dwell: Duration, line_height: f64, bottom_tolerance: f64) -> Self {
        Self {
            dwell,
            line_height,
            bottom_tolerance,
        }
    }

    /// Decide what an inner wheel event does. Updates the session's boundary
    /// timestamp; all other effects are left to the caller.
    pub fn decide(
        &self,
        event: &WheelEvent,
        metrics: ScrollMetrics,
        session: &mut ScrollSession,
        tabs: &TabSet,
        active: usize,
        now: Instant,
    ) -> BoundaryOutcome {
        if !metrics.is_overflowing() {
            return BoundaryOutcome::Native;
        }

        let delta = event.normalized(self.line_height, metrics.client_height);

        if session.guard.is_active(now) {
            return BoundaryOutcome::Guarded;
        }

        let direction = Direction::from_delta(delta);
        let at_boundary = match direction {
            Direction::Down => metrics.at_bottom(self.bottom_tolerance),
            Direction::Up => metrics.at_top(),
        };

        if !at_boundary {
            session.boundary_reached_at = None;
            return BoundaryOutcome::Scrolled { delta };
        }

        let mut arm_hint = None;
        let reached_at = match session.boundary_reached_at {
            Some(at) => at,
            None => {
                session.boundary_reached_at = Some(now);
                arm_hint = tabs
                    .step(active, direction.is_down())
                    .map(|target_index| Hint {
                        target: tabs[target_index].clone(),
                        target_index,
                        direction,
                    });
                now
            }
        };

        BoundaryOutcome::Boundary {
            absorbed: now.saturating_duration_since(reached_at) < self.dwell,
            arm_hint,
        }
    }
}

//! Transient "keep scrolling to reach the next tab" hint

use super::tabs::TabDefinition;

/// Direction a continued boundary scroll would move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    pub fn is_down(self) -> bool {
        self == Direction::Down
    }
}

/// Adjacent tab a continued scroll would land on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub target: TabDefinition,
    pub target_index: usize,
    pub direction: Direction,
}

impl Hint {
    /// Overlay text naming the target tab and the direction
    pub fn message(&self) -> String {
        let name = self.target.display_name();
        match self.direction {
            Direction::Down => format!("Scroll to continue → {}", name),
            Direction::Up => format!("{} ← Scroll to continue", name),
        }
    }
}

/// Holder for the single visible hint. Purely informational.
#[derive(Debug, Default)]
pub struct HintPresenter {
    current: Option<Hint>,
}

impl HintPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a hint for the tab adjacent to `active_index`
    pub fn show(&mut self, hint: Hint, active_index: usize) {
        let adjacent = match hint.direction {
            Direction::Down => active_index + 1 == hint.target_index,
            Direction::Up => hint.target_index + 1 == active_index,
        };
        if !adjacent {
            tracing::debug!(
                target_index = hint.target_index,
                active_index,
                "Dropping hint for non-adjacent tab"
            );
            return;
        }
        self.current = Some(hint);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Hint> {
        self.current.as_ref()
    }
}

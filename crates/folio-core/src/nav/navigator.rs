//! Navigator - the single entry point hosts drive
//!
//! Owns the tab set, the active tab, the hint, the current scroll session,
//! the fragment synchronizer, the heading observer, and every timer. Hosts
//! forward input and clock ticks; the location and the content pane are
//! passed in on each call.

use std::time::Instant;

use tracing::{debug, info};

use super::boundary::{BoundaryDetector, BoundaryOutcome};
use super::hash_sync::{ExternalNavigation, HashSynchronizer};
use super::headings::HeadingVisibilityObserver;
use super::hint::{Hint, HintPresenter};
use super::session::ScrollSession;
use super::sink::NavigationSink;
use super::tabs::{TabDefinition, TabSet};
use super::timers::{TimerKey, Timers};
use super::view::{ContentView, ScrollBehavior};
use super::wheel::{WheelAction, WheelDecision, WheelEvent, WheelSource, WheelToTab};
use crate::config::NavigationConfig;
use crate::error::{FolioError, Result};

/// Snapshot of what the user currently sees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_tab_id: String,
    pub hint: Option<Hint>,
}

pub struct Navigator {
    tabs: TabSet,
    config: NavigationConfig,
    active: usize,
    hint: HintPresenter,
    translator: WheelToTab,
    boundary: BoundaryDetector,
    session: ScrollSession,
    sync: HashSynchronizer,
    observer: HeadingVisibilityObserver,
    timers: Timers,
}

impl Navigator {
    /// Create a navigator showing `default_tab`. Nothing is mounted until
    /// [`Navigator::restore`] runs.
    pub fn new(
        tabs: TabSet,
        default_tab: &str,
        config: NavigationConfig,
        now: Instant,
    ) -> Result<Self> {
        let active = tabs
            .index_of(default_tab)
            .ok_or_else(|| FolioError::UnknownTab(default_tab.to_string()))?;
        let session = ScrollSession::new(&tabs[active].id, now, config.switch_guard());
        let boundary = BoundaryDetector::new(
            config.boundary_dwell(),
            config.line_height_px,
            config.bottom_tolerance_px,
        );

        Ok(Self {
            translator: WheelToTab::new(config.wheel_threshold),
            observer: HeadingVisibilityObserver::new(config.heading_zone_ratio),
            hint: HintPresenter::new(),
            sync: HashSynchronizer::new(),
            timers: Timers::new(),
            boundary,
            session,
            active,
            tabs,
            config,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> &TabDefinition {
        &self.tabs[self.active]
    }

    pub fn hint(&self) -> Option<&Hint> {
        self.hint.current()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            active_tab_id: self.active_tab().id.clone(),
            hint: self.hint.current().cloned(),
        }
    }

    pub fn session(&self) -> &ScrollSession {
        &self.session
    }

    pub fn sync(&self) -> &HashSynchronizer {
        &self.sync
    }

    /// Earliest pending timer; hosts should tick no later than this
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn is_timer_pending(&self, key: TimerKey) -> bool {
        self.timers.is_pending(key)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount: restore the tab (and pending heading) named by the location,
    /// falling back to the default tab for unknown or malformed fragments.
    pub fn restore(
        &mut self,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) {
        let target = match self.sync.restore(sink, &self.tabs) {
            Some(index) => {
                info!(tab = %self.tabs[index].id, "Restored tab from location");
                index
            }
            None => self.active,
        };
        self.enter_tab(target, now, view, sink);
        self.timers.schedule(TimerKey::SkipRelease, now);
    }

    /// Cancel every timer and disconnect the observer. The navigator stays
    /// usable but nothing fires until new input arrives.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.observer.disconnect();
        self.sync.cancel_pending();
        self.session.pending_hint = None;
        self.translator.end_cooldown();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Direct activation (tab button). Unknown ids are ignored.
    pub fn select_tab(
        &mut self,
        tab_id: &str,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) -> bool {
        match self.tabs.index_of(tab_id) {
            Some(index) => self.activate(index, now, view, sink),
            None => {
                debug!(tab = %tab_id, "Ignoring selection of unknown tab");
                false
            }
        }
    }

    /// Route one wheel event.
    ///
    /// Inner events are decided by the boundary detector first; those it
    /// lets through continue to the outer translator, as a bubbling event
    /// would.
    pub fn handle_wheel(
        &mut self,
        source: WheelSource,
        event: WheelEvent,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) -> WheelDecision {
        if source == WheelSource::Outer {
            let action = self.outer_wheel(event.delta_y, now, view, sink);
            return WheelDecision::consumed(action);
        }

        let outcome = self.boundary.decide(
            &event,
            view.metrics(),
            &mut self.session,
            &self.tabs,
            self.active,
            now,
        );

        match outcome {
            BoundaryOutcome::Native => {
                let action = match self.outer_wheel(event.delta_y, now, view, sink) {
                    WheelAction::None => WheelAction::Native,
                    switched => switched,
                };
                WheelDecision::native(action)
            }
            BoundaryOutcome::Guarded => WheelDecision::consumed(WheelAction::None),
            BoundaryOutcome::Boundary { absorbed, arm_hint } => {
                if let Some(hint) = arm_hint {
                    if !self.timers.is_pending(TimerKey::HintArm) {
                        self.session.pending_hint = Some(hint);
                        self.timers.schedule(TimerKey::HintArm, now);
                    }
                }
                if absorbed {
                    WheelDecision::consumed(WheelAction::None)
                } else {
                    let action = self.outer_wheel(event.delta_y, now, view, sink);
                    WheelDecision::consumed(action)
                }
            }
            BoundaryOutcome::Scrolled { delta } => {
                view.scroll_by(delta);
                self.end_boundary_gesture();
                WheelDecision::consumed(WheelAction::Scroll(delta))
            }
        }
    }

    /// Scroll the content pane by means other than the wheel (keys,
    /// scrollbar). Counts as normal scrolling: the hint goes away and the
    /// next edge contact starts a fresh dwell.
    pub fn scroll_by(&mut self, dy: f64, view: &mut dyn ContentView) {
        view.scroll_by(dy);
        self.session.boundary_reached_at = None;
        self.end_boundary_gesture();
    }

    /// The location changed from outside (typed, back/forward, shared link)
    pub fn on_external_hash_change(
        &mut self,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) {
        match self.sync.on_external_change(sink, &self.tabs, self.active) {
            ExternalNavigation::Ignored => {}
            ExternalNavigation::SwitchTab(index) => {
                self.activate(index, now, view, sink);
                self.timers.schedule(TimerKey::SkipRelease, now);
            }
            ExternalNavigation::ScrollToHeading(heading) => {
                if !view.scroll_into_view(&heading, ScrollBehavior::Smooth) {
                    debug!(heading = %heading, "External heading not found");
                }
            }
        }
    }

    // =========================================================================
    // Clock and frames
    // =========================================================================

    /// Fire due timers, then pick up external location changes. Timers armed
    /// while handling the change fire on the next tick at the earliest.
    pub fn tick(&mut self, now: Instant, view: &mut dyn ContentView, sink: &mut dyn NavigationSink) {
        for key in self.timers.take_due(now) {
            match key {
                TimerKey::WheelCooldown => self.translator.end_cooldown(),
                TimerKey::HintArm => {
                    if let Some(hint) = self.session.pending_hint.take() {
                        self.hint.show(hint, self.active);
                    }
                }
                TimerKey::HeadingSubscribe => {
                    self.observer.subscribe();
                    self.observe_headings(view, sink);
                }
                TimerKey::SwitchSettle => self.sync.settle(),
                TimerKey::SkipRelease => self.sync.release_skip(),
            }
        }

        if sink.take_external_change() {
            self.on_external_hash_change(now, view, sink);
        }
    }

    /// A frame was rendered: advance the deferred heading scroll, then let
    /// the observer look at the new layout.
    pub fn on_frame(&mut self, view: &mut dyn ContentView, sink: &mut dyn NavigationSink) {
        self.sync.on_frame(view, &mut self.session, sink);
        self.observe_headings(view, sink);
    }

    /// Evaluate heading visibility after layout or scroll changes
    pub fn observe_headings(&mut self, view: &dyn ContentView, sink: &mut dyn NavigationSink) {
        let metrics = view.metrics();
        if let Some(heading) = self.observer.evaluate(metrics, &view.headings()) {
            self.sync.on_heading_visible(&heading, &mut self.session, sink);
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn outer_wheel(
        &mut self,
        delta_y: f64,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) -> WheelAction {
        if !self.translator.accepts(delta_y) {
            return WheelAction::None;
        }
        let Some(to) = self.tabs.step(self.active, delta_y > 0.0) else {
            return WheelAction::None;
        };

        let from = self.active;
        self.activate(to, now, view, sink);
        self.translator.start_cooldown();
        self.timers
            .schedule(TimerKey::WheelCooldown, now + self.config.wheel_cooldown());
        WheelAction::SwitchTab { from, to }
    }

    fn activate(
        &mut self,
        index: usize,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) -> bool {
        if index == self.active {
            return false;
        }
        self.enter_tab(index, now, view, sink);
        true
    }

    fn end_boundary_gesture(&mut self) {
        self.timers.cancel(TimerKey::HintArm);
        self.session.pending_hint = None;
        self.hint.clear();
    }

    /// Tear down the current session and mount `index` in a fresh one
    fn enter_tab(
        &mut self,
        index: usize,
        now: Instant,
        view: &mut dyn ContentView,
        sink: &mut dyn NavigationSink,
    ) {
        self.timers.cancel_session_scoped();
        self.observer.disconnect();
        self.hint.clear();

        self.active = index;
        let tab_id = self.tabs[index].id.clone();
        self.session = ScrollSession::new(&tab_id, now, self.config.switch_guard());

        view.mount(&tab_id);
        self.sync.on_active_tab_changed(&tab_id, sink);

        self.timers
            .schedule(TimerKey::SwitchSettle, now + self.config.switch_settle());
        self.timers.schedule(
            TimerKey::HeadingSubscribe,
            now + self.config.heading_subscribe_delay(),
        );
        info!(tab = %tab_id, "Active tab changed");
    }
}

//! Bidirectional sync between `(active tab, heading)` and the location
//!
//! Restoring a tab from the location must not immediately rewrite that same
//! location, so fragment writes stay disabled until one timer tick after the
//! restore (and after every external navigation).

use tracing::debug;

use super::fragment::{self, Fragment};
use super::session::ScrollSession;
use super::sink::NavigationSink;
use super::tabs::TabSet;
use super::view::{ContentView, ScrollBehavior};
use crate::constants::nav::PENDING_SCROLL_FRAMES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Between mount and the first skip release
    Restoring,
    /// Steady state
    Syncing,
}

/// Heading scroll waiting for the new tab's content to lay out
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingHeadingScroll {
    tab_id: String,
    heading_id: String,
    frames_left: u8,
}

/// What an external location change asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExternalNavigation {
    Ignored,
    SwitchTab(usize),
    ScrollToHeading(String),
}

#[derive(Debug)]
pub struct HashSynchronizer {
    phase: SyncPhase,
    skip_hash_update: bool,
    switching: bool,
    pending_heading: Option<String>,
    pending_scroll: Option<PendingHeadingScroll>,
}

impl Default for HashSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HashSynchronizer {
    pub fn new() -> Self {
        Self {
            phase: SyncPhase::Restoring,
            skip_hash_update: true,
            switching: false,
            pending_heading: None,
            pending_scroll: None,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn is_skipping(&self) -> bool {
        self.skip_hash_update
    }

    pub fn is_switching(&self) -> bool {
        self.switching
    }

    /// Read the location; returns the tab to activate if it names a known one
    pub(crate) fn restore(&mut self, sink: &dyn NavigationSink, tabs: &TabSet) -> Option<usize> {
        let target = parse_known(&sink.read(), tabs)?;
        let index = tabs.index_of(&target.tab_id)?;
        self.pending_heading = target.heading_id;
        Some(index)
    }

    /// Re-enable fragment writes
    pub(crate) fn release_skip(&mut self) {
        self.skip_hash_update = false;
        self.phase = SyncPhase::Syncing;
    }

    /// Start of the external-navigation skip window
    pub(crate) fn begin_skip(&mut self) {
        self.skip_hash_update = true;
    }

    /// The switch transition is over; heading reports count again
    pub(crate) fn settle(&mut self) {
        self.switching = false;
    }

    pub(crate) fn on_active_tab_changed(&mut self, tab_id: &str, sink: &mut dyn NavigationSink) {
        self.switching = true;

        if !self.skip_hash_update {
            sink.replace(&fragment::encode(tab_id, None));
        }

        self.pending_scroll = self
            .pending_heading
            .take()
            .map(|heading_id| PendingHeadingScroll {
                tab_id: tab_id.to_string(),
                heading_id,
                frames_left: PENDING_SCROLL_FRAMES,
            });
    }

    /// One rendered frame passed. Performs the pending heading scroll once
    /// enough frames have elapsed for the content to lay out.
    pub(crate) fn on_frame(
        &mut self,
        view: &mut dyn ContentView,
        session: &mut ScrollSession,
        sink: &mut dyn NavigationSink,
    ) {
        let Some(pending) = self.pending_scroll.as_mut() else {
            return;
        };
        pending.frames_left = pending.frames_left.saturating_sub(1);
        if pending.frames_left > 0 {
            return;
        }

        let Some(pending) = self.pending_scroll.take() else {
            return;
        };
        if pending.tab_id != session.tab_id() {
            return;
        }
        if view.scroll_into_view(&pending.heading_id, ScrollBehavior::Instant) {
            sink.replace(&fragment::encode(&pending.tab_id, Some(&pending.heading_id)));
            session.last_heading_id = Some(pending.heading_id);
        } else {
            debug!(heading = %pending.heading_id, "Pending heading not found, skipping scroll");
        }
    }

    pub(crate) fn on_heading_visible(
        &mut self,
        heading_id: &str,
        session: &mut ScrollSession,
        sink: &mut dyn NavigationSink,
    ) {
        if self.switching || session.last_heading_id() == Some(heading_id) {
            return;
        }
        sink.replace(&fragment::encode(session.tab_id(), Some(heading_id)));
        session.last_heading_id = Some(heading_id.to_string());
    }

    pub(crate) fn on_external_change(
        &mut self,
        sink: &dyn NavigationSink,
        tabs: &TabSet,
        active: usize,
    ) -> ExternalNavigation {
        let Some(target) = parse_known(&sink.read(), tabs) else {
            return ExternalNavigation::Ignored;
        };
        let Some(index) = tabs.index_of(&target.tab_id) else {
            return ExternalNavigation::Ignored;
        };

        if index != active {
            self.pending_heading = target.heading_id;
            self.begin_skip();
            return ExternalNavigation::SwitchTab(index);
        }

        match target.heading_id {
            Some(heading) => ExternalNavigation::ScrollToHeading(heading),
            None => ExternalNavigation::Ignored,
        }
    }

    /// Drop any scroll still waiting for frames
    pub(crate) fn cancel_pending(&mut self) {
        self.pending_heading = None;
        self.pending_scroll = None;
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }
}

/// Decode `raw` and keep it only if it names a tab of `tabs`
fn parse_known(raw: &str, tabs: &TabSet) -> Option<Fragment> {
    match fragment::decode(raw) {
        Ok(target) if tabs.contains(&target.tab_id) => Some(target),
        Ok(target) => {
            debug!(tab = %target.tab_id, "Ignoring fragment for unknown tab");
            None
        }
        Err(fragment::FragmentError::Empty) => None,
        Err(e) => {
            debug!(fragment = %raw, error = %e, "Ignoring malformed fragment");
            None
        }
    }
}

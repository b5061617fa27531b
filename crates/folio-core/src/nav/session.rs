//! Per-activation scroll session

use std::time::{Duration, Instant};

use super::guard::TabSwitchGuard;
use super::hint::Hint;

/// Ephemeral state owned by one tab activation.
///
/// A fresh session replaces the old one whenever the active tab changes; the
/// navigator cancels the session-scoped timers before dropping it.
#[derive(Debug)]
pub struct ScrollSession {
    tab_id: String,
    pub(crate) guard: TabSwitchGuard,
    pub(crate) boundary_reached_at: Option<Instant>,
    pub(crate) last_heading_id: Option<String>,
    pub(crate) pending_hint: Option<Hint>,
}

impl ScrollSession {
    pub fn new(tab_id: impl Into<String>, now: Instant, guard_window: Duration) -> Self {
        Self {
            tab_id: tab_id.into(),
            guard: TabSwitchGuard::new(now, guard_window),
            boundary_reached_at: None,
            last_heading_id: None,
            pending_hint: None,
        }
    }

    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn guard(&self) -> &TabSwitchGuard {
        &self.guard
    }

    pub fn boundary_reached_at(&self) -> Option<Instant> {
        self.boundary_reached_at
    }

    pub fn last_heading_id(&self) -> Option<&str> {
        self.last_heading_id.as_deref()
    }
}

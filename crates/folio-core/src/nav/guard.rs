//! Post-switch guard window

use std::time::{Duration, Instant};

/// Timestamp of the last tab switch and the window during which inner wheel
/// input is swallowed, so momentum from the previous tab cannot cascade.
#[derive(Debug, Clone, Copy)]
pub struct TabSwitchGuard {
    switched_at: Instant,
    window: Duration,
}

impl TabSwitchGuard {
    pub fn new(switched_at: Instant, window: Duration) -> Self {
        Self {
            switched_at,
            window,
        }
    }

    pub fn refresh(&mut self, now: Instant) {
        self.switched_at = now;
    }

    pub fn switched_at(&self) -> Instant {
        self.switched_at
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.switched_at) < self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        let t0 = Instant::now();
        let guard = TabSwitchGuard::new(t0, Duration::from_millis(500));
        assert!(guard.is_active(t0));
        assert!(guard.is_active(t0 + Duration::from_millis(499)));
        assert!(!guard.is_active(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn test_refresh_restarts_window() {
        let t0 = Instant::now();
        let mut guard = TabSwitchGuard::new(t0, Duration::from_millis(500));
        guard.refresh(t0 + Duration::from_millis(600));
        assert!(guard.is_active(t0 + Duration::from_millis(700)));
        assert_eq!(guard.switched_at(), t0 + Duration::from_millis(600));
    }
}

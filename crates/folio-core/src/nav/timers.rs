//! Named, cancelable deadlines
//!
//! Each key has a single owner and at most one pending deadline; scheduling a
//! key again supersedes the earlier deadline.

use std::collections::BTreeMap;
use std::time::Instant;

/// Purpose of a pending deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKey {
    /// Outer wheel lockout after a tab step
    WheelCooldown,
    /// Show the armed boundary hint (deferred one tick)
    HintArm,
    /// Re-subscribe the heading observer after new content mounted
    HeadingSubscribe,
    /// End of the post-switch window in which heading reports are dropped
    SwitchSettle,
    /// Re-enable fragment writes after a restore or external navigation
    SkipRelease,
}

impl TimerKey {
    /// Timers owned by a scroll session and dropped with it
    pub fn is_session_scoped(self) -> bool {
        matches!(
            self,
            TimerKey::HintArm | TimerKey::HeadingSubscribe | TimerKey::SwitchSettle
        )
    }
}

#[derive(Debug, Default)]
pub struct Timers {
    deadlines: BTreeMap<TimerKey, Instant>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: TimerKey, at: Instant) {
        self.deadlines.insert(key, at);
    }

    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.deadlines.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.deadlines.contains_key(&key)
    }

    /// Remove and return every key due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut due: Vec<(Instant, TimerKey)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(key, at)| (*at, *key))
            .collect();
        due.sort();
        for (_, key) in &due {
            self.deadlines.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    pub fn cancel_session_scoped(&mut self) {
        self.deadlines.retain(|key, _| !key.is_session_scoped());
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_take_due_orders_by_deadline() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::SwitchSettle, t0 + Duration::from_millis(400));
        timers.schedule(TimerKey::HintArm, t0);
        timers.schedule(TimerKey::HeadingSubscribe, t0 + Duration::from_millis(100));

        assert_eq!(timers.take_due(t0), vec![TimerKey::HintArm]);
        assert_eq!(
            timers.take_due(t0 + Duration::from_millis(500)),
            vec![TimerKey::HeadingSubscribe, TimerKey::SwitchSettle]
        );
        assert!(timers.next_deadline().is_none());
    }

    #[test]
    fn test_reschedule_supersedes() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::WheelCooldown, t0);
        timers.schedule(TimerKey::WheelCooldown, t0 + Duration::from_millis(120));
        assert!(timers.take_due(t0).is_empty());
        assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(120)));
    }

    #[test]
    fn test_session_scoped_cancel_keeps_global_timers() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::WheelCooldown, t0);
        timers.schedule(TimerKey::SkipRelease, t0);
        timers.schedule(TimerKey::HintArm, t0);
        timers.schedule(TimerKey::SwitchSettle, t0);
        timers.cancel_session_scoped();
        assert!(timers.is_pending(TimerKey::WheelCooldown));
        assert!(timers.is_pending(TimerKey::SkipRelease));
        assert!(!timers.is_pending(TimerKey::HintArm));
        assert!(!timers.is_pending(TimerKey::SwitchSettle));
    }
}

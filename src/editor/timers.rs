//! Recurring fixed-interval timers driven by host-supplied timestamps.
//!
//! The host calls [`Timers::poll`] with a monotonic "now"; nothing here sleeps
//! or spawns, so firing order is fully deterministic.

use std::time::Duration;

use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[cfg(test)]
    pub(crate) fn for_tests(n: u64) -> Self {
        TimerId(n)
    }
}

#[derive(Clone, Debug)]
struct Timer {
    interval: Duration,
    next_due: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct Timers {
    next_id: u64,
    timers: IndexMap<TimerId, Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (not cancelled) timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Register a timer first firing one `interval` after `now`.
    pub fn schedule(&mut self, interval: Duration, now: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.insert(id, Timer { interval, next_due: now + interval });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.shift_remove(&id).is_some()
    }

    /// Re-phase a timer so its next firing is one interval after `now`.
    pub fn restart(&mut self, id: TimerId, now: Duration) {
        if let Some(t) = self.timers.get_mut(&id) {
            t.next_due = now + t.interval;
        }
    }

    /// Fire every due timer once and re-arm it past `now`.
    pub fn poll(&mut self, now: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for (id, t) in self.timers.iter_mut() {
            if t.next_due > now {
                continue;
            }
            fired.push(*id);
            if t.interval.is_zero() {
                t.next_due = now + Duration::from_millis(1);
                continue;
            }
            while t.next_due <= now {
                t.next_due += t.interval;
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_on_interval() {
        let mut timers = Timers::new();
        let id = timers.schedule(ms(500), ms(0));
        assert!(timers.poll(ms(499)).is_empty());
        assert_eq!(timers.poll(ms(500)), vec![id]);
        assert!(timers.poll(ms(700)).is_empty());
        assert_eq!(timers.poll(ms(1000)), vec![id]);
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut timers = Timers::new();
        let id = timers.schedule(ms(100), ms(0));
        assert_eq!(timers.poll(ms(1050)), vec![id]);
        assert!(timers.poll(ms(1099)).is_empty());
        assert_eq!(timers.poll(ms(1100)), vec![id]);
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut timers = Timers::new();
        let a = timers.schedule(ms(500), ms(0));
        let b = timers.schedule(ms(500), ms(0));
        timers.restart(b, ms(400));
        assert_eq!(timers.poll(ms(500)), vec![a]);
        assert!(timers.cancel(a));
        assert!(!timers.cancel(a));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.poll(ms(900)), vec![b]);
    }
}

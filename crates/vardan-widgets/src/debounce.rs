//! Trailing-edge debouncing driven by host timers.
//!
//! Each trigger returns a ticket; the host schedules a timer carrying it,
//! and only the ticket of the most recent trigger is allowed to fire.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    wait_ms: u32,
    latest: u64,
    fired: bool,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            latest: 0,
            fired: true,
        }
    }

    /// Delay to schedule for each trigger.
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record an event; returns the ticket for its timer.
    pub fn trigger(&mut self) -> u64 {
        self.latest += 1;
        self.fired = false;
        self.latest
    }

    /// A timer elapsed. Returns true when the handler should run.
    pub fn elapse(&mut self, ticket: u64) -> bool {
        if ticket != self.latest || self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether a trigger is waiting for its timer.
    pub fn pending(&self) -> bool {
        !self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once() {
        let mut d = Debouncer::new(100);
        let a = d.trigger();
        let b = d.trigger();
        let c = d.trigger();
        assert!(!d.elapse(a));
        assert!(!d.elapse(b));
        assert!(d.pending());
        assert!(d.elapse(c));
        assert!(!d.elapse(c));
        assert!(!d.pending());
    }

    #[test]
    fn test_separate_bursts_fire_each() {
        let mut d = Debouncer::new(50);
        let first = d.trigger();
        assert!(d.elapse(first));
        let second = d.trigger();
        assert!(d.elapse(second));
    }
}

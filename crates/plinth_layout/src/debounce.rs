//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] is a coalescing queue of size one: every trigger replaces
//! the pending deadline, so a burst of events fires once, `delay` after the
//! last of them.

use std::time::Duration;
use web_time::Instant;

use crate::constants::{DEFAULT_REPOSITION_DEBOUNCE, MAX_REPOSITION_DEBOUNCE};
use crate::error::{LayoutError, LayoutResult};

/// Trailing debounce timer driven by explicit timestamps.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Quiet period required before firing.
    delay: Duration,

    /// When the pending job fires, if one is armed.
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    ///
    /// Delays above [`MAX_REPOSITION_DEBOUNCE`] are rejected.
    pub fn new(delay: Duration) -> LayoutResult<Self> {
        if delay > MAX_REPOSITION_DEBOUNCE {
            return Err(LayoutError::InvalidDebounceDelay { delay });
        }
        Ok(Self {
            delay,
            deadline: None,
        })
    }

    /// Get the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timer. Replaces any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
        log::trace!("Debouncer: armed for {:?}", self.delay);
    }

    /// Drop the pending job, if any.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            log::trace!("Debouncer: cancelled pending job");
        }
    }

    /// Check if a job is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending job fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending job if its deadline has passed.
    ///
    /// Returns true exactly once per armed burst.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self {
            delay: DEFAULT_REPOSITION_DEBOUNCE,
            deadline: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_initial_state() {
        let debouncer = Debouncer::default();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.delay(), ms(150));
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.trigger(start);

        assert!(!debouncer.fire_if_due(start + ms(149)));
        assert!(debouncer.fire_if_due(start + ms(150)));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(start + ms(500)));
    }

    #[test]
    fn test_burst_collapses_to_last_event() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        for step in 0..10 {
            debouncer.trigger(start + ms(step * 50));
        }

        // Last trigger at 450ms
        assert!(!debouncer.fire_if_due(start + ms(590)));
        assert!(debouncer.fire_if_due(start + ms(600)));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.trigger(start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(start + ms(1000)));
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO).unwrap();
        debouncer.trigger(start);
        assert!(debouncer.fire_if_due(start));
    }

    #[test]
    fn test_rejects_excessive_delay() {
        let err = Debouncer::new(Duration::from_secs(60)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidDebounceDelay {
                delay: Duration::from_secs(60)
            }
        );
    }
}

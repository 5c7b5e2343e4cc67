//! Scripted scenarios that drive the layout controllers against a
//! [`HeadlessHost`](plinth_layout::HeadlessHost).
//!
//! Each demo owns a simulated clock so debounce behaviour is reproducible.

pub mod dropdown;
pub mod list;

use std::time::Duration;
use web_time::Instant;

pub use dropdown::{run_dropdown_demo, DropdownReport, DropdownStep};
pub use list::{run_list_demo, ListReport, ListStep};

/// Monotonic clock advanced by hand.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    now: Instant,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: Instant::now() }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the clock forward and return the new time.
    pub fn advance(&mut self, by: Duration) -> Instant {
        self.now += by;
        self.now
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

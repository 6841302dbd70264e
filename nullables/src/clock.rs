//! Nullable clock — deterministic time for testing.

use agora_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to, which makes voting-window
/// boundaries exact: set the clock to the deadline, then step past it.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get() + secs);
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }

    /// Jump to one second after a deadline, closing its voting window.
    pub fn advance_past(&self, deadline: Timestamp) {
        self.current.set(deadline.as_secs() + 1);
    }
}

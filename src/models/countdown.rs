//! Debate countdown clock, driven by one-second ticks from the host.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    /// Full length in seconds; `reset` returns to this value.
    pub duration: u32,
    pub remaining: u32,
    pub running: bool,
}

impl Countdown {
    /// A stopped clock at full duration.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Restore full duration and run. A zero-length clock stays stopped.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = self.remaining > 0;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// No-op once the clock has run out.
    pub fn resume(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    /// Restore full duration and stop.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = false;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one second. Returns true if the clock moved.
    /// Reaching zero stops the clock.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
        }
        true
    }
}

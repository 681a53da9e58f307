//! Elapsed-time counter.
//!
//! Driven by the fixed-timestep `tick` of the game loop rather than a
//! free-running callback. A timer belongs to one session; replacing the
//! session drops it, so nothing keeps ticking after a reset.

use crate::types::CLOCK_TICK_MS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondsTimer {
    running: bool,
    elapsed_secs: u32,
    /// Milliseconds accumulated toward the next whole second.
    accum_ms: u32,
}

impl SecondsTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from zero and begin counting.
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_secs = 0;
        self.accum_ms = 0;
    }

    /// Cancel ticking. Elapsed seconds are kept.
    pub fn stop(&mut self) {
        self.running = false;
        self.accum_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Advance by `elapsed_ms`; returns how many whole seconds passed.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.accum_ms = self.accum_ms.saturating_add(elapsed_ms);
        let secs = self.accum_ms / CLOCK_TICK_MS;
        self.accum_ms %= CLOCK_TICK_MS;
        self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
        secs
    }
}

//! Timer module - explicit, manually advanced timers
//!
//! Nothing here reads the wall clock. The caller feeds elapsed milliseconds
//! through `advance`, which keeps every timer deterministic under test.

use crate::types::CLOCK_RESOLUTION_MS;

/// Fires once per whole interval elapsed while running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl IntervalTimer {
    /// Create a stopped timer. A zero interval is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop without discarding the partial interval
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and discard the partial interval
    pub fn reset(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    /// Feed elapsed time; returns how many intervals completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        let total = self.accumulated_ms as u64 + elapsed_ms as u64;
        let fired = total / self.interval_ms as u64;
        self.accumulated_ms = (total % self.interval_ms as u64) as u32;
        fired as u32
    }
}

/// Elapsed-time clock with a fixed resolution.
///
/// Purely observational: the session reports its count for display and never
/// scores on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    ticker: IntervalTimer,
    count_ms: u64,
}

impl Clock {
    pub fn new(resolution_ms: u32) -> Self {
        Self {
            ticker: IntervalTimer::new(resolution_ms),
            count_ms: 0,
        }
    }

    pub fn resolution_ms(&self) -> u32 {
        self.ticker.interval_ms()
    }

    /// Accumulated milliseconds, in whole resolution steps
    pub fn count_ms(&self) -> u64 {
        self.count_ms
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Starting an already running clock has no effect
    pub fn start(&mut self) {
        self.ticker.start();
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Stop and zero the count
    pub fn reset(&mut self) {
        self.ticker.reset();
        self.count_ms = 0;
    }

    /// Feed elapsed time. Returns the new count when at least one step passed.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<u64> {
        let steps = self.ticker.advance(elapsed_ms);
        if steps == 0 {
            return None;
        }
        self.count_ms += steps as u64 * self.resolution_ms() as u64;
        Some(self.count_ms)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(CLOCK_RESOLUTION_MS)
    }
}

/// Format milliseconds as `m:ss.t`
pub fn format_elapsed(ms: u64) -> String {
    let tenths = (ms / 100) % 10;
    let secs = (ms / 1000) % 60;
    let mins = ms / 60_000;
    format!("{}:{:02}.{}", mins, secs, tenths)
}

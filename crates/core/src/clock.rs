//! Frame clock - measures wall time between host frames.
//!
//! Frames arrive at roughly display rate but never at a fixed period, so every
//! tick is fed the measured gap rather than an assumed constant.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(now: Instant) -> Self {
        Self { last: now }
    }

    /// Time since the previous lap (or construction), then restart.
    pub fn lap(&mut self) -> Duration {
        self.lap_at(Instant::now())
    }

    /// [`lap`](Self::lap) with an explicit "now". A `now` earlier than the last
    /// lap yields zero.
    pub fn lap_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

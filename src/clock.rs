//! Fixed-rate frame limiter on a monotonic clock.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    period: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        FrameClock {
            period,
            frame_start: Instant::now(),
        }
    }

    /// Sleeps out whatever is left of the current frame, then starts the next
    /// one.  A frame that already overran does not sleep.
    pub fn tick(&mut self) {
        let remaining = remaining(self.period, self.frame_start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

fn remaining(period: Duration, elapsed: Duration) -> Duration {
    period.saturating_sub(elapsed)
}

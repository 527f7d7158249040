//! Interframe pacing.

use std::time::{Duration, Instant};

use crate::types::FRAME_INTERVAL_MS;

#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_INTERVAL_MS))
    }
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left to wait after a frame that took `elapsed`.
    ///
    /// Zero when the frame already overran the interval.
    pub fn delay_after(&self, elapsed: Duration) -> Duration {
        self.interval
            .checked_sub(elapsed)
            .unwrap_or_else(|| Duration::from_secs(0))
    }

    /// Whether a frame that took `elapsed` missed its slot.
    pub fn overran(&self, elapsed: Duration) -> bool {
        elapsed > self.interval
    }

    /// Block until the frame started at `frame_started` has used up its slot.
    pub fn wait(&self, frame_started: Instant) {
        let delay = self.delay_after(frame_started.elapsed());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_sixteen_ms() {
        assert_eq!(FramePacer::default().interval(), Duration::from_millis(16));
    }

    #[test]
    fn wait_sleeps_out_the_slot() {
        let pacer = FramePacer::new(Duration::from_millis(5));
        let start = Instant::now();
        pacer.wait(start);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Fixed-rate frame pump for headless hosts.
//!
//! In the engine-embedded case the host's own display pump implements
//! [`FramePump`]. [`FixedRatePump`] covers the headless case (tools, tests
//! against a real decoder library): it paces ticks against a wall-clock
//! deadline so the polling loop runs at display rate without a display.
//!
//! [`FramePump`]: crate::application::port::FramePump

use crate::application::port::FramePump;
use std::time::{Duration, Instant};

/// Frame pump that sleeps to the next frame deadline on every tick.
///
/// Deadlines accumulate from a fixed origin rather than from the end of the
/// previous sleep, so pacing does not drift when a tick runs long. A tick
/// that misses its deadline entirely re-anchors instead of bursting to catch
/// up.
#[derive(Debug)]
pub struct FixedRatePump {
    interval: Duration,
    next_deadline: Option<Instant>,
    frozen: bool,
}

impl FixedRatePump {
    /// Creates a pump ticking at the given frame rate.
    ///
    /// A zero rate is treated as one frame per second rather than panicking.
    #[must_use]
    pub fn new(frame_rate: u32) -> Self {
        let rate = frame_rate.max(1);
        Self {
            interval: Duration::from_secs(1) / rate,
            next_deadline: None,
            frozen: false,
        }
    }

    /// The pacing interval between frames.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True once the pump was frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl FramePump for FixedRatePump {
    fn transition(&mut self) {
        // Re-anchor the clock at playback start.
        self.next_deadline = Some(Instant::now() + self.interval);
        self.frozen = false;
    }

    fn tick(&mut self) {
        if self.frozen {
            return;
        }
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.interval);
        } else {
            // Deadline already missed: re-anchor rather than burst.
            self.next_deadline = Some(now + self.interval);
        }
    }

    fn freeze(&mut self) {
        self.frozen = true;
        self.next_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_matches_the_frame_rate() {
        assert_eq!(FixedRatePump::new(40).interval(), Duration::from_millis(25));
        assert_eq!(FixedRatePump::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn ticks_take_at_least_the_frame_interval() {
        let mut pump = FixedRatePump::new(200);
        pump.transition();
        let start = Instant::now();
        pump.tick();
        pump.tick();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn frozen_pump_returns_immediately() {
        let mut pump = FixedRatePump::new(1);
        pump.transition();
        pump.freeze();
        let start = Instant::now();
        pump.tick();
        assert!(start.elapsed() < Duration::from_millis(100));
        assert!(pump.is_frozen());
    }

    #[test]
    fn transition_unfreezes_for_the_next_session() {
        let mut pump = FixedRatePump::new(100);
        pump.freeze();
        pump.transition();
        assert!(!pump.is_frozen());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Display frame-pump port definition.
//!
//! The host engine owns the display and its frame clock. The controller only
//! needs three things from it: a reveal before playback starts, a per-frame
//! tick to pace the polling loop, and a freeze once the session is torn down.
//!
//! # Design Notes
//!
//! - [`FramePump::tick`] is the controller's sole suspension point; one poll
//!   and one cancellation check happen per tick, never mid-call.
//! - No timeout is modeled. A pump that never returns from `tick` stalls the
//!   run loop; that is the host's contract to keep.

/// Port for the host's display frame pump.
pub trait FramePump {
    /// Prepares the display for playback start (scene reveal).
    fn transition(&mut self);

    /// Advances one display frame, blocking until the frame boundary.
    fn tick(&mut self);

    /// Halts further pumping after session teardown.
    fn freeze(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn FramePump) {}

    struct NullPump {
        ticks: u32,
        frozen: bool,
    }

    impl FramePump for NullPump {
        fn transition(&mut self) {}

        fn tick(&mut self) {
            self.ticks += 1;
        }

        fn freeze(&mut self) {
            self.frozen = true;
        }
    }

    #[test]
    fn null_pump_counts_frames() {
        let mut pump = NullPump {
            ticks: 0,
            frozen: false,
        };
        pump.transition();
        pump.tick();
        pump.tick();
        pump.freeze();
        assert_eq!(pump.ticks, 2);
        assert!(pump.frozen);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`. These adapters wrap external dependencies: the
//! native decoding library and the process clock.
//!
//! # Available Adapters
//!
//! - [`native`]: Decoder service via the native library (implements
//!   [`DecoderService`])
//! - [`pump`]: Wall-clock frame pacing for headless hosts (implements
//!   [`FramePump`])
//!
//! [`DecoderService`]: crate::application::port::DecoderService
//! [`FramePump`]: crate::application::port::FramePump

pub mod native;
pub mod pump;

// Re-export main types for convenience
pub use native::NativeDecoder;
pub use pump::FixedRatePump;

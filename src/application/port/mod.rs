// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. These traits use only domain types, ensuring the application
//! layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`decoder`]: The opaque native decoder service
//! - [`pump`]: The host's display frame pump
//!
//! # Design Notes
//!
//! - All traits use domain types only (no FFI types, no raw status integers)
//! - The decoder port is code-returning: no error type crosses it
//! - Both collaborators are driven from one cooperative control flow

pub mod decoder;
pub mod pump;

// Re-export main types for convenience
pub use decoder::DecoderService;
pub use pump::FramePump;

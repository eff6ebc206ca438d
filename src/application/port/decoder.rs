// SPDX-License-Identifier: MPL-2.0
//! Decoder service port definition.
//!
//! This module defines the [`DecoderService`] trait for the opaque native
//! decoder collaborator. Infrastructure adapters (like the dynamic-library
//! binding in `infrastructure::native`) implement this trait.
//!
//! # Design Notes
//!
//! - Every operation returns a [`DecodeStatus`]; nothing panics or errors
//!   across this boundary. Callers must check the code before proceeding.
//! - The service holds at most one decoder instance. Creating a second is a
//!   defined error ([`DecodeStatus::DuplicateInstance`]); operating without
//!   one is too ([`DecodeStatus::NotCreated`]).
//! - Calls are synchronous and non-blocking; [`DecoderService::poll_state`]
//!   is a cheap query intended to run once per display frame.
//! - The surface handle is lent for the duration of each call and must never
//!   be retained by the implementation.

use crate::domain::status::DecodeStatus;
use crate::domain::surface::SurfaceHandle;
use crate::domain::volume::Volume;
use std::path::Path;

/// Port for the opaque decoder collaborator.
///
/// Implementations own demuxing, decoding, frame blitting, audio output and
/// synchronization; none of that is observable through this trait. The
/// controller only drives the lifecycle and reads status codes.
pub trait DecoderService {
    /// Creates the decoder instance for a video file.
    ///
    /// The volume is rescaled to the service's device range internally; the
    /// surface handle identifies the buffer frames are blitted into.
    fn create(&mut self, path: &Path, volume: Volume, surface: SurfaceHandle) -> DecodeStatus;

    /// Tears down the decoder instance, releasing its resources.
    fn close(&mut self) -> DecodeStatus;

    /// Starts rendering decoded frames to the surface.
    fn start_render(&mut self) -> DecodeStatus;

    /// Non-blocking poll of the decode state.
    ///
    /// Returns [`DecodeStatus::StillDecoding`] while playback is in
    /// progress, [`DecodeStatus::Success`] once finished, and any other
    /// status on failure.
    fn poll_state(&mut self) -> DecodeStatus;

    /// Changes the output volume of a live instance.
    fn set_volume(&mut self, volume: Volume) -> DecodeStatus;

    /// Returns true if the instance terminated abnormally.
    ///
    /// This is a channel of its own: it may be set even when every lifecycle
    /// call returned success, and vice versa.
    fn had_bad_termination(&self) -> bool;

    /// Service-internal error code backing a bad termination.
    fn internal_error_code(&self) -> i32;

    /// Service-internal error message backing a bad termination.
    fn internal_error_message(&self) -> String;
}

// SPDX-License-Identifier: MPL-2.0
//! Playback failure values.
//!
//! Two distinct channels exist. [`PlaybackError`] records which lifecycle
//! operation failed and with what status; it is the primary error a run
//! reports. [`InternalFault`] is the secondary channel: a code/message pair
//! queried from the service after the render loop, independent of whether
//! the loop itself failed.

use crate::domain::status::DecodeStatus;
use std::fmt;

/// A lifecycle operation that failed, with the status the service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Context creation failed (after the single duplicate-instance retry,
    /// if one applied).
    Create(DecodeStatus),
    /// The renderer refused to start.
    StartRender(DecodeStatus),
    /// A state poll returned a fatal status mid-loop.
    Poll(DecodeStatus),
    /// A volume change was rejected.
    SetVolume(DecodeStatus),
    /// Context teardown failed.
    Close(DecodeStatus),
}

impl PlaybackError {
    /// The status the service reported for the failing operation.
    #[must_use]
    pub fn status(&self) -> DecodeStatus {
        match self {
            Self::Create(status)
            | Self::StartRender(status)
            | Self::Poll(status)
            | Self::SetVolume(status)
            | Self::Close(status) => *status,
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(status) => {
                write!(f, "Failed to create video context: {}", status.describe())
            }
            Self::StartRender(status) => {
                write!(f, "Failed to start renderer: {}", status.describe())
            }
            Self::Poll(status) => {
                write!(f, "Failed to get video state: {}", status.describe())
            }
            Self::SetVolume(status) => {
                write!(f, "Failed to set volume: {}", status.describe())
            }
            Self::Close(status) => {
                write!(f, "Failed to clean up context: {}", status.describe())
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Service-internal failure detail, reported on a channel of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalFault {
    /// Service-specific error code; not a [`DecodeStatus`].
    pub code: i32,
    /// Free-text message sourced from the service.
    pub message: String,
}

impl fmt::Display for InternalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decoder failed! Internal error code: {}, message: {}",
            self.code, self.message
        )
    }
}

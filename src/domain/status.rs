// SPDX-License-Identifier: MPL-2.0
//! Decoder status codes.
//!
//! This module defines [`DecodeStatus`], the closed enumeration of outcomes
//! the decoder service can report, together with its fixed human-readable
//! messages. Discriminants are wire-stable: they match the integer codes the
//! native decoding library returns and must never be reordered.

use std::fmt;

/// Outcome reported by the decoder service for a single operation.
///
/// The enumeration is closed: every raw code the service may legally return
/// has exactly one variant, and [`DecodeStatus::describe`] maps each variant
/// to a fixed message. An out-of-range raw code never enters the type system;
/// it is rejected at the boundary by [`DecodeStatus::from_raw`].
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStatus {
    /// Operation completed; for a state poll, the video has finished.
    Success = 0,
    /// The video is still decoding. Not an error; keep polling.
    StillDecoding = 1,
    /// A decoder instance already exists and a second was requested.
    DuplicateInstance = 2,
    /// No decoder instance exists for the requested operation.
    NotCreated = 3,
    /// The video file does not exist.
    FileNotFound = 4,
    /// The path exists but is not a decodable video file.
    InvalidFile = 5,
    /// The target surface was disposed before or during the operation.
    SurfaceDisposed = 6,
    /// The file contains no video stream.
    NoVideoStream = 7,
    /// The file contains no audio stream.
    NoAudioStream = 8,
    /// An audio output device could not be opened.
    AudioDeviceFailed = 9,
    /// The service failed internally; details on the secondary channel.
    InternalError = 10,
}

/// Coarse failure taxonomy for error-status codes.
///
/// Used by callers that react differently to bad input, lifecycle
/// contention, device trouble, and service-internal faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller supplied something unusable: missing or invalid file,
    /// a file without the required streams, or a disposed surface.
    Input,
    /// Lifecycle contention: an instance already exists, or none does.
    Contention,
    /// An output device could not be acquired.
    Device,
    /// The service failed internally.
    Internal,
}

impl DecodeStatus {
    /// All variants, in wire order. Useful for exhaustive table tests.
    pub const ALL: [DecodeStatus; 11] = [
        DecodeStatus::Success,
        DecodeStatus::StillDecoding,
        DecodeStatus::DuplicateInstance,
        DecodeStatus::NotCreated,
        DecodeStatus::FileNotFound,
        DecodeStatus::InvalidFile,
        DecodeStatus::SurfaceDisposed,
        DecodeStatus::NoVideoStream,
        DecodeStatus::NoAudioStream,
        DecodeStatus::AudioDeviceFailed,
        DecodeStatus::InternalError,
    ];

    /// Converts a raw wire code into a status, rejecting unknown codes.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Success),
            1 => Some(Self::StillDecoding),
            2 => Some(Self::DuplicateInstance),
            3 => Some(Self::NotCreated),
            4 => Some(Self::FileNotFound),
            5 => Some(Self::InvalidFile),
            6 => Some(Self::SurfaceDisposed),
            7 => Some(Self::NoVideoStream),
            8 => Some(Self::NoAudioStream),
            9 => Some(Self::AudioDeviceFailed),
            10 => Some(Self::InternalError),
            _ => None,
        }
    }

    /// Returns the raw wire code for this status.
    #[must_use]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Returns the fixed human-readable message for this status.
    ///
    /// The mapping is exhaustive and idempotent: the same status always
    /// yields the same non-empty string.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Success => "Successful operation",
            Self::StillDecoding => "Video still decoding",
            Self::DuplicateInstance => "Attempted to create secondary video decoder",
            Self::NotCreated => "Decoder has not been created",
            Self::FileNotFound => "File does not exist",
            Self::InvalidFile => "File is not a valid video file",
            Self::SurfaceDisposed => "Target surface is disposed",
            Self::NoVideoStream => "Video file has no video streams",
            Self::NoAudioStream => "Video file has no audio streams",
            Self::AudioDeviceFailed => "Failed to open an audio device",
            Self::InternalError => "An internal error has occurred",
        }
    }

    /// Returns true for [`DecodeStatus::Success`].
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true for [`DecodeStatus::StillDecoding`].
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::StillDecoding)
    }

    /// Returns true if this status is a failure (neither success nor pending).
    #[must_use]
    pub fn is_error(self) -> bool {
        !self.is_success() && !self.is_pending()
    }

    /// Classifies a failure status; `None` for success and still-decoding.
    #[must_use]
    pub fn error_class(self) -> Option<ErrorClass> {
        match self {
            Self::Success | Self::StillDecoding => None,
            Self::FileNotFound
            | Self::InvalidFile
            | Self::SurfaceDisposed
            | Self::NoVideoStream
            | Self::NoAudioStream => Some(ErrorClass::Input),
            Self::DuplicateInstance | Self::NotCreated => Some(ErrorClass::Contention),
            Self::AudioDeviceFailed => Some(ErrorClass::Device),
            Self::InternalError => Some(ErrorClass::Internal),
        }
    }
}

impl TryFrom<i32> for DecodeStatus {
    type Error = UnknownStatus;

    fn try_from(raw: i32) -> Result<Self, UnknownStatus> {
        Self::from_raw(raw).ok_or(UnknownStatus(raw))
    }
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Raw code outside the closed enumeration, rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub i32);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown decoder status code: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_is_total_and_non_empty() {
        for status in DecodeStatus::ALL {
            assert!(!status.describe().is_empty());
        }
    }

    #[test]
    fn describe_is_idempotent() {
        for status in DecodeStatus::ALL {
            assert_eq!(status.describe(), status.describe());
        }
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(DecodeStatus::Success.as_raw(), 0);
        assert_eq!(DecodeStatus::StillDecoding.as_raw(), 1);
        assert_eq!(DecodeStatus::DuplicateInstance.as_raw(), 2);
        assert_eq!(DecodeStatus::NotCreated.as_raw(), 3);
        assert_eq!(DecodeStatus::FileNotFound.as_raw(), 4);
        assert_eq!(DecodeStatus::InvalidFile.as_raw(), 5);
        assert_eq!(DecodeStatus::SurfaceDisposed.as_raw(), 6);
        assert_eq!(DecodeStatus::NoVideoStream.as_raw(), 7);
        assert_eq!(DecodeStatus::NoAudioStream.as_raw(), 8);
        assert_eq!(DecodeStatus::AudioDeviceFailed.as_raw(), 9);
        assert_eq!(DecodeStatus::InternalError.as_raw(), 10);
    }

    #[test]
    fn from_raw_round_trips_every_variant() {
        for status in DecodeStatus::ALL {
            assert_eq!(DecodeStatus::from_raw(status.as_raw()), Some(status));
        }
    }

    #[test]
    fn from_raw_rejects_out_of_range_codes() {
        assert_eq!(DecodeStatus::from_raw(-1), None);
        assert_eq!(DecodeStatus::from_raw(11), None);
        assert_eq!(DecodeStatus::from_raw(i32::MAX), None);
    }

    #[test]
    fn try_from_reports_the_rejected_code() {
        let err = DecodeStatus::try_from(42).unwrap_err();
        assert_eq!(err, UnknownStatus(42));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn success_and_pending_are_not_errors() {
        assert!(DecodeStatus::Success.is_success());
        assert!(!DecodeStatus::Success.is_error());
        assert!(DecodeStatus::StillDecoding.is_pending());
        assert!(!DecodeStatus::StillDecoding.is_error());
    }

    #[test]
    fn every_other_status_is_an_error() {
        for status in DecodeStatus::ALL {
            if !status.is_success() && !status.is_pending() {
                assert!(status.is_error());
                assert!(status.error_class().is_some());
            }
        }
    }

    #[test]
    fn error_classes_follow_the_taxonomy() {
        assert_eq!(
            DecodeStatus::FileNotFound.error_class(),
            Some(ErrorClass::Input)
        );
        assert_eq!(
            DecodeStatus::NoAudioStream.error_class(),
            Some(ErrorClass::Input)
        );
        assert_eq!(
            DecodeStatus::DuplicateInstance.error_class(),
            Some(ErrorClass::Contention)
        );
        assert_eq!(
            DecodeStatus::AudioDeviceFailed.error_class(),
            Some(ErrorClass::Device)
        );
        assert_eq!(
            DecodeStatus::InternalError.error_class(),
            Some(ErrorClass::Internal)
        );
        assert_eq!(DecodeStatus::Success.error_class(), None);
        assert_eq!(DecodeStatus::StillDecoding.error_class(), None);
    }

    #[test]
    fn display_matches_describe() {
        assert_eq!(
            DecodeStatus::NoAudioStream.to_string(),
            "Video file has no audio streams"
        );
    }
}

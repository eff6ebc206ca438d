// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float comparisons and deterministic collaborator doubles.
//!
//! This module re-exports the `approx` crate's assertion macros for float
//! comparison, and provides scripted implementations of the two ports,
//! [`ScriptedService`] and [`ManualPump`], so unit and integration tests can
//! drive complete playback lifecycles without a native library or a display.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

use crate::application::playback::CancelToken;
use crate::application::port::{DecoderService, FramePump};
use crate::domain::status::DecodeStatus;
use crate::domain::surface::SurfaceHandle;
use crate::domain::volume::Volume;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// One recorded call against a [`ScriptedService`].
///
/// Volumes are recorded as the device level that would cross the native
/// boundary, which is what the contract pins down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Create {
        path: PathBuf,
        device_level: i32,
        surface: usize,
    },
    Close,
    StartRender,
    Poll,
    SetVolume {
        device_level: i32,
    },
}

impl ServiceCall {
    /// Short name for order-of-calls assertions.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Close => "close",
            Self::StartRender => "start_render",
            Self::Poll => "poll",
            Self::SetVolume { .. } => "set_volume",
        }
    }
}

/// Shared view of a scripted service's call log.
///
/// The log survives the service itself, so tests can assert on calls made
/// by a session that has since been consumed by `run` or dropped.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<ServiceCall>>>);

impl CallLog {
    fn push(&self, call: ServiceCall) {
        self.0.borrow_mut().push(call);
    }

    /// Snapshot of all recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.0.borrow().clone()
    }

    /// Snapshot of call kinds, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<String> {
        self.0.borrow().iter().map(|c| c.kind().to_string()).collect()
    }
}

/// Decoder service double driven by scripted status sequences.
///
/// Each lifecycle operation pops the next status from its queue; an
/// exhausted queue falls back to [`DecodeStatus::Success`] (polls fall back
/// to success unless configured to stay pending forever). Every call is
/// recorded in a [`CallLog`].
#[derive(Debug)]
pub struct ScriptedService {
    create_results: VecDeque<DecodeStatus>,
    start_result: DecodeStatus,
    poll_results: VecDeque<DecodeStatus>,
    pending_forever: bool,
    close_results: VecDeque<DecodeStatus>,
    bad_termination: Option<(i32, String)>,
    log: CallLog,
}

impl ScriptedService {
    /// A service that plays one video cleanly: creation and start succeed,
    /// three still-decoding polls precede completion, teardown succeeds.
    #[must_use]
    pub fn clean() -> Self {
        Self {
            create_results: VecDeque::new(),
            start_result: DecodeStatus::Success,
            poll_results: VecDeque::from(vec![DecodeStatus::StillDecoding; 3]),
            pending_forever: false,
            close_results: VecDeque::new(),
            bad_termination: None,
            log: CallLog::default(),
        }
    }

    /// Scripts the statuses returned by successive create calls.
    #[must_use]
    pub fn with_create_results(mut self, results: impl IntoIterator<Item = DecodeStatus>) -> Self {
        self.create_results = results.into_iter().collect();
        self
    }

    /// Scripts the status returned by `start_render`.
    #[must_use]
    pub fn with_start_result(mut self, result: DecodeStatus) -> Self {
        self.start_result = result;
        self
    }

    /// Scripts the statuses returned by successive polls.
    #[must_use]
    pub fn with_poll_results(mut self, results: impl IntoIterator<Item = DecodeStatus>) -> Self {
        self.poll_results = results.into_iter().collect();
        self.pending_forever = false;
        self
    }

    /// Makes every poll report still-decoding; only cancellation ends a run.
    #[must_use]
    pub fn with_poll_results_pending_forever(mut self) -> Self {
        self.poll_results.clear();
        self.pending_forever = true;
        self
    }

    /// Scripts the statuses returned by successive close calls.
    #[must_use]
    pub fn with_close_results(mut self, results: impl IntoIterator<Item = DecodeStatus>) -> Self {
        self.close_results = results.into_iter().collect();
        self
    }

    /// Arms the bad-termination channel with an internal code/message pair.
    #[must_use]
    pub fn with_bad_termination(mut self, code: i32, message: &str) -> Self {
        self.bad_termination = Some((code, message.to_string()));
        self
    }

    /// Returns a handle onto the call log that outlives this service.
    #[must_use]
    pub fn call_log_handle(&self) -> CallLog {
        self.log.clone()
    }

    /// Snapshot of all recorded calls, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.log.calls()
    }

    /// Snapshot of call kinds, in order.
    #[must_use]
    pub fn call_kinds(&self) -> Vec<String> {
        self.log.kinds()
    }
}

impl DecoderService for ScriptedService {
    fn create(&mut self, path: &Path, volume: Volume, surface: SurfaceHandle) -> DecodeStatus {
        self.log.push(ServiceCall::Create {
            path: path.to_path_buf(),
            device_level: volume.device_level(),
            surface: surface.as_raw(),
        });
        self.create_results.pop_front().unwrap_or(DecodeStatus::Success)
    }

    fn close(&mut self) -> DecodeStatus {
        self.log.push(ServiceCall::Close);
        self.close_results.pop_front().unwrap_or(DecodeStatus::Success)
    }

    fn start_render(&mut self) -> DecodeStatus {
        self.log.push(ServiceCall::StartRender);
        self.start_result
    }

    fn poll_state(&mut self) -> DecodeStatus {
        self.log.push(ServiceCall::Poll);
        if let Some(status) = self.poll_results.pop_front() {
            return status;
        }
        if self.pending_forever {
            DecodeStatus::StillDecoding
        } else {
            DecodeStatus::Success
        }
    }

    fn set_volume(&mut self, volume: Volume) -> DecodeStatus {
        self.log.push(ServiceCall::SetVolume {
            device_level: volume.device_level(),
        });
        DecodeStatus::Success
    }

    fn had_bad_termination(&self) -> bool {
        self.bad_termination.is_some()
    }

    fn internal_error_code(&self) -> i32 {
        self.bad_termination.as_ref().map_or(0, |(code, _)| *code)
    }

    fn internal_error_message(&self) -> String {
        self.bad_termination
            .as_ref()
            .map_or_else(String::new, |(_, message)| message.clone())
    }
}

/// Frame pump double that counts calls and can cancel a token after a
/// scripted number of ticks, standing in for a host that takes control back.
#[derive(Debug, Default)]
pub struct ManualPump {
    ticks: u32,
    transitions: u32,
    frozen: bool,
    cancel: Option<(CancelToken, u32)>,
}

impl ManualPump {
    /// A pump that only counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A pump that cancels `token` once `after_ticks` frames have passed.
    #[must_use]
    pub fn cancel_after(token: &CancelToken, after_ticks: u32) -> Self {
        Self {
            cancel: Some((token.clone(), after_ticks)),
            ..Self::default()
        }
    }

    /// Frames pumped so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Transitions requested so far.
    #[must_use]
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// True once `freeze` was called.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl FramePump for ManualPump {
    fn transition(&mut self) {
        self.transitions += 1;
    }

    fn tick(&mut self) {
        self.ticks += 1;
        if let Some((token, after)) = &self.cancel {
            if self.ticks >= *after {
                token.cancel();
            }
        }
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Playback session controller.
//!
//! Drives the decoder service through its fixed lifecycle:
//! create → poll-until-done → close. The controller owns the session and its
//! target surface exclusively, checks every status code the service returns,
//! and reports failure through values so the host decides the fallback UI
//! state (policy stays with the caller, mechanism lives here).
//!
//! Three failure channels are kept strictly apart:
//! - the *primary* error from the lifecycle itself (start or poll),
//! - the *internal fault* queried from the service after the loop, which may
//!   fire with, without, or instead of a primary error,
//! - the *close* error, recorded separately and never allowed to override
//!   either of the others.

use crate::application::port::{DecoderService, FramePump};
use crate::config::PlaybackConfig;
use crate::domain::error::{InternalFault, PlaybackError};
use crate::domain::session::SessionPhase;
use crate::domain::status::DecodeStatus;
use crate::domain::surface::Surface;
use crate::domain::volume::Volume;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag, checked once per frame tick.
///
/// Cloneable so the host can keep one end while the run loop watches the
/// other. There is no mid-call preemption: a cancel takes effect at the next
/// tick boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the run loop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The video played to completion.
    Finished,
    /// Start or poll reported a fatal status.
    Failed,
    /// The host cancelled before completion or failure.
    Interrupted,
}

/// Everything a finished run has to report.
///
/// The three error fields are independent channels; any subset may be set.
/// `outcome` reflects the loop alone: an internal fault or a close error on
/// an otherwise clean run leaves it `Finished`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackReport {
    /// How the render loop ended.
    pub outcome: RunOutcome,
    /// Fatal start or poll error, if one fired.
    pub primary: Option<PlaybackError>,
    /// Bad-termination detail from the service's secondary channel.
    pub internal: Option<InternalFault>,
    /// Teardown failure; never overrides the other channels.
    pub close_error: Option<PlaybackError>,
}

impl PlaybackReport {
    /// Returns true if playback finished with nothing to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcome == RunOutcome::Finished
            && self.primary.is_none()
            && self.internal.is_none()
            && self.close_error.is_none()
    }
}

/// A live playback session: one decoder instance plus its target surface.
///
/// At most one session should exist at a time; the decoder service enforces
/// this and [`PlaybackSession::create`] recovers once from a stale instance
/// left behind by an abnormal host termination. Dropping a session that was
/// never run still closes the decoder and disposes the surface, so `Closed`
/// is reached on every path.
pub struct PlaybackSession<S: DecoderService> {
    service: S,
    surface: Surface,
    volume: Volume,
    phase: SessionPhase,
}

impl<S: DecoderService> PlaybackSession<S> {
    /// Creates the decoder context for a video file.
    ///
    /// Trailing control characters are stripped from the path before use.
    /// If the service reports a duplicate instance, the stale one is
    /// force-closed and creation retried exactly once; any other failure is
    /// surfaced without retry and the caller decides the fallback.
    pub fn create(
        mut service: S,
        config: &PlaybackConfig,
        path: &Path,
        volume: Volume,
    ) -> Result<Self, PlaybackError> {
        let path = sanitized_path(path);
        let surface = Surface::new(config.surface_width, config.surface_height);

        let mut status = service.create(&path, volume, surface.handle());
        if status == DecodeStatus::DuplicateInstance {
            // A prior abnormal termination can leave a stale instance behind
            // (the host's reset key skips teardown). Clean it up and retry.
            log::warn!("stale decoder instance detected, force-closing and retrying");
            let stale = service.close();
            if !stale.is_success() {
                log::warn!("stale instance close reported: {}", stale.describe());
            }
            status = service.create(&path, volume, surface.handle());
        }

        if !status.is_success() {
            let err = PlaybackError::Create(status);
            log::error!("{err}");
            return Err(err);
        }

        log::debug!("decoder context created for {}", path.display());
        Ok(Self {
            service,
            surface,
            volume,
            phase: SessionPhase::Created,
        })
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current volume level.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Target surface owned by this session.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Changes the output volume of the live session.
    pub fn set_volume(&mut self, volume: Volume) -> Result<(), PlaybackError> {
        let status = self.service.set_volume(volume);
        if !status.is_success() {
            return Err(PlaybackError::SetVolume(status));
        }
        self.volume = volume;
        Ok(())
    }

    /// Runs the session to completion, failure, or cancellation.
    ///
    /// Starts rendering, then polls the decode state once per display tick
    /// until the service reports success or a fatal status, or the token is
    /// cancelled. Teardown is unconditional: the bad-termination channel is
    /// queried, the context closed, one final frame pumped, the pump frozen
    /// and the surface disposed, on every exit path.
    ///
    /// No timeout is applied; a service that never leaves the still-decoding
    /// state stalls the loop until the host cancels.
    pub fn run<P: FramePump>(mut self, pump: &mut P, cancel: &CancelToken) -> PlaybackReport {
        pump.transition();

        let mut primary = None;
        let start = self.service.start_render();
        if start.is_success() {
            self.advance(SessionPhase::Rendering);
            loop {
                pump.tick();
                let state = self.service.poll_state();
                if state.is_success() {
                    self.advance(SessionPhase::Finished);
                    break;
                }
                if !state.is_pending() {
                    let err = PlaybackError::Poll(state);
                    log::error!("{err}");
                    primary = Some(err);
                    self.advance(SessionPhase::Failed);
                    break;
                }
                // One cancellation check per tick boundary, regardless of
                // decode state.
                if cancel.is_cancelled() {
                    log::debug!("playback interrupted by host");
                    break;
                }
            }
        } else {
            let err = PlaybackError::StartRender(start);
            log::error!("{err}");
            primary = Some(err);
            self.advance(SessionPhase::Failed);
        }

        let outcome = match self.phase {
            SessionPhase::Finished => RunOutcome::Finished,
            SessionPhase::Failed => RunOutcome::Failed,
            _ => RunOutcome::Interrupted,
        };

        // Secondary failure channel, queried unconditionally and kept
        // independent of the loop's own error path.
        let internal = self.query_internal_fault();

        let close_error = self.close_context();

        pump.tick();
        pump.freeze();
        self.surface.dispose();

        PlaybackReport {
            outcome,
            primary,
            internal,
            close_error,
        }
    }

    fn advance(&mut self, next: SessionPhase) {
        debug_assert!(self.phase.can_advance_to(next));
        log::debug!("session {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    fn query_internal_fault(&self) -> Option<InternalFault> {
        if !self.service.had_bad_termination() {
            return None;
        }
        let fault = InternalFault {
            code: self.service.internal_error_code(),
            message: self.service.internal_error_message(),
        };
        log::error!("{fault}");
        Some(fault)
    }

    fn close_context(&mut self) -> Option<PlaybackError> {
        let status = self.service.close();
        self.advance(SessionPhase::Closed);
        if status.is_success() {
            return None;
        }
        let err = PlaybackError::Close(status);
        log::warn!("{err}");
        Some(err)
    }
}

impl<S: DecoderService> std::fmt::Debug for PlaybackSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("phase", &self.phase)
            .field("volume", &self.volume)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

impl<S: DecoderService> Drop for PlaybackSession<S> {
    fn drop(&mut self) {
        if !self.phase.is_closed() {
            // Abandoned without run(): still honor the lifecycle contract.
            self.close_context();
            self.surface.dispose();
        }
    }
}

/// Strips trailing control characters from a path.
///
/// Script-supplied paths can carry a trailing newline; the decoder service
/// would treat it as part of the file name and fail the lookup.
fn sanitized_path(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    let trimmed = text.trim_end_matches(|c: char| c.is_control());
    PathBuf::from(trimmed)
}

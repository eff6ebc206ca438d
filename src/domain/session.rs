// SPDX-License-Identifier: MPL-2.0
//! Playback session lifecycle state machine.
//!
//! A session moves through a fixed lifecycle:
//! `Uncreated → Created → Rendering → {Finished | Failed} → Closed`.
//! `Closed` is terminal and is reached unconditionally, including when a run
//! is interrupted mid-render.

/// Lifecycle phase of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No decoder context exists yet.
    #[default]
    Uncreated,
    /// The decoder context was created; rendering has not started.
    Created,
    /// Frames are being rendered to the target surface.
    Rendering,
    /// Playback ran to completion.
    Finished,
    /// Playback aborted on a fatal status.
    Failed,
    /// The decoder context was closed. Terminal.
    Closed,
}

impl SessionPhase {
    /// Returns true if the lifecycle allows moving from `self` to `next`.
    ///
    /// Every non-terminal phase may advance directly to `Closed`; teardown
    /// is never skipped and never blocked by the current phase.
    #[must_use]
    pub fn can_advance_to(self, next: SessionPhase) -> bool {
        use SessionPhase::{Closed, Created, Failed, Finished, Rendering, Uncreated};
        match (self, next) {
            (Closed, _) => false,
            (_, Closed) => true,
            (Uncreated, Created) => true,
            (Created, Rendering | Failed) => true,
            (Rendering, Finished | Failed) => true,
            _ => false,
        }
    }

    /// Returns true once the session has been closed.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true while frames are being rendered.
    #[must_use]
    pub fn is_rendering(self) -> bool {
        matches!(self, Self::Rendering)
    }

    /// Returns true for the two loop-exit phases.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Finished | Self::Failed)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`playback`]: The playback session controller use-case
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The host embeds the controller and supplies both collaborators
//!
//! # Example
//!
//! ```ignore
//! use cutscene::application::playback::{CancelToken, PlaybackSession};
//! use cutscene::application::port::{DecoderService, FramePump};
//!
//! // Infrastructure implements the port traits
//! struct NativeDecoder { /* ... */ }
//! impl DecoderService for NativeDecoder { /* ... */ }
//!
//! // The controller drives the lifecycle
//! let session = PlaybackSession::create(decoder, &config, path, volume)?;
//! let report = session.run(&mut pump, &CancelToken::new());
//! ```

pub mod playback;
pub mod port;

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PlaybackError`](error::PlaybackError),
//!   [`InternalFault`](error::InternalFault))
//! - [`session`]: Session lifecycle machine ([`SessionPhase`](session::SessionPhase))
//! - [`status`]: Decoder status codes ([`DecodeStatus`](status::DecodeStatus),
//!   [`ErrorClass`](status::ErrorClass))
//! - [`surface`]: Frame target ([`Surface`](surface::Surface),
//!   [`SurfaceHandle`](surface::SurfaceHandle))
//! - [`volume`]: Volume level ([`Volume`](volume::Volume))

pub mod error;
pub mod session;
pub mod status;
pub mod surface;
pub mod volume;

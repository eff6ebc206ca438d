// SPDX-License-Identifier: MPL-2.0
//! `cutscene` is a playback session controller for native cutscene video
//! decoding inside a game-engine host.
//!
//! The crate owns a single decode session at a time, drives the opaque
//! native decoder through a fixed lifecycle (create → poll-until-done →
//! close), maps its closed status-code enumeration to fixed messages, and
//! reports failures through values so the host decides the fallback scene.

#![doc(html_root_url = "https://docs.rs/cutscene/0.2.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod test_utils;

// SPDX-License-Identifier: MPL-2.0
//! Native decoder adapter implementing the [`DecoderService`] port trait.
//!
//! This module provides [`NativeDecoder`], a runtime binding over the
//! decoding library's C entry points. All substantive work (demuxing,
//! decode, blitting, audio) happens inside the library; this adapter only
//! marshals scalars across the boundary and maps raw status integers back
//! into the closed [`DecodeStatus`] enumeration.
//!
//! # Design Notes
//!
//! - Symbols are resolved per call; the library keeps all instance state
//!   globally, so the adapter holds nothing beyond the library handle.
//! - A raw status outside the closed enumeration is logged and reported as
//!   [`DecodeStatus::InternalError`]; the controller never sees a raw code.
//! - Paths cross as NUL-terminated C strings. A path with an interior NUL
//!   cannot be marshalled and is reported as [`DecodeStatus::InvalidFile`]
//!   without touching the library.
//!
//! [`DecoderService`]: crate::application::port::DecoderService

use crate::application::port::DecoderService;
use crate::domain::status::DecodeStatus;
use crate::domain::surface::SurfaceHandle;
use crate::domain::volume::Volume;
use libloading::Library;
use std::ffi::{c_char, c_int, CStr, CString};
use std::path::Path;

/// File name the decoder library is published under.
pub const LIBRARY_NAME: &str = "RPGXPVideoDecoder.dll";

/// Entry points exported by the decoder library.
const SYM_CREATE: &[u8] = b"ViDecCreateContext";
const SYM_CLOSE: &[u8] = b"ViDecCloseContext";
const SYM_START_RENDER: &[u8] = b"ViDecStartRender";
const SYM_GET_STATE: &[u8] = b"ViDecGetVideoState";
const SYM_SET_VOLUME: &[u8] = b"ViDecSetVolume";
const SYM_BAD_TERMINATION: &[u8] = b"ViDecWasBadTermination";
const SYM_INTERNAL_ERROR: &[u8] = b"ViDecGetInternalError";
const SYM_INTERNAL_MESSAGE: &[u8] = b"ViDecGetInternalErrorMessage";

/// Decoder service backed by the native decoding library.
///
/// The library enforces the single-instance rule itself; this adapter is
/// stateless beyond holding the library handle open.
pub struct NativeDecoder {
    lib: Library,
}

impl NativeDecoder {
    /// Loads the decoder library from its default name on the loader path.
    pub fn load() -> Result<Self, libloading::Error> {
        Self::load_from(Path::new(LIBRARY_NAME))
    }

    /// Loads the decoder library from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, libloading::Error> {
        // SAFETY: Loading a foreign library runs its initializer; the decoder
        // library's initializer only sets up its audio subsystem.
        let lib = unsafe { Library::new(path) }?;
        log::info!("loaded decoder library from {}", path.display());
        Ok(Self { lib })
    }

    /// Calls a no-argument, status-returning entry point.
    fn call_status(&self, symbol: &[u8]) -> DecodeStatus {
        // SAFETY: The symbol signature is fixed by the library's exported
        // C API; a missing symbol means a mismatched library build.
        let raw = unsafe {
            match self.lib.get::<unsafe extern "C" fn() -> c_int>(symbol) {
                Ok(f) => f(),
                Err(e) => {
                    log::error!(
                        "decoder symbol {} missing: {e}",
                        String::from_utf8_lossy(symbol)
                    );
                    return DecodeStatus::InternalError;
                }
            }
        };
        map_raw_status(raw)
    }
}

/// Maps a raw wire code into the closed enumeration.
///
/// An out-of-range code is a broken collaborator, not a new kind of outcome;
/// it is logged and folded into [`DecodeStatus::InternalError`] so callers
/// still deal with a closed set.
fn map_raw_status(raw: i32) -> DecodeStatus {
    match DecodeStatus::from_raw(raw) {
        Some(status) => status,
        None => {
            log::warn!("decoder returned unknown status code {raw}");
            DecodeStatus::InternalError
        }
    }
}

impl DecoderService for NativeDecoder {
    fn create(&mut self, path: &Path, volume: Volume, surface: SurfaceHandle) -> DecodeStatus {
        let Ok(c_path) = CString::new(path.to_string_lossy().as_bytes()) else {
            log::error!("video path contains an interior NUL: {}", path.display());
            return DecodeStatus::InvalidFile;
        };

        // SAFETY: The library copies the path and volume and writes frames
        // through the surface handle only while an instance is live; the
        // handle is not retained past the call per the library contract.
        let raw = unsafe {
            match self
                .lib
                .get::<unsafe extern "C" fn(*const c_char, c_int, usize) -> c_int>(SYM_CREATE)
            {
                Ok(f) => f(c_path.as_ptr(), volume.device_level(), surface.as_raw()),
                Err(e) => {
                    log::error!("decoder symbol ViDecCreateContext missing: {e}");
                    return DecodeStatus::InternalError;
                }
            }
        };
        map_raw_status(raw)
    }

    fn close(&mut self) -> DecodeStatus {
        self.call_status(SYM_CLOSE)
    }

    fn start_render(&mut self) -> DecodeStatus {
        self.call_status(SYM_START_RENDER)
    }

    fn poll_state(&mut self) -> DecodeStatus {
        self.call_status(SYM_GET_STATE)
    }

    fn set_volume(&mut self, volume: Volume) -> DecodeStatus {
        // SAFETY: Plain scalar in, status code out.
        let raw = unsafe {
            match self
                .lib
                .get::<unsafe extern "C" fn(c_int) -> c_int>(SYM_SET_VOLUME)
            {
                Ok(f) => f(volume.device_level()),
                Err(e) => {
                    log::error!("decoder symbol ViDecSetVolume missing: {e}");
                    return DecodeStatus::InternalError;
                }
            }
        };
        map_raw_status(raw)
    }

    fn had_bad_termination(&self) -> bool {
        // SAFETY: Returns 0 or 1; 0 also covers a missing instance.
        unsafe {
            match self
                .lib
                .get::<unsafe extern "C" fn() -> c_int>(SYM_BAD_TERMINATION)
            {
                Ok(f) => f() == 1,
                Err(_) => false,
            }
        }
    }

    fn internal_error_code(&self) -> i32 {
        // SAFETY: Plain scalar query; 0 when no instance exists.
        unsafe {
            match self
                .lib
                .get::<unsafe extern "C" fn() -> c_int>(SYM_INTERNAL_ERROR)
            {
                Ok(f) => f(),
                Err(_) => 0,
            }
        }
    }

    fn internal_error_message(&self) -> String {
        // SAFETY: The library returns a pointer to a NUL-terminated string it
        // owns; it stays valid until the next decoder call, so it is copied
        // out immediately.
        unsafe {
            match self
                .lib
                .get::<unsafe extern "C" fn() -> *const c_char>(SYM_INTERNAL_MESSAGE)
            {
                Ok(f) => {
                    let ptr = f();
                    if ptr.is_null() {
                        String::new()
                    } else {
                        CStr::from_ptr(ptr).to_string_lossy().into_owned()
                    }
                }
                Err(_) => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_raw_status_passes_known_codes_through() {
        for status in DecodeStatus::ALL {
            assert_eq!(map_raw_status(status.as_raw()), status);
        }
    }

    #[test]
    fn map_raw_status_folds_unknown_codes_into_internal_error() {
        assert_eq!(map_raw_status(-7), DecodeStatus::InternalError);
        assert_eq!(map_raw_status(99), DecodeStatus::InternalError);
    }

    #[test]
    fn load_reports_a_missing_library() {
        assert!(NativeDecoder::load_from(Path::new("does-not-exist.dll")).is_err());
    }
}

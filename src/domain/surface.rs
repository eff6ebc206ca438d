// SPDX-License-Identifier: MPL-2.0
//! Target surface for decoded frames.
//!
//! The controller owns a [`Surface`] for the lifetime of a playback session:
//! it is allocated before the decoder context is created and disposed only
//! after the context is closed. The decoder service receives a
//! [`SurfaceHandle`] and writes frames into the buffer; the controller never
//! inspects the pixel contents.

use std::fmt;

/// Bytes per pixel in the surface buffer (BGRA).
pub const BYTES_PER_PIXEL: usize = 4;

/// Opaque handle to a surface buffer, lent to the decoder service.
///
/// The handle is exclusively owned by the collaborator for the duration of a
/// single call and must never be retained across calls. It carries no
/// lifetime information; validity is the owning [`Surface`]'s concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(usize);

impl SurfaceHandle {
    /// Returns the raw address value passed across the native boundary.
    #[must_use]
    pub fn as_raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Pixel buffer the decoder service blits frames into.
///
/// Stored as tightly packed BGRA rows. A disposed surface keeps its
/// dimensions but releases the buffer; the decoder service is expected to
/// reject a handle to a disposed surface with a surface-disposed status.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    disposed: bool,
}

impl Surface {
    /// Allocates a zeroed surface of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            data: vec![0; len],
            disposed: false,
        }
    }

    /// Surface width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the handle lent to the decoder service.
    ///
    /// The handle is only meaningful while the surface is alive and not
    /// disposed; the service validates it per call.
    #[must_use]
    pub fn handle(&self) -> SurfaceHandle {
        SurfaceHandle(self.data.as_ptr() as usize)
    }

    /// Returns true once the surface has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Releases the pixel buffer. Idempotent.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.data = Vec::new();
    }
}

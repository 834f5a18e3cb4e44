// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Bitmap codec: lossless conversion between image files and flat RGB
//! pixel buffers with explicit geometry.
//!
//! [`load`] normalizes any format the `image` crate understands to 8-bit
//! RGB, discarding alpha and palette information. [`save`] writes a buffer
//! back out as a bitmap, with the format chosen from the path extension
//! (all shipped call sites use PNG, which round-trips losslessly).
//!
//! The [`RgbBuffer`] invariant `bytes.len() == width * height * 3` is
//! enforced at construction, so every buffer that exists is displayable.

pub mod error;
pub mod pattern;

pub use error::BitmapError;

use std::path::Path;

/// Bytes per pixel. The codec works exclusively in 3-channel RGB.
pub const CHANNELS: usize = 3;

/// An owned flat RGB pixel buffer plus its geometry, row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbBuffer {
    /// Wrap raw bytes as an RGB buffer, validating the geometry invariant.
    ///
    /// # Errors
    /// [`BitmapError::GeometryMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_raw(bytes: Vec<u8>, width: u32, height: u32) -> Result<Self, BitmapError> {
        let expected = expected_len(width, height);
        if bytes.len() != expected {
            log::error!(
                "geometry invariant violated: {} bytes for {}x{} ({} expected)",
                bytes.len(),
                width,
                height,
                expected
            );
            return Err(BitmapError::GeometryMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            height,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel bytes, `height` rows of `width` RGB triples.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer, returning the raw pixel bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// Load an image file and normalize it to a flat RGB buffer.
///
/// Any format the `image` crate can parse is accepted; alpha and palette
/// information is discarded in the RGB conversion.
///
/// # Errors
/// [`BitmapError::Decode`] if the file cannot be read or parsed as an image.
pub fn load(path: impl AsRef<Path>) -> Result<RgbBuffer, BitmapError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(BitmapError::Decode)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("loaded {} ({width}x{height})", path.display());
    RgbBuffer::from_raw(rgb.into_raw(), width, height)
}

/// Write an RGB buffer to `path` as a bitmap file.
///
/// The format is chosen from the path extension. The parent directory is
/// created if it does not exist yet.
///
/// # Errors
/// - [`BitmapError::Io`] if the output directory cannot be created.
/// - [`BitmapError::Encode`] if the image cannot be written.
pub fn save(buffer: &RgbBuffer, path: impl AsRef<Path>) -> Result<(), BitmapError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let img = image::RgbImage::from_raw(buffer.width, buffer.height, buffer.bytes.clone())
        .ok_or(BitmapError::GeometryMismatch {
            expected: expected_len(buffer.width, buffer.height),
            actual: buffer.bytes.len(),
        })?;
    img.save(path).map_err(BitmapError::Encode)?;
    log::debug!(
        "wrote {} ({}x{})",
        path.display(),
        buffer.width,
        buffer.height
    );
    Ok(())
}

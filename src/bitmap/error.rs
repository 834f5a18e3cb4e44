// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Error types for bitmap loading and saving.

use core::fmt;

/// Errors that can occur while converting between bitmap files and raw
/// RGB pixel buffers.
#[derive(Debug)]
pub enum BitmapError {
    /// The file could not be parsed as a supported image format.
    Decode(image::ImageError),
    /// The pixel buffer could not be written out as an image file.
    Encode(image::ImageError),
    /// Filesystem error outside the image codec (e.g. creating the
    /// output directory).
    Io(std::io::Error),
    /// Pixel buffer length does not match the declared width × height × 3.
    ///
    /// Never reachable from operator input; indicates a pipeline bug.
    GeometryMismatch {
        /// width × height × 3.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "could not decode image: {e}"),
            Self::Encode(e) => write!(f, "could not write image: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::GeometryMismatch { expected, actual } => write!(
                f,
                "pixel buffer length {actual} does not match geometry (expected {expected})"
            ),
        }
    }
}

impl std::error::Error for BitmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::GeometryMismatch { .. } => None,
        }
    }
}

impl From<std::io::Error> for BitmapError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Built-in synthetic test pattern.
//!
//! A 256×256 white canvas with filled black squares stepping down the
//! diagonal: one 65×65 square anchored at (i, i) for every i in
//! {0, 32, 64, …, 224}, clipped to the canvas. Consecutive squares overlap,
//! leaving long runs of identical rows and large single-color regions:
//! exactly the repetition ECB mode fails to hide.
//!
//! Used when no real image is supplied.

use super::RgbBuffer;

/// Pattern canvas edge length in pixels.
pub const PATTERN_SIZE: u32 = 256;

/// Distance between consecutive square anchors.
pub const PATTERN_STEP: u32 = 32;

/// Square edge length. Anchors at (i, i) cover i..=i+64 on both axes,
/// so each drawn square is 65 pixels wide where it fits.
pub const PATTERN_SQUARE: u32 = 64;

/// Generate the deterministic test pattern.
///
/// Two calls always return identical buffers, so block-level comparisons
/// against encrypted outputs are reproducible.
pub fn generate() -> RgbBuffer {
    let size = PATTERN_SIZE as usize;
    let mut bytes = vec![0xFFu8; size * size * super::CHANNELS];

    for anchor in (0..PATTERN_SIZE).step_by(PATTERN_STEP as usize) {
        let lo = anchor as usize;
        let hi = ((anchor + PATTERN_SQUARE) as usize).min(size - 1);
        for y in lo..=hi {
            for x in lo..=hi {
                let idx = (y * size + x) * super::CHANNELS;
                bytes[idx..idx + super::CHANNELS].fill(0x00);
            }
        }
    }

    RgbBuffer::from_raw(bytes, PATTERN_SIZE, PATTERN_SIZE)
        .expect("pattern buffer matches its own geometry")
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Cipher mode pipeline: AES-128 over raw pixel bytes.
//!
//! [`encrypt_for_display`] feeds a plaintext buffer through the selected
//! [`Mode`] and returns a buffer of **exactly the same length**, so the
//! result can be reinterpreted as an image of the original geometry. For
//! block modes this means the PKCS#7 padding overflow is cut off after
//! encryption; see the function docs for why that is deliberate.
//!
//! Mode selection is a plain enum dispatched to one of three pure
//! per-mode functions. No mode carries state between calls.

pub mod error;
pub mod key;
mod pipeline;

pub use error::ModeError;
pub use key::{CipherKey, KEY_LEN};
pub use pipeline::{encrypt_for_display, BLOCK_LEN};

use core::fmt;

/// The cipher modes on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic Codebook: every block encrypted independently.
    /// Identical plaintext blocks yield identical ciphertext blocks.
    Ecb,
    /// Cipher Block Chaining: each block mixed with the previous
    /// ciphertext block, seeded by a fresh random IV.
    Cbc,
    /// Counter mode: keystream XOR, seeded by a fresh random nonce.
    /// No padding required.
    Ctr,
}

impl Mode {
    /// All modes, in the order they appear in the operator UI.
    pub const ALL: [Mode; 3] = [Mode::Ecb, Mode::Cbc, Mode::Ctr];

    /// Lowercase stem used for output file names (`ecb.png` etc.).
    pub fn file_stem(self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Ctr => "ctr",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Ctr => "CTR",
        };
        f.write_str(label)
    }
}

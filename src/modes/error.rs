// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Error types for the cipher mode pipeline.

use core::fmt;

use super::key::KEY_LEN;

/// Errors that can occur while encrypting a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// The cipher rejected the key: AES-128 requires exactly
    /// [`KEY_LEN`] bytes. Keys produced by
    /// [`CipherKey::generate`](super::CipherKey::generate) with the
    /// default length never trigger this.
    InvalidKeyLength(usize),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength(n) => {
                write!(f, "cipher rejected key length: {n} bytes ({KEY_LEN} expected)")
            }
        }
    }
}

impl std::error::Error for ModeError {}

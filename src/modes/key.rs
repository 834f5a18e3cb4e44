// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Process-scoped cipher key.
//!
//! The key lives exactly as long as the operator wants it to: generated at
//! session start, replaced on explicit request, never persisted, never
//! derived from user input. It is only ever *read* during an encryption
//! call, so a future batch caller can share it across threads freely.
//!
//! Key bytes are held in [`Zeroizing`] storage so they are wiped when the
//! key is dropped or replaced.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// AES-128 key length in bytes. The pipeline accepts no other length.
pub const KEY_LEN: usize = 16;

/// A fixed-length random cipher key.
#[derive(Clone)]
pub struct CipherKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl CipherKey {
    /// Generate a fresh key of `len` bytes from the operating system's
    /// cryptographically secure random source.
    ///
    /// Two successive calls produce different byte sequences (collision
    /// probability is negligible at any usable length).
    pub fn generate(len: usize) -> Self {
        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Wrap existing bytes as a key. Intended for tests that need a
    /// deterministic key; the pipeline itself always uses [`generate`].
    ///
    /// [`generate`]: CipherKey::generate
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes.to_vec()),
        }
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the key holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Hexadecimal rendering for operator inspection (the key display /
    /// copy-to-clipboard feature). Never required for any round trip,
    /// since there is no decryption path.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes.as_slice())
    }
}

impl core::fmt::Debug for CipherKey {
    // Key material stays out of logs and panic messages.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CipherKey({} bytes)", self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_requested_length() {
        assert_eq!(CipherKey::generate(KEY_LEN).len(), KEY_LEN);
        assert_eq!(CipherKey::generate(32).len(), 32);
    }

    #[test]
    fn successive_keys_differ() {
        let a = CipherKey::generate(KEY_LEN);
        let b = CipherKey::generate(KEY_LEN);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn hex_rendering() {
        let key = CipherKey::from_bytes(&[0x00, 0xAB, 0xFF]);
        assert_eq!(key.to_hex(), "00abff");
    }

    #[test]
    fn debug_does_not_leak_bytes() {
        let key = CipherKey::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("de"), "debug output: {rendered}");
        assert!(rendered.contains("4 bytes"));
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Operator session: staged source image, process key, output paths.
//!
//! [`Session`] is the boundary where the full chain runs: staged image →
//! [`encrypt_for_display`] → rebuild with the source geometry → bitmap on
//! disk. Every operator-triggered failure is funneled into one
//! [`SessionError`] with a readable message; nothing is retried (all
//! failures here are deterministic) and no partial output is written.
//!
//! One encrypt-and-save operation runs to completion before the next
//! starts. The key is only read during an operation and replaced only by
//! an explicit [`regenerate_key`](Session::regenerate_key).

use std::path::{Path, PathBuf};

use crate::bitmap::{self, pattern, BitmapError, RgbBuffer};
use crate::modes::{encrypt_for_display, CipherKey, Mode, ModeError, KEY_LEN};

use core::fmt;

/// Name of the directory (under the session base) that encrypted images
/// are written to, one file per mode.
const OUTPUT_DIR: &str = "output";

/// Where the generated test pattern is stored before use.
const INPUT_DIR: &str = "input";

/// Errors surfaced to the operator by session actions.
#[derive(Debug)]
pub enum SessionError {
    /// An encryption action was invoked before any image was loaded or
    /// generated. Nothing is written.
    NoImageSelected,
    /// The bitmap codec failed (unparseable file, unwritable output, or an
    /// internal geometry violation).
    Bitmap(BitmapError),
    /// The cipher rejected its inputs.
    Cipher(ModeError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImageSelected => write!(f, "no image selected (load or generate one first)"),
            Self::Bitmap(e) => write!(f, "{e}"),
            Self::Cipher(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoImageSelected => None,
            Self::Bitmap(e) => Some(e),
            Self::Cipher(e) => Some(e),
        }
    }
}

impl From<BitmapError> for SessionError {
    fn from(e: BitmapError) -> Self {
        Self::Bitmap(e)
    }
}

impl From<ModeError> for SessionError {
    fn from(e: ModeError) -> Self {
        Self::Cipher(e)
    }
}

/// Process-scoped state for one visualization session.
pub struct Session {
    key: CipherKey,
    source: Option<RgbBuffer>,
    base_dir: PathBuf,
}

impl Session {
    /// Create a session rooted at `base_dir`, with a fresh random key.
    ///
    /// Outputs land in `<base_dir>/output/<mode>.png`; the generated test
    /// pattern in `<base_dir>/input/test_pattern.png`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            key: CipherKey::generate(KEY_LEN),
            source: None,
            base_dir: base_dir.into(),
        }
    }

    /// Decode an image file and stage it as the encryption source.
    ///
    /// # Errors
    /// [`SessionError::Bitmap`] if the file cannot be parsed as an image.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        self.source = Some(bitmap::load(path)?);
        Ok(())
    }

    /// Generate the built-in test pattern, write it to
    /// `input/test_pattern.png`, and stage it as the encryption source.
    ///
    /// Returns the path the pattern was written to.
    pub fn use_test_pattern(&mut self) -> Result<PathBuf, SessionError> {
        let pat = pattern::generate();
        let path = self.base_dir.join(INPUT_DIR).join("test_pattern.png");
        bitmap::save(&pat, &path)?;
        self.source = Some(pat);
        Ok(path)
    }

    /// The currently staged source image, if any.
    pub fn source(&self) -> Option<&RgbBuffer> {
        self.source.as_ref()
    }

    /// Replace the session key with a fresh random one.
    pub fn regenerate_key(&mut self) {
        self.key = CipherKey::generate(KEY_LEN);
    }

    /// Hex rendering of the current key for display or copying.
    pub fn key_hex(&self) -> String {
        self.key.to_hex()
    }

    /// Encrypt the staged image under `mode` and write the result to
    /// `output/<mode>.png`. Returns the written path.
    ///
    /// The output has the same geometry as the source; for CBC/CTR it is
    /// noise that cannot be decrypted back (the IV/nonce is discarded),
    /// for ECB it visibly retains the source's block structure.
    ///
    /// # Errors
    /// - [`SessionError::NoImageSelected`] if no image is staged.
    /// - [`SessionError::Cipher`] if the cipher rejects the key.
    /// - [`SessionError::Bitmap`] if the output cannot be written.
    pub fn encrypt_to_file(&self, mode: Mode) -> Result<PathBuf, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoImageSelected)?;

        let ciphertext = encrypt_for_display(&self.key, source.bytes(), mode)?;
        let scrambled = RgbBuffer::from_raw(ciphertext, source.width(), source.height())?;

        let path = self
            .base_dir
            .join(OUTPUT_DIR)
            .join(format!("{}.png", mode.file_stem()));
        bitmap::save(&scrambled, &path)?;
        log::info!("{mode} result written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_without_image_aborts() {
        let session = Session::new("/tmp/unused");
        match session.encrypt_to_file(Mode::Ecb) {
            Err(SessionError::NoImageSelected) => {}
            other => panic!("expected NoImageSelected, got {other:?}"),
        }
    }

    #[test]
    fn regenerate_key_changes_display() {
        let mut session = Session::new("/tmp/unused");
        let before = session.key_hex();
        session.regenerate_key();
        assert_ne!(before, session.key_hex());
        assert_eq!(session.key_hex().len(), KEY_LEN * 2);
    }

    #[test]
    fn no_source_until_staged() {
        let session = Session::new("/tmp/unused");
        assert!(session.source().is_none());
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! # cipherscope
//!
//! Educational visualization of AES block cipher modes on image data. A
//! bitmap's raw RGB bytes are treated as plaintext, encrypted under one of
//! three modes, and the ciphertext bytes are written back out as a bitmap of
//! identical geometry:
//!
//! - **ECB**: each 16-byte block encrypted independently. Identical plaintext
//!   blocks produce identical ciphertext blocks, so large-scale image
//!   structure survives encryption and is plainly visible in the output.
//! - **CBC**: each block chained to the previous one through a fresh random
//!   IV. The output is indistinguishable from noise.
//! - **CTR**: a keystream derived from a fresh random nonce is XORed over the
//!   plaintext. Also noise, and no padding is needed.
//!
//! This is a one-way pipeline by design: the per-call IV/nonce is generated
//! internally and discarded, never embedded in the output, so CBC and CTR
//! results **cannot be decrypted**; they exist only to be looked at. Do not
//! mistake this crate for an encryption product.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cipherscope::{Mode, Session};
//!
//! let mut session = Session::new(".");
//! session.use_test_pattern().unwrap();
//! let path = session.encrypt_to_file(Mode::Ecb).unwrap();
//! println!("pattern leakage visible in {}", path.display());
//! ```

pub mod bitmap;
pub mod modes;
pub mod session;

pub use bitmap::{BitmapError, RgbBuffer};
pub use modes::{encrypt_for_display, CipherKey, Mode, ModeError, BLOCK_LEN, KEY_LEN};
pub use session::{Session, SessionError};

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Per-mode encryption with display-length bookkeeping.
//!
//! All three modes return exactly `plaintext.len()` bytes so the caller can
//! rebuild an image of the source geometry:
//!
//! - ECB/CBC pad with PKCS#7 to a block multiple, encrypt, then truncate
//!   the ciphertext back to the plaintext length. The cut lands inside the
//!   final padding block, so the trailing bytes are not a faithful
//!   ciphertext. That is intentional: nothing here is ever decrypted.
//! - CTR is a stream mode: no padding, ciphertext length already matches.
//!
//! CBC's IV and CTR's nonce are drawn fresh from the OS random source on
//! every call and dropped on return. They are never logged, returned, or
//! embedded in the output, which makes CBC/CTR outputs unrecoverable even
//! with the key. This is the tool's scope boundary, not an oversight: the
//! output is a picture, not a message.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{block_padding::Pkcs7, BlockEncrypt, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher};
use aes::Aes128;
use rand::rngs::OsRng;
use rand::RngCore;

use super::error::ModeError;
use super::key::{CipherKey, KEY_LEN};
use super::Mode;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// CTR initial-block layout: 8-byte random nonce in the high half,
/// 64-bit big-endian counter starting at zero in the low half.
const CTR_NONCE_LEN: usize = 8;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128Ctr64 = ctr::Ctr64BE<Aes128>;

/// Encrypt `plaintext` under `mode` and return a buffer of exactly
/// `plaintext.len()` bytes.
///
/// Block modes produce a padded ciphertext one partial-to-full block longer
/// than the plaintext; the overflow is truncated before returning so the
/// byte count matches the source image's pixel buffer. Exact block-multiple
/// plaintexts take the same path: PKCS#7 adds a full extra block, which is
/// then discarded whole.
///
/// # Errors
/// [`ModeError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
pub fn encrypt_for_display(
    key: &CipherKey,
    plaintext: &[u8],
    mode: Mode,
) -> Result<Vec<u8>, ModeError> {
    let key_bytes: [u8; KEY_LEN] = key
        .as_bytes()
        .try_into()
        .map_err(|_| ModeError::InvalidKeyLength(key.len()))?;

    let mut ciphertext = match mode {
        Mode::Ecb => encrypt_ecb(&key_bytes, plaintext),
        Mode::Cbc => encrypt_cbc(&key_bytes, plaintext),
        Mode::Ctr => encrypt_ctr(&key_bytes, plaintext),
    };

    debug_assert!(ciphertext.len() >= plaintext.len());
    ciphertext.truncate(plaintext.len());

    log::debug!(
        "{mode}: {} plaintext bytes -> {} display bytes",
        plaintext.len(),
        ciphertext.len()
    );
    Ok(ciphertext)
}

/// ECB: each padded block encrypted independently under the same key.
fn encrypt_ecb(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut buf = pad_pkcs7(plaintext);
    for block in buf.chunks_exact_mut(BLOCK_LEN) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
    buf
}

/// CBC: fresh random IV, chained blocks, PKCS#7 handled by the encryptor.
fn encrypt_cbc(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    let mut iv = [0u8; BLOCK_LEN];
    OsRng.fill_bytes(&mut iv);
    Aes128CbcEnc::new(GenericArray::from_slice(key), GenericArray::from_slice(&iv))
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// CTR: fresh random nonce, keystream XOR, no padding.
fn encrypt_ctr(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    let mut iv = [0u8; BLOCK_LEN];
    OsRng.fill_bytes(&mut iv[..CTR_NONCE_LEN]);

    let mut buf = plaintext.to_vec();
    let mut cipher =
        Aes128Ctr64::new(GenericArray::from_slice(key), GenericArray::from_slice(&iv));
    cipher.apply_keystream(&mut buf);
    buf
}

/// PKCS#7: append n copies of n, where n = bytes needed to reach the next
/// block boundary. Always appends at least one byte; an aligned input
/// gains a full block of `0x10`.
fn pad_pkcs7(data: &[u8]) -> Vec<u8> {
    let pad = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut buf = Vec::with_capacity(data.len() + pad);
    buf.extend_from_slice(data);
    buf.extend(std::iter::repeat(pad as u8).take(pad));
    buf
}

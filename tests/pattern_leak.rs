// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! The demonstration this tool exists for: ECB output of the test pattern
//! retains the pattern's block-level repetition, CBC/CTR output does not.
//! Runs the full session flow down to the bitmaps on disk.

use std::collections::HashSet;

use cipherscope::bitmap::pattern::{self, PATTERN_SIZE};
use cipherscope::bitmap::{self, RgbBuffer};
use cipherscope::{encrypt_for_display, CipherKey, Mode, Session, SessionError, BLOCK_LEN, KEY_LEN};

/// One pattern row of raw bytes. 256 px × 3 = 768 bytes, which is
/// 48 AES blocks, so every row starts block-aligned.
fn row(buf: &RgbBuffer, y: u32) -> &[u8] {
    let stride = PATTERN_SIZE as usize * 3;
    let start = y as usize * stride;
    &buf.bytes()[start..start + stride]
}

fn distinct_blocks(bytes: &[u8]) -> usize {
    bytes
        .chunks_exact(BLOCK_LEN)
        .collect::<HashSet<_>>()
        .len()
}

#[test]
fn ecb_preserves_repetition_at_repeat_positions() {
    let key = CipherKey::generate(KEY_LEN);
    let pat = pattern::generate();
    let ct = encrypt_for_display(&key, pat.bytes(), Mode::Ecb).unwrap();
    let scrambled = RgbBuffer::from_raw(ct, PATTERN_SIZE, PATTERN_SIZE).unwrap();

    // Rows 0 and 16 are identical in the pattern (same slice of the first
    // square); under ECB their ciphertext rows must match block for block.
    assert_eq!(row(&pat, 0), row(&pat, 16));
    assert_eq!(row(&scrambled, 0), row(&scrambled, 16));

    // Rows 0 and 32 differ in the pattern and must differ in ciphertext.
    assert_ne!(row(&scrambled, 0), row(&scrambled, 32));
}

#[test]
fn cbc_and_ctr_break_repetition_at_repeat_positions() {
    let key = CipherKey::generate(KEY_LEN);
    let pat = pattern::generate();
    assert_eq!(row(&pat, 0), row(&pat, 16));

    for mode in [Mode::Cbc, Mode::Ctr] {
        let ct = encrypt_for_display(&key, pat.bytes(), mode).unwrap();
        let scrambled = RgbBuffer::from_raw(ct, PATTERN_SIZE, PATTERN_SIZE).unwrap();
        assert_ne!(
            row(&scrambled, 0),
            row(&scrambled, 16),
            "{mode} kept identical rows identical"
        );
    }
}

#[test]
fn ecb_ciphertext_has_as_few_distinct_blocks_as_the_plaintext() {
    let key = CipherKey::generate(KEY_LEN);
    let pat = pattern::generate();
    let total_blocks = pat.bytes().len() / BLOCK_LEN;

    // The pattern is mostly solid white/black runs: only a handful of
    // distinct plaintext blocks exist.
    let plain_distinct = distinct_blocks(pat.bytes());
    assert!(plain_distinct < 64, "pattern unexpectedly rich: {plain_distinct}");

    // ECB is a per-block bijection: same (small) number of distinct blocks.
    let ecb = encrypt_for_display(&key, pat.bytes(), Mode::Ecb).unwrap();
    assert_eq!(distinct_blocks(&ecb), plain_distinct);

    // CBC output is effectively random: block collisions are negligible.
    let cbc = encrypt_for_display(&key, pat.bytes(), Mode::Cbc).unwrap();
    assert_eq!(distinct_blocks(&cbc), total_blocks);
}

#[test]
fn session_flow_writes_all_three_modes() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(dir.path());

    // Encrypting before staging an image must abort cleanly.
    assert!(matches!(
        session.encrypt_to_file(Mode::Ecb),
        Err(SessionError::NoImageSelected)
    ));

    let pattern_path = session.use_test_pattern().unwrap();
    assert!(pattern_path.ends_with("input/test_pattern.png"));
    assert!(pattern_path.exists());

    for mode in Mode::ALL {
        let out = session.encrypt_to_file(mode).unwrap();
        assert!(out.ends_with(format!("output/{}.png", mode.file_stem())));

        // Output must reload as an image of the source geometry.
        let reloaded = bitmap::load(&out).unwrap();
        assert_eq!(reloaded.width(), PATTERN_SIZE);
        assert_eq!(reloaded.height(), PATTERN_SIZE);
    }

    // The ECB bitmap on disk still shows the repetition (PNG is lossless).
    let ecb = bitmap::load(dir.path().join("output").join("ecb.png")).unwrap();
    assert_eq!(row(&ecb, 0), row(&ecb, 16));

    let cbc = bitmap::load(dir.path().join("output").join("cbc.png")).unwrap();
    assert_ne!(row(&cbc, 0), row(&cbc, 16));
}

#[test]
fn regenerated_key_changes_ecb_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(dir.path());
    session.use_test_pattern().unwrap();

    session.encrypt_to_file(Mode::Ecb).unwrap();
    let first = bitmap::load(dir.path().join("output").join("ecb.png")).unwrap();

    session.regenerate_key();
    session.encrypt_to_file(Mode::Ecb).unwrap();
    let second = bitmap::load(dir.path().join("output").join("ecb.png")).unwrap();

    assert_ne!(first.bytes(), second.bytes());
}

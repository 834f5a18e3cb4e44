// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Example: encrypt the built-in test pattern under all three modes.
//!
//! Writes `input/test_pattern.png` and `output/{ecb,cbc,ctr}.png` into the
//! current directory. Open the outputs side by side: the ECB one still
//! shows the squares.

use cipherscope::{Mode, Session};

fn main() {
    env_logger::init();

    let mut session = Session::new(".");
    println!("Session key: {}", session.key_hex());

    let pattern_path = session.use_test_pattern().expect("could not write test pattern");
    println!("Test pattern written to: {}", pattern_path.display());

    for mode in Mode::ALL {
        match session.encrypt_to_file(mode) {
            Ok(path) => println!("{mode}: {}", path.display()),
            Err(e) => eprintln!("{mode} failed: {e}"),
        }
    }
}

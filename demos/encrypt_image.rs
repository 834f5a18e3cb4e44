// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherscope

//! Example: encrypt an image file under all three modes.
//!
//! Usage: encrypt_image <image> [ecb|cbc|ctr]
//!
//! With no mode argument, all three outputs are written to `output/`.

use cipherscope::{Mode, Session};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: encrypt_image <image> [ecb|cbc|ctr]");
        std::process::exit(1);
    }

    let modes: Vec<Mode> = match args.get(2).map(String::as_str) {
        None => Mode::ALL.to_vec(),
        Some("ecb") => vec![Mode::Ecb],
        Some("cbc") => vec![Mode::Cbc],
        Some("ctr") => vec![Mode::Ctr],
        Some(other) => {
            eprintln!("Unknown mode: {other} (expected ecb, cbc or ctr)");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(".");
    if let Err(e) = session.load_image(&args[1]) {
        eprintln!("Could not load {}: {e}", args[1]);
        std::process::exit(1);
    }
    let source = session.source().expect("image staged above");
    println!(
        "Loaded {} ({}x{}), key {}",
        args[1],
        source.width(),
        source.height(),
        session.key_hex()
    );

    for mode in modes {
        match session.encrypt_to_file(mode) {
            Ok(path) => println!("{mode}: {}", path.display()),
            Err(e) => eprintln!("{mode} failed: {e}"),
        }
    }
}

// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use std::io::{self, Read};
use std::process::ExitCode;
use std::{env, fs};

use byteshift::{NativeWord, SizeClass, WORD_BYTES, find, find_iter};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            demo();
            ExitCode::SUCCESS
        }
        [needle] => run(needle, None),
        [needle, path] => run(needle, Some(path)),
        _ => {
            eprintln!("usage: byteshift [NEEDLE [FILE]]");
            ExitCode::from(2)
        }
    }
}

/// Prints the offset of every occurrence of `needle` in the file (or stdin).
fn run(needle: &str, path: Option<&String>) -> ExitCode {
    let haystack = match read_input(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("byteshift: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut found = false;
    for offset in find_iter(&haystack, needle.as_bytes()) {
        println!("{}", offset);
        found = true;
    }

    if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn read_input(path: Option<&String>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn demo() {
    let cases: [(&[u8], &[u8]); 6] = [
        (b"hello world", b"world"),
        (b"aaaaaa", b"aaa"),
        (b"needle-in-haystack", b"XYZ"),
        (b"the quick brown fox jumps", b"fox j"),
        (b"0123456789abcdef0123456789", b"89abcdef"),
        (b"XXX\0needleXXX", b"needle"),
    ];

    println!("byteshift word-parallel search\n");
    println!("Architecture: {}", env::consts::ARCH);
    println!("Word width: {} bytes", WORD_BYTES);
    println!("\n{}\n", "=".repeat(80));

    for (idx, (haystack, needle)) in cases.iter().enumerate() {
        println!("Test #{}", idx + 1);
        println!("Haystack ({} bytes): {:?}", haystack.len(), String::from_utf8_lossy(haystack));
        println!("Needle   ({} bytes): {:?}", needle.len(), String::from_utf8_lossy(needle));

        if needle.len() > 1 {
            println!("Size class: {}", SizeClass::of::<NativeWord>(needle.len()));
        }

        match find(haystack, needle) {
            Some(pos) => println!("Result: found at {}", pos),
            None => println!("Result: not found"),
        }

        println!("{}\n", "-".repeat(80));
    }
}

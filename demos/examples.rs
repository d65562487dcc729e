// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Examples demonstrating the byteshift search API.
//!
//! Run with: `cargo run --example examples`

use std::ffi::CString;

use byteshift::accel::{find_byte, find_byte_terminated};
use byteshift::memmem::{FindIter, find_with};
use byteshift::strstr::find_in_cstring_with;
use byteshift::{
    // View types
    ByteView,
    Extent,
    // Word machinery
    NativeWord,
    SizeClass,
    ViewError,
    WORD_BYTES,
    Word,
    // Buffer search
    contains,
    find,
    find_in_buffer,
    // String search
    find_in_cstring,
    find_iter,
    find_terminated,
    search,
};

fn main() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║              byteshift Library Examples                        ║");
    println!("╚════════════════════════════════════════════════════════════════╝\n");

    println!("Platform: {}", std::env::consts::ARCH);
    println!("Native word: {} bytes", WORD_BYTES);
    println!();

    buffer_search();
    string_search();
    size_classes();
    every_occurrence();
    views_and_errors();
    low_level_utilities();
    practical_patterns();
}

/// Length-bounded search, where `0` is an ordinary byte
fn buffer_search() {
    println!("═══ Buffer Search (memmem) ═══\n");

    let haystack = b"hello world";
    let pos = find(haystack, b"world");
    println!("find(\"hello world\", \"world\") = {:?}", pos);
    assert_eq!(pos, Some(6));

    // Pointer-and-length form, each length validated against its buffer
    let pos = find_in_buffer(haystack, 11, b"world", 5);
    assert_eq!(pos, Ok(Some(6)));

    // Only the declared prefix is searched
    assert_eq!(find_in_buffer(haystack, 8, b"world", 5), Ok(None));
    println!("Declared length limits the search ✓");

    // Earliest of overlapping matches
    assert_eq!(find(b"aaaaaa", b"aaa"), Some(0));

    // Embedded zero bytes are searched through
    let binary = b"XXX\0needleXXX";
    assert_eq!(find(binary, b"needle"), Some(4));
    println!("Searches past embedded zero bytes ✓");

    // Empty needle matches at the start, even in an empty haystack
    assert_eq!(find(b"", b""), Some(0));
    assert_eq!(find(b"abc", b""), Some(0));

    // Needle longer than the haystack
    assert_eq!(find(b"ab", b"abc"), None);
    assert!(!contains(b"ab", b"abc"));
    println!("Empty and oversized needles handled ✓");

    println!();
}

/// Null-terminated search, which never looks past the terminator
fn string_search() {
    println!("═══ String Search (strstr) ═══\n");

    let pos = find_in_cstring(c"abcabcabc", c"cab");
    println!("find_in_cstring(\"abcabcabc\", \"cab\") = {:?}", pos);
    assert_eq!(pos, Some(2));

    assert_eq!(find_in_cstring(c"needle-in-haystack", c"XYZ"), None);
    assert_eq!(find_in_cstring(c"haystack", c""), Some(0));

    // Raw slices carrying their own terminator
    let raw = b"XXX\0needleXXX\0";
    assert_eq!(find_terminated(raw, b"needle\0"), Ok(None));
    println!("Stops at the first terminator ✓");

    // A slice with no terminator is rejected instead of read out of bounds
    match find_terminated(b"no terminator", b"term\0") {
        Ok(_) => unreachable!(),
        Err(e) => println!("Unterminated haystack: {}", e),
    }

    // Owned strings work through CString
    let owned = CString::new("the quick brown fox").unwrap_or_default();
    let needle = CString::new("brown").unwrap_or_default();
    assert_eq!(find_in_cstring(&owned, &needle), Some(10));

    println!();
}

/// The four needle-length strategies, at both word widths
fn size_classes() {
    println!("═══ Size Classes ═══\n");

    println!("{:>6}  {:>10}  {:>10}", "len", "u32", "u64");
    for len in 2..=10 {
        println!(
            "{:>6}  {:>10}  {:>10}",
            len,
            SizeClass::of::<u32>(len).to_string(),
            SizeClass::of::<u64>(len).to_string()
        );
    }
    println!();

    // Both widths give the same answers on every target
    let haystack = b"0123456789abcdef0123456789";
    for needle in [&b"89"[..], b"89ab", b"89abc", b"89abcdef", b"89abcdef0", b"9abcdef012"] {
        let narrow = find_with::<u32>(haystack, needle);
        let wide = find_with::<u64>(haystack, needle);
        assert_eq!(narrow, wide);
        println!(
            "{:<12} u32: {:<8} u64: {:<8} found at {:?}",
            String::from_utf8_lossy(needle),
            SizeClass::of::<u32>(needle.len()).to_string(),
            SizeClass::of::<u64>(needle.len()).to_string(),
            wide
        );
    }

    assert_eq!(find_in_cstring_with::<u32>(c"xxabcdexx", c"abcde"), Some(2));
    assert_eq!(find_in_cstring_with::<u64>(c"xxabcdexx", c"abcde"), Some(2));
    println!("\nString engine agrees at both widths ✓");

    println!();
}

/// Overlapping occurrences through the iterator
fn every_occurrence() {
    println!("═══ Every Occurrence ═══\n");

    let haystack = b"abababab";
    let hits: Vec<usize> = find_iter(haystack, b"aba").collect();
    println!("\"aba\" in \"abababab\" at {:?}", hits);
    assert_eq!(hits, vec![0, 2, 4]);

    // Explicit word width
    let hits: Vec<usize> = FindIter::<u32>::new(haystack, b"abab").collect();
    assert_eq!(hits, vec![0, 2, 4]);

    // Empty needle matches at every position including the end
    let hits: Vec<usize> = find_iter(b"abc", b"").collect();
    assert_eq!(hits, vec![0, 1, 2, 3]);
    println!("Empty needle matches at every boundary ✓");

    println!();
}

/// Views carry their extent; `search` routes on it
fn views_and_errors() {
    println!("═══ Views and Errors ═══\n");

    let bytes = b"XXX\0needleXXX\0";

    let bounded = ByteView::from_slice(&bytes[..13]);
    let terminated = ByteView::terminated(bytes).unwrap_or_else(|_| ByteView::from(c""));
    let needle = ByteView::from(c"needle");

    println!("{:?}", bounded);
    println!("{:?}", terminated);
    assert_eq!(bounded.extent(), Extent::Length(13));
    assert_eq!(terminated.extent(), Extent::Terminator);
    assert_eq!(terminated.len(), 3);

    assert_eq!(search(bounded, needle), Some(4));
    assert_eq!(search(terminated, needle), None);
    println!("Bounded view finds it, terminated view stops at byte 3 ✓");

    // Construction errors
    let errors: [ViewError; 2] = [
        ByteView::bounded(b"abc", 10).err().unwrap_or(ViewError::MissingTerminator { scanned: 0 }),
        ByteView::terminated(b"abc").err().unwrap_or(ViewError::MissingTerminator { scanned: 0 }),
    ];
    for e in &errors {
        println!("Error: {}", e);
    }
    assert_eq!(errors[0], ViewError::LengthOutOfBounds { len: 10, available: 3 });
    assert_eq!(errors[1], ViewError::MissingTerminator { scanned: 3 });

    println!();
}

/// Word packing and byte scans
fn low_level_utilities() {
    println!("═══ Low-Level Utilities ═══\n");

    // Canonical word values do not depend on host byte order
    let word = u32::from_be_slice(b"abcd");
    println!("u32 of \"abcd\": {:#010x}", word);
    assert_eq!(word, 0x6162_6364);

    // Sliding a window one byte at a time
    let slid = word.shift_in(b'e');
    assert_eq!(slid, u32::from_be_slice(b"bcde"));
    println!("After shift_in('e'): {:#010x}", slid);

    // Short needles are right-aligned and compared under a mask
    let short = u64::pack(b"abc");
    let window = u64::from_be_slice(b"zzzzzabc");
    assert_eq!(window.mask(u64::low_mask(3)), short);
    println!("Masked window of \"zzzzzabc\" equals packed \"abc\" ✓");

    // First-byte scans
    assert_eq!(find_byte(b"hello", b'l'), Some(2));
    assert_eq!(find_byte_terminated(b"he\0llo", b'l'), None);
    println!("Byte scans respect the terminator ✓");

    println!("Native word type is {} bytes", <NativeWord as Word>::BYTES);

    println!();
}

/// Common patterns built on the search functions
fn practical_patterns() {
    println!("═══ Practical Patterns ═══\n");

    // Splitting a record stream on a multi-byte delimiter
    let stream = b"id=1\r\n\r\nid=2\r\n\r\nid=3";
    let delim = b"\r\n\r\n";
    let mut records = Vec::new();
    let mut start = 0;
    for hit in find_iter(stream, delim) {
        records.push(&stream[start..hit]);
        start = hit + delim.len();
    }
    records.push(&stream[start..]);
    for r in &records {
        println!("Record: {}", String::from_utf8_lossy(r));
    }
    assert_eq!(records, vec![&b"id=1"[..], b"id=2", b"id=3"]);

    // Locating a magic header in binary data
    let mut blob = vec![0u8; 64];
    blob.extend_from_slice(b"\x89PNG\r\n\x1a\n");
    blob.extend_from_slice(&[0xFF; 32]);
    let offset = find(&blob, b"\x89PNG\r\n\x1a\n");
    println!("PNG signature at offset {:?}", offset);
    assert_eq!(offset, Some(64));

    // Counting non-overlapping occurrences
    let text = b"the cat sat on the mat with the hat";
    let mut count = 0;
    let mut pos = 0;
    while let Some(hit) = find(&text[pos..], b"the") {
        count += 1;
        pos += hit + 3;
    }
    println!("\"the\" occurs {} times", count);
    assert_eq!(count, 3);

    println!();
}

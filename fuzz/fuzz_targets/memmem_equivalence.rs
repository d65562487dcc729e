// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Buffer engine vs byte-wise reference fuzzing.
//!
//! The first input byte picks the needle length, the rest is split into
//! needle and haystack. Both word widths must agree with the reference.

#![no_main]

use libfuzzer_sys::fuzz_target;
use byteshift::memmem::{FindIter, find_with};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let needle_len = (selector as usize % 48).min(rest.len());
    let (needle, haystack) = rest.split_at(needle_len);

    let expected = naive_find(haystack, needle);
    assert_eq!(
        find_with::<u32>(haystack, needle),
        expected,
        "u32 mismatch for needle length {}",
        needle.len()
    );
    assert_eq!(
        find_with::<u64>(haystack, needle),
        expected,
        "u64 mismatch for needle length {}",
        needle.len()
    );

    // Every occurrence, not just the first
    if !needle.is_empty() {
        let all: Vec<usize> = FindIter::<u64>::new(haystack, needle).collect();
        let reference: Vec<usize> = haystack
            .windows(needle.len())
            .enumerate()
            .filter(|(_, w)| *w == needle)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(all, reference, "find_iter mismatch for needle length {}", needle.len());
    }
});

fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

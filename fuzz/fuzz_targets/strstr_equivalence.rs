// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! String engine vs byte-wise reference fuzzing.
//!
//! Raw fuzzer bytes may contain zeros anywhere; the engine must stop at the
//! first terminator of each input and agree with a reference that cuts both
//! strings there.

#![no_main]

use libfuzzer_sys::fuzz_target;
use byteshift::strstr::find_terminated;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let split = (selector as usize % 48).min(rest.len());
    let mut needle = rest[..split].to_vec();
    let mut haystack = rest[split..].to_vec();
    needle.push(0);
    haystack.push(0);

    let expected = naive_find(until_terminator(&haystack), until_terminator(&needle));
    assert_eq!(
        find_terminated(&haystack, &needle),
        Ok(expected),
        "mismatch for needle length {}",
        until_terminator(&needle).len()
    );
});

fn until_terminator(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}

fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

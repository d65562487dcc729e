// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Size-class boundary fuzzing.
//!
//! Needle lengths W - 1, W, W + 1 and W + 2 for both word widths select
//! distinct filters. Needles are planted in the fuzzer input and then
//! corrupted one byte at a time, so near-misses are exercised as often as
//! hits.

#![no_main]

use libfuzzer_sys::fuzz_target;
use byteshift::memmem::find_with;
use byteshift::strstr::find_terminated;

/// Needle lengths where the selected filter changes
const BOUNDARY_LENGTHS: &[usize] = &[
    2, 3, 4, 5, 6, // 4-byte words
    7, 8, 9, 10, // 8-byte words
    16, 17, // long needles
];

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    for &len in BOUNDARY_LENGTHS {
        let needle = generate_needle(data, len);

        for at in [0, data.len() / 2, data.len()] {
            let mut haystack = data[..at].to_vec();
            haystack.extend_from_slice(&needle);
            haystack.extend_from_slice(&data[at..]);

            check(&haystack, &needle);

            // Near miss: same needle with its last byte flipped
            let mut broken = needle.clone();
            let last = broken.len() - 1;
            broken[last] ^= 0x01;
            check(&haystack, &broken);
        }
    }
});

fn check(haystack: &[u8], needle: &[u8]) {
    let expected = naive_find(haystack, needle);
    assert_eq!(find_with::<u32>(haystack, needle), expected, "u32 at length {}", needle.len());
    assert_eq!(find_with::<u64>(haystack, needle), expected, "u64 at length {}", needle.len());

    // The terminated form, over the nonzero prefix of the same input
    let mut hay = haystack.to_vec();
    hay.push(0);
    let mut pat = needle.to_vec();
    pat.push(0);
    let hay_str = &hay[..hay.iter().position(|&b| b == 0).unwrap_or(0)];
    let pat_str = &pat[..pat.iter().position(|&b| b == 0).unwrap_or(0)];
    assert_eq!(
        find_terminated(&hay, &pat),
        Ok(naive_find(hay_str, pat_str)),
        "terminated at length {}",
        needle.len()
    );
}

/// Generate a needle of a specific length using input bytes as entropy.
fn generate_needle(seed: &[u8], length: usize) -> Vec<u8> {
    (0..length).map(|i| seed[i % seed.len()]).collect()
}

fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

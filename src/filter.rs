// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Window Filters
//!
//! The sliding-window bodies shared by both search engines, one per
//! [`SizeClass`]. Each filter is generic over the word width `W` and the
//! haystack traversal `H`, so the length-bounded and terminator-bounded
//! engines run identical comparison logic and differ only in how the next
//! byte is fetched.
//!
//! ## Preconditions
//!
//! Every filter is called with a needle of at least two bytes and a haystack
//! whose first `needle.len()` bytes are inside the haystack. The window starts
//! at offset 0 and only ever advances.
//!
//! ## Per-class tests
//!
//! | Class     | Cheap test per position                 | Confirmation          |
//! |-----------|------------------------------------------|-----------------------|
//! | `Short`   | masked window word == needle word        | none                  |
//! | `Exact`   | window word == needle word               | none                  |
//! | `OneOver` | leading word == needle word, last byte   | none                  |
//! | `Long`    | sum difference == 0, trailing word equal | prefix of `n - (W+1)` |
//!
//! In the `Long` class the single byte at `n - W - 1` is covered by neither the
//! trailing word nor the prefix compare. Once every other byte is known equal,
//! a zero sum difference forces that byte to be equal as well.

use crate::view::Haystack;
use crate::word::{SizeClass, Word};

/// Runs the filter for `class` and returns the window offset of the first
/// match.
#[inline]
pub(crate) fn run<W: Word, H: Haystack>(class: SizeClass, hay: &H, needle: &[u8]) -> Option<usize> {
    debug_assert!(needle.len() >= 2);
    debug_assert!(hay.bytes().len() >= needle.len());
    match class {
        SizeClass::Short => short::<W, H>(hay, needle),
        SizeClass::Exact => exact::<W, H>(hay, needle),
        SizeClass::OneOver => one_over::<W, H>(hay, needle),
        SizeClass::Long => long::<W, H>(hay, needle),
    }
}

fn short<W: Word, H: Haystack>(hay: &H, needle: &[u8]) -> Option<usize> {
    let n = needle.len();
    let mask = W::low_mask(n);
    let target = W::pack(needle);
    let mut window = W::pack(&hay.bytes()[..n]);
    let mut start = 0;

    loop {
        if window == target {
            return Some(start);
        }
        let incoming = hay.byte_at(start + n)?;
        window = window.shift_in(incoming).mask(mask);
        start += 1;
    }
}

fn exact<W: Word, H: Haystack>(hay: &H, needle: &[u8]) -> Option<usize> {
    let target = W::from_be_slice(needle);
    let mut window = W::from_be_slice(&hay.bytes()[..W::BYTES]);
    let mut start = 0;

    loop {
        if window == target {
            return Some(start);
        }
        let incoming = hay.byte_at(start + W::BYTES)?;
        window = window.shift_in(incoming);
        start += 1;
    }
}

fn one_over<W: Word, H: Haystack>(hay: &H, needle: &[u8]) -> Option<usize> {
    let n = needle.len();
    let target = W::from_be_slice(&needle[..W::BYTES]);
    let last = needle[W::BYTES];
    let bytes = hay.bytes();
    let mut window = W::from_be_slice(&bytes[..W::BYTES]);
    let mut trailing = bytes[W::BYTES];
    let mut start = 0;

    loop {
        if trailing == last && window == target {
            return Some(start);
        }
        let incoming = hay.byte_at(start + n)?;
        window = window.shift_in(trailing);
        trailing = incoming;
        start += 1;
    }
}

fn long<W: Word, H: Haystack>(hay: &H, needle: &[u8]) -> Option<usize> {
    let n = needle.len();
    let confirm_len = n - (W::BYTES + 1);
    let bytes = hay.bytes();

    let target = W::from_be_slice(&needle[n - W::BYTES..]);
    let mut window = W::from_be_slice(&bytes[n - W::BYTES..n]);
    let mut sums_diff: i64 = bytes[..n]
        .iter()
        .zip(needle)
        .map(|(&h, &c)| i64::from(h) - i64::from(c))
        .sum();
    let mut start = 0;

    loop {
        if sums_diff == 0
            && window == target
            && bytes[start..start + confirm_len] == needle[..confirm_len]
        {
            return Some(start);
        }
        let incoming = hay.byte_at(start + n)?;
        sums_diff += i64::from(incoming) - i64::from(bytes[start]);
        window = window.shift_in(incoming);
        start += 1;
    }
}

/// Reference search used to check the filters: every window compared
/// byte-wise.
#[cfg(test)]
pub(crate) fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ============================================================================
// Unit Tests
// ============================================================================

// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Buffer Search Engine
//!
//! Length-bounded substring search over byte slices.
//!
//! ## Algorithm
//!
//! 1. An empty needle matches at offset 0.
//! 2. A one-byte needle is a single `memchr`.
//! 3. Otherwise `memchr` skips to the first occurrence of the needle's first
//!    byte; if the rest of the haystack is shorter than the needle there is no
//!    match.
//! 4. The needle length selects a [`SizeClass`] once, and the matching window
//!    filter slides one byte at a time over the rest of the haystack.
//!
//! No table or automaton is built from the needle. Each position costs O(1)
//! in the filters; the byte-wise confirmation in the long class runs only
//! when both the rolling sum and the trailing word agree.
//!
//! Zero bytes are ordinary data here; see [`strstr`](crate::strstr) for
//! terminator-delimited input.
//!
//! ## Example Usage
//!
//! ```rust
//! use byteshift::memmem::{find, find_iter};
//!
//! assert_eq!(find(b"hello world", b"world"), Some(6));
//! assert_eq!(find(b"hello world", b"planet"), None);
//!
//! let hits: Vec<usize> = find_iter(b"abcabcabc", b"abc").collect();
//! assert_eq!(hits, vec![0, 3, 6]);
//! ```

use log::trace;

use crate::accel::find_byte;
use crate::filter;
use crate::view::{Bounded, ByteView, ViewError};
use crate::word::{NativeWord, SizeClass, Word};

/// Finds the first occurrence of `needle` in `haystack` using the native
/// word width.
///
/// # Examples
///
/// ```rust
/// use byteshift::memmem::find;
///
/// assert_eq!(find(b"aaaaaa", b"aaa"), Some(0));
/// assert_eq!(find(b"ab", b"abc"), None);
/// assert_eq!(find(b"", b""), Some(0));
/// ```
#[inline]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    find_with::<NativeWord>(haystack, needle)
}

/// Finds the first occurrence of `needle` in `haystack` using word type `W`.
///
/// Results never depend on `W`; only the code path taken does.
///
/// ```rust
/// use byteshift::memmem::find_with;
///
/// // a 5-byte needle is "one over" for u32 and "short" for u64
/// assert_eq!(find_with::<u32>(b"--hello--", b"hello"), Some(2));
/// assert_eq!(find_with::<u64>(b"--hello--", b"hello"), Some(2));
/// ```
pub fn find_with<W: Word>(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    match needle.len() {
        0 => return Some(0),
        1 => return find_byte(haystack, needle[0]),
        _ => {}
    }

    let start = find_byte(haystack, needle[0])?;
    let rest = &haystack[start..];
    if rest.len() < needle.len() {
        return None;
    }

    let class = SizeClass::of::<W>(needle.len());
    trace!(
        "memmem: needle_len={} word_bytes={} class={} skipped={}",
        needle.len(),
        W::BYTES,
        class,
        start
    );

    filter::run::<W, _>(class, &Bounded(rest), needle).map(|offset| start + offset)
}

/// Finds `needle[..needle_len]` in `haystack[..haystack_len]`.
///
/// The explicit-length form of [`find`]. `Ok(None)` means the needle is not
/// present.
///
/// # Errors
///
/// [`ViewError::LengthOutOfBounds`] if either length exceeds its slice.
///
/// # Examples
///
/// ```rust
/// use byteshift::memmem::find_in_buffer;
///
/// assert_eq!(find_in_buffer(b"hello world", 11, b"world", 5), Ok(Some(6)));
/// // only the first 8 bytes of the haystack are searched
/// assert_eq!(find_in_buffer(b"hello world", 8, b"world", 5), Ok(None));
/// assert!(find_in_buffer(b"abc", 4, b"a", 1).is_err());
/// ```
pub fn find_in_buffer(
    haystack: &[u8],
    haystack_len: usize,
    needle: &[u8],
    needle_len: usize,
) -> Result<Option<usize>, ViewError> {
    let haystack = ByteView::bounded(haystack, haystack_len)?;
    let needle = ByteView::bounded(needle, needle_len)?;
    Ok(find(haystack.as_bytes(), needle.as_bytes()))
}

/// Returns true if `needle` occurs anywhere in `haystack`.
#[inline]
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

/// Iterates over the start of every occurrence of `needle`, left to right.
///
/// Each search resumes one byte past the previous hit, so overlapping
/// occurrences are all reported. An empty needle matches at every offset
/// from `0` to `haystack.len()` inclusive.
///
/// ```rust
/// use byteshift::memmem::find_iter;
///
/// let hits: Vec<usize> = find_iter(b"aaaa", b"aa").collect();
/// assert_eq!(hits, vec![0, 1, 2]);
/// ```
pub fn find_iter<'a>(haystack: &'a [u8], needle: &'a [u8]) -> FindIter<'a, NativeWord> {
    FindIter::new(haystack, needle)
}

/// Iterator returned by [`find_iter`].
#[derive(Debug, Clone)]
pub struct FindIter<'a, W: Word = NativeWord> {
    haystack: &'a [u8],
    needle: &'a [u8],
    pos: usize,
    _word: std::marker::PhantomData<W>,
}

impl<'a, W: Word> FindIter<'a, W> {
    /// Creates an iterator using word type `W`.
    pub fn new(haystack: &'a [u8], needle: &'a [u8]) -> Self {
        Self {
            haystack,
            needle,
            pos: 0,
            _word: std::marker::PhantomData,
        }
    }
}

impl<W: Word> Iterator for FindIter<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let rest = self.haystack.get(self.pos..)?;
        let hit = self.pos + find_with::<W>(rest, self.needle)?;
        self.pos = hit + 1;
        Some(hit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.haystack.len().saturating_sub(self.pos);
        (0, Some(remaining + 1))
    }
}

impl<W: Word> std::iter::FusedIterator for FindIter<'_, W> {}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::naive_find;

    fn check_both_widths(haystack: &[u8], needle: &[u8]) {
        let expected = naive_find(haystack, needle);
        assert_eq!(find_with::<u32>(haystack, needle), expected, "u32 {:?} in {:?}", needle, haystack);
        assert_eq!(find_with::<u64>(haystack, needle), expected, "u64 {:?} in {:?}", needle, haystack);
    }

    // ========================================================================
    // Scenario Tests
    // ========================================================================

    #[test]
    fn test_hello_world() {
        assert_eq!(find_in_buffer(b"hello world", 11, b"world", 5), Ok(Some(6)));
    }

    #[test]
    fn test_repeated_bytes() {
        assert_eq!(find_in_buffer(b"aaaaaa", 6, b"aaa", 3), Ok(Some(0)));
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(find_in_buffer(b"", 0, b"", 0), Ok(Some(0)));
    }

    #[test]
    fn test_needle_longer_than_rest() {
        assert_eq!(find_in_buffer(b"ab", 2, b"abc", 3), Ok(None));
        assert_eq!(find(b"xxxxab", b"abc"), None);
    }

    #[test]
    fn test_find_in_buffer_lengths() {
        assert_eq!(find_in_buffer(b"hello world", 11, b"worldly", 5), Ok(Some(6)));
        assert_eq!(
            find_in_buffer(b"ab", 3, b"a", 1),
            Err(ViewError::LengthOutOfBounds {
                len: 3,
                available: 2
            })
        );
        assert_eq!(
            find_in_buffer(b"ab", 2, b"a", 2),
            Err(ViewError::LengthOutOfBounds {
                len: 2,
                available: 1
            })
        );
    }

    // ========================================================================
    // Edge Case Tests
    // ========================================================================

    #[test]
    fn test_empty_haystack() {
        assert_eq!(find(b"", b"x"), None);
        assert_eq!(find(b"", b"xy"), None);
    }

    #[test]
    fn test_empty_needle() {
        assert_eq!(find(b"x", b""), Some(0));
    }

    #[test]
    fn test_single_byte_needle() {
        assert_eq!(find(b"abcabc", b"c"), Some(2));
        assert_eq!(find(b"abcabc", b"d"), None);
        assert_eq!(find(b"ab\0", b"\0"), Some(2));
    }

    #[test]
    fn test_identical() {
        assert_eq!(find(b"abc", b"abc"), Some(0));
    }

    #[test]
    fn test_found_at_positions() {
        assert_eq!(find(b"XXXneedleXXX", b"needle"), Some(3));
        assert_eq!(find(b"needleXXX", b"needle"), Some(0));
        assert_eq!(find(b"XXXneedle", b"needle"), Some(3));
        assert_eq!(find(b"XXXneedleXXXneedleXXXneedleXXX", b"needle"), Some(3));
    }

    #[test]
    fn test_past_null_byte() {
        assert_eq!(find(b"XXX\0needleXXX", b"needle"), Some(4));
    }

    #[test]
    fn test_first_byte_decoys() {
        // the first needle byte appears many times before the real match
        check_both_widths(b"nnnnnnnnnnnnnnnnnnnneedle", b"needle");
        check_both_widths(b"nenenenenenenenenenenenenenenenenenenenenenenenenedle", b"nenenenenedle");
    }

    #[test]
    fn test_needle_lengths_around_word_width() {
        for needle_len in 1..66 {
            let needle = vec![b'x'; needle_len];
            let mut padded = b"yyy".to_vec();
            padded.extend_from_slice(&needle);
            padded.extend_from_slice(b"zzz");

            assert_eq!(find(b"", &needle), None);
            assert_eq!(find(&needle, &needle), Some(0), "len {}", needle_len);
            assert_eq!(find(&padded, &needle), Some(3), "len {}", needle_len);
            assert_eq!(find(&padded[3..], &needle), Some(0), "len {}", needle_len);
            assert_eq!(find(&padded[..padded.len() - 3], &needle), Some(3), "len {}", needle_len);
        }
    }

    #[test]
    fn test_word_boundary_lengths_both_widths() {
        let haystack: Vec<u8> = b"0123456789abcdefghij".repeat(3);
        for width in [4usize, 8] {
            for len in [width - 1, width, width + 1, width + 2] {
                for start in [0usize, 1, 7, 19, 20, 41] {
                    let needle = &haystack[start..start + len];
                    check_both_widths(&haystack, needle);
                    let mut broken = needle.to_vec();
                    *broken.last_mut().unwrap() ^= 0x80;
                    check_both_widths(&haystack, &broken);
                }
            }
        }
    }

    #[test]
    fn test_big_needle_in_bigger_haystack() {
        let haystack = concat!(
            "VFBMuzumaBIKeTBQOjZqlbuUkxPrAtEBnjRFBtRdfQMggzwIbSDmXCDMpgZMntbqq",
            "PxCwcgLgcarMgIOZSCFYQHFSQlCgcmMGLlHpGtbmlIcvadsYHMFJrMjzFEbEDZdCt",
            "DcvfhzIXlxcCSijvFiuvMlPKHeGzMtjojedhWRRUQXxmMIyrRoShKfpTlzPOiUlwy",
            "EuXoIiSbzwGWOnwsZybBbsoPKjolBYrECzBKwZsYKbLjXfYFzfqwGjDXNDtVacVIC",
            "jDsezgZUSMtVOeRTtFOPwFrieRYcabHBSPKRoFpJnicKdYFTMgrGnkXxxMsrhqQlf",
        );
        let needle = b"ICjDsezgZUSMtVOeRTtFOPwFrieRY";
        check_both_widths(haystack.as_bytes(), needle);
        assert_eq!(find(haystack.as_bytes(), needle), Some(258));
    }

    // ========================================================================
    // Iterator Tests
    // ========================================================================

    #[test]
    fn test_find_iter_overlapping() {
        let hits: Vec<usize> = find_iter(b"aaaaa", b"aaa").collect();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[test]
    fn test_find_iter_long_needle() {
        let haystack = b"--0123456789--0123456789--012345678";
        let hits: Vec<usize> = find_iter(haystack, b"0123456789").collect();
        assert_eq!(hits, vec![2, 14]);
    }

    #[test]
    fn test_find_iter_empty_needle() {
        let hits: Vec<usize> = find_iter(b"abc", b"").collect();
        assert_eq!(hits, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_find_iter_is_fused() {
        let mut iter = find_iter(b"ab", b"b");
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_find_iter_u32() {
        let hits: Vec<usize> = FindIter::<u32>::new(b"abcdeXabcdeXabcd", b"abcde").collect();
        assert_eq!(hits, vec![0, 6]);
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"needle-in-haystack", b"in-hay"));
        assert!(!contains(b"needle-in-haystack", b"XYZ"));
    }
}

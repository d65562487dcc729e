// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # String Search Engine
//!
//! Terminator-bounded substring search: the haystack and the needle both end
//! at their first `0` byte, and the haystack's end is only discovered while
//! scanning.
//!
//! The size-class filters are the same as in [`memmem`](crate::memmem). What
//! differs is the preamble:
//!
//! - the needle's first byte is located with a `memchr2` that also stops on
//!   the terminator;
//! - a single combined pass then walks haystack and needle together, which
//!   both measures the needle and checks the first candidate window. If that
//!   window is already identical the search returns without entering a filter;
//! - every later advance tests for the terminator instead of a length, so no
//!   byte past the terminator is ever read.
//!
//! ## Example Usage
//!
//! ```rust
//! use byteshift::strstr::find_in_cstring;
//!
//! assert_eq!(find_in_cstring(c"abcabcabc", c"cab"), Some(2));
//! assert_eq!(find_in_cstring(c"needle-in-haystack", c"XYZ"), None);
//! ```

use std::ffi::CStr;

use log::trace;

use crate::accel::find_byte_terminated;
use crate::filter;
use crate::view::{ByteView, Haystack, Terminated, ViewError};
use crate::word::{NativeWord, SizeClass, Word};

/// Finds the first occurrence of `needle` in `haystack` using the native
/// word width.
///
/// # Examples
///
/// ```rust
/// use byteshift::strstr::find_in_cstring;
///
/// assert_eq!(find_in_cstring(c"hello world", c"world"), Some(6));
/// assert_eq!(find_in_cstring(c"hello", c""), Some(0));
/// ```
#[inline]
pub fn find_in_cstring(haystack: &CStr, needle: &CStr) -> Option<usize> {
    find_in_cstring_with::<NativeWord>(haystack, needle)
}

/// Finds the first occurrence of `needle` in `haystack` using word type `W`.
pub fn find_in_cstring_with<W: Word>(haystack: &CStr, needle: &CStr) -> Option<usize> {
    find_raw::<W>(haystack.to_bytes_with_nul(), needle.to_bytes_with_nul())
}

/// Finds `needle` in `haystack`, each ending at its first `0` byte.
///
/// Bytes after a terminator are never examined.
///
/// # Errors
///
/// [`ViewError::MissingTerminator`] if either slice contains no `0` byte.
///
/// # Examples
///
/// ```rust
/// use byteshift::strstr::find_terminated;
///
/// assert_eq!(find_terminated(b"XXXneedle\0", b"needle\0"), Ok(Some(3)));
/// assert_eq!(find_terminated(b"XXX\0needle\0", b"needle\0"), Ok(None));
/// assert!(find_terminated(b"unterminated", b"needle\0").is_err());
/// ```
pub fn find_terminated(haystack: &[u8], needle: &[u8]) -> Result<Option<usize>, ViewError> {
    let haystack = ByteView::terminated(haystack)?;
    let needle = ByteView::terminated(needle)?;
    Ok(find_raw::<NativeWord>(haystack.raw(), needle.raw()))
}

/// Engine body over terminator-delimited slices.
///
/// The end of either slice also ends that string, so an unterminated slice
/// is searched up to its last byte and never beyond.
pub(crate) fn find_raw<W: Word>(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let needle_str = Terminated(needle);
    let Some(first) = needle_str.byte_at(0) else {
        return Some(0);
    };

    let start = find_byte_terminated(haystack, first)?;
    let hay = Terminated(&haystack[start..]);

    // First bytes are equal; walk both strings from offset 1.
    let mut needle_len = 1;
    let mut identical = true;
    while let (Some(h), Some(c)) = (hay.byte_at(needle_len), needle_str.byte_at(needle_len)) {
        identical &= h == c;
        needle_len += 1;
    }

    if needle_str.byte_at(needle_len).is_some() {
        // haystack ended before the needle did
        return None;
    }
    if identical {
        return Some(start);
    }

    let class = SizeClass::of::<W>(needle_len);
    trace!(
        "strstr: needle_len={} word_bytes={} class={} skipped={}",
        needle_len,
        W::BYTES,
        class,
        start
    );

    filter::run::<W, _>(class, &hay, &needle[..needle_len]).map(|offset| start + offset)
}

// ============================================================================
// Unit Tests
// ============================================================================

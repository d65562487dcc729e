// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! First-byte accelerator.
//!
//! Skips the haystack prefix that cannot start a match by locating the
//! needle's first byte with `memchr`, before the word filters engage.

use memchr::{memchr, memchr2};

use crate::view::TERMINATOR;

/// Position of the first `byte` in `haystack`.
///
/// ```rust
/// use byteshift::accel::find_byte;
///
/// assert_eq!(find_byte(b"hello", b'l'), Some(2));
/// assert_eq!(find_byte(b"hello", b'z'), None);
/// ```
#[inline]
pub fn find_byte(haystack: &[u8], byte: u8) -> Option<usize> {
    memchr(byte, haystack)
}

/// Position of the first `byte` in `haystack` before its first `0` byte.
///
/// Returns `None` when the terminator, or the end of the slice, comes first.
/// Looking for the terminator itself returns its position.
///
/// ```rust
/// use byteshift::accel::find_byte_terminated;
///
/// assert_eq!(find_byte_terminated(b"abc\0xyz\0", b'c'), Some(2));
/// assert_eq!(find_byte_terminated(b"abc\0xyz\0", b'y'), None);
/// ```
#[inline]
pub fn find_byte_terminated(haystack: &[u8], byte: u8) -> Option<usize> {
    let pos = memchr2(byte, TERMINATOR, haystack)?;
    (haystack[pos] == byte).then_some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_byte() {
        assert_eq!(find_byte(b"", b'a'), None);
        assert_eq!(find_byte(b"a", b'a'), Some(0));
        assert_eq!(find_byte(b"xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxa", b'a'), Some(32));
        assert_eq!(find_byte(b"ab\0ab", 0), Some(2));
    }

    #[test]
    fn test_find_byte_past_terminator() {
        // bounded search treats 0 as an ordinary byte
        assert_eq!(find_byte(b"XXX\0needle", b'n'), Some(4));
    }

    #[test]
    fn test_find_byte_terminated() {
        assert_eq!(find_byte_terminated(b"\0a", b'a'), None);
        assert_eq!(find_byte_terminated(b"ba\0", b'a'), Some(1));
        assert_eq!(find_byte_terminated(b"XXX\0needle\0", b'n'), None);
        assert_eq!(find_byte_terminated(b"abc", b'z'), None);
        assert_eq!(find_byte_terminated(b"abc\0", 0), Some(3));
    }

    #[test]
    fn test_find_byte_all_values() {
        let data: Vec<u8> = (1u8..=255).collect();
        for b in 1u8..=255 {
            assert_eq!(find_byte(&data, b), Some(b as usize - 1));
            assert_eq!(find_byte_terminated(&data, b), Some(b as usize - 1));
        }
    }
}

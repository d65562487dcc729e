// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # byteshift
//!
//! Word-parallel substring search over bytes: a `memmem` for length-bounded
//! buffers and a `strstr` for null-terminated strings, sharing one filtering
//! algorithm and needing no preprocessing of the needle.
//!
//! ## Features
//!
//! - **First-byte skip** with `memchr` before any window work starts
//! - **Canonical word windows**: up to a machine word of the needle compared
//!   in a single integer equality, independent of host byte order
//! - **Rolling sum filter** for long needles, so the byte-wise confirmation
//!   only runs when both cheap checks agree
//! - **Zero allocation, zero preprocessing**: every call is a pure function
//!   of its borrowed inputs and is safe to call from any number of threads
//! - **Optional C ABI** (`ffi` feature) exporting `byteshift_memmem` and
//!   `byteshift_strstr`
//!
//! ## Quick Start
//!
//! ```rust
//! use byteshift::{find, find_in_buffer, find_in_cstring};
//!
//! assert_eq!(find(b"hello world", b"world"), Some(6));
//! assert_eq!(find_in_buffer(b"hello world", 11, b"world", 5), Ok(Some(6)));
//! assert_eq!(find_in_cstring(c"abcabcabc", c"cab"), Some(2));
//! ```
//!
//! ## Size Classes
//!
//! After the first-byte skip, the needle length `n` picks one strategy for the
//! whole call, relative to the word width `W` (8 bytes on 64-bit targets, 4
//! otherwise):
//!
//! | Class      | Needle length | Per-position test                           |
//! |------------|---------------|---------------------------------------------|
//! | short      | `n < W`       | masked word window                          |
//! | exact      | `n == W`      | one word                                    |
//! | one-over   | `n == W + 1`  | one word plus the trailing byte             |
//! | long       | `n > W + 1`   | rolling sum + trailing word, then confirm   |
//!
//! Both word widths are available on every target through the `_with`
//! variants:
//!
//! ```rust
//! use byteshift::memmem::find_with;
//!
//! assert_eq!(find_with::<u32>(b"xxabcdexx", b"abcde"), Some(2));
//! assert_eq!(find_with::<u64>(b"xxabcdexx", b"abcde"), Some(2));
//! ```
//!
//! ## Views
//!
//! [`search`] takes two [`ByteView`]s and routes on the haystack's extent:
//! length-bounded haystacks go to [`memmem`], terminated ones to [`strstr`].
//!
//! ```rust
//! use byteshift::{search, ByteView};
//!
//! let bounded = ByteView::from_slice(b"XXX\0needle");
//! let terminated = ByteView::terminated(b"XXX\0needle\0").unwrap();
//! let needle = ByteView::from_slice(b"needle");
//!
//! assert_eq!(search(bounded, needle), Some(4));
//! assert_eq!(search(terminated, needle), None);
//! ```
//!
//! See the [`memmem`], [`strstr`], [`word`], [`view`] and [`accel`] modules
//! for the complete API.

pub mod accel;
mod filter;
pub mod memmem;
pub mod strstr;
pub mod view;
pub mod word;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use memmem::{contains, find, find_in_buffer, find_iter, FindIter};
pub use strstr::{find_in_cstring, find_terminated};
pub use view::{ByteView, Extent, ViewError};
pub use word::{NativeWord, SizeClass, Word, WORD_BYTES};

/// Finds the first occurrence of `needle` in `haystack`.
///
/// A length-bounded haystack is searched with [`memmem`], where `0` is an
/// ordinary byte. A terminated haystack is searched with [`strstr`] and ends
/// at its terminator; a needle containing a `0` byte can never occur in it.
///
/// # Examples
///
/// ```rust
/// use byteshift::{search, ByteView};
///
/// let hay = ByteView::from(c"needle-in-haystack");
/// assert_eq!(search(hay, ByteView::from_slice(b"in")), Some(7));
/// assert_eq!(search(hay, ByteView::from(c"XYZ")), None);
/// ```
pub fn search(haystack: ByteView<'_>, needle: ByteView<'_>) -> Option<usize> {
    match haystack.extent() {
        Extent::Length(_) => memmem::find(haystack.as_bytes(), needle.as_bytes()),
        Extent::Terminator => {
            if needle.as_bytes().contains(&view::TERMINATOR) {
                return None;
            }
            strstr::find_raw::<NativeWord>(haystack.raw(), needle.raw())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_routes_on_extent() {
        let bounded = ByteView::from_slice(b"XXX\0needleXXX");
        let terminated = ByteView::terminated(b"XXX\0needleXXX\0").unwrap();
        let needle = ByteView::from(c"needle");

        assert_eq!(search(bounded, needle), Some(4));
        assert_eq!(search(terminated, needle), None);
    }

    #[test]
    fn test_search_terminated_rejects_embedded_zero() {
        let hay = ByteView::from(c"abc");
        assert_eq!(search(hay, ByteView::from_slice(b"b\0")), None);
        assert_eq!(search(hay, ByteView::from_slice(b"bc")), Some(1));
    }

    #[test]
    fn test_search_bounded_view_prefix() {
        let hay = ByteView::bounded(b"hello world", 8).unwrap();
        assert_eq!(search(hay, ByteView::from_slice(b"wo")), Some(6));
        assert_eq!(search(hay, ByteView::from_slice(b"world")), None);
    }

    #[test]
    fn test_search_empty_needles() {
        assert_eq!(search(ByteView::from(c""), ByteView::from(c"")), Some(0));
        assert_eq!(search(ByteView::from_slice(b""), ByteView::from_slice(b"")), Some(0));
    }
}

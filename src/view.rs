// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Byte Views
//!
//! Borrowed byte sequences with an explicit extent. A view ends either at a
//! declared length ([`Bounded`]) or at the first `0` byte ([`Terminated`]).
//!
//! The search filters are written once against the [`Haystack`] trait, which
//! answers a single question per advance: "is there a byte at this offset, and
//! what is it?" The bounded variant answers from the length, the terminated
//! variant by testing for the terminator. Every read also goes through the
//! borrowed slice, so neither variant can read outside the caller's buffer.
//!
//! [`ByteView`] is the public value form of the same two variants, used by
//! [`search`](crate::search).

use std::ffi::CStr;
use std::fmt;

/// The terminator byte of a [`Terminated`] view.
pub const TERMINATOR: u8 = 0;

// ============================================================================
// Haystack Traversal
// ============================================================================

/// Forward traversal over a haystack whose end is discovered while scanning.
///
/// Implementations guarantee that `byte_at(i)` returning `Some` implies every
/// offset below `i` is also inside the haystack and readable through
/// [`bytes`](Haystack::bytes).
pub trait Haystack {
    /// Returns the byte at `index`, or `None` once `index` reaches the end.
    fn byte_at(&self, index: usize) -> Option<u8>;

    /// The underlying slice. May extend past the logical end.
    fn bytes(&self) -> &[u8];
}

/// A haystack ending at the end of its slice.
#[derive(Debug, Clone, Copy)]
pub struct Bounded<'a>(pub &'a [u8]);

impl Haystack for Bounded<'_> {
    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.0
    }
}

/// A haystack ending at its first [`TERMINATOR`] byte.
///
/// The end of the slice also ends the haystack, so a slice without a
/// terminator is never read out of bounds.
#[derive(Debug, Clone, Copy)]
pub struct Terminated<'a>(pub &'a [u8]);

impl Haystack for Terminated<'_> {
    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        match self.0.get(index) {
            Some(&b) if b != TERMINATOR => Some(b),
            _ => None,
        }
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.0
    }
}

// ============================================================================
// Public View Type
// ============================================================================

/// How a [`ByteView`] finds its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// The view holds exactly this many bytes.
    Length(usize),
    /// The view ends at the first `0` byte.
    Terminator,
}

/// An immutable borrowed byte sequence with an explicit extent.
///
/// # Examples
///
/// ```rust
/// use byteshift::view::{ByteView, Extent};
///
/// let bounded = ByteView::bounded(b"hello world", 5).unwrap();
/// assert_eq!(bounded.extent(), Extent::Length(5));
/// assert_eq!(bounded.len(), 5);
///
/// let terminated = ByteView::terminated(b"abc\0def").unwrap();
/// assert_eq!(terminated.len(), 3);
/// assert_eq!(terminated.as_bytes(), b"abc");
///
/// assert!(ByteView::bounded(b"abc", 4).is_err());
/// assert!(ByteView::terminated(b"no terminator").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
    extent: Extent,
}

impl<'a> ByteView<'a> {
    /// A view over the first `len` bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// [`ViewError::LengthOutOfBounds`] if `len > bytes.len()`.
    pub fn bounded(bytes: &'a [u8], len: usize) -> Result<Self, ViewError> {
        if len > bytes.len() {
            return Err(ViewError::LengthOutOfBounds {
                len,
                available: bytes.len(),
            });
        }
        Ok(Self {
            bytes: &bytes[..len],
            extent: Extent::Length(len),
        })
    }

    /// A view over a whole slice.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            extent: Extent::Length(bytes.len()),
        }
    }

    /// A view ending at the first `0` byte of `bytes`.
    ///
    /// The terminator itself is kept in the underlying slice so traversal can
    /// stop on it.
    ///
    /// # Errors
    ///
    /// [`ViewError::MissingTerminator`] if `bytes` contains no `0` byte.
    pub fn terminated(bytes: &'a [u8]) -> Result<Self, ViewError> {
        let end = memchr::memchr(TERMINATOR, bytes).ok_or(ViewError::MissingTerminator {
            scanned: bytes.len(),
        })?;
        Ok(Self {
            bytes: &bytes[..=end],
            extent: Extent::Terminator,
        })
    }

    /// A terminated view over a C string, terminator included.
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self {
            bytes: s.to_bytes_with_nul(),
            extent: Extent::Terminator,
        }
    }

    /// How this view finds its end.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The bytes of the view, excluding any terminator.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        match self.extent {
            Extent::Length(_) => self.bytes,
            Extent::Terminator => &self.bytes[..self.bytes.len() - 1],
        }
    }

    /// The underlying slice, including the terminator for terminated views.
    #[inline]
    pub(crate) fn raw(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of bytes in the view, excluding any terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the view holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<'a> From<&'a CStr> for ByteView<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::from_cstr(s)
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("bytes", &String::from_utf8_lossy(self.as_bytes()))
            .field("extent", &self.extent)
            .finish()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when building a view from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A declared length exceeds the bytes actually supplied.
    LengthOutOfBounds { len: usize, available: usize },
    /// A terminated view was requested over bytes with no `0` byte.
    MissingTerminator { scanned: usize },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::LengthOutOfBounds { len, available } => {
                write!(
                    f,
                    "declared length {} exceeds buffer of {} bytes",
                    len, available
                )
            }
            ViewError::MissingTerminator { scanned } => {
                write!(f, "no terminator found in {} bytes", scanned)
            }
        }
    }
}

impl std::error::Error for ViewError {}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_byte_at() {
        let hay = Bounded(b"ab\0c");
        assert_eq!(hay.byte_at(0), Some(b'a'));
        assert_eq!(hay.byte_at(2), Some(0));
        assert_eq!(hay.byte_at(3), Some(b'c'));
        assert_eq!(hay.byte_at(4), None);
    }

    #[test]
    fn test_terminated_byte_at_stops_on_terminator() {
        let hay = Terminated(b"ab\0c");
        assert_eq!(hay.byte_at(1), Some(b'b'));
        assert_eq!(hay.byte_at(2), None);
        assert_eq!(hay.byte_at(3), Some(b'c'));
    }

    #[test]
    fn test_terminated_byte_at_stops_on_slice_end() {
        let hay = Terminated(b"ab");
        assert_eq!(hay.byte_at(2), None);
        assert_eq!(hay.byte_at(usize::MAX), None);
    }

    #[test]
    fn test_bounded_view() {
        let view = ByteView::bounded(b"hello world", 11).unwrap();
        assert_eq!(view.len(), 11);
        assert_eq!(view.extent(), Extent::Length(11));

        let view = ByteView::bounded(b"hello world", 0).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_bounded_view_out_of_bounds() {
        assert_eq!(
            ByteView::bounded(b"ab", 3),
            Err(ViewError::LengthOutOfBounds {
                len: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_terminated_view() {
        let view = ByteView::terminated(b"needle\0rest").unwrap();
        assert_eq!(view.as_bytes(), b"needle");
        assert_eq!(view.raw(), b"needle\0");
        assert_eq!(view.extent(), Extent::Terminator);

        let view = ByteView::terminated(b"\0").unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_terminated_view_missing_terminator() {
        assert_eq!(
            ByteView::terminated(b"abc"),
            Err(ViewError::MissingTerminator { scanned: 3 })
        );
        assert!(ByteView::terminated(b"").is_err());
    }

    #[test]
    fn test_view_from_cstr() {
        let view = ByteView::from(c"haystack");
        assert_eq!(view.as_bytes(), b"haystack");
        assert_eq!(view.raw().last(), Some(&TERMINATOR));
    }

    #[test]
    fn test_view_error_display() {
        let err = ViewError::LengthOutOfBounds {
            len: 9,
            available: 4,
        };
        assert_eq!(err.to_string(), "declared length 9 exceeds buffer of 4 bytes");
        let err = ViewError::MissingTerminator { scanned: 12 };
        assert_eq!(err.to_string(), "no terminator found in 12 bytes");
    }

    #[test]
    fn test_view_debug() {
        let view = ByteView::from_slice(b"abc");
        let debug = format!("{:?}", view);
        assert!(debug.contains("abc"));
        assert!(debug.contains("Length(3)"));
    }
}

// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Word Model
//!
//! Canonical machine-word values used as fast equality comparators by the
//! search engines.
//!
//! A canonical word packs `W` consecutive bytes most-significant-first, so the
//! first byte of the block always lands in the top byte of the integer:
//!
//! ```text
//! bytes:     [b0, b1, b2, b3]
//! canonical: 0x b0 b1 b2 b3      (W = 4)
//! ```
//!
//! Host byte order is consulted in exactly one place, [`Word::from_be_slice`].
//! Everything else either compares two canonical values or builds one
//! incrementally with [`Word::shift_in`], which is independent of host layout.
//!
//! ## Word Width
//!
//! | Target pointer width | [`NativeWord`] | [`WORD_BYTES`] |
//! |----------------------|----------------|----------------|
//! | 64-bit               | `u64`          | 8              |
//! | 32-bit / 16-bit      | `u32`          | 4              |
//!
//! Both widths implement [`Word`] on every target, so the `_with::<W>` entry
//! points can run the 4-byte code paths on a 64-bit host and vice versa.
//!
//! ```rust
//! use byteshift::word::Word;
//!
//! assert_eq!(u32::from_be_slice(b"abcd"), 0x6162_6364);
//! assert_eq!(u32::pack(b"abcd"), u32::from_be_slice(b"abcd"));
//! assert_eq!(u32::pack(b"ab"), 0x6162);
//! ```

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer usable as a canonical word.
///
/// Implemented for `u32` (W = 4) and `u64` (W = 8). The trait is sealed.
pub trait Word: sealed::Sealed + Copy + Eq + fmt::Debug + fmt::LowerHex {
    /// Width of the word in bytes.
    const BYTES: usize;

    /// The all-zero word.
    const ZERO: Self;

    /// Builds the canonical value of exactly `Self::BYTES` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::BYTES`.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Shifts the word left by one byte and xors `byte` into the low byte.
    ///
    /// The leading byte falls off the top of the word.
    fn shift_in(self, byte: u8) -> Self;

    /// Mask keeping the low `len` bytes. `len` must be below `Self::BYTES`.
    fn low_mask(len: usize) -> Self;

    /// Bitwise and.
    fn mask(self, mask: Self) -> Self;

    /// Packs up to `Self::BYTES` bytes by repeated [`shift_in`](Word::shift_in).
    ///
    /// For a full-width block this agrees with
    /// [`from_be_slice`](Word::from_be_slice); shorter blocks are
    /// right-aligned with leading zero bytes.
    #[inline]
    fn pack(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= Self::BYTES);
        bytes.iter().fold(Self::ZERO, |word, &b| word.shift_in(b))
    }
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BYTES: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;

            #[inline]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut block = [0u8; std::mem::size_of::<$ty>()];
                block.copy_from_slice(bytes);
                <$ty>::from_be_bytes(block)
            }

            #[inline]
            fn shift_in(self, byte: u8) -> Self {
                (self << 8) ^ Self::from(byte)
            }

            #[inline]
            fn low_mask(len: usize) -> Self {
                debug_assert!(len < Self::BYTES);
                (1 << (len * 8)) - 1
            }

            #[inline]
            fn mask(self, mask: Self) -> Self {
                self & mask
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// The word used by the default entry points, resolved from the target's
/// pointer width.
#[cfg(target_pointer_width = "64")]
pub type NativeWord = u64;

/// The word used by the default entry points, resolved from the target's
/// pointer width.
#[cfg(not(target_pointer_width = "64"))]
pub type NativeWord = u32;

/// Width of [`NativeWord`] in bytes.
pub const WORD_BYTES: usize = <NativeWord as Word>::BYTES;

// ============================================================================
// Size Classes
// ============================================================================

/// The filter strategy selected for a needle length, relative to a word
/// width `W`.
///
/// Chosen once per search call; needles of length 0 and 1 never reach a size
/// class because the engines answer them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// `needle_len < W`: masked word window alone decides a match.
    Short,
    /// `needle_len == W`: one full word decides a match.
    Exact,
    /// `needle_len == W + 1`: one full word plus the trailing byte.
    OneOver,
    /// `needle_len > W + 1`: sum difference and trailing word, then a
    /// byte-wise confirmation of the uncovered prefix.
    Long,
}

impl SizeClass {
    /// Classifies `needle_len` against word type `W`.
    ///
    /// ```rust
    /// use byteshift::word::SizeClass;
    ///
    /// assert_eq!(SizeClass::of::<u32>(3), SizeClass::Short);
    /// assert_eq!(SizeClass::of::<u32>(4), SizeClass::Exact);
    /// assert_eq!(SizeClass::of::<u32>(5), SizeClass::OneOver);
    /// assert_eq!(SizeClass::of::<u64>(9), SizeClass::OneOver);
    /// assert_eq!(SizeClass::of::<u64>(10), SizeClass::Long);
    /// ```
    #[inline]
    pub fn of<W: Word>(needle_len: usize) -> Self {
        match needle_len {
            n if n < W::BYTES => SizeClass::Short,
            n if n == W::BYTES => SizeClass::Exact,
            n if n == W::BYTES + 1 => SizeClass::OneOver,
            _ => SizeClass::Long,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeClass::Short => "short",
            SizeClass::Exact => "exact",
            SizeClass::OneOver => "one-over",
            SizeClass::Long => "long",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_be_slice_is_most_significant_first() {
        assert_eq!(u32::from_be_slice(&[0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
        assert_eq!(
            u64::from_be_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    #[should_panic]
    fn test_from_be_slice_rejects_short_block() {
        let _ = u64::from_be_slice(b"abc");
    }

    #[test]
    fn test_pack_agrees_with_from_be_slice() {
        let block = [0xFFu8, 0x00, 0x80, 0x7F, 0x01, 0xFE, 0x10, 0xEF];
        assert_eq!(u64::pack(&block), u64::from_be_slice(&block));
        assert_eq!(u32::pack(&block[..4]), u32::from_be_slice(&block[..4]));
        assert_eq!(u32::pack(&block[4..]), u32::from_be_slice(&block[4..]));
    }

    #[test]
    fn test_pack_short_block_is_right_aligned() {
        assert_eq!(u32::pack(b""), 0);
        assert_eq!(u32::pack(&[0xAB]), 0xAB);
        assert_eq!(u64::pack(&[0x12, 0x34, 0x56]), 0x0012_3456);
    }

    #[test]
    fn test_shift_in_drops_leading_byte() {
        let word = u32::from_be_slice(b"abcd").shift_in(b'e');
        assert_eq!(word, u32::from_be_slice(b"bcde"));

        let word = u64::from_be_slice(b"abcdefgh").shift_in(b'i');
        assert_eq!(word, u64::from_be_slice(b"bcdefghi"));
    }

    #[test]
    fn test_shift_in_matches_sliding_window() {
        let data: Vec<u8> = (0u8..=255).rev().chain(0u8..=255).collect();
        let mut word = u64::from_be_slice(&data[..8]);
        for end in 8..data.len() {
            word = word.shift_in(data[end]);
            assert_eq!(word, u64::from_be_slice(&data[end - 7..=end]), "end {}", end);
        }
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(u32::low_mask(0), 0);
        assert_eq!(u32::low_mask(1), 0xFF);
        assert_eq!(u32::low_mask(3), 0x00FF_FFFF);
        assert_eq!(u64::low_mask(7), 0x00FF_FFFF_FFFF_FFFF);
        assert_eq!(u64::from_be_slice(b"abcdefgh").mask(u64::low_mask(2)), 0x6768);
    }

    #[test]
    fn test_native_word_width() {
        assert!(WORD_BYTES == 4 || WORD_BYTES == 8);
        assert_eq!(WORD_BYTES, std::mem::size_of::<NativeWord>());
        #[cfg(target_pointer_width = "64")]
        assert_eq!(WORD_BYTES, 8);
    }

    #[test]
    fn test_size_class_boundaries() {
        for (len, class) in [
            (2, SizeClass::Short),
            (3, SizeClass::Short),
            (4, SizeClass::Exact),
            (5, SizeClass::OneOver),
            (6, SizeClass::Long),
            (100, SizeClass::Long),
        ] {
            assert_eq!(SizeClass::of::<u32>(len), class, "u32 len {}", len);
        }
        for (len, class) in [
            (7, SizeClass::Short),
            (8, SizeClass::Exact),
            (9, SizeClass::OneOver),
            (10, SizeClass::Long),
        ] {
            assert_eq!(SizeClass::of::<u64>(len), class, "u64 len {}", len);
        }
    }

    #[test]
    fn test_size_class_display() {
        assert_eq!(SizeClass::OneOver.to_string(), "one-over");
        assert_eq!(format!("{}", SizeClass::Long), "long");
    }
}

// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! C ABI exports, enabled with the `ffi` feature.
//!
//! Drop-in replacements for `memmem(3)` and `strstr(3)`:
//!
//! ```c
//! void *byteshift_memmem(const void *haystack, size_t haystack_len,
//!                        const void *needle, size_t needle_len);
//! char *byteshift_strstr(const char *haystack, const char *needle);
//! ```
//!
//! Both return a pointer into `haystack` at the first match, or `NULL`.

use std::ffi::{CStr, c_char, c_void};
use std::ptr;
use std::slice;

use crate::{find, find_in_cstring};

/// Finds `needle` in `haystack`, both given as pointer and length.
///
/// An empty needle returns `haystack` unchanged. A null pointer with a
/// non-zero length returns `NULL`.
///
/// # Safety
///
/// `haystack` must be valid for reads of `haystack_len` bytes and `needle`
/// for reads of `needle_len` bytes, for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn byteshift_memmem(
    haystack: *const c_void,
    haystack_len: usize,
    needle: *const c_void,
    needle_len: usize,
) -> *mut c_void {
    if needle_len == 0 {
        return haystack.cast_mut();
    }
    if haystack.is_null() || needle.is_null() {
        return ptr::null_mut();
    }

    let hay = unsafe { slice::from_raw_parts(haystack.cast::<u8>(), haystack_len) };
    let pat = unsafe { slice::from_raw_parts(needle.cast::<u8>(), needle_len) };
    match find(hay, pat) {
        Some(pos) => hay[pos..].as_ptr().cast_mut().cast(),
        None => ptr::null_mut(),
    }
}

/// Finds the null-terminated `needle` in the null-terminated `haystack`.
///
/// Returns `NULL` if either pointer is null.
///
/// # Safety
///
/// Both pointers must point to valid null-terminated strings that stay
/// unmodified for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn byteshift_strstr(
    haystack: *const c_char,
    needle: *const c_char,
) -> *mut c_char {
    if haystack.is_null() || needle.is_null() {
        return ptr::null_mut();
    }

    let (hay, pat) = unsafe { (CStr::from_ptr(haystack), CStr::from_ptr(needle)) };
    match find_in_cstring(hay, pat) {
        Some(pos) => hay.to_bytes()[pos..].as_ptr().cast_mut().cast(),
        None => ptr::null_mut(),
    }
}

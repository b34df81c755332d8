// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use crate::view::BufView;

/// Compares two byte slices in constant time using libsodium's `sodium_memcmp`.
///
/// Returns `true` if the slices are equal, `false` otherwise. If the lengths
/// differ, returns `false` immediately (length itself is not secret). Every
/// verification of a secret-derived tag or signature in this layer goes
/// through this function, never through short-circuiting `==`.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    // SAFETY: Both pointers come from valid slices. Length equality is verified before the call.
    unsafe {
        libsodium_sys::sodium_memcmp(
            a.as_ptr() as *const _,
            b.as_ptr() as *const _,
            a.len(),
        ) == 0
    }
}

/// Overwrites every byte of `data` with zero using `sodium_memzero`.
///
/// `sodium_memzero` is guaranteed not to be elided by the optimizer, unlike
/// a plain `for` loop writing zeros.
pub fn wipe(data: &mut [u8]) {
    if data.is_empty() {
        return;
    }
    // SAFETY: Pointer and length come from a valid mutable slice.
    unsafe {
        libsodium_sys::sodium_memzero(data.as_mut_ptr() as *mut _, data.len());
    }
}

/// Wipes the remaining window of a buffer view.
///
/// For a writable view, every byte between the view's position and limit is
/// zeroized. For a read-only view this is a no-op rather than an error, so
/// cleanup paths never fail on memory they cannot touch.
pub fn wipe_view(view: &mut BufView<'_>) {
    if let Ok(bytes) = view.remaining_mut() {
        wipe(bytes);
    }
}

/// Returns `true` if every byte in `data` is zero, checked in constant time.
pub fn is_zero(data: &[u8]) -> bool {
    // SAFETY: Pointer comes from a valid slice.
    unsafe { libsodium_sys::sodium_is_zero(data.as_ptr(), data.len()) == 1 }
}

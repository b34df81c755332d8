// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer FFI Bindings
// Licensed under the MIT License

//! C-compatible FFI bindings for the Brine sodium layer.
//!
//! This crate exposes a flat, handle-based C API over the safe Rust surface
//! of `brine-core`. It is intended for consumption from C, C#, and Android
//! (JNI) hosts.
//!
//! All functions return `0` on success or a negative error code on failure;
//! verification functions additionally return `1` for a clean "did not
//! verify" outcome. Callers must initialize libsodium by calling
//! [`box_ffi::brine_init`] before invoking any other function in this
//! library.

/// Secret-key encryption and password hashing.
pub mod box_ffi;
/// Generic hashing, one-shot and handle-based streaming.
pub mod hash_ffi;

use brine_core::BrineResult;

/// Status code for a verification that completed and did not verify.
pub(crate) const VERIFY_MISMATCH: i32 = 1;

/// Converts a `BrineResult<()>` into a C-friendly integer return code.
///
/// Returns `0` on `Ok(())` or a negative error code on `Err`.
pub(crate) fn result_to_int(r: BrineResult<()>) -> i32 {
    match r {
        Ok(()) => 0,
        Err(e) => e.to_c_int(),
    }
}

/// Converts a boolean-verify `BrineResult<bool>` into a return code:
/// `0` verified, `1` did not verify, negative on error.
pub(crate) fn verify_to_int(r: BrineResult<bool>) -> i32 {
    match r {
        Ok(true) => 0,
        Ok(false) => VERIFY_MISMATCH,
        Err(e) => e.to_c_int(),
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::sync::OnceLock;

use crate::types::{BrineError, BrineResult};

static SODIUM_READY: OnceLock<bool> = OnceLock::new();

/// Guarantees the one-time libsodium initialization has happened.
///
/// `sodium_init` returns 0 on first success, 1 if the library was already
/// initialized, and -1 on failure. The call is funneled through a process
/// lifetime cell so it executes at most once even under concurrent first
/// use; a failure is stable for the process and is reported on every
/// subsequent call without retrying.
///
/// Every constructor and session entry point in this crate calls this before
/// touching any other native function.
///
/// # Errors
///
/// Returns [`BrineError::InitFailed`] if `sodium_init` reported a failure.
pub fn ensure_init() -> BrineResult<()> {
    // SAFETY: sodium_init is safe to call from any thread; libsodium
    // serializes concurrent initialization internally.
    let ready = SODIUM_READY.get_or_init(|| unsafe { libsodium_sys::sodium_init() >= 0 });
    if *ready {
        Ok(())
    } else {
        Err(BrineError::InitFailed)
    }
}

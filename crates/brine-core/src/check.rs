// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Buffer contract checks enforced before every native call.
//!
//! Malformed input is rejected here, in safe code, instead of reaching
//! libsodium where it would be undefined behavior. All checks are pure
//! functions of their arguments: no retries, no side effects beyond the
//! returned error, and the error names the violated parameter so callers
//! can locate the bad call site.

use crate::types::{BrineError, BrineResult};
use crate::view::BufView;

/// Fails unless `actual` equals `expected`.
pub fn exact_len(name: &'static str, actual: usize, expected: usize) -> BrineResult<()> {
    if actual != expected {
        return Err(BrineError::BadLength {
            name,
            actual,
            expected,
        });
    }
    Ok(())
}

/// Fails unless `actual` lies in `[lower, upper]` inclusive.
pub fn len_range(
    name: &'static str,
    actual: usize,
    lower: usize,
    upper: usize,
) -> BrineResult<()> {
    if actual < lower || actual > upper {
        return Err(BrineError::LengthRange {
            name,
            actual,
            lower,
            upper,
        });
    }
    Ok(())
}

/// Fails unless `actual` is at least `lower` (unbounded above).
pub fn min_len(name: &'static str, actual: usize, lower: usize) -> BrineResult<()> {
    len_range(name, actual, lower, usize::MAX)
}

/// Fails if `value` is negative.
///
/// Lengths and limits arriving from foreign hosts travel as signed integers;
/// this is the first check applied before they are narrowed to `usize`.
pub fn non_negative(name: &'static str, value: i64) -> BrineResult<()> {
    if value < 0 {
        return Err(BrineError::Negative { name, value });
    }
    Ok(())
}

/// Fails unless the `[offset, offset + len)` window fits inside a buffer of
/// `total` bytes. The addition is overflow-checked.
pub fn offset_window(total: usize, offset: usize, len: usize) -> BrineResult<()> {
    let end = offset
        .checked_add(len)
        .ok_or(BrineError::OffsetWindow { total, offset, len })?;
    if end > total {
        return Err(BrineError::OffsetWindow { total, offset, len });
    }
    Ok(())
}

/// Fails unless `value` is a positive power of two.
///
/// Memory-hardness parameters for scrypt-style password hashing must be
/// powers of two; anything else silently degrades the work factor.
pub fn power_of_two(name: &'static str, value: u64) -> BrineResult<()> {
    if value == 0 || value & value.wrapping_neg() != value {
        return Err(BrineError::NotPowerOfTwo { name, value });
    }
    Ok(())
}

/// Fails with [`BrineError::ReadOnly`] if `view` cannot be written to.
pub fn writable(view: &BufView<'_>) -> BrineResult<()> {
    if !view.is_writable() {
        return Err(BrineError::ReadOnly);
    }
    Ok(())
}

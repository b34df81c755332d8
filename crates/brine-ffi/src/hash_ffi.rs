// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::ffi::c_void;
use std::slice;

use brine_core::multipart::Multipart;
use brine_core::registry;
use brine_core::view::BufView;
use brine_core::BrineError;

use crate::{result_to_int, verify_to_int};

struct StreamHandle {
    stream: Multipart,
}

/// Hashes `input` with BLAKE2b into `out`; `out_length` selects the digest
/// size. Pass a null `key` with `key_length` 0 for unkeyed hashing.
///
/// # Safety
///
/// All non-null pointers must be valid for their stated lengths for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn brine_generichash(
    out: *mut u8,
    out_length: usize,
    input: *const u8,
    input_length: usize,
    key: *const u8,
    key_length: usize,
) -> i32 {
    if out.is_null() || input.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let gh = match registry::generic_hash() {
        Ok(gh) => gh,
        Err(e) => return e.to_c_int(),
    };
    let out = slice::from_raw_parts_mut(out, out_length);
    let input = slice::from_raw_parts(input, input_length);
    let key = if key.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(key, key_length))
    };
    result_to_int(gh.hash(out, input, key))
}

/// Starts a BLAKE2b streaming session and writes its handle to `handle`.
///
/// # Safety
///
/// `handle` must be a valid pointer; the returned handle must be released
/// with [`brine_generichash_destroy`] exactly once.
#[no_mangle]
pub unsafe extern "C" fn brine_generichash_init(
    handle: *mut *mut c_void,
    out_length: usize,
    key: *const u8,
    key_length: usize,
) -> i32 {
    if handle.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let gh = match registry::generic_hash() {
        Ok(gh) => gh,
        Err(e) => return e.to_c_int(),
    };
    let key = if key.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(key, key_length))
    };
    match gh.stream(key, out_length) {
        Ok(stream) => {
            let boxed = Box::new(StreamHandle { stream });
            *handle = Box::into_raw(boxed) as *mut c_void;
            0
        }
        Err(e) => e.to_c_int(),
    }
}

/// Feeds the `[offset, offset + length)` window of `input` into the session.
///
/// The window is validated against `input_length` before any byte is read,
/// so managed hosts can pass (array, offset, length) triples directly.
///
/// # Safety
///
/// `handle` must come from [`brine_generichash_init`] and not yet be
/// destroyed; `input` must be valid for `input_length` bytes.
#[no_mangle]
pub unsafe extern "C" fn brine_generichash_update(
    handle: *mut c_void,
    input: *const u8,
    input_length: usize,
    offset: usize,
    length: usize,
) -> i32 {
    if handle.is_null() || input.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let stream = &mut (*(handle as *mut StreamHandle)).stream;
    let input = slice::from_raw_parts(input, input_length);
    let mut window = match BufView::window(input, offset, length) {
        Ok(window) => window,
        Err(e) => return e.to_c_int(),
    };
    result_to_int(stream.update_view(&mut window))
}

/// Finalizes the session into `out`, which must hold at least the output
/// length declared at init. The session stays allocated until destroyed but
/// accepts no further calls.
///
/// # Safety
///
/// `handle` must come from [`brine_generichash_init`] and not yet be
/// destroyed; `out` must be valid for `out_length` bytes.
#[no_mangle]
pub unsafe extern "C" fn brine_generichash_final(
    handle: *mut c_void,
    out: *mut u8,
    out_length: usize,
) -> i32 {
    if handle.is_null() || out.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let stream = &mut (*(handle as *mut StreamHandle)).stream;
    let out = slice::from_raw_parts_mut(out, out_length);
    result_to_int(stream.finalize_into(out))
}

/// Finalizes the session and compares the result against `expected` in
/// constant time. Returns `0` on match, `1` on mismatch.
///
/// # Safety
///
/// `handle` must come from [`brine_generichash_init`] and not yet be
/// destroyed; `expected` must be valid for `expected_length` bytes.
#[no_mangle]
pub unsafe extern "C" fn brine_generichash_final_verify(
    handle: *mut c_void,
    expected: *const u8,
    expected_length: usize,
) -> i32 {
    if handle.is_null() || expected.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let stream = &mut (*(handle as *mut StreamHandle)).stream;
    let expected = slice::from_raw_parts(expected, expected_length);
    verify_to_int(stream.verify_finalize(expected))
}

/// Releases a streaming session handle.
///
/// # Safety
///
/// `handle` must come from [`brine_generichash_init`] and must not be used
/// after this call.
#[no_mangle]
pub unsafe extern "C" fn brine_generichash_destroy(handle: *mut c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut StreamHandle));
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::os::raw::{c_char, c_longlong};
use std::slice;

use brine_core::{check, registry, BrineError};

use crate::{result_to_int, verify_to_int};

/// Initializes libsodium. Idempotent and thread-safe; must be called before
/// any other function in this library.
#[no_mangle]
pub extern "C" fn brine_init() -> i32 {
    result_to_int(brine_core::init::ensure_init())
}

/// Encrypts `message` in combined mode with XSalsa20-Poly1305.
///
/// `ciphertext_out` must hold `message_length + crypto_secretbox_MACBYTES`
/// bytes.
///
/// # Safety
///
/// All pointers must be valid for their stated lengths for the duration of
/// the call, or null (which is rejected with an error code).
#[no_mangle]
pub unsafe extern "C" fn brine_secretbox_seal(
    ciphertext_out: *mut u8,
    ciphertext_length: usize,
    message: *const u8,
    message_length: usize,
    nonce: *const u8,
    nonce_length: usize,
    key: *const u8,
    key_length: usize,
) -> i32 {
    if ciphertext_out.is_null() || message.is_null() || nonce.is_null() || key.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let sbox = match registry::secret_box() {
        Ok(sbox) => sbox,
        Err(e) => return e.to_c_int(),
    };
    let ciphertext = slice::from_raw_parts_mut(ciphertext_out, ciphertext_length);
    let message = slice::from_raw_parts(message, message_length);
    let nonce = slice::from_raw_parts(nonce, nonce_length);
    let key = slice::from_raw_parts(key, key_length);
    result_to_int(sbox.seal(ciphertext, message, nonce, key))
}

/// Decrypts combined-mode `ciphertext`.
///
/// Returns `0` on success, `1` if the tag did not verify, or a negative
/// error code for a malformed call.
///
/// # Safety
///
/// All pointers must be valid for their stated lengths for the duration of
/// the call, or null (which is rejected with an error code).
#[no_mangle]
pub unsafe extern "C" fn brine_secretbox_open(
    message_out: *mut u8,
    message_length: usize,
    ciphertext: *const u8,
    ciphertext_length: usize,
    nonce: *const u8,
    nonce_length: usize,
    key: *const u8,
    key_length: usize,
) -> i32 {
    if message_out.is_null() || ciphertext.is_null() || nonce.is_null() || key.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let sbox = match registry::secret_box() {
        Ok(sbox) => sbox,
        Err(e) => return e.to_c_int(),
    };
    let message = slice::from_raw_parts_mut(message_out, message_length);
    let ciphertext = slice::from_raw_parts(ciphertext, ciphertext_length);
    let nonce = slice::from_raw_parts(nonce, nonce_length);
    let key = slice::from_raw_parts(key, key_length);
    verify_to_int(sbox.open(message, ciphertext, nonce, key))
}

/// Hashes `password` into a NUL-terminated storable string with Argon2id.
///
/// `out` must hold at least `crypto_pwhash_STRBYTES` bytes. The limits
/// arrive as signed integers because managed hosts have no unsigned 64-bit
/// type; negative values are rejected.
///
/// # Safety
///
/// All pointers must be valid for their stated lengths for the duration of
/// the call, or null (which is rejected with an error code).
#[no_mangle]
pub unsafe extern "C" fn brine_pwhash_str(
    out: *mut c_char,
    out_length: usize,
    password: *const u8,
    password_length: usize,
    opslimit: c_longlong,
    memlimit: c_longlong,
) -> i32 {
    if out.is_null() || password.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    if let Err(e) = check::non_negative("pwhash opslimit", opslimit) {
        return e.to_c_int();
    }
    if let Err(e) = check::non_negative("pwhash memlimit", memlimit) {
        return e.to_c_int();
    }
    let pwhash = match registry::pw_hash() {
        Ok(pwhash) => pwhash,
        Err(e) => return e.to_c_int(),
    };
    if let Err(e) = check::min_len("pwhash string buffer", out_length, pwhash.str_len()) {
        return e.to_c_int();
    }
    let password = slice::from_raw_parts(password, password_length);
    match pwhash.hash_str(password, opslimit as u64, memlimit as usize) {
        Ok(encoded) => {
            let out = slice::from_raw_parts_mut(out as *mut u8, out_length);
            out[..encoded.len()].copy_from_slice(encoded.as_bytes());
            out[encoded.len()..].fill(0);
            0
        }
        Err(e) => e.to_c_int(),
    }
}

/// Verifies `password` against a NUL-terminated stored hash string.
///
/// Returns `0` on success, `1` for a wrong password or unparseable string,
/// or a negative error code for a malformed call.
///
/// # Safety
///
/// `stored` must point to a NUL-terminated string; all pointers must be
/// valid for the duration of the call, or null (which is rejected).
#[no_mangle]
pub unsafe extern "C" fn brine_pwhash_str_verify(
    stored: *const c_char,
    password: *const u8,
    password_length: usize,
) -> i32 {
    if stored.is_null() || password.is_null() {
        return BrineError::NullPointer.to_c_int();
    }
    let pwhash = match registry::pw_hash() {
        Ok(pwhash) => pwhash,
        Err(e) => return e.to_c_int(),
    };
    let stored = match std::ffi::CStr::from_ptr(stored).to_str() {
        Ok(s) => s,
        Err(_) => {
            return BrineError::Malformed {
                what: "password hash string",
            }
            .to_c_int()
        }
    };
    let password = slice::from_raw_parts(password, password_length);
    verify_to_int(pwhash.verify_str(stored, password))
}

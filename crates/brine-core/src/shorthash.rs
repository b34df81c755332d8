// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::os::raw::c_ulonglong;

use crate::check;
use crate::init;
use crate::types::{BrineError, BrineResult, SecureBytes};

/// SipHash-2-4 short-input keyed hash, for hash tables and fingerprints.
/// Not a general-purpose MAC.
pub struct ShortHash {
    out_len: usize,
    key_len: usize,
}

impl ShortHash {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                out_len: libsodium_sys::crypto_shorthash_bytes(),
                key_len: libsodium_sys::crypto_shorthash_keybytes(),
            })
        }
    }

    /// Output length in bytes.
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Generates a fresh random key.
    pub fn keygen(&self) -> SecureBytes {
        let mut key = SecureBytes::new(self.key_len);
        // SAFETY: Pointer and length come from a valid mutable buffer.
        unsafe {
            libsodium_sys::randombytes_buf(key.data_mut().as_mut_ptr() as *mut _, self.key_len);
        }
        key
    }

    /// Hashes `input` into `out`, which must be exactly `out_len()` bytes.
    pub fn hash(&self, out: &mut [u8], input: &[u8], key: &[u8]) -> BrineResult<()> {
        check::exact_len("shorthash output", out.len(), self.out_len)?;
        check::exact_len("shorthash key", key.len(), self.key_len)?;
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_shorthash(
                out.as_mut_ptr(),
                input.as_ptr(),
                input.len() as c_ulonglong,
                key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_shorthash",
                });
            }
        }
        Ok(())
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use crate::check;
use crate::init;
use crate::types::{BrineError, BrineResult, SecureBytes};

/// BLAKE2b-based key derivation: many subkeys from one master key and an
/// 8-byte context label.
pub struct Kdf {
    key_len: usize,
    context_len: usize,
    sub_min: usize,
    sub_max: usize,
}

impl Kdf {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                key_len: libsodium_sys::crypto_kdf_keybytes(),
                context_len: libsodium_sys::crypto_kdf_contextbytes(),
                sub_min: libsodium_sys::crypto_kdf_bytes_min(),
                sub_max: libsodium_sys::crypto_kdf_bytes_max(),
            })
        }
    }

    /// Master key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Context label length in bytes.
    pub fn context_len(&self) -> usize {
        self.context_len
    }

    /// Minimum subkey length in bytes.
    pub fn subkey_min(&self) -> usize {
        self.sub_min
    }

    /// Maximum subkey length in bytes.
    pub fn subkey_max(&self) -> usize {
        self.sub_max
    }

    /// Generates a fresh random master key.
    pub fn keygen(&self) -> SecureBytes {
        let mut key = SecureBytes::new(self.key_len);
        // SAFETY: Pointer and length come from a valid mutable buffer.
        unsafe {
            libsodium_sys::randombytes_buf(key.data_mut().as_mut_ptr() as *mut _, self.key_len);
        }
        key
    }

    /// Derives subkey number `subkey_id` for `context` into `subkey`.
    ///
    /// Distinct `(subkey_id, context)` pairs yield independent subkeys; the
    /// master key cannot be recovered from any of them.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if `subkey` is outside
    /// `[subkey_min(), subkey_max()]` or `context`/`key` have the wrong
    /// length, or [`BrineError::Native`] if the native call fails.
    pub fn derive_from_key(
        &self,
        subkey: &mut [u8],
        subkey_id: u64,
        context: &[u8],
        key: &[u8],
    ) -> BrineResult<()> {
        check::len_range("kdf subkey", subkey.len(), self.sub_min, self.sub_max)?;
        check::exact_len("kdf context", context.len(), self.context_len)?;
        check::exact_len("kdf key", key.len(), self.key_len)?;
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_kdf_derive_from_key(
                subkey.as_mut_ptr(),
                subkey.len(),
                subkey_id,
                context.as_ptr() as *const _,
                key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_kdf_derive_from_key",
                });
            }
        }
        Ok(())
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::os::raw::c_ulonglong;
use std::ptr;

use crate::check;
use crate::init;
use crate::multipart::{Multipart, MultipartSpec};
use crate::state::StateBlob;
use crate::types::{BrineError, BrineResult, SecureBytes};

/// BLAKE2b generic hashing with an optional key and a caller-chosen output
/// length inside the native bounds.
pub struct GenericHash {
    out_len: usize,
    out_min: usize,
    out_max: usize,
    key_len: usize,
    key_min: usize,
    key_max: usize,
    state_len: usize,
}

impl GenericHash {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                out_len: libsodium_sys::crypto_generichash_bytes(),
                out_min: libsodium_sys::crypto_generichash_bytes_min(),
                out_max: libsodium_sys::crypto_generichash_bytes_max(),
                key_len: libsodium_sys::crypto_generichash_keybytes(),
                key_min: libsodium_sys::crypto_generichash_keybytes_min(),
                key_max: libsodium_sys::crypto_generichash_keybytes_max(),
                state_len: libsodium_sys::crypto_generichash_statebytes(),
            })
        }
    }

    /// Recommended output length in bytes.
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Minimum accepted output length in bytes.
    pub fn out_min(&self) -> usize {
        self.out_min
    }

    /// Maximum accepted output length in bytes.
    pub fn out_max(&self) -> usize {
        self.out_max
    }

    /// Recommended key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Generates a fresh random key of the recommended length.
    pub fn keygen(&self) -> SecureBytes {
        let mut key = SecureBytes::new(self.key_len);
        // SAFETY: Pointer and length come from a valid mutable buffer.
        unsafe {
            libsodium_sys::randombytes_buf(key.data_mut().as_mut_ptr() as *mut _, self.key_len);
        }
        key
    }

    fn check_key(&self, key: Option<&[u8]>) -> BrineResult<()> {
        if let Some(key) = key {
            check::len_range("generichash key", key.len(), self.key_min, self.key_max)?;
        }
        Ok(())
    }

    /// Hashes `input` into `out`, whose length selects the digest size and
    /// must lie in `[out_min(), out_max()]`.
    pub fn hash(&self, out: &mut [u8], input: &[u8], key: Option<&[u8]>) -> BrineResult<()> {
        check::len_range("generichash output", out.len(), self.out_min, self.out_max)?;
        self.check_key(key)?;
        let (key_ptr, key_len) = match key {
            Some(key) => (key.as_ptr(), key.len()),
            None => (ptr::null(), 0),
        };
        // SAFETY: Output and key lengths verified above; a null key pointer
        // with zero length selects unkeyed hashing. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_generichash(
                out.as_mut_ptr(),
                out.len(),
                input.as_ptr(),
                input.len() as c_ulonglong,
                key_ptr,
                key_len,
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_generichash",
                });
            }
        }
        Ok(())
    }

    /// Starts an incremental hash session producing `out_len` bytes,
    /// optionally keyed. The session supports checkpoint duplication.
    pub fn stream(&self, key: Option<&[u8]>, out_len: usize) -> BrineResult<Multipart> {
        check::len_range("generichash output", out_len, self.out_min, self.out_max)?;
        self.check_key(key)?;
        Multipart::new(Box::new(GenericHashStream {
            state_len: self.state_len,
            out_len,
            key: key.map(SecureBytes::from_slice),
        }))
    }
}

struct GenericHashStream {
    state_len: usize,
    out_len: usize,
    key: Option<SecureBytes>,
}

impl MultipartSpec for GenericHashStream {
    fn name(&self) -> &'static str {
        "BLAKE2b"
    }

    fn state_len(&self) -> usize {
        self.state_len
    }

    fn output_len(&self) -> usize {
        self.out_len
    }

    fn init(&self, state: &mut StateBlob) -> BrineResult<()> {
        let (key_ptr, key_len) = match &self.key {
            Some(key) => (key.data().as_ptr(), key.len()),
            None => (ptr::null(), 0),
        };
        // SAFETY: The state region was allocated at crypto_generichash_statebytes
        // with the alignment the native state requires.
        unsafe {
            if libsodium_sys::crypto_generichash_init(
                state.as_mut_ptr() as *mut _,
                key_ptr,
                key_len,
                self.out_len,
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_generichash_init",
                });
            }
        }
        Ok(())
    }

    fn update(&self, state: &mut StateBlob, input: &[u8]) -> BrineResult<()> {
        // SAFETY: The state was initialized by init.
        unsafe {
            if libsodium_sys::crypto_generichash_update(
                state.as_mut_ptr() as *mut _,
                input.as_ptr(),
                input.len() as c_ulonglong,
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_generichash_update",
                });
            }
        }
        Ok(())
    }

    fn finalize(&self, state: &mut StateBlob, out: &mut [u8]) -> BrineResult<()> {
        // SAFETY: The state was initialized; out is exactly the session's
        // declared output length.
        unsafe {
            if libsodium_sys::crypto_generichash_final(
                state.as_mut_ptr() as *mut _,
                out.as_mut_ptr(),
                out.len(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_generichash_final",
                });
            }
        }
        Ok(())
    }

    fn duplicate_spec(&self) -> Box<dyn MultipartSpec> {
        Box::new(Self {
            state_len: self.state_len,
            out_len: self.out_len,
            key: self.key.clone(),
        })
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Secret-key message authentication (HMAC-SHA-2 family).
//!
//! Verification recomputes the tag and compares with the constant-time
//! comparator rather than delegating to a native boolean-verify entry point,
//! so the timing behavior of every verification path in this layer is the
//! same known quantity.

use std::os::raw::{c_int, c_ulonglong};

use crate::check;
use crate::init;
use crate::mem;
use crate::multipart::{Multipart, MultipartSpec};
use crate::state::StateBlob;
use crate::types::{BrineError, BrineResult, SecureBytes};

type OneShotFn = unsafe extern "C" fn(*mut u8, *const u8, c_ulonglong, *const u8) -> c_int;

type StreamInitFn = fn(&mut StateBlob, &[u8]) -> c_int;
type StreamUpdateFn = fn(&mut StateBlob, &[u8]) -> c_int;
type StreamFinalFn = fn(&mut StateBlob, &mut [u8]) -> c_int;

fn hmacsha256_init(state: &mut StateBlob, key: &[u8]) -> c_int {
    // SAFETY: The state region was allocated at crypto_auth_hmacsha256_statebytes.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha256_init(
            state.as_mut_ptr() as *mut _,
            key.as_ptr(),
            key.len(),
        )
    }
}

fn hmacsha256_update(state: &mut StateBlob, input: &[u8]) -> c_int {
    // SAFETY: The state was initialized by the matching init wrapper.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha256_update(
            state.as_mut_ptr() as *mut _,
            input.as_ptr(),
            input.len() as c_ulonglong,
        )
    }
}

fn hmacsha256_final(state: &mut StateBlob, out: &mut [u8]) -> c_int {
    // SAFETY: The state was initialized; out is exactly the tag length.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha256_final(state.as_mut_ptr() as *mut _, out.as_mut_ptr())
    }
}

fn hmacsha512_init(state: &mut StateBlob, key: &[u8]) -> c_int {
    // SAFETY: The state region was allocated at crypto_auth_hmacsha512_statebytes.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha512_init(
            state.as_mut_ptr() as *mut _,
            key.as_ptr(),
            key.len(),
        )
    }
}

fn hmacsha512_update(state: &mut StateBlob, input: &[u8]) -> c_int {
    // SAFETY: The state was initialized by the matching init wrapper.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha512_update(
            state.as_mut_ptr() as *mut _,
            input.as_ptr(),
            input.len() as c_ulonglong,
        )
    }
}

fn hmacsha512_final(state: &mut StateBlob, out: &mut [u8]) -> c_int {
    // SAFETY: The state was initialized; out is exactly the tag length.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha512_final(state.as_mut_ptr() as *mut _, out.as_mut_ptr())
    }
}

fn hmacsha512256_init(state: &mut StateBlob, key: &[u8]) -> c_int {
    // SAFETY: The state region was allocated at crypto_auth_hmacsha512256_statebytes.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha512256_init(
            state.as_mut_ptr() as *mut _,
            key.as_ptr(),
            key.len(),
        )
    }
}

fn hmacsha512256_update(state: &mut StateBlob, input: &[u8]) -> c_int {
    // SAFETY: The state was initialized by the matching init wrapper.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha512256_update(
            state.as_mut_ptr() as *mut _,
            input.as_ptr(),
            input.len() as c_ulonglong,
        )
    }
}

fn hmacsha512256_final(state: &mut StateBlob, out: &mut [u8]) -> c_int {
    // SAFETY: The state was initialized; out is exactly the tag length.
    unsafe {
        libsodium_sys::crypto_auth_hmacsha512256_final(
            state.as_mut_ptr() as *mut _,
            out.as_mut_ptr(),
        )
    }
}

/// Selects one of the interchangeable HMAC variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthVariant {
    /// HMAC-SHA-512-256, libsodium's `crypto_auth` default.
    HmacSha512256,
    /// HMAC-SHA-256.
    HmacSha256,
    /// HMAC-SHA-512.
    HmacSha512,
}

/// One concrete MAC algorithm: sizes and entry points bound at construction,
/// stateless and safe for concurrent reuse.
pub struct HmacAuth {
    name: &'static str,
    key_len: usize,
    tag_len: usize,
    state_len: usize,
    one_shot: OneShotFn,
    stream_init: StreamInitFn,
    stream_update: StreamUpdateFn,
    stream_final: StreamFinalFn,
}

impl HmacAuth {
    pub(crate) fn hmacsha512256() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "HMAC-SHA-512-256",
                key_len: libsodium_sys::crypto_auth_hmacsha512256_keybytes(),
                tag_len: libsodium_sys::crypto_auth_hmacsha512256_bytes(),
                state_len: libsodium_sys::crypto_auth_hmacsha512256_statebytes(),
                one_shot: libsodium_sys::crypto_auth_hmacsha512256,
                stream_init: hmacsha512256_init,
                stream_update: hmacsha512256_update,
                stream_final: hmacsha512256_final,
            })
        }
    }

    pub(crate) fn hmacsha256() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "HMAC-SHA-256",
                key_len: libsodium_sys::crypto_auth_hmacsha256_keybytes(),
                tag_len: libsodium_sys::crypto_auth_hmacsha256_bytes(),
                state_len: libsodium_sys::crypto_auth_hmacsha256_statebytes(),
                one_shot: libsodium_sys::crypto_auth_hmacsha256,
                stream_init: hmacsha256_init,
                stream_update: hmacsha256_update,
                stream_final: hmacsha256_final,
            })
        }
    }

    pub(crate) fn hmacsha512() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "HMAC-SHA-512",
                key_len: libsodium_sys::crypto_auth_hmacsha512_keybytes(),
                tag_len: libsodium_sys::crypto_auth_hmacsha512_bytes(),
                state_len: libsodium_sys::crypto_auth_hmacsha512_statebytes(),
                one_shot: libsodium_sys::crypto_auth_hmacsha512,
                stream_init: hmacsha512_init,
                stream_update: hmacsha512_update,
                stream_final: hmacsha512_final,
            })
        }
    }

    /// Algorithm name used in error reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Secret key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Authentication tag length in bytes.
    pub fn tag_len(&self) -> usize {
        self.tag_len
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

    /// Computes the tag over `message` into `tag`, which must be exactly
    /// `tag_len()` bytes.
    pub fn mac(&self, tag: &mut [u8], message: &[u8], key: &[u8]) -> BrineResult<()> {
        check::exact_len("auth key", key.len(), self.key_len)?;
        check::exact_len("auth tag", tag.len(), self.tag_len)?;
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if (self.one_shot)(
                tag.as_mut_ptr(),
                message.as_ptr(),
                message.len() as c_ulonglong,
                key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native { op: self.name });
            }
        }
        Ok(())
    }

    /// Recomputes the tag and compares it against `tag` in constant time.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` is reserved for precondition
    /// violations and native failures.
    pub fn verify(&self, tag: &[u8], message: &[u8], key: &[u8]) -> BrineResult<bool> {
        check::exact_len("auth tag", tag.len(), self.tag_len)?;
        let mut computed = SecureBytes::new(self.tag_len);
        self.mac(computed.data_mut(), message, key)?;
        Ok(mem::constant_time_eq(computed.data(), tag))
    }

    /// Starts an incremental MAC session over a copy of `key`.
    pub fn stream(&self, key: &[u8]) -> BrineResult<Multipart> {
        check::exact_len("auth key", key.len(), self.key_len)?;
        Multipart::new(Box::new(HmacStream {
            name: self.name,
            state_len: self.state_len,
            tag_len: self.tag_len,
            key: SecureBytes::from_slice(key),
            init: self.stream_init,
            update: self.stream_update,
            finalize: self.stream_final,
        }))
    }
}

struct HmacStream {
    name: &'static str,
    state_len: usize,
    tag_len: usize,
    key: SecureBytes,
    init: StreamInitFn,
    update: StreamUpdateFn,
    finalize: StreamFinalFn,
}

impl MultipartSpec for HmacStream {
    fn name(&self) -> &'static str {
        self.name
    }

    fn state_len(&self) -> usize {
        self.state_len
    }

    fn output_len(&self) -> usize {
        self.tag_len
    }

    fn init(&self, state: &mut StateBlob) -> BrineResult<()> {
        if (self.init)(state, self.key.data()) != 0 {
            return Err(BrineError::Native { op: self.name });
        }
        Ok(())
    }

    fn update(&self, state: &mut StateBlob, input: &[u8]) -> BrineResult<()> {
        if (self.update)(state, input) != 0 {
            return Err(BrineError::Native { op: self.name });
        }
        Ok(())
    }

    fn finalize(&self, state: &mut StateBlob, out: &mut [u8]) -> BrineResult<()> {
        if (self.finalize)(state, out) != 0 {
            return Err(BrineError::Native { op: self.name });
        }
        Ok(())
    }

    fn duplicate_spec(&self) -> Box<dyn MultipartSpec> {
        Box::new(Self {
            name: self.name,
            state_len: self.state_len,
            tag_len: self.tag_len,
            key: self.key.clone(),
            init: self.init,
            update: self.update,
            finalize: self.finalize,
        })
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::os::raw::{c_int, c_ulonglong};

use crate::check;
use crate::init;
use crate::multipart::{Multipart, MultipartSpec};
use crate::state::StateBlob;
use crate::types::{BrineError, BrineResult};

type OneShotFn = unsafe extern "C" fn(*mut u8, *const u8, c_ulonglong) -> c_int;

type StreamInitFn = fn(&mut StateBlob) -> c_int;
type StreamUpdateFn = fn(&mut StateBlob, &[u8]) -> c_int;
type StreamFinalFn = fn(&mut StateBlob, &mut [u8]) -> c_int;

fn sha256_init(state: &mut StateBlob) -> c_int {
    // SAFETY: The state region was allocated at crypto_hash_sha256_statebytes.
    unsafe { libsodium_sys::crypto_hash_sha256_init(state.as_mut_ptr() as *mut _) }
}

fn sha256_update(state: &mut StateBlob, input: &[u8]) -> c_int {
    // SAFETY: The state was initialized by the matching init wrapper.
    unsafe {
        libsodium_sys::crypto_hash_sha256_update(
            state.as_mut_ptr() as *mut _,
            input.as_ptr(),
            input.len() as c_ulonglong,
        )
    }
}

fn sha256_final(state: &mut StateBlob, out: &mut [u8]) -> c_int {
    // SAFETY: The state was initialized; out is exactly the digest length.
    unsafe {
        libsodium_sys::crypto_hash_sha256_final(state.as_mut_ptr() as *mut _, out.as_mut_ptr())
    }
}

fn sha512_init(state: &mut StateBlob) -> c_int {
    // SAFETY: The state region was allocated at crypto_hash_sha512_statebytes.
    unsafe { libsodium_sys::crypto_hash_sha512_init(state.as_mut_ptr() as *mut _) }
}

fn sha512_update(state: &mut StateBlob, input: &[u8]) -> c_int {
    // SAFETY: The state was initialized by the matching init wrapper.
    unsafe {
        libsodium_sys::crypto_hash_sha512_update(
            state.as_mut_ptr() as *mut _,
            input.as_ptr(),
            input.len() as c_ulonglong,
        )
    }
}

fn sha512_final(state: &mut StateBlob, out: &mut [u8]) -> c_int {
    // SAFETY: The state was initialized; out is exactly the digest length.
    unsafe {
        libsodium_sys::crypto_hash_sha512_final(state.as_mut_ptr() as *mut _, out.as_mut_ptr())
    }
}

/// Selects one of the interchangeable unkeyed hash variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    /// SHA-512, libsodium's `crypto_hash` default.
    Sha512,
    /// SHA-256.
    Sha256,
}

/// One concrete unkeyed hash function.
pub struct ShaHash {
    name: &'static str,
    out_len: usize,
    state_len: usize,
    one_shot: OneShotFn,
    stream_init: StreamInitFn,
    stream_update: StreamUpdateFn,
    stream_final: StreamFinalFn,
}

impl ShaHash {
    pub(crate) fn sha512() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "SHA-512",
                out_len: libsodium_sys::crypto_hash_sha512_bytes(),
                state_len: libsodium_sys::crypto_hash_sha512_statebytes(),
                one_shot: libsodium_sys::crypto_hash_sha512,
                stream_init: sha512_init,
                stream_update: sha512_update,
                stream_final: sha512_final,
            })
        }
    }

    pub(crate) fn sha256() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "SHA-256",
                out_len: libsodium_sys::crypto_hash_sha256_bytes(),
                state_len: libsodium_sys::crypto_hash_sha256_statebytes(),
                one_shot: libsodium_sys::crypto_hash_sha256,
                stream_init: sha256_init,
                stream_update: sha256_update,
                stream_final: sha256_final,
            })
        }
    }

    /// Hash name used in error reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Digest length in bytes.
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Computes the digest of `input` into `out`, which must be exactly
    /// `out_len()` bytes.
    pub fn digest(&self, out: &mut [u8], input: &[u8]) -> BrineResult<()> {
        check::exact_len("hash output", out.len(), self.out_len)?;
        // SAFETY: Output length verified above. The return code is checked.
        unsafe {
            if (self.one_shot)(out.as_mut_ptr(), input.as_ptr(), input.len() as c_ulonglong) != 0 {
                return Err(BrineError::Native { op: self.name });
            }
        }
        Ok(())
    }

    /// Starts an incremental hash session.
    pub fn stream(&self) -> BrineResult<Multipart> {
        Multipart::new(Box::new(ShaStream {
            name: self.name,
            state_len: self.state_len,
            out_len: self.out_len,
            init: self.stream_init,
            update: self.stream_update,
            finalize: self.stream_final,
        }))
    }
}

struct ShaStream {
    name: &'static str,
    state_len: usize,
    out_len: usize,
    init: StreamInitFn,
    update: StreamUpdateFn,
    finalize: StreamFinalFn,
}

impl MultipartSpec for ShaStream {
    fn name(&self) -> &'static str {
        self.name
    }

    fn state_len(&self) -> usize {
        self.state_len
    }

    fn output_len(&self) -> usize {
        self.out_len
    }

    fn init(&self, state: &mut StateBlob) -> BrineResult<()> {
        if (self.init)(state) != 0 {
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
            out_len: self.out_len,
            init: self.init,
            update: self.update,
            finalize: self.finalize,
        })
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::os::raw::c_int;
use std::ptr;

use crate::init;
use crate::types::{BrineError, BrineResult};

/// Variant identifiers for sodium_bin2base64 / sodium_base642bin.
const VARIANT_ORIGINAL: c_int = 1;
const VARIANT_ORIGINAL_NO_PADDING: c_int = 3;
const VARIANT_URLSAFE: c_int = 5;
const VARIANT_URLSAFE_NO_PADDING: c_int = 7;

/// Selects a Base64 alphabet and padding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Variant {
    /// Standard alphabet with `=` padding.
    Original,
    /// Standard alphabet, unpadded.
    OriginalNoPadding,
    /// URL-safe alphabet with `=` padding.
    UrlSafe,
    /// URL-safe alphabet, unpadded.
    UrlSafeNoPadding,
}

impl Base64Variant {
    fn to_native(self) -> c_int {
        match self {
            Base64Variant::Original => VARIANT_ORIGINAL,
            Base64Variant::OriginalNoPadding => VARIANT_ORIGINAL_NO_PADDING,
            Base64Variant::UrlSafe => VARIANT_URLSAFE,
            Base64Variant::UrlSafeNoPadding => VARIANT_URLSAFE_NO_PADDING,
        }
    }
}

/// Hex and Base64 encoding via libsodium's constant-time codecs.
///
/// The native codecs run without secret-dependent lookups, so encoding or
/// decoding key material does not leak its contents through cache timing
/// the way a table-driven codec can.
pub struct Codec;

impl Codec {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        Ok(Self)
    }

    /// Encodes `bin` as lowercase hex.
    pub fn hex_encode(&self, bin: &[u8]) -> BrineResult<String> {
        let out_len = bin
            .len()
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or(BrineError::Malformed {
                what: "hex encode length",
            })?;
        let mut out = vec![0u8; out_len];
        // SAFETY: out holds 2 * bin.len() + 1 bytes, the documented
        // requirement including the trailing NUL.
        unsafe {
            libsodium_sys::sodium_bin2hex(
                out.as_mut_ptr() as *mut _,
                out.len(),
                bin.as_ptr(),
                bin.len(),
            );
        }
        out.truncate(out_len - 1);
        String::from_utf8(out).map_err(|_| BrineError::Malformed { what: "hex output" })
    }

    /// Decodes a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Malformed`] for odd length or non-hex characters.
    pub fn hex_decode(&self, hex: &str) -> BrineResult<Vec<u8>> {
        let mut bin = vec![0u8; hex.len() / 2 + 1];
        let mut bin_len: usize = 0;
        // SAFETY: bin holds enough bytes for any full decode of hex; the end
        // pointer is null so trailing garbage makes the call fail instead of
        // being silently accepted.
        unsafe {
            if libsodium_sys::sodium_hex2bin(
                bin.as_mut_ptr(),
                bin.len(),
                hex.as_ptr() as *const _,
                hex.len(),
                ptr::null(),
                &mut bin_len,
                ptr::null_mut(),
            ) != 0
            {
                return Err(BrineError::Malformed { what: "hex string" });
            }
        }
        bin.truncate(bin_len);
        Ok(bin)
    }

    /// Encodes `bin` as Base64 in the given variant.
    pub fn base64_encode(&self, bin: &[u8], variant: Base64Variant) -> BrineResult<String> {
        // SAFETY: The length query has no preconditions.
        let out_len =
            unsafe { libsodium_sys::sodium_base64_encoded_len(bin.len(), variant.to_native()) };
        let mut out = vec![0u8; out_len];
        // SAFETY: out was sized by sodium_base64_encoded_len for this
        // variant, NUL included.
        unsafe {
            libsodium_sys::sodium_bin2base64(
                out.as_mut_ptr() as *mut _,
                out.len(),
                bin.as_ptr(),
                bin.len(),
                variant.to_native(),
            );
        }
        let end = out.iter().position(|&b| b == 0).unwrap_or(out.len());
        out.truncate(end);
        String::from_utf8(out).map_err(|_| BrineError::Malformed {
            what: "base64 output",
        })
    }

    /// Decodes a Base64 string in the given variant.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Malformed`] for characters outside the variant's
    /// alphabet or bad padding.
    pub fn base64_decode(&self, b64: &str, variant: Base64Variant) -> BrineResult<Vec<u8>> {
        let mut bin = vec![0u8; b64.len() / 4 * 3 + 3];
        let mut bin_len: usize = 0;
        // SAFETY: bin holds enough bytes for any full decode of b64; the end
        // pointer is null so trailing garbage makes the call fail.
        unsafe {
            if libsodium_sys::sodium_base642bin(
                bin.as_mut_ptr(),
                bin.len(),
                b64.as_ptr() as *const _,
                b64.len(),
                ptr::null(),
                &mut bin_len,
                ptr::null_mut(),
                variant.to_native(),
            ) != 0
            {
                return Err(BrineError::Malformed {
                    what: "base64 string",
                });
            }
        }
        bin.truncate(bin_len);
        Ok(bin)
    }
}

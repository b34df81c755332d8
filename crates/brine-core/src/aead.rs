// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Authenticated encryption with associated data.
//!
//! The four supported ciphers share one C calling shape, so a variant is an
//! [`AeadCipher`] value binding the native entry points and the sizes
//! queried from libsodium at construction. Every variant is interchangeable:
//! identical methods, identical size-constant semantics, different numbers
//! and entry points. Obtain instances through [`crate::registry::aead`] or
//! [`crate::registry::aead_variant`].

use std::os::raw::{c_int, c_ulonglong};
use std::ptr;

use crate::check;
use crate::init;
use crate::types::{BrineError, BrineResult, SecureBytes};

type EncryptFn = unsafe extern "C" fn(
    *mut u8,
    *mut c_ulonglong,
    *const u8,
    c_ulonglong,
    *const u8,
    c_ulonglong,
    *const u8,
    *const u8,
    *const u8,
) -> c_int;

type DecryptFn = unsafe extern "C" fn(
    *mut u8,
    *mut c_ulonglong,
    *mut u8,
    *const u8,
    c_ulonglong,
    *const u8,
    c_ulonglong,
    *const u8,
    *const u8,
) -> c_int;

type EncryptDetachedFn = unsafe extern "C" fn(
    *mut u8,
    *mut u8,
    *mut c_ulonglong,
    *const u8,
    c_ulonglong,
    *const u8,
    c_ulonglong,
    *const u8,
    *const u8,
    *const u8,
) -> c_int;

type DecryptDetachedFn = unsafe extern "C" fn(
    *mut u8,
    *mut u8,
    *const u8,
    c_ulonglong,
    *const u8,
    *const u8,
    c_ulonglong,
    *const u8,
    *const u8,
) -> c_int;

/// Selects one of the interchangeable AEAD cipher variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadVariant {
    /// XChaCha20-Poly1305-IETF, the default (24-byte nonce).
    XChaCha20Poly1305,
    /// ChaCha20-Poly1305-IETF (12-byte nonce).
    ChaCha20Poly1305Ietf,
    /// The original ChaCha20-Poly1305 construction (8-byte nonce).
    ChaCha20Poly1305,
    /// AES-256-GCM; only constructible on hardware with AES acceleration.
    Aes256Gcm,
}

/// One concrete AEAD cipher: sizes and native entry points bound at
/// construction, stateless and safe for concurrent reuse.
pub struct AeadCipher {
    name: &'static str,
    key_len: usize,
    nonce_len: usize,
    tag_len: usize,
    encrypt: EncryptFn,
    decrypt: DecryptFn,
    encrypt_detached: EncryptDetachedFn,
    decrypt_detached: DecryptDetachedFn,
}

impl AeadCipher {
    pub(crate) fn xchacha20poly1305() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "XChaCha20-Poly1305",
                key_len: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_keybytes(),
                nonce_len: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_npubbytes(),
                tag_len: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_abytes(),
                encrypt: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_encrypt,
                decrypt: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_decrypt,
                encrypt_detached: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_encrypt_detached,
                decrypt_detached: libsodium_sys::crypto_aead_xchacha20poly1305_ietf_decrypt_detached,
            })
        }
    }

    pub(crate) fn chacha20poly1305_ietf() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "ChaCha20-Poly1305-IETF",
                key_len: libsodium_sys::crypto_aead_chacha20poly1305_ietf_keybytes(),
                nonce_len: libsodium_sys::crypto_aead_chacha20poly1305_ietf_npubbytes(),
                tag_len: libsodium_sys::crypto_aead_chacha20poly1305_ietf_abytes(),
                encrypt: libsodium_sys::crypto_aead_chacha20poly1305_ietf_encrypt,
                decrypt: libsodium_sys::crypto_aead_chacha20poly1305_ietf_decrypt,
                encrypt_detached: libsodium_sys::crypto_aead_chacha20poly1305_ietf_encrypt_detached,
                decrypt_detached: libsodium_sys::crypto_aead_chacha20poly1305_ietf_decrypt_detached,
            })
        }
    }

    pub(crate) fn chacha20poly1305() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "ChaCha20-Poly1305",
                key_len: libsodium_sys::crypto_aead_chacha20poly1305_keybytes(),
                nonce_len: libsodium_sys::crypto_aead_chacha20poly1305_npubbytes(),
                tag_len: libsodium_sys::crypto_aead_chacha20poly1305_abytes(),
                encrypt: libsodium_sys::crypto_aead_chacha20poly1305_encrypt,
                decrypt: libsodium_sys::crypto_aead_chacha20poly1305_decrypt,
                encrypt_detached: libsodium_sys::crypto_aead_chacha20poly1305_encrypt_detached,
                decrypt_detached: libsodium_sys::crypto_aead_chacha20poly1305_decrypt_detached,
            })
        }
    }

    pub(crate) fn aes256gcm() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: The availability probe and size queries take no arguments.
        unsafe {
            if libsodium_sys::crypto_aead_aes256gcm_is_available() == 0 {
                return Err(BrineError::Unavailable {
                    primitive: "AES-256-GCM",
                });
            }
            Ok(Self {
                name: "AES-256-GCM",
                key_len: libsodium_sys::crypto_aead_aes256gcm_keybytes(),
                nonce_len: libsodium_sys::crypto_aead_aes256gcm_npubbytes(),
                tag_len: libsodium_sys::crypto_aead_aes256gcm_abytes(),
                encrypt: libsodium_sys::crypto_aead_aes256gcm_encrypt,
                decrypt: libsodium_sys::crypto_aead_aes256gcm_decrypt,
                encrypt_detached: libsodium_sys::crypto_aead_aes256gcm_encrypt_detached,
                decrypt_detached: libsodium_sys::crypto_aead_aes256gcm_decrypt_detached,
            })
        }
    }

    /// Cipher name used in error reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Secret key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Public nonce length in bytes.
    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    /// Authentication tag length in bytes.
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Generates a fresh random secret key.
    pub fn keygen(&self) -> SecureBytes {
        let mut key = SecureBytes::new(self.key_len);
        // SAFETY: Pointer and length come from a valid mutable buffer.
        unsafe {
            libsodium_sys::randombytes_buf(key.data_mut().as_mut_ptr() as *mut _, self.key_len);
        }
        key
    }

    /// Generates a fresh random nonce.
    ///
    /// For the 8- and 12-byte nonce variants, random nonces collide too early
    /// for high-volume keys; callers with such workloads should use a counter
    /// per key instead.
    pub fn gen_nonce(&self) -> Vec<u8> {
        let mut nonce = vec![0u8; self.nonce_len];
        // SAFETY: Pointer and length come from a valid mutable buffer.
        unsafe {
            libsodium_sys::randombytes_buf(nonce.as_mut_ptr() as *mut _, self.nonce_len);
        }
        nonce
    }

    fn check_common(&self, nonce: &[u8], key: &[u8]) -> BrineResult<()> {
        check::exact_len("aead key", key.len(), self.key_len)?;
        check::exact_len("aead nonce", nonce.len(), self.nonce_len)
    }

    /// Encrypts `message` in combined mode, binding `ad`; `ciphertext` must
    /// be exactly `message.len() + tag_len()` bytes.
    pub fn seal(
        &self,
        ciphertext: &mut [u8],
        message: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<()> {
        self.check_common(nonce, key)?;
        check::exact_len(
            "aead ciphertext",
            ciphertext.len(),
            message.len() + self.tag_len,
        )?;
        let mut written: c_ulonglong = 0;
        // SAFETY: All lengths verified above; nsec is unused by every variant
        // and passed as null. The return code is checked.
        unsafe {
            if (self.encrypt)(
                ciphertext.as_mut_ptr(),
                &mut written,
                message.as_ptr(),
                message.len() as c_ulonglong,
                ad.as_ptr(),
                ad.len() as c_ulonglong,
                ptr::null(),
                nonce.as_ptr(),
                key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native { op: self.name });
            }
        }
        Ok(())
    }

    /// Decrypts combined-mode `ciphertext` into `message`, which must be
    /// exactly `ciphertext.len() - tag_len()` bytes.
    ///
    /// Returns `Ok(false)` when the tag does not verify; `Err` is reserved
    /// for precondition violations.
    pub fn open(
        &self,
        message: &mut [u8],
        ciphertext: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<bool> {
        self.check_common(nonce, key)?;
        check::min_len("aead ciphertext", ciphertext.len(), self.tag_len)?;
        check::exact_len(
            "aead message",
            message.len(),
            ciphertext.len() - self.tag_len,
        )?;
        let mut written: c_ulonglong = 0;
        // SAFETY: All lengths verified above; nsec is unused and null. A
        // non-zero return is a failed tag verification, reported as the
        // boolean outcome.
        unsafe {
            Ok((self.decrypt)(
                message.as_mut_ptr(),
                &mut written,
                ptr::null_mut(),
                ciphertext.as_ptr(),
                ciphertext.len() as c_ulonglong,
                ad.as_ptr(),
                ad.len() as c_ulonglong,
                nonce.as_ptr(),
                key.as_ptr(),
            ) == 0)
        }
    }

    /// Encrypts `message` in detached mode: ciphertext and tag in separate
    /// buffers, with the same size relationships as combined mode.
    pub fn seal_detached(
        &self,
        ciphertext: &mut [u8],
        tag: &mut [u8],
        message: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<()> {
        self.check_common(nonce, key)?;
        check::exact_len("aead tag", tag.len(), self.tag_len)?;
        check::exact_len("aead ciphertext", ciphertext.len(), message.len())?;
        let mut tag_written: c_ulonglong = 0;
        // SAFETY: All lengths verified above; nsec is unused and null.
        unsafe {
            if (self.encrypt_detached)(
                ciphertext.as_mut_ptr(),
                tag.as_mut_ptr(),
                &mut tag_written,
                message.as_ptr(),
                message.len() as c_ulonglong,
                ad.as_ptr(),
                ad.len() as c_ulonglong,
                ptr::null(),
                nonce.as_ptr(),
                key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native { op: self.name });
            }
        }
        Ok(())
    }

    /// Decrypts detached-mode `ciphertext` after verifying `tag`.
    ///
    /// Returns `Ok(false)` when the tag does not verify.
    pub fn open_detached(
        &self,
        message: &mut [u8],
        ciphertext: &[u8],
        tag: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<bool> {
        self.check_common(nonce, key)?;
        check::exact_len("aead tag", tag.len(), self.tag_len)?;
        check::exact_len("aead message", message.len(), ciphertext.len())?;
        // SAFETY: All lengths verified above; nsec is unused and null. A
        // non-zero return is a failed tag verification, reported as the
        // boolean outcome.
        unsafe {
            Ok((self.decrypt_detached)(
                message.as_mut_ptr(),
                ptr::null_mut(),
                ciphertext.as_ptr(),
                ciphertext.len() as c_ulonglong,
                tag.as_ptr(),
                ad.as_ptr(),
                ad.len() as c_ulonglong,
                nonce.as_ptr(),
                key.as_ptr(),
            ) == 0)
        }
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use crate::check;
use crate::init;
use crate::types::{BrineResult, SecureBytes};

/// XSalsa20-Poly1305 secret-key authenticated encryption.
///
/// Size constants are read from libsodium at construction and immutable
/// afterwards. The instance holds no per-call state and is safe for
/// concurrent reuse; obtain it through [`crate::registry::secret_box`].
pub struct SecretBox {
    key_len: usize,
    nonce_len: usize,
    tag_len: usize,
}

impl SecretBox {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                key_len: libsodium_sys::crypto_secretbox_keybytes(),
                nonce_len: libsodium_sys::crypto_secretbox_noncebytes(),
                tag_len: libsodium_sys::crypto_secretbox_macbytes(),
            })
        }
    }

    /// Secret key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Nonce length in bytes.
    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    /// Poly1305 tag length in bytes.
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
    pub fn gen_nonce(&self) -> Vec<u8> {
        let mut nonce = vec![0u8; self.nonce_len];
        // SAFETY: Pointer and length come from a valid mutable buffer.
        unsafe {
            libsodium_sys::randombytes_buf(nonce.as_mut_ptr() as *mut _, self.nonce_len);
        }
        nonce
    }

    /// Encrypts `message` in combined mode: `ciphertext` receives the
    /// ciphertext with the tag appended and must be exactly
    /// `message.len() + tag_len()` bytes.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if any buffer length is wrong, or
    /// [`crate::BrineError::Native`] if the native call fails.
    pub fn seal(
        &self,
        ciphertext: &mut [u8],
        message: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<()> {
        check::exact_len("secretbox key", key.len(), self.key_len)?;
        check::exact_len("secretbox nonce", nonce.len(), self.nonce_len)?;
        check::exact_len(
            "secretbox ciphertext",
            ciphertext.len(),
            message.len() + self.tag_len,
        )?;
        // SAFETY: All lengths verified above; ciphertext holds mlen + macbytes.
        unsafe {
            if libsodium_sys::crypto_secretbox_easy(
                ciphertext.as_mut_ptr(),
                message.as_ptr(),
                message.len() as u64,
                nonce.as_ptr(),
                key.as_ptr(),
            ) != 0
            {
                return Err(crate::BrineError::Native {
                    op: "crypto_secretbox_easy",
                });
            }
        }
        Ok(())
    }

    /// Decrypts combined-mode `ciphertext` into `message`, which must be
    /// exactly `ciphertext.len() - tag_len()` bytes.
    ///
    /// Returns `Ok(false)` when the tag does not verify (tampered or wrong
    /// key/nonce); `Err` is reserved for precondition violations.
    pub fn open(
        &self,
        message: &mut [u8],
        ciphertext: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<bool> {
        check::exact_len("secretbox key", key.len(), self.key_len)?;
        check::exact_len("secretbox nonce", nonce.len(), self.nonce_len)?;
        check::min_len("secretbox ciphertext", ciphertext.len(), self.tag_len)?;
        check::exact_len(
            "secretbox message",
            message.len(),
            ciphertext.len() - self.tag_len,
        )?;
        // SAFETY: All lengths verified above. A non-zero return is a failed
        // Poly1305 verification, reported as the boolean outcome.
        unsafe {
            Ok(libsodium_sys::crypto_secretbox_open_easy(
                message.as_mut_ptr(),
                ciphertext.as_ptr(),
                ciphertext.len() as u64,
                nonce.as_ptr(),
                key.as_ptr(),
            ) == 0)
        }
    }

    /// Encrypts `message` in detached mode: ciphertext and tag land in
    /// separate buffers with the same size relationships as combined mode.
    pub fn seal_detached(
        &self,
        ciphertext: &mut [u8],
        tag: &mut [u8],
        message: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<()> {
        check::exact_len("secretbox key", key.len(), self.key_len)?;
        check::exact_len("secretbox nonce", nonce.len(), self.nonce_len)?;
        check::exact_len("secretbox tag", tag.len(), self.tag_len)?;
        check::exact_len("secretbox ciphertext", ciphertext.len(), message.len())?;
        // SAFETY: All lengths verified above.
        unsafe {
            if libsodium_sys::crypto_secretbox_detached(
                ciphertext.as_mut_ptr(),
                tag.as_mut_ptr(),
                message.as_ptr(),
                message.len() as u64,
                nonce.as_ptr(),
                key.as_ptr(),
            ) != 0
            {
                return Err(crate::BrineError::Native {
                    op: "crypto_secretbox_detached",
                });
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
        nonce: &[u8],
        key: &[u8],
    ) -> BrineResult<bool> {
        check::exact_len("secretbox key", key.len(), self.key_len)?;
        check::exact_len("secretbox nonce", nonce.len(), self.nonce_len)?;
        check::exact_len("secretbox tag", tag.len(), self.tag_len)?;
        check::exact_len("secretbox message", message.len(), ciphertext.len())?;
        // SAFETY: All lengths verified above. A non-zero return is a failed
        // Poly1305 verification, reported as the boolean outcome.
        unsafe {
            Ok(libsodium_sys::crypto_secretbox_open_detached(
                message.as_mut_ptr(),
                ciphertext.as_ptr(),
                tag.as_ptr(),
                ciphertext.len() as u64,
                nonce.as_ptr(),
                key.as_ptr(),
            ) == 0)
        }
    }
}

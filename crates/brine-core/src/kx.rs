// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use crate::check;
use crate::init;
use crate::types::{BrineError, BrineResult, SecureBytes};

/// A key-exchange key pair; the secret half is zeroized on drop.
pub struct KxKeyPair {
    /// Public key, safe to transmit.
    pub public_key: Vec<u8>,
    /// Secret key, kept local.
    pub secret_key: SecureBytes,
}

/// Directional session keys produced by the key exchange.
pub struct SessionKeys {
    /// Key for receiving (decrypting) from the peer.
    pub rx: SecureBytes,
    /// Key for transmitting (encrypting) to the peer.
    pub tx: SecureBytes,
}

/// X25519-based key exchange (`crypto_kx`): both sides derive one receive
/// and one transmit key from their key pair and the peer's public key.
pub struct Kx {
    public_key_len: usize,
    secret_key_len: usize,
    seed_len: usize,
    session_key_len: usize,
}

impl Kx {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                public_key_len: libsodium_sys::crypto_kx_publickeybytes(),
                secret_key_len: libsodium_sys::crypto_kx_secretkeybytes(),
                seed_len: libsodium_sys::crypto_kx_seedbytes(),
                session_key_len: libsodium_sys::crypto_kx_sessionkeybytes(),
            })
        }
    }

    /// Public key length in bytes.
    pub fn public_key_len(&self) -> usize {
        self.public_key_len
    }

    /// Secret key length in bytes.
    pub fn secret_key_len(&self) -> usize {
        self.secret_key_len
    }

    /// Seed length in bytes.
    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    /// Session key length in bytes.
    pub fn session_key_len(&self) -> usize {
        self.session_key_len
    }

    /// Generates a fresh random key pair.
    pub fn keypair(&self) -> BrineResult<KxKeyPair> {
        let mut public_key = vec![0u8; self.public_key_len];
        let mut secret_key = SecureBytes::new(self.secret_key_len);
        // SAFETY: Both buffers have the native lengths queried at construction.
        unsafe {
            if libsodium_sys::crypto_kx_keypair(
                public_key.as_mut_ptr(),
                secret_key.data_mut().as_mut_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_kx_keypair",
                });
            }
        }
        Ok(KxKeyPair {
            public_key,
            secret_key,
        })
    }

    /// Derives a key pair deterministically from `seed`.
    pub fn seed_keypair(&self, seed: &[u8]) -> BrineResult<KxKeyPair> {
        check::exact_len("kx seed", seed.len(), self.seed_len)?;
        let mut public_key = vec![0u8; self.public_key_len];
        let mut secret_key = SecureBytes::new(self.secret_key_len);
        // SAFETY: All buffer lengths verified or sized at construction.
        unsafe {
            if libsodium_sys::crypto_kx_seed_keypair(
                public_key.as_mut_ptr(),
                secret_key.data_mut().as_mut_ptr(),
                seed.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_kx_seed_keypair",
                });
            }
        }
        Ok(KxKeyPair {
            public_key,
            secret_key,
        })
    }

    /// Computes the client-side session keys against `server_public_key`.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Native`] if the server public key is
    /// unacceptable (e.g. a low-order point).
    pub fn client_session_keys(
        &self,
        client_public_key: &[u8],
        client_secret_key: &[u8],
        server_public_key: &[u8],
    ) -> BrineResult<SessionKeys> {
        check::exact_len("kx public key", client_public_key.len(), self.public_key_len)?;
        check::exact_len("kx secret key", client_secret_key.len(), self.secret_key_len)?;
        check::exact_len("kx public key", server_public_key.len(), self.public_key_len)?;
        let mut rx = SecureBytes::new(self.session_key_len);
        let mut tx = SecureBytes::new(self.session_key_len);
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_kx_client_session_keys(
                rx.data_mut().as_mut_ptr(),
                tx.data_mut().as_mut_ptr(),
                client_public_key.as_ptr(),
                client_secret_key.as_ptr(),
                server_public_key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_kx_client_session_keys",
                });
            }
        }
        Ok(SessionKeys { rx, tx })
    }

    /// Computes the server-side session keys against `client_public_key`.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Native`] if the client public key is
    /// unacceptable (e.g. a low-order point).
    pub fn server_session_keys(
        &self,
        server_public_key: &[u8],
        server_secret_key: &[u8],
        client_public_key: &[u8],
    ) -> BrineResult<SessionKeys> {
        check::exact_len("kx public key", server_public_key.len(), self.public_key_len)?;
        check::exact_len("kx secret key", server_secret_key.len(), self.secret_key_len)?;
        check::exact_len("kx public key", client_public_key.len(), self.public_key_len)?;
        let mut rx = SecureBytes::new(self.session_key_len);
        let mut tx = SecureBytes::new(self.session_key_len);
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_kx_server_session_keys(
                rx.data_mut().as_mut_ptr(),
                tx.data_mut().as_mut_ptr(),
                server_public_key.as_ptr(),
                server_secret_key.as_ptr(),
                client_public_key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_kx_server_session_keys",
                });
            }
        }
        Ok(SessionKeys { rx, tx })
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use std::os::raw::c_ulonglong;

use crate::check;
use crate::init;
use crate::state::StateBlob;
use crate::types::{BrineError, BrineResult, SecureBytes};

/// An Ed25519 key pair; the secret half is zeroized on drop.
pub struct SignKeyPair {
    /// Public verification key.
    pub public_key: Vec<u8>,
    /// Secret signing key.
    pub secret_key: SecureBytes,
}

/// Ed25519 signatures: combined and detached one-shot forms plus an
/// Ed25519ph streaming session for messages too large to hold in memory.
pub struct Sign {
    public_key_len: usize,
    secret_key_len: usize,
    signature_len: usize,
    seed_len: usize,
    state_len: usize,
}

impl Sign {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                public_key_len: libsodium_sys::crypto_sign_publickeybytes(),
                secret_key_len: libsodium_sys::crypto_sign_secretkeybytes(),
                signature_len: libsodium_sys::crypto_sign_bytes(),
                seed_len: libsodium_sys::crypto_sign_seedbytes(),
                state_len: libsodium_sys::crypto_sign_statebytes(),
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

    /// Signature length in bytes.
    pub fn signature_len(&self) -> usize {
        self.signature_len
    }

    /// Seed length in bytes.
    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    /// Generates a fresh random key pair.
    pub fn keypair(&self) -> BrineResult<SignKeyPair> {
        let mut public_key = vec![0u8; self.public_key_len];
        let mut secret_key = SecureBytes::new(self.secret_key_len);
        // SAFETY: Both buffers have the native lengths queried at construction.
        unsafe {
            if libsodium_sys::crypto_sign_keypair(
                public_key.as_mut_ptr(),
                secret_key.data_mut().as_mut_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_sign_keypair",
                });
            }
        }
        Ok(SignKeyPair {
            public_key,
            secret_key,
        })
    }

    /// Derives a key pair deterministically from `seed`.
    pub fn seed_keypair(&self, seed: &[u8]) -> BrineResult<SignKeyPair> {
        check::exact_len("sign seed", seed.len(), self.seed_len)?;
        let mut public_key = vec![0u8; self.public_key_len];
        let mut secret_key = SecureBytes::new(self.secret_key_len);
        // SAFETY: All buffer lengths verified or sized at construction.
        unsafe {
            if libsodium_sys::crypto_sign_seed_keypair(
                public_key.as_mut_ptr(),
                secret_key.data_mut().as_mut_ptr(),
                seed.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_sign_seed_keypair",
                });
            }
        }
        Ok(SignKeyPair {
            public_key,
            secret_key,
        })
    }

    /// Signs `message` in combined mode: `signed` receives the signature
    /// followed by the message and must be exactly
    /// `message.len() + signature_len()` bytes.
    pub fn sign(&self, signed: &mut [u8], message: &[u8], secret_key: &[u8]) -> BrineResult<()> {
        check::exact_len("sign secret key", secret_key.len(), self.secret_key_len)?;
        check::exact_len(
            "sign signed message",
            signed.len(),
            message.len() + self.signature_len,
        )?;
        let mut written: c_ulonglong = 0;
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_sign(
                signed.as_mut_ptr(),
                &mut written,
                message.as_ptr(),
                message.len() as c_ulonglong,
                secret_key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native { op: "crypto_sign" });
            }
        }
        Ok(())
    }

    /// Verifies a combined-mode `signed` message and recovers the message
    /// into `message`, which must be exactly
    /// `signed.len() - signature_len()` bytes.
    ///
    /// Returns `Ok(false)` when the signature does not verify.
    pub fn open(&self, message: &mut [u8], signed: &[u8], public_key: &[u8]) -> BrineResult<bool> {
        check::exact_len("sign public key", public_key.len(), self.public_key_len)?;
        check::min_len("sign signed message", signed.len(), self.signature_len)?;
        check::exact_len(
            "sign message",
            message.len(),
            signed.len() - self.signature_len,
        )?;
        let mut written: c_ulonglong = 0;
        // SAFETY: All lengths verified above. A non-zero return is a failed
        // signature verification, reported as the boolean outcome.
        unsafe {
            Ok(libsodium_sys::crypto_sign_open(
                message.as_mut_ptr(),
                &mut written,
                signed.as_ptr(),
                signed.len() as c_ulonglong,
                public_key.as_ptr(),
            ) == 0)
        }
    }

    /// Signs `message` in detached mode into `signature`, which must be
    /// exactly `signature_len()` bytes.
    pub fn sign_detached(
        &self,
        signature: &mut [u8],
        message: &[u8],
        secret_key: &[u8],
    ) -> BrineResult<()> {
        check::exact_len("sign secret key", secret_key.len(), self.secret_key_len)?;
        check::exact_len("sign signature", signature.len(), self.signature_len)?;
        let mut written: c_ulonglong = 0;
        // SAFETY: All lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_sign_detached(
                signature.as_mut_ptr(),
                &mut written,
                message.as_ptr(),
                message.len() as c_ulonglong,
                secret_key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_sign_detached",
                });
            }
        }
        Ok(())
    }

    /// Verifies a detached `signature` over `message`.
    ///
    /// Returns `Ok(false)` when the signature does not verify.
    pub fn verify_detached(
        &self,
        signature: &[u8],
        message: &[u8],
        public_key: &[u8],
    ) -> BrineResult<bool> {
        check::exact_len("sign public key", public_key.len(), self.public_key_len)?;
        check::exact_len("sign signature", signature.len(), self.signature_len)?;
        // SAFETY: All lengths verified above. A non-zero return is a failed
        // signature verification, reported as the boolean outcome.
        unsafe {
            Ok(libsodium_sys::crypto_sign_verify_detached(
                signature.as_ptr(),
                message.as_ptr(),
                message.len() as c_ulonglong,
                public_key.as_ptr(),
            ) == 0)
        }
    }

    /// Starts an Ed25519ph streaming session.
    pub fn stream(&self) -> BrineResult<SignStream> {
        let mut state = StateBlob::new(self.state_len)?;
        // SAFETY: The state region was allocated at crypto_sign_statebytes.
        unsafe {
            if libsodium_sys::crypto_sign_init(state.as_mut_ptr() as *mut _) != 0 {
                return Err(BrineError::Native {
                    op: "crypto_sign_init",
                });
            }
        }
        Ok(SignStream {
            state,
            finalized: false,
            public_key_len: self.public_key_len,
            secret_key_len: self.secret_key_len,
            signature_len: self.signature_len,
        })
    }
}

/// An Ed25519ph incremental signing/verification session.
///
/// Follows the same `Initialized -> (Updated)* -> Finalized` state machine
/// as the MAC and hash streams; finalizing with a secret key produces a
/// signature, finalizing with a signature and public key verifies one.
pub struct SignStream {
    state: StateBlob,
    finalized: bool,
    public_key_len: usize,
    secret_key_len: usize,
    signature_len: usize,
}

impl SignStream {
    /// Feeds additional message bytes into the session.
    pub fn update(&mut self, input: &[u8]) -> BrineResult<()> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        // SAFETY: The state was initialized by crypto_sign_init.
        unsafe {
            if libsodium_sys::crypto_sign_update(
                self.state.as_mut_ptr() as *mut _,
                input.as_ptr(),
                input.len() as c_ulonglong,
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_sign_update",
                });
            }
        }
        Ok(())
    }

    /// Produces the signature over everything fed so far into `signature`,
    /// which must be exactly the signature length. Terminal.
    pub fn finalize_into(&mut self, signature: &mut [u8], secret_key: &[u8]) -> BrineResult<()> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        check::exact_len("sign secret key", secret_key.len(), self.secret_key_len)?;
        check::exact_len("sign signature", signature.len(), self.signature_len)?;
        self.finalized = true;
        let mut written: c_ulonglong = 0;
        // SAFETY: All lengths verified above; the state was initialized.
        unsafe {
            if libsodium_sys::crypto_sign_final_create(
                self.state.as_mut_ptr() as *mut _,
                signature.as_mut_ptr(),
                &mut written,
                secret_key.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_sign_final_create",
                });
            }
        }
        Ok(())
    }

    /// Verifies `signature` against everything fed so far. Terminal.
    ///
    /// Returns `Ok(false)` when the signature does not verify.
    pub fn verify_finalize(&mut self, signature: &[u8], public_key: &[u8]) -> BrineResult<bool> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        check::exact_len("sign public key", public_key.len(), self.public_key_len)?;
        check::exact_len("sign signature", signature.len(), self.signature_len)?;
        self.finalized = true;
        // SAFETY: All lengths verified above; the state was initialized. A
        // non-zero return is a failed verification, reported as the boolean
        // outcome.
        unsafe {
            Ok(libsodium_sys::crypto_sign_final_verify(
                self.state.as_mut_ptr() as *mut _,
                signature.as_ptr(),
                public_key.as_ptr(),
            ) == 0)
        }
    }

    /// Deep-copies the session so several signatures or verifications can be
    /// taken at different points of one long message.
    pub fn duplicate(&self) -> BrineResult<Self> {
        if self.finalized {
            return Err(BrineError::SessionFinalized);
        }
        Ok(Self {
            state: self.state.duplicate()?,
            finalized: false,
            public_key_len: self.public_key_len,
            secret_key_len: self.secret_key_len,
            signature_len: self.signature_len,
        })
    }
}

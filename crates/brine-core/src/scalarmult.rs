// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use crate::check;
use crate::init;
use crate::types::{BrineError, BrineResult, SecureBytes};

/// Curve25519 scalar multiplication.
pub struct ScalarMult {
    point_len: usize,
    scalar_len: usize,
}

impl ScalarMult {
    pub(crate) fn new() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Size queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                point_len: libsodium_sys::crypto_scalarmult_bytes(),
                scalar_len: libsodium_sys::crypto_scalarmult_scalarbytes(),
            })
        }
    }

    /// Group element length in bytes.
    pub fn point_len(&self) -> usize {
        self.point_len
    }

    /// Scalar length in bytes.
    pub fn scalar_len(&self) -> usize {
        self.scalar_len
    }

    /// Computes `scalar * basepoint`, the public key for `scalar`.
    pub fn base(&self, scalar: &[u8]) -> BrineResult<Vec<u8>> {
        check::exact_len("scalarmult scalar", scalar.len(), self.scalar_len)?;
        let mut point = vec![0u8; self.point_len];
        // SAFETY: Lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_scalarmult_base(point.as_mut_ptr(), scalar.as_ptr()) != 0 {
                return Err(BrineError::Native {
                    op: "crypto_scalarmult_base",
                });
            }
        }
        Ok(point)
    }

    /// Computes `scalar * point`, a raw shared secret.
    ///
    /// The result must not be used directly as a key; hash it together with
    /// both public keys first. Rejected inputs (e.g. small-order points)
    /// surface as [`BrineError::Native`].
    pub fn scalar_mult(&self, scalar: &[u8], point: &[u8]) -> BrineResult<SecureBytes> {
        check::exact_len("scalarmult scalar", scalar.len(), self.scalar_len)?;
        check::exact_len("scalarmult point", point.len(), self.point_len)?;
        let mut shared = SecureBytes::new(self.point_len);
        // SAFETY: Lengths verified above. The return code is checked.
        unsafe {
            if libsodium_sys::crypto_scalarmult(
                shared.data_mut().as_mut_ptr(),
                scalar.as_ptr(),
                point.as_ptr(),
            ) != 0
            {
                return Err(BrineError::Native {
                    op: "crypto_scalarmult",
                });
            }
        }
        Ok(shared)
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Enumerates all error conditions surfaced by the safety layer.
///
/// Three kinds of failure are kept apart and never conflated:
///
/// * **Precondition violations** (wrong length, bad offset window, read-only
///   destination, misused stream session) are raised before any native call
///   is attempted. They name the offending parameter and its sizes; buffer
///   contents never appear in a message.
/// * **Native failures** ([`BrineError::Native`], [`BrineError::InitFailed`],
///   [`BrineError::Unavailable`]) report a non-zero status from libsodium.
/// * **Authentication failure is not an error.** Tag, signature, and password
///   verification return `Ok(false)` so that a forged input is an ordinary
///   runtime outcome, distinguishable from a bug in the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BrineError {
    /// A buffer's length does not match the required constant.
    #[error("{name}: expected {expected} bytes, got {actual}")]
    BadLength {
        /// Name of the violated size constant.
        name: &'static str,
        /// Length the caller supplied.
        actual: usize,
        /// Length the primitive requires.
        expected: usize,
    },
    /// A buffer's length falls outside the primitive's inclusive bounds.
    #[error("{name}: length {actual} outside [{lower}, {upper}]")]
    LengthRange {
        /// Name of the violated size constant.
        name: &'static str,
        /// Length the caller supplied.
        actual: usize,
        /// Inclusive lower bound.
        lower: usize,
        /// Inclusive upper bound.
        upper: usize,
    },
    /// An (offset, length) window does not fit inside its buffer.
    #[error("window at offset {offset} with length {len} exceeds buffer of {total} bytes")]
    OffsetWindow {
        /// Total length of the underlying buffer.
        total: usize,
        /// Requested start offset.
        offset: usize,
        /// Requested window length.
        len: usize,
    },
    /// A signed quantity that must be non-negative is negative.
    #[error("{name}: value {value} must not be negative")]
    Negative {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value the caller supplied.
        value: i64,
    },
    /// A memory-hardness parameter is not a power of two.
    #[error("{name}: {value} is not a power of two")]
    NotPowerOfTwo {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value the caller supplied.
        value: u64,
    },
    /// The destination view is backed by read-only memory.
    #[error("destination buffer is read-only")]
    ReadOnly,
    /// A stream session was used after `finalize`.
    #[error("stream session already finalized")]
    SessionFinalized,
    /// The operation is not supported by this primitive.
    #[error("{op} is not supported by this primitive")]
    Unsupported {
        /// Name of the rejected operation.
        op: &'static str,
    },
    /// An encoded or stored input could not be parsed.
    #[error("{what} is malformed")]
    Malformed {
        /// Description of the malformed input.
        what: &'static str,
    },
    /// A native libsodium call returned a non-zero status.
    #[error("{op} failed in the native library")]
    Native {
        /// Name of the native entry point that failed.
        op: &'static str,
    },
    /// A required pointer argument was null (foreign-call surface only).
    #[error("required pointer argument is null")]
    NullPointer,
    /// `sodium_init` reported a failure; no primitive can be used.
    #[error("libsodium initialization failed")]
    InitFailed,
    /// The primitive is permanently unavailable on this hardware.
    #[error("{primitive} is not available on this hardware")]
    Unavailable {
        /// Name of the unavailable primitive.
        primitive: &'static str,
    },
}

impl BrineError {
    /// Converts this error variant into a negative `i32` status code suitable for C FFI.
    pub fn to_c_int(self) -> i32 {
        match self {
            BrineError::BadLength { .. } => -1,
            BrineError::LengthRange { .. } => -2,
            BrineError::OffsetWindow { .. } => -3,
            BrineError::Negative { .. } => -4,
            BrineError::NotPowerOfTwo { .. } => -5,
            BrineError::ReadOnly => -6,
            BrineError::SessionFinalized => -7,
            BrineError::Unsupported { .. } => -8,
            BrineError::Malformed { .. } => -9,
            BrineError::Native { .. } => -10,
            BrineError::InitFailed => -11,
            BrineError::Unavailable { .. } => -12,
            BrineError::NullPointer => -13,
        }
    }
}

/// Convenience alias for `Result<T, BrineError>`.
pub type BrineResult<T> = Result<T, BrineError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// Wraps a `Vec<u8>` and implements `Zeroize + ZeroizeOnDrop` so that
/// sensitive key material is scrubbed from memory when no longer needed.
/// The `Debug` implementation redacts the contents.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a zero-filled buffer of the given length.
    pub fn new(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    /// Creates a buffer by copying the given slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Returns an immutable reference to the underlying bytes.
    pub fn data(&self) -> &[u8] {
        &self.0
    }

    /// Returns a mutable reference to the underlying bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer contains no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resizes the buffer to `new_len`, zero-filling any new bytes.
    /// When shrinking, the truncated portion is zeroized before deallocation.
    pub fn resize(&mut self, new_len: usize) {
        if new_len < self.0.len() {
            self.0[new_len..].zeroize();
        }
        self.0.resize(new_len, 0);
    }
}

impl std::ops::Deref for SecureBytes {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl std::ops::DerefMut for SecureBytes {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

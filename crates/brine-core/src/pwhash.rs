// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Password hashing and password-based key derivation.
//!
//! Three interchangeable algorithms: Argon2id (default), Argon2i, and
//! scrypt. Limits are validated against the bounds libsodium reports for
//! the selected algorithm; scrypt additionally requires its memory limit to
//! be a power of two. Verification of a stored hash string is a boolean
//! outcome: a wrong password or an unparseable string is `Ok(false)`, never
//! an error.

use std::os::raw::c_int;

use crate::check;
use crate::init;
use crate::types::{BrineError, BrineResult};

type DeriveFn = fn(&mut [u8], &[u8], &[u8], u64, usize) -> c_int;
type StrHashFn = fn(&mut [u8], &[u8], u64, usize) -> c_int;
type StrVerifyFn = fn(&[u8], &[u8]) -> c_int;
type NeedsRehashFn = fn(&[u8], u64, usize) -> c_int;

fn argon2id_derive(
    out: &mut [u8],
    password: &[u8],
    salt: &[u8],
    opslimit: u64,
    memlimit: usize,
) -> c_int {
    // SAFETY: Buffer lengths are validated by the caller against the bounds
    // queried from libsodium; the algorithm identifier is queried, not assumed.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2id(
            out.as_mut_ptr(),
            out.len() as u64,
            password.as_ptr() as *const _,
            password.len() as u64,
            salt.as_ptr(),
            opslimit,
            memlimit,
            libsodium_sys::crypto_pwhash_argon2id_alg_argon2id13(),
        )
    }
}

fn argon2id_str_hash(out: &mut [u8], password: &[u8], opslimit: u64, memlimit: usize) -> c_int {
    // SAFETY: out is exactly crypto_pwhash_argon2id_strbytes, zero-filled.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2id_str(
            out.as_mut_ptr() as *mut _,
            password.as_ptr() as *const _,
            password.len() as u64,
            opslimit,
            memlimit,
        )
    }
}

fn argon2id_str_verify(stored: &[u8], password: &[u8]) -> c_int {
    // SAFETY: stored is a NUL-terminated buffer of strbytes length.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2id_str_verify(
            stored.as_ptr() as *const _,
            password.as_ptr() as *const _,
            password.len() as u64,
        )
    }
}

fn argon2id_needs_rehash(stored: &[u8], opslimit: u64, memlimit: usize) -> c_int {
    // SAFETY: stored is a NUL-terminated buffer of strbytes length.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2id_str_needs_rehash(
            stored.as_ptr() as *const _,
            opslimit,
            memlimit,
        )
    }
}

fn argon2i_derive(
    out: &mut [u8],
    password: &[u8],
    salt: &[u8],
    opslimit: u64,
    memlimit: usize,
) -> c_int {
    // SAFETY: Buffer lengths are validated by the caller against the bounds
    // queried from libsodium; the algorithm identifier is queried, not assumed.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2i(
            out.as_mut_ptr(),
            out.len() as u64,
            password.as_ptr() as *const _,
            password.len() as u64,
            salt.as_ptr(),
            opslimit,
            memlimit,
            libsodium_sys::crypto_pwhash_argon2i_alg_argon2i13(),
        )
    }
}

fn argon2i_str_hash(out: &mut [u8], password: &[u8], opslimit: u64, memlimit: usize) -> c_int {
    // SAFETY: out is exactly crypto_pwhash_argon2i_strbytes, zero-filled.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2i_str(
            out.as_mut_ptr() as *mut _,
            password.as_ptr() as *const _,
            password.len() as u64,
            opslimit,
            memlimit,
        )
    }
}

fn argon2i_str_verify(stored: &[u8], password: &[u8]) -> c_int {
    // SAFETY: stored is a NUL-terminated buffer of strbytes length.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2i_str_verify(
            stored.as_ptr() as *const _,
            password.as_ptr() as *const _,
            password.len() as u64,
        )
    }
}

fn argon2i_needs_rehash(stored: &[u8], opslimit: u64, memlimit: usize) -> c_int {
    // SAFETY: stored is a NUL-terminated buffer of strbytes length.
    unsafe {
        libsodium_sys::crypto_pwhash_argon2i_str_needs_rehash(
            stored.as_ptr() as *const _,
            opslimit,
            memlimit,
        )
    }
}

fn scrypt_derive(
    out: &mut [u8],
    password: &[u8],
    salt: &[u8],
    opslimit: u64,
    memlimit: usize,
) -> c_int {
    // SAFETY: Buffer lengths are validated by the caller against the bounds
    // queried from libsodium.
    unsafe {
        libsodium_sys::crypto_pwhash_scryptsalsa208sha256(
            out.as_mut_ptr(),
            out.len() as u64,
            password.as_ptr() as *const _,
            password.len() as u64,
            salt.as_ptr(),
            opslimit,
            memlimit,
        )
    }
}

fn scrypt_str_hash(out: &mut [u8], password: &[u8], opslimit: u64, memlimit: usize) -> c_int {
    // SAFETY: out is exactly crypto_pwhash_scryptsalsa208sha256_strbytes, zero-filled.
    unsafe {
        libsodium_sys::crypto_pwhash_scryptsalsa208sha256_str(
            out.as_mut_ptr() as *mut _,
            password.as_ptr() as *const _,
            password.len() as u64,
            opslimit,
            memlimit,
        )
    }
}

fn scrypt_str_verify(stored: &[u8], password: &[u8]) -> c_int {
    // SAFETY: stored is a NUL-terminated buffer of strbytes length.
    unsafe {
        libsodium_sys::crypto_pwhash_scryptsalsa208sha256_str_verify(
            stored.as_ptr() as *const _,
            password.as_ptr() as *const _,
            password.len() as u64,
        )
    }
}

fn scrypt_needs_rehash(stored: &[u8], opslimit: u64, memlimit: usize) -> c_int {
    // SAFETY: stored is a NUL-terminated buffer of strbytes length.
    unsafe {
        libsodium_sys::crypto_pwhash_scryptsalsa208sha256_str_needs_rehash(
            stored.as_ptr() as *const _,
            opslimit,
            memlimit,
        )
    }
}

/// Selects one of the interchangeable password-hashing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwHashVariant {
    /// Argon2id v1.3, the default.
    Argon2id,
    /// Argon2i v1.3.
    Argon2i,
    /// scrypt (salsa20/8, SHA-256); memory limit must be a power of two.
    Scrypt,
}

/// One concrete password-hashing algorithm with its native-queried bounds.
pub struct PwHash {
    name: &'static str,
    salt_len: usize,
    str_len: usize,
    out_min: usize,
    out_max: usize,
    ops_min: u64,
    ops_max: u64,
    mem_min: usize,
    mem_max: usize,
    ops_interactive: u64,
    mem_interactive: usize,
    ops_sensitive: u64,
    mem_sensitive: usize,
    pow2_memlimit: bool,
    derive_fn: DeriveFn,
    str_hash_fn: StrHashFn,
    str_verify_fn: StrVerifyFn,
    needs_rehash_fn: NeedsRehashFn,
}

impl PwHash {
    pub(crate) fn argon2id() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Limit queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "Argon2id",
                salt_len: libsodium_sys::crypto_pwhash_argon2id_saltbytes(),
                str_len: libsodium_sys::crypto_pwhash_argon2id_strbytes(),
                out_min: libsodium_sys::crypto_pwhash_argon2id_bytes_min(),
                out_max: libsodium_sys::crypto_pwhash_argon2id_bytes_max(),
                ops_min: libsodium_sys::crypto_pwhash_argon2id_opslimit_min() as u64,
                ops_max: libsodium_sys::crypto_pwhash_argon2id_opslimit_max() as u64,
                mem_min: libsodium_sys::crypto_pwhash_argon2id_memlimit_min(),
                mem_max: libsodium_sys::crypto_pwhash_argon2id_memlimit_max(),
                ops_interactive: libsodium_sys::crypto_pwhash_argon2id_opslimit_interactive()
                    as u64,
                mem_interactive: libsodium_sys::crypto_pwhash_argon2id_memlimit_interactive(),
                ops_sensitive: libsodium_sys::crypto_pwhash_argon2id_opslimit_sensitive() as u64,
                mem_sensitive: libsodium_sys::crypto_pwhash_argon2id_memlimit_sensitive(),
                pow2_memlimit: false,
                derive_fn: argon2id_derive,
                str_hash_fn: argon2id_str_hash,
                str_verify_fn: argon2id_str_verify,
                needs_rehash_fn: argon2id_needs_rehash,
            })
        }
    }

    pub(crate) fn argon2i() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Limit queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "Argon2i",
                salt_len: libsodium_sys::crypto_pwhash_argon2i_saltbytes(),
                str_len: libsodium_sys::crypto_pwhash_argon2i_strbytes(),
                out_min: libsodium_sys::crypto_pwhash_argon2i_bytes_min(),
                out_max: libsodium_sys::crypto_pwhash_argon2i_bytes_max(),
                ops_min: libsodium_sys::crypto_pwhash_argon2i_opslimit_min() as u64,
                ops_max: libsodium_sys::crypto_pwhash_argon2i_opslimit_max() as u64,
                mem_min: libsodium_sys::crypto_pwhash_argon2i_memlimit_min(),
                mem_max: libsodium_sys::crypto_pwhash_argon2i_memlimit_max(),
                ops_interactive: libsodium_sys::crypto_pwhash_argon2i_opslimit_interactive() as u64,
                mem_interactive: libsodium_sys::crypto_pwhash_argon2i_memlimit_interactive(),
                ops_sensitive: libsodium_sys::crypto_pwhash_argon2i_opslimit_sensitive() as u64,
                mem_sensitive: libsodium_sys::crypto_pwhash_argon2i_memlimit_sensitive(),
                pow2_memlimit: false,
                derive_fn: argon2i_derive,
                str_hash_fn: argon2i_str_hash,
                str_verify_fn: argon2i_str_verify,
                needs_rehash_fn: argon2i_needs_rehash,
            })
        }
    }

    pub(crate) fn scrypt() -> BrineResult<Self> {
        init::ensure_init()?;
        // SAFETY: Limit queries take no arguments and cannot fail.
        unsafe {
            Ok(Self {
                name: "scrypt",
                salt_len: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_saltbytes(),
                str_len: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_strbytes(),
                out_min: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_bytes_min(),
                out_max: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_bytes_max(),
                ops_min: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_opslimit_min() as u64,
                ops_max: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_opslimit_max() as u64,
                mem_min: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_memlimit_min(),
                mem_max: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_memlimit_max(),
                ops_interactive: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_opslimit_interactive()
                    as u64,
                mem_interactive:
                    libsodium_sys::crypto_pwhash_scryptsalsa208sha256_memlimit_interactive(),
                ops_sensitive: libsodium_sys::crypto_pwhash_scryptsalsa208sha256_opslimit_sensitive()
                    as u64,
                mem_sensitive:
                    libsodium_sys::crypto_pwhash_scryptsalsa208sha256_memlimit_sensitive(),
                pow2_memlimit: true,
                derive_fn: scrypt_derive,
                str_hash_fn: scrypt_str_hash,
                str_verify_fn: scrypt_str_verify,
                needs_rehash_fn: scrypt_needs_rehash,
            })
        }
    }

    /// Algorithm name used in error reports.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Salt length in bytes.
    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    /// Storable hash string buffer length in bytes, NUL included.
    pub fn str_len(&self) -> usize {
        self.str_len
    }

    /// Operations limit for interactive logins.
    pub fn ops_interactive(&self) -> u64 {
        self.ops_interactive
    }

    /// Memory limit for interactive logins, in bytes.
    pub fn mem_interactive(&self) -> usize {
        self.mem_interactive
    }

    /// Operations limit for high-value secrets.
    pub fn ops_sensitive(&self) -> u64 {
        self.ops_sensitive
    }

    /// Memory limit for high-value secrets, in bytes.
    pub fn mem_sensitive(&self) -> usize {
        self.mem_sensitive
    }

    fn check_limits(&self, opslimit: u64, memlimit: usize) -> BrineResult<()> {
        check::len_range(
            "pwhash opslimit",
            opslimit as usize,
            self.ops_min as usize,
            self.ops_max as usize,
        )?;
        check::len_range("pwhash memlimit", memlimit, self.mem_min, self.mem_max)?;
        if self.pow2_memlimit {
            check::power_of_two("pwhash memlimit", memlimit as u64)?;
        }
        Ok(())
    }

    /// Derives `out.len()` bytes of key material from `password` and `salt`.
    ///
    /// Blocks until the work factor is spent; under memory pressure the
    /// native call may fail, surfacing as [`BrineError::Native`].
    pub fn derive(
        &self,
        out: &mut [u8],
        password: &[u8],
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
    ) -> BrineResult<()> {
        check::len_range("pwhash output", out.len(), self.out_min, self.out_max)?;
        check::exact_len("pwhash salt", salt.len(), self.salt_len)?;
        self.check_limits(opslimit, memlimit)?;
        if (self.derive_fn)(out, password, salt, opslimit, memlimit) != 0 {
            return Err(BrineError::Native { op: self.name });
        }
        Ok(())
    }

    /// Hashes `password` into a self-describing storable string that embeds
    /// the algorithm, limits, and a random salt.
    pub fn hash_str(&self, password: &[u8], opslimit: u64, memlimit: usize) -> BrineResult<String> {
        self.check_limits(opslimit, memlimit)?;
        let mut out = vec![0u8; self.str_len];
        if (self.str_hash_fn)(&mut out, password, opslimit, memlimit) != 0 {
            return Err(BrineError::Native { op: self.name });
        }
        let end = out.iter().position(|&b| b == 0).unwrap_or(out.len());
        out.truncate(end);
        String::from_utf8(out).map_err(|_| BrineError::Malformed {
            what: "password hash string",
        })
    }

    /// Verifies `password` against a stored hash string.
    ///
    /// Returns `Ok(false)` for a wrong password or an unparseable string;
    /// `Err` is reserved for precondition violations.
    pub fn verify_str(&self, stored: &str, password: &[u8]) -> BrineResult<bool> {
        if stored.len() >= self.str_len || stored.as_bytes().contains(&0) {
            return Err(BrineError::Malformed {
                what: "password hash string",
            });
        }
        let mut buf = vec![0u8; self.str_len];
        buf[..stored.len()].copy_from_slice(stored.as_bytes());
        Ok((self.str_verify_fn)(&buf, password) == 0)
    }

    /// Reports whether a stored hash string should be recomputed to match
    /// the given limits.
    ///
    /// # Errors
    ///
    /// Returns [`BrineError::Malformed`] if the string is not a hash this
    /// algorithm produced.
    pub fn needs_rehash(&self, stored: &str, opslimit: u64, memlimit: usize) -> BrineResult<bool> {
        if stored.len() >= self.str_len || stored.as_bytes().contains(&0) {
            return Err(BrineError::Malformed {
                what: "password hash string",
            });
        }
        let mut buf = vec![0u8; self.str_len];
        buf[..stored.len()].copy_from_slice(stored.as_bytes());
        match (self.needs_rehash_fn)(&buf, opslimit, memlimit) {
            0 => Ok(false),
            r if r > 0 => Ok(true),
            _ => Err(BrineError::Malformed {
                what: "password hash string",
            }),
        }
    }
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Dispatch and selection layer.
//!
//! One [`LazyCache`] static per concrete implementation: each algorithm
//! instance is constructed exactly once per process, on first use, and
//! shared from then on. Family accessors return the default variant; the
//! `*_variant` accessors select an alternate. All returned handles are
//! `Arc`s to stateless instances, safe to use from any thread.

use std::sync::Arc;

use crate::aead::{AeadCipher, AeadVariant};
use crate::auth::{AuthVariant, HmacAuth};
use crate::codec::Codec;
use crate::generichash::GenericHash;
use crate::hash::{HashVariant, ShaHash};
use crate::kdf::Kdf;
use crate::kx::Kx;
use crate::lazy::LazyCache;
use crate::pwhash::{PwHash, PwHashVariant};
use crate::scalarmult::ScalarMult;
use crate::secretbox::SecretBox;
use crate::shorthash::ShortHash;
use crate::sign::Sign;
use crate::types::BrineResult;

static AEAD_XCHACHA: LazyCache<AeadCipher> = LazyCache::new();
static AEAD_CHACHA_IETF: LazyCache<AeadCipher> = LazyCache::new();
static AEAD_CHACHA: LazyCache<AeadCipher> = LazyCache::new();
static AEAD_AES256GCM: LazyCache<AeadCipher> = LazyCache::new();
static AUTH_HMACSHA512256: LazyCache<HmacAuth> = LazyCache::new();
static AUTH_HMACSHA256: LazyCache<HmacAuth> = LazyCache::new();
static AUTH_HMACSHA512: LazyCache<HmacAuth> = LazyCache::new();
static HASH_SHA512: LazyCache<ShaHash> = LazyCache::new();
static HASH_SHA256: LazyCache<ShaHash> = LazyCache::new();
static PWHASH_ARGON2ID: LazyCache<PwHash> = LazyCache::new();
static PWHASH_ARGON2I: LazyCache<PwHash> = LazyCache::new();
static PWHASH_SCRYPT: LazyCache<PwHash> = LazyCache::new();
static SECRETBOX: LazyCache<SecretBox> = LazyCache::new();
static GENERICHASH: LazyCache<GenericHash> = LazyCache::new();
static KDF: LazyCache<Kdf> = LazyCache::new();
static KX: LazyCache<Kx> = LazyCache::new();
static SCALARMULT: LazyCache<ScalarMult> = LazyCache::new();
static SIGN: LazyCache<Sign> = LazyCache::new();
static SHORTHASH: LazyCache<ShortHash> = LazyCache::new();
static CODEC: LazyCache<Codec> = LazyCache::new();

/// The selected AEAD cipher variant.
pub fn aead_variant(variant: AeadVariant) -> BrineResult<Arc<AeadCipher>> {
    match variant {
        AeadVariant::XChaCha20Poly1305 => AEAD_XCHACHA.get_or_init(AeadCipher::xchacha20poly1305),
        AeadVariant::ChaCha20Poly1305Ietf => {
            AEAD_CHACHA_IETF.get_or_init(AeadCipher::chacha20poly1305_ietf)
        }
        AeadVariant::ChaCha20Poly1305 => AEAD_CHACHA.get_or_init(AeadCipher::chacha20poly1305),
        AeadVariant::Aes256Gcm => AEAD_AES256GCM.get_or_init(AeadCipher::aes256gcm),
    }
}

/// The default AEAD cipher (XChaCha20-Poly1305).
pub fn aead() -> BrineResult<Arc<AeadCipher>> {
    aead_variant(AeadVariant::XChaCha20Poly1305)
}

/// The selected MAC variant.
pub fn auth_variant(variant: AuthVariant) -> BrineResult<Arc<HmacAuth>> {
    match variant {
        AuthVariant::HmacSha512256 => AUTH_HMACSHA512256.get_or_init(HmacAuth::hmacsha512256),
        AuthVariant::HmacSha256 => AUTH_HMACSHA256.get_or_init(HmacAuth::hmacsha256),
        AuthVariant::HmacSha512 => AUTH_HMACSHA512.get_or_init(HmacAuth::hmacsha512),
    }
}

/// The default MAC (HMAC-SHA-512-256).
pub fn auth() -> BrineResult<Arc<HmacAuth>> {
    auth_variant(AuthVariant::HmacSha512256)
}

/// The selected unkeyed hash variant.
pub fn hash_variant(variant: HashVariant) -> BrineResult<Arc<ShaHash>> {
    match variant {
        HashVariant::Sha512 => HASH_SHA512.get_or_init(ShaHash::sha512),
        HashVariant::Sha256 => HASH_SHA256.get_or_init(ShaHash::sha256),
    }
}

/// The default unkeyed hash (SHA-512).
pub fn hash() -> BrineResult<Arc<ShaHash>> {
    hash_variant(HashVariant::Sha512)
}

/// The selected password-hashing variant.
pub fn pw_hash_variant(variant: PwHashVariant) -> BrineResult<Arc<PwHash>> {
    match variant {
        PwHashVariant::Argon2id => PWHASH_ARGON2ID.get_or_init(PwHash::argon2id),
        PwHashVariant::Argon2i => PWHASH_ARGON2I.get_or_init(PwHash::argon2i),
        PwHashVariant::Scrypt => PWHASH_SCRYPT.get_or_init(PwHash::scrypt),
    }
}

/// The default password hash (Argon2id).
pub fn pw_hash() -> BrineResult<Arc<PwHash>> {
    pw_hash_variant(PwHashVariant::Argon2id)
}

/// The XSalsa20-Poly1305 secret box.
pub fn secret_box() -> BrineResult<Arc<SecretBox>> {
    SECRETBOX.get_or_init(SecretBox::new)
}

/// The BLAKE2b generic hash.
pub fn generic_hash() -> BrineResult<Arc<GenericHash>> {
    GENERICHASH.get_or_init(GenericHash::new)
}

/// The BLAKE2b key-derivation function.
pub fn kdf() -> BrineResult<Arc<Kdf>> {
    KDF.get_or_init(Kdf::new)
}

/// The X25519 key exchange.
pub fn kx() -> BrineResult<Arc<Kx>> {
    KX.get_or_init(Kx::new)
}

/// Curve25519 scalar multiplication.
pub fn scalar_mult() -> BrineResult<Arc<ScalarMult>> {
    SCALARMULT.get_or_init(ScalarMult::new)
}

/// Ed25519 signatures.
pub fn sign() -> BrineResult<Arc<Sign>> {
    SIGN.get_or_init(Sign::new)
}

/// SipHash-2-4 short-input hashing.
pub fn short_hash() -> BrineResult<Arc<ShortHash>> {
    SHORTHASH.get_or_init(ShortHash::new)
}

/// Hex and Base64 codecs.
pub fn codec() -> BrineResult<Arc<Codec>> {
    CODEC.get_or_init(Codec::new)
}

// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Brine Sodium Layer
// Licensed under the MIT License

//! Hardened safety and ergonomics layer over libsodium.
//!
//! libsodium owns every algorithm; this crate owns the boundary. Every
//! native call receives correctly sized, writable, stable memory because the
//! contract checks in [`check`] and the views in [`view`] ran first, in safe
//! code, where a violation is an error instead of undefined behavior.
//! Algorithm families (AEAD, MAC, hashing, key derivation, key exchange,
//! password hashing, signatures, scalar multiplication, codecs) expose
//! native-queried size constants and interchangeable variants through the
//! lazily cached singletons in [`registry`].
//!
//! # Crate layout
//!
//! * [`types`] -- error types and the zeroize-on-drop byte container.
//! * [`check`] -- buffer contract checks run before every native call.
//! * [`mem`] -- constant-time comparison and wiping.
//! * [`view`] -- position/limit buffer views and boundary normalization.
//! * [`init`] -- one-time process-wide libsodium initialization.
//! * [`lazy`] -- thread-safe one-time-initialization cache.
//! * [`state`] -- opaque native state regions for streaming primitives.
//! * [`multipart`] -- the generic init/update/finalize session wrapper.
//! * [`registry`] -- default and named-variant accessors per family.
//! * one module per algorithm family ([`aead`], [`auth`], [`generichash`],
//!   [`hash`], [`kdf`], [`kx`], [`pwhash`], [`scalarmult`], [`secretbox`],
//!   [`sign`], [`shorthash`], [`codec`]).

/// Authenticated encryption with associated data.
pub mod aead;
/// Secret-key message authentication (HMAC family).
pub mod auth;
/// Buffer contract checks.
pub mod check;
/// Hex and Base64 codecs.
pub mod codec;
/// BLAKE2b generic hashing.
pub mod generichash;
/// SHA-2 unkeyed hashing.
pub mod hash;
/// One-time libsodium initialization.
pub mod init;
/// BLAKE2b key derivation.
pub mod kdf;
/// X25519 key exchange.
pub mod kx;
/// Lazy singleton cache for algorithm instances.
pub mod lazy;
/// Constant-time comparison and wiping.
pub mod mem;
/// Generic streaming (init/update/finalize) sessions.
pub mod multipart;
/// Password hashing (Argon2, scrypt).
pub mod pwhash;
/// Dispatch and selection of concrete implementations.
pub mod registry;
/// Curve25519 scalar multiplication.
pub mod scalarmult;
/// XSalsa20-Poly1305 secret-key encryption.
pub mod secretbox;
/// SipHash-2-4 short-input hashing.
pub mod shorthash;
/// Ed25519 signatures.
pub mod sign;
/// Opaque native state regions.
pub mod state;
/// Shared error and buffer types.
pub mod types;
/// Sized buffer views and boundary normalization.
pub mod view;

pub use types::{BrineError, BrineResult, SecureBytes};

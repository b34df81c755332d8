use brine_core::pwhash::PwHashVariant;
use brine_core::registry;
use brine_core::types::BrineError;

// The minimum limits keep the Argon2 tests fast; they are far below any
// production setting.
fn fast_limits() -> (u64, usize) {
    (1, 16_384)
}

#[test]
fn derive_is_deterministic_for_fixed_salt() {
    let pwhash = registry::pw_hash().unwrap();
    let (ops, mem) = fast_limits();
    let salt = vec![0x7Au8; pwhash.salt_len()];

    let mut out1 = vec![0u8; 32];
    let mut out2 = vec![0u8; 32];
    pwhash
        .derive(&mut out1, b"correct horse", &salt, ops, mem)
        .unwrap();
    pwhash
        .derive(&mut out2, b"correct horse", &salt, ops, mem)
        .unwrap();
    assert_eq!(out1, out2);

    let mut other = vec![0u8; 32];
    pwhash
        .derive(&mut other, b"battery staple", &salt, ops, mem)
        .unwrap();
    assert_ne!(out1, other);
}

#[test]
fn derive_rejects_wrong_salt_length() {
    let pwhash = registry::pw_hash().unwrap();
    let (ops, mem) = fast_limits();
    let mut out = vec![0u8; 32];
    let short_salt = vec![0u8; pwhash.salt_len() - 1];
    assert!(matches!(
        pwhash.derive(&mut out, b"pw", &short_salt, ops, mem),
        Err(BrineError::BadLength { .. })
    ));
}

#[test]
fn derive_rejects_out_of_range_limits() {
    let pwhash = registry::pw_hash().unwrap();
    let salt = vec![0u8; pwhash.salt_len()];
    let mut out = vec![0u8; 32];
    assert!(matches!(
        pwhash.derive(&mut out, b"pw", &salt, 0, 16_384),
        Err(BrineError::LengthRange { .. })
    ));
    assert!(matches!(
        pwhash.derive(&mut out, b"pw", &salt, 1, 1),
        Err(BrineError::LengthRange { .. })
    ));
}

#[test]
fn hash_str_verify_roundtrip() {
    let pwhash = registry::pw_hash().unwrap();
    let (ops, mem) = fast_limits();

    let stored = pwhash.hash_str(b"hunter2", ops, mem).unwrap();
    assert!(stored.starts_with("$argon2id$"));
    assert!(pwhash.verify_str(&stored, b"hunter2").unwrap());
    assert!(!pwhash.verify_str(&stored, b"hunter3").unwrap());
}

#[test]
fn verify_str_treats_garbage_as_mismatch() {
    let pwhash = registry::pw_hash().unwrap();
    // Not a hash string at all: an expected runtime outcome, not an error.
    assert!(!pwhash.verify_str("$argon2id$garbage", b"pw").unwrap());
}

#[test]
fn needs_rehash_tracks_limits() {
    let pwhash = registry::pw_hash().unwrap();
    let (ops, mem) = fast_limits();

    let stored = pwhash.hash_str(b"pw", ops, mem).unwrap();
    assert!(!pwhash.needs_rehash(&stored, ops, mem).unwrap());
    assert!(pwhash.needs_rehash(&stored, ops + 1, mem).unwrap());
    assert!(pwhash.needs_rehash("not a hash", ops, mem).is_err());
}

#[test]
fn argon2i_variant_is_interchangeable() {
    let pwhash = registry::pw_hash_variant(PwHashVariant::Argon2i).unwrap();
    let (_, mem) = fast_limits();
    // Argon2i's floor is 3 passes.
    let ops = 3;

    let stored = pwhash.hash_str(b"hunter2", ops, mem).unwrap();
    assert!(stored.starts_with("$argon2i$"));
    assert!(pwhash.verify_str(&stored, b"hunter2").unwrap());
    assert!(!pwhash.verify_str(&stored, b"wrong").unwrap());
}

#[test]
fn scrypt_requires_power_of_two_memlimit() {
    let pwhash = registry::pw_hash_variant(PwHashVariant::Scrypt).unwrap();
    let salt = vec![0x55u8; pwhash.salt_len()];
    let mut out = vec![0u8; 32];

    // 2^24 bytes passes the power-of-two gate.
    pwhash
        .derive(&mut out, b"pw", &salt, 32_768, 16_777_216)
        .unwrap();

    let verdict = pwhash.derive(&mut out, b"pw", &salt, 32_768, 17_000_000);
    assert!(matches!(verdict, Err(BrineError::NotPowerOfTwo { .. })));
}

#[test]
fn scrypt_hash_str_roundtrip() {
    let pwhash = registry::pw_hash_variant(PwHashVariant::Scrypt).unwrap();
    let stored = pwhash.hash_str(b"hunter2", 32_768, 16_777_216).unwrap();
    assert!(stored.starts_with("$7$"));
    assert!(pwhash.verify_str(&stored, b"hunter2").unwrap());
    assert!(!pwhash.verify_str(&stored, b"wrong").unwrap());
}

#[test]
fn interactive_limits_are_exposed() {
    let pwhash = registry::pw_hash().unwrap();
    assert!(pwhash.ops_interactive() >= 1);
    assert!(pwhash.mem_interactive() >= 16_384);
    assert!(pwhash.ops_sensitive() >= pwhash.ops_interactive());
    assert!(pwhash.mem_sensitive() >= pwhash.mem_interactive());
}

use brine_core::registry;
use brine_core::types::BrineError;

#[test]
fn kx_session_keys_cross_match() {
    let kx = registry::kx().unwrap();
    let client = kx.keypair().unwrap();
    let server = kx.keypair().unwrap();

    let client_keys = kx
        .client_session_keys(&client.public_key, &client.secret_key, &server.public_key)
        .unwrap();
    let server_keys = kx
        .server_session_keys(&server.public_key, &server.secret_key, &client.public_key)
        .unwrap();

    // What the client receives on is what the server transmits on.
    assert_eq!(client_keys.rx.data(), server_keys.tx.data());
    assert_eq!(client_keys.tx.data(), server_keys.rx.data());
    assert_ne!(client_keys.rx.data(), client_keys.tx.data());
}

#[test]
fn kx_seed_keypair_is_deterministic() {
    let kx = registry::kx().unwrap();
    let seed = vec![0x31u8; kx.seed_len()];
    let a = kx.seed_keypair(&seed).unwrap();
    let b = kx.seed_keypair(&seed).unwrap();
    assert_eq!(a.public_key, b.public_key);
    assert_eq!(a.secret_key.data(), b.secret_key.data());
}

#[test]
fn kx_rejects_wrong_key_lengths() {
    let kx = registry::kx().unwrap();
    let pair = kx.keypair().unwrap();
    let short = vec![0u8; kx.public_key_len() - 1];
    assert!(matches!(
        kx.client_session_keys(&pair.public_key, &pair.secret_key, &short),
        Err(BrineError::BadLength { .. })
    ));
}

#[test]
fn kdf_subkeys_differ_by_id_and_context() {
    let kdf = registry::kdf().unwrap();
    let key = kdf.keygen();

    let mut sub1 = vec![0u8; 32];
    let mut sub2 = vec![0u8; 32];
    let mut sub3 = vec![0u8; 32];
    kdf.derive_from_key(&mut sub1, 1, b"Examples", &key).unwrap();
    kdf.derive_from_key(&mut sub2, 2, b"Examples", &key).unwrap();
    kdf.derive_from_key(&mut sub3, 1, b"Examplez", &key).unwrap();

    assert_ne!(sub1, sub2);
    assert_ne!(sub1, sub3);

    let mut again = vec![0u8; 32];
    kdf.derive_from_key(&mut again, 1, b"Examples", &key).unwrap();
    assert_eq!(sub1, again);
}

#[test]
fn kdf_enforces_context_and_subkey_bounds() {
    let kdf = registry::kdf().unwrap();
    let key = kdf.keygen();

    let mut subkey = vec![0u8; 32];
    assert!(matches!(
        kdf.derive_from_key(&mut subkey, 1, b"short", &key),
        Err(BrineError::BadLength { .. })
    ));

    let mut tiny = vec![0u8; kdf.subkey_min() - 1];
    assert!(matches!(
        kdf.derive_from_key(&mut tiny, 1, b"Examples", &key),
        Err(BrineError::LengthRange { .. })
    ));

    let mut huge = vec![0u8; kdf.subkey_max() + 1];
    assert!(matches!(
        kdf.derive_from_key(&mut huge, 1, b"Examples", &key),
        Err(BrineError::LengthRange { .. })
    ));
}

#[test]
fn scalarmult_diffie_hellman_commutes() {
    let sm = registry::scalar_mult().unwrap();
    let a = vec![0x11u8; sm.scalar_len()];
    let b = vec![0x22u8; sm.scalar_len()];

    let pk_a = sm.base(&a).unwrap();
    let pk_b = sm.base(&b).unwrap();

    let shared_ab = sm.scalar_mult(&a, &pk_b).unwrap();
    let shared_ba = sm.scalar_mult(&b, &pk_a).unwrap();
    assert_eq!(shared_ab.data(), shared_ba.data());
}

#[test]
fn scalarmult_rejects_wrong_lengths() {
    let sm = registry::scalar_mult().unwrap();
    assert!(matches!(
        sm.base(&[0u8; 4]),
        Err(BrineError::BadLength { .. })
    ));
    let scalar = vec![0x11u8; sm.scalar_len()];
    assert!(matches!(
        sm.scalar_mult(&scalar, &[0u8; 4]),
        Err(BrineError::BadLength { .. })
    ));
}

#[test]
fn scalarmult_rejects_small_order_point() {
    let sm = registry::scalar_mult().unwrap();
    let scalar = vec![0x11u8; sm.scalar_len()];
    // The all-zero point has small order; the native call reports failure.
    let zero_point = vec![0u8; sm.point_len()];
    assert!(matches!(
        sm.scalar_mult(&scalar, &zero_point),
        Err(BrineError::Native { .. })
    ));
}

use std::sync::Arc;

use brine_core::aead::{AeadCipher, AeadVariant};
use brine_core::registry;
use brine_core::types::BrineError;

fn each_available_variant() -> Vec<Arc<AeadCipher>> {
    let mut ciphers = Vec::new();
    for variant in [
        AeadVariant::XChaCha20Poly1305,
        AeadVariant::ChaCha20Poly1305Ietf,
        AeadVariant::ChaCha20Poly1305,
        AeadVariant::Aes256Gcm,
    ] {
        match registry::aead_variant(variant) {
            Ok(cipher) => ciphers.push(cipher),
            // AES-256-GCM is hardware-gated; skipping it is the correct
            // outcome on machines without acceleration.
            Err(BrineError::Unavailable { .. }) => {
                assert_eq!(variant, AeadVariant::Aes256Gcm);
            }
            Err(e) => panic!("constructing {variant:?} failed: {e}"),
        }
    }
    ciphers
}

#[test]
fn combined_roundtrip_with_associated_data() {
    for cipher in each_available_variant() {
        let key = cipher.keygen();
        let nonce = cipher.gen_nonce();
        let plaintext = b"attack at dawn";
        let ad = b"message header v1";

        let mut ciphertext = vec![0u8; plaintext.len() + cipher.tag_len()];
        cipher
            .seal(&mut ciphertext, plaintext, ad, &nonce, &key)
            .unwrap();

        let mut recovered = vec![0u8; plaintext.len()];
        assert!(
            cipher
                .open(&mut recovered, &ciphertext, ad, &nonce, &key)
                .unwrap(),
            "{} roundtrip",
            cipher.name()
        );
        assert_eq!(&recovered, plaintext);
    }
}

#[test]
fn roundtrip_all_lengths_up_to_64() {
    for cipher in each_available_variant() {
        let key = cipher.keygen();
        for len in 0..=64usize {
            let plaintext: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(7)).collect();
            let nonce = cipher.gen_nonce();
            let mut ciphertext = vec![0u8; len + cipher.tag_len()];
            cipher
                .seal(&mut ciphertext, &plaintext, b"", &nonce, &key)
                .unwrap();

            let mut recovered = vec![0u8; len];
            assert!(cipher
                .open(&mut recovered, &ciphertext, b"", &nonce, &key)
                .unwrap());
            assert_eq!(recovered, plaintext, "{} len {len}", cipher.name());
        }
    }
}

#[test]
fn mismatched_associated_data_fails_as_false() {
    for cipher in each_available_variant() {
        let key = cipher.keygen();
        let nonce = cipher.gen_nonce();
        let plaintext = b"bound to its header";

        let mut ciphertext = vec![0u8; plaintext.len() + cipher.tag_len()];
        cipher
            .seal(&mut ciphertext, plaintext, b"header-a", &nonce, &key)
            .unwrap();

        let mut recovered = vec![0u8; plaintext.len()];
        assert!(!cipher
            .open(&mut recovered, &ciphertext, b"header-b", &nonce, &key)
            .unwrap());
    }
}

#[test]
fn every_bit_flip_is_rejected_as_false() {
    for cipher in each_available_variant() {
        let key = cipher.keygen();
        let nonce = cipher.gen_nonce();
        let plaintext = b"integrity sweep";

        let mut ciphertext = vec![0u8; plaintext.len() + cipher.tag_len()];
        cipher
            .seal(&mut ciphertext, plaintext, b"", &nonce, &key)
            .unwrap();

        for i in 0..ciphertext.len() {
            let mut corrupted = ciphertext.clone();
            corrupted[i] ^= 0x01;
            let mut recovered = vec![0u8; plaintext.len()];
            let verdict = cipher.open(&mut recovered, &corrupted, b"", &nonce, &key);
            assert_eq!(
                verdict,
                Ok(false),
                "{} byte {i} flip must fail verification",
                cipher.name()
            );
        }
    }
}

#[test]
fn detached_roundtrip_matches_combined_layout() {
    for cipher in each_available_variant() {
        let key = cipher.keygen();
        let nonce = cipher.gen_nonce();
        let plaintext = b"two output layouts, one cipher";
        let ad = b"ad";

        let mut combined = vec![0u8; plaintext.len() + cipher.tag_len()];
        cipher
            .seal(&mut combined, plaintext, ad, &nonce, &key)
            .unwrap();

        let mut detached = vec![0u8; plaintext.len()];
        let mut tag = vec![0u8; cipher.tag_len()];
        cipher
            .seal_detached(&mut detached, &mut tag, plaintext, ad, &nonce, &key)
            .unwrap();

        // AEAD combined layout is ciphertext followed by tag.
        assert_eq!(&combined[..plaintext.len()], &detached[..]);
        assert_eq!(&combined[plaintext.len()..], &tag[..]);

        let mut recovered = vec![0u8; plaintext.len()];
        assert!(cipher
            .open_detached(&mut recovered, &detached, &tag, ad, &nonce, &key)
            .unwrap());
        assert_eq!(&recovered, plaintext);
    }
}

#[test]
fn exact_size_constants_pass_and_off_by_one_fails() {
    for cipher in each_available_variant() {
        let good_key = vec![0u8; cipher.key_len()];
        let good_nonce = vec![0u8; cipher.nonce_len()];
        let mut ciphertext = vec![0u8; 3 + cipher.tag_len()];
        cipher
            .seal(&mut ciphertext, b"abc", b"", &good_nonce, &good_key)
            .unwrap();

        let long_key = vec![0u8; cipher.key_len() + 1];
        assert!(matches!(
            cipher.seal(&mut ciphertext, b"abc", b"", &good_nonce, &long_key),
            Err(BrineError::BadLength { .. })
        ));

        let short_nonce = vec![0u8; cipher.nonce_len() - 1];
        assert!(matches!(
            cipher.seal(&mut ciphertext, b"abc", b"", &short_nonce, &good_key),
            Err(BrineError::BadLength { .. })
        ));

        let mut short_ct = vec![0u8; 3 + cipher.tag_len() - 1];
        assert!(matches!(
            cipher.seal(&mut short_ct, b"abc", b"", &good_nonce, &good_key),
            Err(BrineError::BadLength { .. })
        ));
    }
}

#[test]
fn variants_expose_distinct_nonce_lengths() {
    let xchacha = registry::aead_variant(AeadVariant::XChaCha20Poly1305).unwrap();
    let chacha_ietf = registry::aead_variant(AeadVariant::ChaCha20Poly1305Ietf).unwrap();
    let chacha = registry::aead_variant(AeadVariant::ChaCha20Poly1305).unwrap();
    assert!(xchacha.nonce_len() > chacha_ietf.nonce_len());
    assert!(chacha_ietf.nonce_len() > chacha.nonce_len());
    assert_eq!(xchacha.key_len(), chacha.key_len());
}

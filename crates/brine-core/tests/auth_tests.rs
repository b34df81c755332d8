use brine_core::auth::AuthVariant;
use brine_core::registry;
use brine_core::types::BrineError;

const ALL_VARIANTS: [AuthVariant; 3] = [
    AuthVariant::HmacSha512256,
    AuthVariant::HmacSha256,
    AuthVariant::HmacSha512,
];

#[test]
fn mac_and_verify_roundtrip() {
    for variant in ALL_VARIANTS {
        let auth = registry::auth_variant(variant).unwrap();
        let key = auth.keygen();
        let message = b"authenticate me";

        let mut tag = vec![0u8; auth.tag_len()];
        auth.mac(&mut tag, message, &key).unwrap();
        assert!(auth.verify(&tag, message, &key).unwrap());
    }
}

#[test]
fn tampered_tag_verifies_false() {
    for variant in ALL_VARIANTS {
        let auth = registry::auth_variant(variant).unwrap();
        let key = auth.keygen();
        let message = b"authenticate me";

        let mut tag = vec![0u8; auth.tag_len()];
        auth.mac(&mut tag, message, &key).unwrap();
        tag[0] ^= 0xFF;
        assert!(!auth.verify(&tag, message, &key).unwrap());
    }
}

#[test]
fn tampered_message_verifies_false() {
    let auth = registry::auth().unwrap();
    let key = auth.keygen();
    let mut tag = vec![0u8; auth.tag_len()];
    auth.mac(&mut tag, b"original", &key).unwrap();
    assert!(!auth.verify(&tag, b"originaL", &key).unwrap());
}

#[test]
fn wrong_key_length_is_precondition_error() {
    let auth = registry::auth().unwrap();
    let short_key = vec![0u8; auth.key_len() - 1];
    let mut tag = vec![0u8; auth.tag_len()];
    assert!(matches!(
        auth.mac(&mut tag, b"msg", &short_key),
        Err(BrineError::BadLength { .. })
    ));
}

#[test]
fn wrong_tag_length_is_precondition_error() {
    let auth = registry::auth().unwrap();
    let key = auth.keygen();
    let short_tag = vec![0u8; auth.tag_len() - 1];
    assert!(matches!(
        auth.verify(&short_tag, b"msg", &key),
        Err(BrineError::BadLength { .. })
    ));
}

#[test]
fn streaming_equals_one_shot() {
    for variant in ALL_VARIANTS {
        let auth = registry::auth_variant(variant).unwrap();
        let key = auth.keygen();
        let message = b"the quick brown fox jumps over the lazy dog";

        let mut expected = vec![0u8; auth.tag_len()];
        auth.mac(&mut expected, message, &key).unwrap();

        let mut stream = auth.stream(&key).unwrap();
        stream.update(&message[..9]).unwrap();
        stream.update(b"").unwrap();
        stream.update(&message[9..]).unwrap();
        let streamed = stream.finalize_vec().unwrap();

        assert_eq!(streamed, expected, "{:?}", variant);
    }
}

#[test]
fn stream_verify_finalize_uses_boolean_outcome() {
    let auth = registry::auth().unwrap();
    let key = auth.keygen();
    let message = b"streamed verification";

    let mut tag = vec![0u8; auth.tag_len()];
    auth.mac(&mut tag, message, &key).unwrap();

    let mut stream = auth.stream(&key).unwrap();
    stream.update(message).unwrap();
    assert!(stream.verify_finalize(&tag).unwrap());

    let mut stream = auth.stream(&key).unwrap();
    stream.update(message).unwrap();
    tag[3] ^= 0x10;
    assert!(!stream.verify_finalize(&tag).unwrap());
}

#[test]
fn variants_produce_distinct_tags() {
    let a = registry::auth_variant(AuthVariant::HmacSha512256).unwrap();
    let b = registry::auth_variant(AuthVariant::HmacSha256).unwrap();
    assert_eq!(a.tag_len(), b.tag_len());

    let key = vec![0x11u8; a.key_len()];
    let mut tag_a = vec![0u8; a.tag_len()];
    let mut tag_b = vec![0u8; b.tag_len()];
    a.mac(&mut tag_a, b"same message", &key).unwrap();
    b.mac(&mut tag_b, b"same message", &key).unwrap();
    assert_ne!(tag_a, tag_b);
}

use brine_core::codec::Base64Variant;
use brine_core::registry;

#[test]
fn hex_encode_known_bytes() {
    let codec = registry::codec().unwrap();
    assert_eq!(codec.hex_encode(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap(), "deadbeef");
    assert_eq!(codec.hex_encode(&[]).unwrap(), "");
}

#[test]
fn hex_roundtrip() {
    let codec = registry::codec().unwrap();
    let data: Vec<u8> = (0u8..=255).collect();
    let hex = codec.hex_encode(&data).unwrap();
    assert_eq!(codec.hex_decode(&hex).unwrap(), data);
}

#[test]
fn hex_decode_accepts_mixed_case() {
    let codec = registry::codec().unwrap();
    assert_eq!(
        codec.hex_decode("DeadBEEF").unwrap(),
        vec![0xDE, 0xAD, 0xBE, 0xEF]
    );
}

#[test]
fn hex_decode_rejects_invalid_input() {
    let codec = registry::codec().unwrap();
    assert!(codec.hex_decode("xyz").is_err());
    assert!(codec.hex_decode("abc").is_err());
    assert!(codec.hex_decode("ab cd").is_err());
}

#[test]
fn base64_roundtrip_all_variants() {
    let codec = registry::codec().unwrap();
    let data = b"any carnal pleasure.";
    for variant in [
        Base64Variant::Original,
        Base64Variant::OriginalNoPadding,
        Base64Variant::UrlSafe,
        Base64Variant::UrlSafeNoPadding,
    ] {
        let encoded = codec.base64_encode(data, variant).unwrap();
        assert_eq!(
            codec.base64_decode(&encoded, variant).unwrap(),
            data,
            "{variant:?}"
        );
    }
}

#[test]
fn base64_known_encoding() {
    let codec = registry::codec().unwrap();
    assert_eq!(
        codec.base64_encode(b"sodium", Base64Variant::Original).unwrap(),
        "c29kaXVt"
    );
    assert_eq!(
        codec.base64_encode(b"light w", Base64Variant::Original).unwrap(),
        "bGlnaHQgdw=="
    );
    assert_eq!(
        codec
            .base64_encode(b"light w", Base64Variant::OriginalNoPadding)
            .unwrap(),
        "bGlnaHQgdw"
    );
}

#[test]
fn base64_urlsafe_uses_urlsafe_alphabet() {
    let codec = registry::codec().unwrap();
    let data = [0xFB, 0xEF, 0xFF];
    let original = codec.base64_encode(&data, Base64Variant::Original).unwrap();
    let urlsafe = codec.base64_encode(&data, Base64Variant::UrlSafe).unwrap();
    assert!(original.contains('+') || original.contains('/'));
    assert!(!urlsafe.contains('+') && !urlsafe.contains('/'));
}

#[test]
fn base64_decode_rejects_wrong_variant_and_garbage() {
    let codec = registry::codec().unwrap();
    assert!(codec
        .base64_decode("not base64!!", Base64Variant::Original)
        .is_err());
    // Padded input cannot decode under the unpadded variant.
    assert!(codec
        .base64_decode("bGlnaHQgdw==", Base64Variant::OriginalNoPadding)
        .is_err());
}

#[test]
fn empty_inputs_are_fine() {
    let codec = registry::codec().unwrap();
    assert_eq!(codec.hex_decode("").unwrap(), Vec::<u8>::new());
    assert_eq!(
        codec.base64_encode(b"", Base64Variant::Original).unwrap(),
        ""
    );
    assert_eq!(
        codec.base64_decode("", Base64Variant::Original).unwrap(),
        Vec::<u8>::new()
    );
}

use brine_core::init;
use brine_core::mem;

#[test]
fn constant_time_eq_equal_slices() {
    init::ensure_init().unwrap();
    assert!(mem::constant_time_eq(b"identical", b"identical"));
}

#[test]
fn constant_time_eq_empty_slices_are_equal() {
    init::ensure_init().unwrap();
    assert!(mem::constant_time_eq(b"", b""));
}

#[test]
fn constant_time_eq_rejects_different_content() {
    init::ensure_init().unwrap();
    let zeros = [0x00u8; 32];
    let ones = [0xFFu8; 32];
    assert!(!mem::constant_time_eq(&zeros, &ones));
}

#[test]
fn constant_time_eq_rejects_single_byte_difference() {
    init::ensure_init().unwrap();
    let a = [0x42u8; 32];
    for i in 0..32 {
        let mut b = a;
        b[i] ^= 0x01;
        assert!(!mem::constant_time_eq(&a, &b));
    }
}

#[test]
fn constant_time_eq_rejects_length_mismatch() {
    init::ensure_init().unwrap();
    assert!(!mem::constant_time_eq(b"abc", b"abcd"));
    assert!(!mem::constant_time_eq(b"", b"a"));
}

#[test]
fn wipe_zeroes_every_byte() {
    init::ensure_init().unwrap();
    let mut data = [0xAAu8; 64];
    mem::wipe(&mut data);
    assert!(data.iter().all(|&b| b == 0));
}

#[test]
fn wipe_accepts_empty_slice() {
    init::ensure_init().unwrap();
    let mut data: [u8; 0] = [];
    mem::wipe(&mut data);
}

#[test]
fn is_zero_probes_content() {
    init::ensure_init().unwrap();
    assert!(mem::is_zero(&[0u8; 16]));
    assert!(!mem::is_zero(&[0, 0, 1, 0]));
}

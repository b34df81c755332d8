use brine_core::check;
use brine_core::mem;
use brine_core::types::BrineError;
use brine_core::view::BufView;

#[test]
fn exact_len_accepts_match() {
    check::exact_len("key", 32, 32).unwrap();
}

#[test]
fn exact_len_rejects_mismatch() {
    let err = check::exact_len("key", 31, 32).unwrap_err();
    assert_eq!(
        err,
        BrineError::BadLength {
            name: "key",
            actual: 31,
            expected: 32
        }
    );
}

#[test]
fn len_range_bounds_are_inclusive() {
    check::len_range("out", 16, 16, 64).unwrap();
    check::len_range("out", 64, 16, 64).unwrap();
    assert!(check::len_range("out", 15, 16, 64).is_err());
    assert!(check::len_range("out", 65, 16, 64).is_err());
}

#[test]
fn min_len_is_unbounded_above() {
    check::min_len("buffer", usize::MAX, 1).unwrap();
    assert!(check::min_len("buffer", 0, 1).is_err());
}

#[test]
fn non_negative_rejects_negative() {
    check::non_negative("limit", 0).unwrap();
    check::non_negative("limit", i64::MAX).unwrap();
    assert!(check::non_negative("limit", -1).is_err());
    assert!(check::non_negative("limit", i64::MIN).is_err());
}

#[test]
fn offset_window_rejects_overrun() {
    // 5 + 10 > 10
    assert!(check::offset_window(10, 5, 10).is_err());
}

#[test]
fn offset_window_accepts_exact_fit() {
    check::offset_window(10, 5, 5).unwrap();
    check::offset_window(10, 0, 10).unwrap();
    check::offset_window(10, 10, 0).unwrap();
}

#[test]
fn offset_window_survives_overflowing_sum() {
    assert!(check::offset_window(10, usize::MAX, 2).is_err());
}

#[test]
fn power_of_two_accepts_powers() {
    check::power_of_two("memlimit", 1).unwrap();
    check::power_of_two("memlimit", 2).unwrap();
    check::power_of_two("memlimit", 16_777_216).unwrap();
    check::power_of_two("memlimit", 1 << 62).unwrap();
}

#[test]
fn power_of_two_rejects_zero_and_composites() {
    assert!(check::power_of_two("memlimit", 0).is_err());
    assert!(check::power_of_two("memlimit", 3).is_err());
    assert!(check::power_of_two("memlimit", 16_777_217).is_err());
    // A negative count arriving through the signed checker never reaches
    // the power-of-two check.
    assert!(check::non_negative("memlimit", -4).is_err());
}

#[test]
fn writable_distinguishes_view_kinds() {
    let data = [0u8; 8];
    let ro = BufView::from_slice(&data);
    assert_eq!(check::writable(&ro).unwrap_err(), BrineError::ReadOnly);

    let mut data = [0u8; 8];
    let rw = BufView::from_mut_slice(&mut data);
    check::writable(&rw).unwrap();
}

#[test]
fn view_window_tracks_position_and_limit() {
    let data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let mut view = BufView::window(&data, 2, 5).unwrap();
    assert_eq!(view.position(), 2);
    assert_eq!(view.limit(), 7);
    assert_eq!(view.remaining(), 5);
    assert_eq!(view.remaining_bytes(), &[3, 4, 5, 6, 7]);

    view.advance(2).unwrap();
    assert_eq!(view.remaining_bytes(), &[5, 6, 7]);
    assert!(view.advance(4).is_err());
}

#[test]
fn view_window_rejects_bad_offsets() {
    let data = [0u8; 10];
    assert!(BufView::window(&data, 5, 10).is_err());
    assert!(BufView::window(&data, 11, 0).is_err());
}

#[test]
fn read_only_view_rejects_mutable_access() {
    let data = [0u8; 4];
    let mut view = BufView::from_slice(&data);
    assert_eq!(view.remaining_mut().unwrap_err(), BrineError::ReadOnly);
}

#[test]
fn detach_copies_remaining_without_aliasing() {
    let mut data = *b"abcdef";
    let mut view = BufView::from_mut_slice(&mut data);
    view.advance(2).unwrap();
    let mut copy = view.detach();
    assert_eq!(copy.data(), b"cdef");

    copy.data_mut()[0] = b'X';
    assert_eq!(view.remaining_bytes(), b"cdef");
}

#[test]
fn wipe_view_zeroes_writable_window_only() {
    let mut data = *b"abcdefgh";
    let mut view = BufView::window_mut(&mut data, 2, 4).unwrap();
    mem::wipe_view(&mut view);
    assert_eq!(&data, b"ab\0\0\0\0gh");
}

#[test]
fn wipe_view_is_noop_for_read_only() {
    let data = *b"abcd";
    let mut view = BufView::from_slice(&data);
    mem::wipe_view(&mut view);
    assert_eq!(&data, b"abcd");
}

use siptag::SipKey;
use siptag::hash::siphash::computations::State;
use siptag::hash::siphash::core::{compress, finalize, siphash24};
use siptag::hash::siphash::{C_ROUNDS, D_ROUNDS, SIP_INIT};

fn state(v: [u64; 4]) -> State {
    State {
        v0: v[0],
        v1: v[1],
        v2: v[2],
        v3: v[3],
    }
}

#[test]
fn init_constants_spell_ascii() {
    assert_eq!(&SIP_INIT[0].to_be_bytes(), b"somepseu");
    assert_eq!(&SIP_INIT[1].to_be_bytes(), b"dorandom");
    assert_eq!(&SIP_INIT[2].to_be_bytes(), b"lygenera");
    assert_eq!(&SIP_INIT[3].to_be_bytes(), b"tedbytes");
}

#[test]
fn round_counts() {
    assert_eq!(C_ROUNDS, 2);
    assert_eq!(D_ROUNDS, 4);
}

// Initial state for key 00 01 .. 0f, as listed in the SipHash paper.
#[test]
fn key_schedule_reference_state() {
    let s = State::new(0x0706050403020100, 0x0f0e0d0c0b0a0908);

    assert_eq!(
        s,
        state([
            0x7469686173716475,
            0x6b617f6d656e6665,
            0x6b7f62616d677361,
            0x7b6b696e727e6c7b,
        ])
    );
}

#[test]
fn sip_round_known_answer() {
    let mut s = state([1, 2, 3, 4]);
    s.sip_round();

    assert_eq!(
        s,
        state([
            0x0000000300040007,
            0x000000008006400a,
            0x0000400a00000000,
            0x0000008300e40007,
        ])
    );
}

#[test]
fn sip_round_wraps_on_overflow() {
    let mut s = state([u64::MAX, 1, u64::MAX, 1]);
    s.sip_round();

    assert_eq!(
        s,
        state([
            0x0000000000010000,
            0x0000000040002000,
            0x0000200000000000,
            0x0000002000010000,
        ])
    );
}

#[test]
fn zero_state_is_a_fixed_point() {
    let mut s = state([0; 4]);
    s.sip_round();
    assert_eq!(s, state([0; 4]));
}

#[test]
fn c_rounds_is_two_sip_rounds() {
    let mut a = state([1, 2, 3, 4]);
    a.c_rounds();

    assert_eq!(
        a,
        state([
            0x808d807a00e3000a,
            0x2006c08648cd0018,
            0x48ef001800005090,
            0x8dad9c1a00031062,
        ])
    );
}

#[test]
fn d_rounds_is_four_sip_rounds() {
    let mut a = state([5, 6, 7, 8]);
    a.d_rounds();

    let mut b = state([5, 6, 7, 8]);
    for _ in 0..4 {
        b.sip_round();
    }

    assert_eq!(a, b);
}

#[test]
fn fold_xors_all_words() {
    let s = state([0xf0, 0x0f, 0xff00, 0]);
    assert_eq!(s.fold(), 0xffff);
}

#[test]
fn compress_and_finalize_match_siphash24() {
    let key = SipKey::new([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ]);
    let (k0, k1) = key.words();

    // Empty message: only the length-only word, which is zero.
    let mut s = State::new(k0, k1);
    compress(&mut s, 0);
    let tag = finalize(s);

    assert_eq!(tag, siphash24(&key, b""));
    assert_eq!(tag.to_le_bytes(), [0x31, 0x0e, 0x0e, 0xdd, 0x47, 0xdb, 0x6f, 0x72]);
}

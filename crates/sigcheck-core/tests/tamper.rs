//! Single-bit tampering must always be detected.

mod common;

use common::{Fixture, KEY, flip_bit};
use proptest::prelude::*;
use proptest::sample::Index;
use sigcheck_core::{FailureKind, SIGNATURE_LEN, Verifier};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: flipping any bit of the executable breaks verification.
    #[test]
    fn prop_flipped_target_bit_is_rejected(bit in any::<Index>()) {
        let fx = Fixture::new();
        let target = fx.path("tool");
        let mut data = fx.read(&target);
        let bit = bit.index(data.len() * 8);
        flip_bit(&mut data, bit);
        fx.write(&target, &data);

        let v = Verifier::with_key_bytes(KEY).verify(&target);
        prop_assert!(!v.is_ok());
        prop_assert_eq!(v.failure_kind(), Some(FailureKind::Mismatch));
    }

    /// Property: flipping any bit of the signature breaks verification.
    #[test]
    fn prop_flipped_signature_bit_is_rejected(bit in 0..SIGNATURE_LEN * 8) {
        let fx = Fixture::new();
        let sig = fx.sig_path("tool");
        let mut data = fx.read(&sig);
        flip_bit(&mut data, bit);
        fx.write(&sig, &data);

        let v = Verifier::with_key_bytes(KEY).verify(fx.path("tool"));
        prop_assert!(!v.is_ok());
        prop_assert_eq!(v.failure_kind(), Some(FailureKind::Mismatch));
    }
}

#[test]
fn flipped_bit_in_large_payload_is_rejected() {
    let fx = Fixture::new();
    let target = fx.path("payload.bin");
    let mut data = fx.read(&target);
    // Past the first 64 KiB chunk.
    let bit = (data.len() - 10) * 8 + 3;
    flip_bit(&mut data, bit);
    fx.write(&target, &data);

    let v = Verifier::with_key_bytes(KEY).verify(&target);
    assert_eq!(v.failure_kind(), Some(FailureKind::Mismatch));
}

#[test]
fn appending_to_empty_target_is_rejected() {
    let fx = Fixture::new();
    let target = fx.path("empty.bin");
    fx.write(&target, b"\0");
    let v = Verifier::with_key_bytes(KEY).verify(&target);
    assert_eq!(v.failure_kind(), Some(FailureKind::Mismatch));
}

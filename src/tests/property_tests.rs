use num_bigint::BigUint;
use num_traits::One;

use super::small_group;
use crate::ffdh::{exponent_size, Group};
use crate::groups;

#[test]
fn test_agreement_repeats() {
    let mut rng = rand::thread_rng();
    let g = small_group();

    for _ in 0..10 {
        let (sa, pub_a) = g.gen_key(&mut rng);
        let (sb, pub_b) = g.gen_key(&mut rng);
        let za = g.shared(&sa, &pub_b).expect("peer key rejected");
        let zb = g.shared(&sb, &pub_a).expect("peer key rejected");
        assert_eq!(za, zb);
    }
}

#[test]
fn test_default_exponent_size() {
    let mut rng = rand::thread_rng();

    // For a safe-prime group the order cap (half the modulus size) is far
    // above the recommended size, so the draw has exactly the recommended
    // length.
    let (secret, _) = groups::oakley_1().gen_key(&mut rng);
    assert_eq!(secret.bit_length(), exponent_size(768));
    assert_eq!(secret.bit_length(), 180);
}

#[test]
fn test_exponent_capped_at_subgroup_order() {
    let mut rng = rand::thread_rng();
    let g = groups::rfc_5114_1();

    // The 160-bit subgroup order caps an oversized request.
    let (secret, _) = g.gen_key_sized(&mut rng, 800);
    assert!(secret.bit_length() <= 160);

    // An undersized request is honored as-is.
    let (secret, _) = g.gen_key_sized(&mut rng, 64);
    assert_eq!(secret.bit_length(), 64);
}

#[test]
fn test_registry_generator_orders() {
    // gg^q = 1 (mod p); checked on the smaller groups to keep the suite
    // quick in debug builds.
    for g in [
        groups::oakley_1(),
        groups::rfc_5114_1(),
        groups::rfc_5114_2(),
        groups::rfc_5114_3(),
    ] {
        let q = g.subgroup_order().expect("registry group without order");
        assert!(g.generator().modpow(q, g.p()).is_one());
    }
}

#[test]
fn test_generated_group_shape() {
    let mut rng = rand::thread_rng();
    let g = Group::generate(&mut rng, 64).expect("Group::generate failed");

    assert_eq!(g.modulus_size(), 64);
    assert_eq!(g.generator(), &BigUint::from(2u32));

    let q = g.subgroup_order().expect("generated group without order");
    assert_eq!(q << 1u8, g.p() - BigUint::one());
    assert!(g.generator().modpow(q, g.p()).is_one());
}

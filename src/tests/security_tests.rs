use num_bigint::BigUint;
use num_traits::One;

use super::small_group;
use crate::error::FfdhError;
use crate::groups;

#[test]
fn test_degenerate_peer_elements_rejected() {
    let mut rng = rand::thread_rng();
    let g = groups::ffdhe2048();
    let (secret, _) = g.gen_key(&mut rng);

    let zero = BigUint::from(0u32).to_bytes_be();
    let one = BigUint::one().to_bytes_be();
    let p = g.p().to_bytes_be();
    let p_minus_1 = (g.p() - BigUint::one()).to_bytes_be();
    let gg = g.generator().to_bytes_be();

    for peer in [&zero, &one, &p, &p_minus_1, &gg] {
        assert!(g.shared(&secret, peer).is_none());
    }
}

#[test]
fn test_oversized_peer_elements_rejected() {
    let mut rng = rand::thread_rng();
    let g = small_group();
    let (secret, _) = g.gen_key(&mut rng);

    let big = g.p() + BigUint::from(2u32);
    assert!(g.shared(&secret, &big.to_bytes_be()).is_none());
}

#[test]
fn test_pathological_secrets_rejected() {
    let g = groups::oakley_1();
    let q = g.subgroup_order().unwrap();
    let p_minus_1 = g.p() - BigUint::one();

    // x = 0 gives y = 1; x = 1 gives y = gg; x = q and x = p - 1 give
    // y = 1 again. All are degenerate.
    for x in [
        BigUint::from(0u32).to_bytes_be(),
        BigUint::one().to_bytes_be(),
        q.to_bytes_be(),
        p_minus_1.to_bytes_be(),
    ] {
        assert!(matches!(
            g.key_of_secret(&x),
            Err(FfdhError::InvalidPublicKey)
        ));
    }
}

#[test]
fn test_generated_public_keys_unique_and_valid() {
    let mut rng = rand::thread_rng();
    let g = small_group();
    let mut seen = std::collections::HashSet::new();

    for _ in 0..25 {
        let (_, public) = g.gen_key(&mut rng);
        let y = BigUint::from_bytes_be(&public);
        assert!(y > BigUint::one());
        assert!(y < g.p() - BigUint::one());
        assert_ne!(&y, g.generator());
        seen.insert(public);
    }
    assert!(seen.len() > 1, "degenerate RNG output");
}

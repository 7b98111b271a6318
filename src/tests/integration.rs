use super::small_group;
use crate::groups;

#[test]
fn test_agreement_on_generated_group() {
    let mut rng = rand::thread_rng();
    let g = small_group();

    let (sa, pub_a) = g.gen_key(&mut rng);
    let (sb, pub_b) = g.gen_key(&mut rng);

    let za = g.shared(&sa, &pub_b).expect("peer key rejected");
    let zb = g.shared(&sb, &pub_a).expect("peer key rejected");
    assert_eq!(za, zb);
}

#[test]
fn test_agreement_on_registry_group() {
    let mut rng = rand::thread_rng();
    let g = groups::oakley_1();

    let (sa, pub_a) = g.gen_key(&mut rng);
    let (sb, pub_b) = g.gen_key(&mut rng);

    let za = g.shared(&sa, &pub_b).expect("peer key rejected");
    let zb = g.shared(&sb, &pub_a).expect("peer key rejected");
    assert_eq!(za, zb);
}

#[test]
fn test_agreement_with_subgroup_order_cap() {
    let mut rng = rand::thread_rng();
    let g = groups::rfc_5114_1();

    let (sa, pub_a) = g.gen_key(&mut rng);
    let (sb, pub_b) = g.gen_key(&mut rng);

    let za = g.shared(&sa, &pub_b).expect("peer key rejected");
    let zb = g.shared(&sb, &pub_a).expect("peer key rejected");
    assert_eq!(za, zb);
}

#[test]
fn test_known_answer_oakley_14() {
    let g = groups::oakley_14();

    // Exponents 2 and 3 give public elements 4 and 8 and the shared value
    // 2^6 = 64, all far below the modulus.
    let (sa, pub_a) = g.key_of_secret(&[2]).unwrap();
    let (sb, pub_b) = g.key_of_secret(&[3]).unwrap();
    assert_eq!(pub_a, vec![4]);
    assert_eq!(pub_b, vec![8]);

    assert_eq!(g.shared(&sa, &pub_b).unwrap(), vec![64]);
    assert_eq!(g.shared(&sb, &pub_a).unwrap(), vec![64]);
}

#[test]
fn test_key_of_secret_matches_gen_key() {
    let mut rng = rand::thread_rng();
    let g = small_group();

    let (secret, public) = g.gen_key(&mut rng);
    let (rebuilt, public2) = secret
        .with_bytes(|bytes| g.key_of_secret(bytes))
        .expect("regenerated key rejected");
    assert_eq!(public, public2);
    assert_eq!(secret.bit_length(), rebuilt.bit_length());
}

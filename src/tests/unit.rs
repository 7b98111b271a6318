use num_bigint::BigUint;
use num_traits::One;

use crate::config::MIN_GROUP_BITS;
use crate::error::FfdhError;
use crate::ffdh::{exponent_size, Group};
use crate::groups;
use crate::utils::parse_hex;

#[test]
fn test_parse_hex_ignores_whitespace() {
    let a = parse_hex("DEADBEEF").unwrap();
    let b = parse_hex("dead beef").unwrap();
    let c = parse_hex("  DE AD\n\tBE ef\n").unwrap();
    assert_eq!(a, BigUint::from(0xDEADBEEFu32));
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn test_parse_hex_rejects_garbage() {
    assert!(matches!(parse_hex(""), Err(FfdhError::InvalidHex(_))));
    assert!(matches!(parse_hex("  \n "), Err(FfdhError::InvalidHex(_))));
    assert!(matches!(parse_hex("0xFF"), Err(FfdhError::InvalidHex(_))));
    assert!(matches!(parse_hex("FG"), Err(FfdhError::InvalidHex(_))));
}

#[test]
fn test_be_encoding_round_trip() {
    for n in [0u32, 1, 2, 255, 256, 65535, 0xDEADBEEF] {
        let x = BigUint::from(n);
        assert_eq!(BigUint::from_bytes_be(&x.to_bytes_be()), x);
    }
    // Leading zero bytes in the wire form are accepted.
    assert_eq!(BigUint::from_bytes_be(&[0, 0, 1]), BigUint::one());
}

#[test]
fn test_exponent_size_table() {
    assert_eq!(exponent_size(1024), 180);
    assert_eq!(exponent_size(2048), 225);
    assert_eq!(exponent_size(3072), 275);
    assert_eq!(exponent_size(4096), 325);
    assert_eq!(exponent_size(6144), 375);
    assert_eq!(exponent_size(8192), 400);
    assert_eq!(exponent_size(8193), 512);
    assert_eq!(exponent_size(1), 180);
    assert_eq!(exponent_size(1025), 225);
}

#[test]
fn test_registry_modulus_sizes() {
    assert_eq!(groups::oakley_1().modulus_size(), 768);
    assert_eq!(groups::oakley_2().modulus_size(), 1024);
    assert_eq!(groups::oakley_5().modulus_size(), 1536);
    assert_eq!(groups::oakley_14().modulus_size(), 2048);
    assert_eq!(groups::oakley_15().modulus_size(), 3072);
    assert_eq!(groups::oakley_16().modulus_size(), 4096);
    assert_eq!(groups::oakley_17().modulus_size(), 6144);
    assert_eq!(groups::oakley_18().modulus_size(), 8192);
    assert_eq!(groups::rfc_5114_1().modulus_size(), 1024);
    assert_eq!(groups::rfc_5114_2().modulus_size(), 2048);
    assert_eq!(groups::rfc_5114_3().modulus_size(), 2048);
    assert_eq!(groups::ffdhe2048().modulus_size(), 2048);
    assert_eq!(groups::ffdhe3072().modulus_size(), 3072);
    assert_eq!(groups::ffdhe4096().modulus_size(), 4096);
    assert_eq!(groups::ffdhe6144().modulus_size(), 6144);
    assert_eq!(groups::ffdhe8192().modulus_size(), 8192);
}

#[test]
fn test_registry_subgroup_orders() {
    assert_eq!(groups::rfc_5114_1().subgroup_order().unwrap().bits(), 160);
    assert_eq!(groups::rfc_5114_2().subgroup_order().unwrap().bits(), 224);
    assert_eq!(groups::rfc_5114_3().subgroup_order().unwrap().bits(), 256);

    // Safe-prime groups carry q = (p - 1) / 2.
    let g = groups::oakley_1();
    let q = g.subgroup_order().unwrap();
    assert_eq!(q << 1u8, g.p() - BigUint::one());
}

#[test]
fn test_safe_prime_from_hex() {
    // 23 = 0x17 is a safe prime with q = 11.
    let g = Group::safe_prime_from_hex("17").unwrap();
    assert_eq!(g.p(), &BigUint::from(23u32));
    assert_eq!(g.generator(), &BigUint::from(2u32));
    assert_eq!(g.subgroup_order(), Some(&BigUint::from(11u32)));
}

#[test]
fn test_group_new_validation() {
    let p = BigUint::from(23u32);
    let gg = BigUint::from(5u32);
    assert!(Group::new(p.clone(), gg.clone(), None).is_ok());

    // Even modulus.
    assert!(matches!(
        Group::new(BigUint::from(24u32), gg.clone(), None),
        Err(FfdhError::InvalidParameters(_))
    ));
    // Generator out of range.
    assert!(matches!(
        Group::new(p.clone(), BigUint::one(), None),
        Err(FfdhError::InvalidParameters(_))
    ));
    assert!(matches!(
        Group::new(p.clone(), BigUint::from(22u32), None),
        Err(FfdhError::InvalidParameters(_))
    ));
    // Declared order must divide p - 1.
    assert!(matches!(
        Group::new(p.clone(), gg.clone(), Some(BigUint::from(7u32))),
        Err(FfdhError::InvalidParameters(_))
    ));
    assert!(Group::new(p, gg, Some(BigUint::from(11u32))).is_ok());
}

#[test]
fn test_generate_rejects_tiny_sizes() {
    let mut rng = rand::thread_rng();
    for bits in [0, 1, 7] {
        match Group::generate(&mut rng, bits) {
            Err(FfdhError::GroupTooSmall { bits: b, min_bits }) => {
                assert_eq!(b, bits);
                assert_eq!(min_bits, MIN_GROUP_BITS);
            }
            other => panic!("expected GroupTooSmall, got {:?}", other),
        }
    }
}

#[test]
fn test_secret_scoped_bytes() {
    let g = groups::oakley_1();
    let (secret, _) = g.key_of_secret(&[0x0A, 0x0B]).unwrap();
    let copied = secret.with_bytes(|bytes| bytes.to_vec());
    assert_eq!(copied, vec![0x0A, 0x0B]);
    assert_eq!(secret.bit_length(), 12);
}

#[test]
fn test_secret_debug_is_redacted() {
    let g = groups::oakley_1();
    let (secret, _) = g.key_of_secret(&[2]).unwrap();
    assert_eq!(format!("{:?}", secret), "Secret(2 bits)");
}

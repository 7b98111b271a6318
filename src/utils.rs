use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::config::MILLER_RABIN_ROUNDS;
use crate::error::FfdhError;

/// Parse a hex string into a `BigUint`.
///
/// Embedded whitespace (spaces, tabs, line breaks) is ignored and both
/// digit cases are accepted; no `0x` prefix.
pub fn parse_hex(s: &str) -> Result<BigUint, FfdhError> {
    let digits: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.is_empty() {
        return Err(FfdhError::InvalidHex("empty string".to_string()));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(FfdhError::InvalidHex(format!(
            "unexpected character {:?}",
            c
        )));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| FfdhError::InvalidHex("not a hex number".to_string()))
}

/// Draw a uniformly random integer of exactly `bits` bits.
///
/// The top bit is forced to 1 so the result has full length.
pub(crate) fn gen_bits<R: Rng>(rng: &mut R, bits: u64) -> BigUint {
    let mut x = rng.gen_biguint(bits);
    if bits > 0 {
        x.set_bit(bits - 1, true);
    }
    x
}

/// Draw `(q, p)` with `p = 2q + 1` both prime and `p` of exactly `bits` bits.
pub(crate) fn safe_prime<R: Rng>(rng: &mut R, bits: u64) -> (BigUint, BigUint) {
    let one = BigUint::one();
    loop {
        let mut q = gen_bits(rng, bits - 1);
        q.set_bit(0, true);
        if !is_probably_prime(rng, &q) {
            continue;
        }
        let p = (&q << 1u8) + &one;
        if is_probably_prime(rng, &p) {
            return (q, p);
        }
    }
}

const SMALL_PRIMES: [u32; 11] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

pub(crate) fn is_probably_prime<R: Rng>(rng: &mut R, n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    let three = &two + &one;

    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if (n % &two).is_zero() {
        return false;
    }

    // Quick trial division by a few small primes.
    for sp in SMALL_PRIMES {
        let sp = BigUint::from(sp);
        if n == &sp {
            return true;
        }
        if (n % &sp).is_zero() {
            return false;
        }
    }

    // Write n-1 as d * 2^s with d odd.
    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut s: u32 = 0;
    while (&d % &two).is_zero() {
        d >>= 1;
        s += 1;
    }

    // Miller-Rabin rounds with random bases a in [2, n-2].
    for _ in 0..MILLER_RABIN_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue;
        }

        let mut passed = false;
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                passed = true;
                break;
            }
            if x == one {
                return false;
            }
        }

        if !passed {
            return false;
        }
    }

    true
}

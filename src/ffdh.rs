//! Finite-field Diffie-Hellman key agreement.
//!
//! A [`Group`] bundles the prime modulus `p`, the generator `gg` and an
//! optional prime subgroup order `q`. Secrets are short exponents: drawn
//! with a bit size matched to the symmetric-equivalent strength of the
//! modulus and capped at the bit size of the subgroup order when one is
//! known.
//!
//! # Key agreement
//!
//! 1. Each party calls [`Group::gen_key`] and sends the public bytes.
//! 2. Each party calls [`Group::shared`] with its own [`Secret`] and the
//!    peer's public bytes.
//! 3. Both arrive at the same shared bytes, or at `None` if the peer
//!    contribution was degenerate.
//!
//! The shared-secret path performs no timing masking; use fresh ephemeral
//! keys per exchange.

use std::cmp::min;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::Rng;
use zeroize::Zeroizing;

use crate::config::{EXPONENT_SIZES, EXPONENT_SIZE_CEILING, MIN_GROUP_BITS};
use crate::error::FfdhError;
use crate::utils::{gen_bits, parse_hex, safe_prime};

/// A private exponent, held as big-endian bytes and wiped on drop.
pub struct Secret {
    x: Zeroizing<Vec<u8>>,
}

impl Secret {
    fn from_uint(x: &BigUint) -> Self {
        Secret {
            x: Zeroizing::new(x.to_bytes_be()),
        }
    }

    pub(crate) fn to_uint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.x)
    }

    /// Bit length of the exponent.
    pub fn bit_length(&self) -> u64 {
        self.to_uint().bits()
    }

    /// Run `f` over the big-endian exponent bytes without copying them out.
    pub fn with_bytes<T>(&self, f: impl FnOnce(&[u8]) -> T) -> T {
        f(&self.x)
    }
}

impl core::fmt::Debug for Secret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Secret({} bits)", self.bit_length())
    }
}

/// Diffie-Hellman group parameters `(p, gg, q)`.
///
/// Immutable once constructed; share by reference across threads freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    p: BigUint,
    gg: BigUint,
    q: Option<BigUint>,
}

impl Group {
    /// Create a group from explicit parameters.
    ///
    /// Requires `p` odd and at least 3, `gg` in `(1, p-1)`, and `q`, when
    /// given, a positive divisor of `p - 1`. `q` is trusted to be the order
    /// of `gg`; it is not verified here.
    pub fn new(p: BigUint, gg: BigUint, q: Option<BigUint>) -> Result<Self, FfdhError> {
        let one = BigUint::one();
        if p < BigUint::from(3u32) || !p.bit(0) {
            return Err(FfdhError::InvalidParameters(
                "modulus must be an odd number >= 3".to_string(),
            ));
        }
        let p_minus_1 = &p - &one;
        if gg <= one || gg >= p_minus_1 {
            return Err(FfdhError::InvalidParameters(
                "generator out of range (1, p-1)".to_string(),
            ));
        }
        if let Some(q) = &q {
            if q.is_zero() || !(&p_minus_1 % q).is_zero() {
                return Err(FfdhError::InvalidParameters(
                    "subgroup order must divide p-1".to_string(),
                ));
            }
        }

        Ok(Group { p, gg, q })
    }

    /// Safe-prime convenience constructor: parse `p` from hex and set
    /// `gg = 2`, `q = (p - 1) / 2`.
    pub fn safe_prime_from_hex(p_hex: &str) -> Result<Self, FfdhError> {
        let p = parse_hex(p_hex)?;
        let q = (&p - BigUint::one()) >> 1u8;
        Self::new(p, BigUint::from(2u32), Some(q))
    }

    /// General constructor from hex parameters with an explicit generator
    /// and subgroup order.
    pub fn from_hex_params(p_hex: &str, gg_hex: &str, q_hex: &str) -> Result<Self, FfdhError> {
        let p = parse_hex(p_hex)?;
        let gg = parse_hex(gg_hex)?;
        let q = parse_hex(q_hex)?;
        Self::new(p, gg, Some(q))
    }

    /// Generate a fresh safe-prime group of exactly `bits` bits with
    /// generator 2 and verified subgroup order `q = (p - 1) / 2`.
    pub fn generate<R: Rng>(rng: &mut R, bits: u64) -> Result<Self, FfdhError> {
        if bits < MIN_GROUP_BITS {
            return Err(FfdhError::GroupTooSmall {
                bits,
                min_bits: MIN_GROUP_BITS,
            });
        }

        let gg = BigUint::from(2u32);
        loop {
            let (q, p) = safe_prime(rng, bits);
            // 2 generates the order-q subgroup iff it is a quadratic residue.
            if gg.modpow(&q, &p).is_one() {
                return Ok(Group { p, gg, q: Some(q) });
            }
        }
    }

    /// The prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The generator `gg`.
    pub fn generator(&self) -> &BigUint {
        &self.gg
    }

    /// The subgroup order `q`, when the group declares one.
    pub fn subgroup_order(&self) -> Option<&BigUint> {
        self.q.as_ref()
    }

    /// Bit size of the prime modulus.
    pub fn modulus_size(&self) -> u64 {
        self.p.bits()
    }

    /// True iff `y` is unusable as a public element: `y <= 1` and `y >= p-1`
    /// cover the values of small order (and anything out of range); `y = gg`
    /// means the peer exponent was trivially 1.
    fn bad_public_key(&self, y: &BigUint) -> bool {
        let one = BigUint::one();
        *y <= one || *y >= &self.p - &one || *y == self.gg
    }

    fn key_of_exponent(&self, x: &BigUint) -> Option<(Secret, Vec<u8>)> {
        let y = self.gg.modpow(x, &self.p);
        if self.bad_public_key(&y) {
            return None;
        }
        Some((Secret::from_uint(x), y.to_bytes_be()))
    }

    /// Derive the key pair for a fixed big-endian secret exponent.
    ///
    /// Fails with [`FfdhError::InvalidPublicKey`] when the derived public
    /// element is degenerate: the supplied exponent is pathological for
    /// this group.
    pub fn key_of_secret(&self, secret: &[u8]) -> Result<(Secret, Vec<u8>), FfdhError> {
        let x = BigUint::from_bytes_be(secret);
        self.key_of_exponent(&x).ok_or(FfdhError::InvalidPublicKey)
    }

    /// Generate a fresh key pair with the recommended exponent size for
    /// this modulus.
    pub fn gen_key<R: Rng>(&self, rng: &mut R) -> (Secret, Vec<u8>) {
        self.gen_key_inner(rng, None)
    }

    /// Generate a fresh key pair with a caller-chosen exponent size.
    ///
    /// The size is capped at the bit length of the subgroup order when the
    /// group declares one, else at the bit length of `p`.
    pub fn gen_key_sized<R: Rng>(&self, rng: &mut R, bits: u64) -> (Secret, Vec<u8>) {
        self.gen_key_inner(rng, Some(bits))
    }

    fn gen_key_inner<R: Rng>(&self, rng: &mut R, bits: Option<u64>) -> (Secret, Vec<u8>) {
        let modulus_bits = self.p.bits();
        let cap = match &self.q {
            Some(q) => q.bits(),
            None => modulus_bits,
        };
        let s_bits = min(bits.unwrap_or_else(|| exponent_size(modulus_bits)), cap);

        // Degenerate outputs have negligible probability for a well-formed
        // group; the redraw loop terminates almost immediately.
        loop {
            let x = gen_bits(rng, s_bits);
            if let Some(pair) = self.key_of_exponent(&x) {
                return pair;
            }
        }
    }

    /// Compute the shared secret from our secret and the peer's public
    /// element, as big-endian bytes.
    ///
    /// Returns `None` when the peer element is degenerate. A bad peer
    /// contribution is an expected protocol outcome, not an error.
    pub fn shared(&self, secret: &Secret, peer: &[u8]) -> Option<Vec<u8>> {
        let y = BigUint::from_bytes_be(peer);
        if self.bad_public_key(&y) {
            return None;
        }
        let x = secret.to_uint();
        Some(y.modpow(&x, &self.p).to_bytes_be())
    }
}

/// Recommended secret exponent size in bits for a modulus of `modulus_bits`
/// bits, matching the symmetric-equivalent strength of the modulus.
pub fn exponent_size(modulus_bits: u64) -> u64 {
    for (bound, exp) in EXPONENT_SIZES {
        if modulus_bits <= bound {
            return exp;
        }
    }
    EXPONENT_SIZE_CEILING
}

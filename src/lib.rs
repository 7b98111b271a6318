//! Finite-field Diffie-Hellman key-agreement library.
//!
//! This crate contains a small, self-contained implementation of classic
//! Diffie-Hellman over prime-order and safe-prime multiplicative groups,
//! together with a registry of the standardized MODP groups (RFC 2409,
//! RFC 3526, RFC 5114 and RFC 7919).

pub mod config;
pub mod error;
pub mod ffdh;
pub mod groups;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::error::FfdhError;
pub use crate::ffdh::{exponent_size, Group, Secret};
pub use crate::utils::parse_hex;

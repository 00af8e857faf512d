//! Digest pipelines for addresses and checksums
//!
//! Both functions compose external hash primitives and are pure: no state,
//! no failure modes for well-formed byte input.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::params::HASH160_SIZE;

/// `ripemd160(sha256(data))`, the 20-byte digest behind addresses
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// `sha256(sha256(data))`, the digest behind Base58Check checksums
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

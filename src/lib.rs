//! Canonical encodings for secp256k1 key pairs and addresses
//!
//! This crate owns the byte-level representations of an elliptic-curve key
//! pair as used by cryptocurrency-style addressing: hex and raw scalar
//! forms, Wallet Import Format (WIF), compressed/uncompressed SEC1 public
//! keys, hash160 address derivation with Base58Check, and the fixed SEC1
//! DER / PEM schemas for key interchange. All of these must be bit-exact
//! across independent implementations, so every codec here is validated
//! against reference vectors produced by standard tooling.
//!
//! Curve arithmetic itself (scalar multiplication, point validation) is
//! delegated to the `k256` crate; hashing to `sha2` and `ripemd`. Nothing
//! in this crate touches field arithmetic.
//!
//! Keys are immutable value objects: construct once from any supported
//! representation, then derive the others on demand.
//!
//! ```
//! use keycodec::PrivateKey;
//!
//! let private_key = PrivateKey::from_hex(
//!     "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a",
//!     false,
//! )?;
//! assert_eq!(
//!     private_key.to_wif(),
//!     "5KJvsngHeMpm884wtkJNzQGaCErckhHJBGFsvd3VyK5qMZXj3hS",
//! );
//! assert_eq!(
//!     private_key.public_key().address(),
//!     "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T",
//! );
//! # Ok::<(), keycodec::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Fixed protocol constants (sizes, version bytes, OIDs)
pub mod params;

// Digest pipelines
pub mod hashes;
pub use hashes::{hash160, sha256d};

// Checksummed base-58 codec
pub mod b58check;

// Fixed-schema DER and PEM codecs
pub mod asn1;

// secp256k1 backend seam
mod curve;

// Key value objects
pub mod key;
pub use key::{PrivateKey, PublicKey};

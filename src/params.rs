//! Fixed protocol constants
//!
//! Process-wide immutable parameters of the encodings: byte sizes, default
//! version bytes, and the ASN.1 object identifiers pinning the DER schemas
//! to secp256k1.

/// Size of a private key scalar in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a compressed SEC1 public key in bytes (0x02/0x03 || x)
pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;

/// Size of an uncompressed SEC1 public key in bytes (0x04 || x || y)
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;

/// Size of the legacy bare-coordinate public key form in bytes (x || y,
/// no prefix); accepted on input only, never produced
pub const PUBLIC_KEY_BARE_SIZE: usize = 64;

/// Size of the hash160 digest in bytes
pub const HASH160_SIZE: usize = 20;

/// Size of the Base58Check checksum in bytes
pub const CHECKSUM_SIZE: usize = 4;

/// Default version byte for Wallet Import Format private keys
pub const WIF_VERSION_BYTE: u8 = 0x80;

/// Default version byte for pay-to-pubkey-hash addresses
pub const ADDRESS_VERSION_BYTE: u8 = 0x00;

/// Trailing marker byte on a serialized private key whose public key is
/// rendered in compressed form
pub const COMPRESSION_SUFFIX: u8 = 0x01;

/// DER-encoded object identifier for the secp256k1 curve (1.3.132.0.10)
pub const SECP256K1_OID: [u8; 5] = [0x2b, 0x81, 0x04, 0x00, 0x0a];

/// DER-encoded object identifier for id-ecPublicKey (1.2.840.10045.2.1)
pub const EC_PUBLIC_KEY_OID: [u8; 7] = [0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01];

/// PEM label for SEC1 EC private keys
pub const EC_PRIVATE_KEY_PEM_LABEL: &str = "EC PRIVATE KEY";

/// PEM label for SubjectPublicKeyInfo public keys
pub const PUBLIC_KEY_PEM_LABEL: &str = "PUBLIC KEY";

/// Column width of the base64 body inside a PEM block
pub const PEM_LINE_WIDTH: usize = 64;

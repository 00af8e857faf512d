//! Public key value object

use crate::asn1::{self, pem};
use crate::b58check;
use crate::curve::{self, CurvePoint};
use crate::error::{Error, Result};
use crate::hashes::hash160;
use crate::params::{
    ADDRESS_VERSION_BYTE, HASH160_SIZE, PUBLIC_KEY_BARE_SIZE, PUBLIC_KEY_COMPRESSED_SIZE,
    PUBLIC_KEY_PEM_LABEL, PUBLIC_KEY_UNCOMPRESSED_SIZE,
};

/// A secp256k1 public key plus its serialization preference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: CurvePoint,
    compressed: bool,
}

impl PublicKey {
    /// Parse a public key from bytes, sniffing the format by length and
    /// leading byte.
    ///
    /// Three input forms are recognized:
    ///
    /// | form | length | leading byte |
    /// |---|---|---|
    /// | compressed | 33 | `0x02`/`0x03` |
    /// | uncompressed | 65 | `0x04` |
    /// | bare coordinates (legacy) | 64 | — |
    ///
    /// The bare form is read as `x || y` with an implicit `0x04` prefix.
    /// It is accepted for compatibility with old serializers but never
    /// produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match (bytes.len(), bytes.first().copied()) {
            (PUBLIC_KEY_COMPRESSED_SIZE, Some(0x02 | 0x03)) => Ok(PublicKey {
                point: curve::point_from_sec1(bytes)?,
                compressed: true,
            }),
            (PUBLIC_KEY_UNCOMPRESSED_SIZE, Some(0x04)) => Ok(PublicKey {
                point: curve::point_from_sec1(bytes)?,
                compressed: false,
            }),
            (PUBLIC_KEY_BARE_SIZE, _) => {
                let mut prefixed = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
                prefixed[0] = 0x04;
                prefixed[1..].copy_from_slice(bytes);
                Ok(PublicKey {
                    point: curve::point_from_sec1(&prefixed)?,
                    compressed: false,
                })
            }
            (PUBLIC_KEY_COMPRESSED_SIZE | PUBLIC_KEY_UNCOMPRESSED_SIZE, _) => {
                Err(Error::KeyFormat {
                    reason: "unrecognized prefix byte",
                })
            }
            _ => Err(Error::KeyFormat {
                reason: "unrecognized public key length",
            }),
        }
    }

    /// Parse a public key from the hex encoding of any form accepted by
    /// [`from_bytes`](Self::from_bytes)
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::Format {
            context: "public key hex",
            reason: "invalid hexadecimal",
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a public key from a SubjectPublicKeyInfo DER structure
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let point = asn1::decode_public_der(der)?;
        Self::from_bytes(&point)
    }

    /// Parse a public key from a PEM `PUBLIC KEY` block
    pub fn from_pem(s: &str) -> Result<Self> {
        Self::from_der(&pem::unwrap(PUBLIC_KEY_PEM_LABEL, s)?)
    }

    pub(crate) fn from_point(point: CurvePoint, compressed: bool) -> Self {
        PublicKey { point, compressed }
    }

    /// SEC1 bytes in the form selected by the compression flag (33 or 65
    /// bytes, never the bare 64-byte form)
    pub fn to_bytes(&self) -> Vec<u8> {
        curve::point_to_sec1(&self.point, self.compressed)
    }

    /// Lowercase hex of [`to_bytes`](Self::to_bytes)
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// `ripemd160(sha256(to_bytes()))`, the address payload
    pub fn hash160(&self) -> [u8; HASH160_SIZE] {
        hash160(&self.to_bytes())
    }

    /// Lowercase hex of [`hash160`](Self::hash160)
    pub fn hash160_hex(&self) -> String {
        hex::encode(self.hash160())
    }

    /// Base58Check address with the default version byte (0x00)
    pub fn address(&self) -> String {
        self.address_with_version(ADDRESS_VERSION_BYTE)
    }

    /// Base58Check address with an explicit version byte
    pub fn address_with_version(&self, version_byte: u8) -> String {
        b58check::encode(&self.hash160(), version_byte)
    }

    /// SubjectPublicKeyInfo DER; always embeds the uncompressed point form
    /// required by the schema, independent of the compression flag
    pub fn to_der(&self) -> Vec<u8> {
        asn1::encode_public_der(&curve::point_to_uncompressed(&self.point))
    }

    /// PEM `PUBLIC KEY` block around [`to_der`](Self::to_der)
    pub fn to_pem(&self) -> String {
        pem::wrap(PUBLIC_KEY_PEM_LABEL, &self.to_der())
    }

    /// Whether serialization uses the compressed form
    pub fn compressed(&self) -> bool {
        self.compressed
    }
}

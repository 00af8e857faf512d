//! Private key value object

use std::fmt;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::asn1::{self, pem};
use crate::b58check;
use crate::curve::{self, CurveScalar};
use crate::error::{Error, Result};
use crate::key::PublicKey;
use crate::params::{
    COMPRESSION_SUFFIX, EC_PRIVATE_KEY_PEM_LABEL, PRIVATE_KEY_SIZE, WIF_VERSION_BYTE,
};

/// A secp256k1 private key plus the compression preference for its derived
/// public key
///
/// The scalar is always stored in canonical 32-byte form regardless of the
/// flag; the flag only affects [`to_wif`](Self::to_wif) and the flag of the
/// derived [`PublicKey`].
#[derive(Clone)]
pub struct PrivateKey {
    scalar: CurveScalar,
    compressed: bool,
}

impl PrivateKey {
    /// Generate a fresh key from a cryptographically secure source
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R, compressed: bool) -> Self {
        PrivateKey {
            scalar: curve::generate_scalar(rng),
            compressed,
        }
    }

    /// Parse from raw scalar bytes.
    ///
    /// Accepts 32 bytes, or 33 bytes whose trailing `0x01` marks the key as
    /// compressed. The marker is an explicit statement in the data and
    /// overrides the caller's flag.
    pub fn from_bytes(bytes: &[u8], compressed: bool) -> Result<Self> {
        let (scalar_bytes, compressed) = match bytes.len() {
            PRIVATE_KEY_SIZE => (bytes, compressed),
            n if n == PRIVATE_KEY_SIZE + 1 && bytes[PRIVATE_KEY_SIZE] == COMPRESSION_SUFFIX => {
                (&bytes[..PRIVATE_KEY_SIZE], true)
            }
            n => {
                return Err(Error::Length {
                    context: "private key bytes",
                    expected: PRIVATE_KEY_SIZE,
                    actual: n,
                })
            }
        };
        Ok(PrivateKey {
            scalar: curve::scalar_from_bytes(scalar_bytes)?,
            compressed,
        })
    }

    /// Parse from a 64-character hex scalar, or the 66-character form whose
    /// trailing `01` marks the key as compressed
    pub fn from_hex(s: &str, compressed: bool) -> Result<Self> {
        if s.len() != 2 * PRIVATE_KEY_SIZE && s.len() != 2 * (PRIVATE_KEY_SIZE + 1) {
            return Err(Error::Length {
                context: "private key hex",
                expected: 2 * PRIVATE_KEY_SIZE,
                actual: s.len(),
            });
        }
        let bytes = Zeroizing::new(hex::decode(s).map_err(|_| Error::Format {
            context: "private key hex",
            reason: "invalid hexadecimal",
        })?);
        Self::from_bytes(&bytes, compressed)
    }

    /// Parse from Wallet Import Format with the default version byte (0x80)
    pub fn from_wif(s: &str) -> Result<Self> {
        Self::from_wif_with_version(s, WIF_VERSION_BYTE)
    }

    /// Parse from Wallet Import Format, requiring a specific version byte.
    ///
    /// A 33-byte payload with a trailing `0x01` marks the key as
    /// compressed; a 32-byte payload is uncompressed.
    pub fn from_wif_with_version(s: &str, version_byte: u8) -> Result<Self> {
        let (version, payload, _checksum) = b58check::unpack(s)?;
        let payload = Zeroizing::new(payload);
        if version != version_byte {
            return Err(Error::WifVersion {
                expected: version_byte,
                actual: version,
            });
        }
        Self::from_bytes(&payload, false)
    }

    /// Parse from a SEC1 ECPrivateKey DER structure.
    ///
    /// The embedded public point must agree with the point derived from the
    /// scalar; a mismatch would silently produce wrong addresses downstream
    /// and is rejected.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let (scalar_bytes, point_bytes) = asn1::decode_private_der(der)?;
        let scalar_bytes = Zeroizing::new(scalar_bytes);
        let key = PrivateKey {
            scalar: curve::scalar_from_bytes(&scalar_bytes[..])?,
            compressed: false,
        };
        let derived = curve::point_to_uncompressed(&curve::derive_point(&key.scalar));
        if derived != point_bytes {
            return Err(Error::Asn1 {
                reason: "embedded public key does not match the private scalar",
            });
        }
        Ok(key)
    }

    /// Parse from a PEM `EC PRIVATE KEY` block
    pub fn from_pem(s: &str) -> Result<Self> {
        let der = Zeroizing::new(pem::unwrap(EC_PRIVATE_KEY_PEM_LABEL, s)?);
        Self::from_der(&der)
    }

    /// The scalar in canonical 32-byte big-endian form, in a zeroizing
    /// buffer
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        out.copy_from_slice(self.scalar.to_bytes().as_slice());
        out
    }

    /// Lowercase 64-character hex of the scalar; never carries the
    /// compression suffix
    pub fn to_hex(&self) -> String {
        hex::encode(&self.to_bytes()[..])
    }

    /// Wallet Import Format with the default version byte (0x80)
    pub fn to_wif(&self) -> String {
        self.to_wif_with_version(WIF_VERSION_BYTE)
    }

    /// Wallet Import Format with an explicit version byte; compressed keys
    /// carry the trailing `0x01` marker before the checksum
    pub fn to_wif_with_version(&self, version_byte: u8) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(PRIVATE_KEY_SIZE + 1));
        payload.extend_from_slice(&self.to_bytes()[..]);
        if self.compressed {
            payload.push(COMPRESSION_SUFFIX);
        }
        b58check::encode(&payload, version_byte)
    }

    /// SEC1 ECPrivateKey DER; always embeds the uncompressed point form
    /// required by the schema, independent of the compression flag
    pub fn to_der(&self) -> Vec<u8> {
        let point = curve::point_to_uncompressed(&curve::derive_point(&self.scalar));
        asn1::encode_private_der(&self.to_bytes(), &point)
    }

    /// PEM `EC PRIVATE KEY` block around [`to_der`](Self::to_der)
    pub fn to_pem(&self) -> String {
        pem::wrap(EC_PRIVATE_KEY_PEM_LABEL, &self.to_der())
    }

    /// Derive the public key, carrying this key's compression flag
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(curve::derive_point(&self.scalar), self.compressed)
    }

    /// Whether the derived public key serializes in compressed form
    pub fn compressed(&self) -> bool {
        self.compressed
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.to_bytes();
        let theirs = other.to_bytes();
        // Scalar comparison is constant-time; the flag is not secret
        bool::from(ours[..].ct_eq(&theirs[..])) && self.compressed == other.compressed
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("scalar", &"<redacted>")
            .field("compressed", &self.compressed)
            .finish()
    }
}

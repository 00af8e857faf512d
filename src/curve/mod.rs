//! secp256k1 backend seam
//!
//! Thin adapter over the `k256` crate. Scalar and point arithmetic, point
//! validity, and parity rules for (de)compression all live on the other
//! side of this seam; the rest of the crate only manages byte layout.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::params::PUBLIC_KEY_UNCOMPRESSED_SIZE;

pub(crate) use k256::{PublicKey as CurvePoint, SecretKey as CurveScalar};

/// Generate a uniformly random nonzero scalar below the curve order
pub(crate) fn generate_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> CurveScalar {
    CurveScalar::random(rng)
}

/// Build a scalar from 32 big-endian bytes; zero and values not below the
/// curve order are rejected
pub(crate) fn scalar_from_bytes(bytes: &[u8]) -> Result<CurveScalar> {
    CurveScalar::from_slice(bytes).map_err(|_| Error::InvalidScalar)
}

/// Scalar multiplication with the base point: scalar * G
pub(crate) fn derive_point(scalar: &CurveScalar) -> CurvePoint {
    scalar.public_key()
}

/// Parse a SEC1-encoded point (compressed or uncompressed), validating it
/// is on the curve
pub(crate) fn point_from_sec1(bytes: &[u8]) -> Result<CurvePoint> {
    CurvePoint::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPoint)
}

/// Serialize a point in SEC1 form, compressed or uncompressed
pub(crate) fn point_to_sec1(point: &CurvePoint, compressed: bool) -> Vec<u8> {
    point.to_encoded_point(compressed).as_bytes().to_vec()
}

/// Serialize a point in the 65-byte uncompressed form required by the DER
/// schemas
pub(crate) fn point_to_uncompressed(point: &CurvePoint) -> [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE] {
    let encoded = point.to_encoded_point(false);
    let mut out = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
    out.copy_from_slice(encoded.as_bytes());
    out
}

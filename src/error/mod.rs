//! Error handling for key encoding and decoding
//!
//! Every failure is surfaced synchronously at construction or decode time.
//! Nothing is retried or recovered internally: an accepted-but-wrong key
//! would produce a silently wrong address or signature downstream, so the
//! only safe behavior is rejection.

use std::fmt;

pub mod validate;

/// The error type for key encoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed textual input (bad hex digit, character outside the
    /// base-58 alphabet)
    Format {
        /// Context where the malformed input was seen
        context: &'static str,
        /// Reason why the input is malformed
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Base58Check checksum mismatch
    Checksum,

    /// WIF version byte mismatch
    WifVersion {
        /// Version byte the decoder was configured for
        expected: u8,
        /// Version byte found in the decoded string
        actual: u8,
    },

    /// Unrecognized public key byte length or prefix
    KeyFormat {
        /// Reason the bytes were rejected
        reason: &'static str,
    },

    /// Scalar is zero or not below the curve order
    InvalidScalar,

    /// Bytes do not describe a point on the curve
    InvalidPoint,

    /// Malformed DER structure
    Asn1 {
        /// Reason the structure was rejected
        reason: &'static str,
    },

    /// Malformed PEM wrapping
    Pem {
        /// Reason the wrapping was rejected
        reason: &'static str,
    },
}

/// Result type for key encoding operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format { context, reason } => {
                write!(f, "Malformed {}: {}", context, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Checksum => write!(f, "Base58Check checksum mismatch"),
            Error::WifVersion { expected, actual } => {
                write!(
                    f,
                    "WIF version byte mismatch: expected 0x{:02x}, got 0x{:02x}",
                    expected, actual
                )
            }
            Error::KeyFormat { reason } => {
                write!(f, "Unrecognized public key format: {}", reason)
            }
            Error::InvalidScalar => {
                write!(f, "Invalid scalar: zero or not below the curve order")
            }
            Error::InvalidPoint => write!(f, "Invalid point: not on the curve"),
            Error::Asn1 { reason } => write!(f, "Malformed DER: {}", reason),
            Error::Pem { reason } => write!(f, "Malformed PEM: {}", reason),
        }
    }
}

impl std::error::Error for Error {}

//! Checksummed base-58 codec
//!
//! The text encoding behind addresses and WIF private keys. A version byte
//! is prepended to the payload, the first four bytes of
//! `sha256(sha256(version || payload))` are appended as a checksum, and the
//! whole byte string is rendered in base 58. Each leading 0x00 byte maps to
//! a leading '1' character.
//!
//! The checksum is the only integrity guarantee for strings that humans
//! copy by hand; a mismatch is rejected, never repaired.

use crate::error::{validate, Error, Result};
use crate::hashes::sha256d;
use crate::params::CHECKSUM_SIZE;

/// The 58-character alphabet; visually ambiguous 0, O, I and l are excluded
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode `version_byte || payload` with a 4-byte checksum
pub fn encode(payload: &[u8], version_byte: u8) -> String {
    let mut raw = Vec::with_capacity(payload.len() + 1 + CHECKSUM_SIZE);
    raw.push(version_byte);
    raw.extend_from_slice(payload);
    let checksum = sha256d(&raw);
    raw.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
    base58_encode(&raw)
}

/// Decode to `version_byte || payload`, verifying the checksum
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let (version_byte, payload, _checksum) = unpack(s)?;
    let mut out = Vec::with_capacity(payload.len() + 1);
    out.push(version_byte);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode into its three fields: version byte, payload, checksum
///
/// Same validation as [`decode`], for callers that need the version byte
/// without re-slicing.
pub fn unpack(s: &str) -> Result<(u8, Vec<u8>, [u8; CHECKSUM_SIZE])> {
    let raw = base58_decode(s)?;
    validate::min_length("base58check string", raw.len(), 1 + CHECKSUM_SIZE)?;

    let (body, checksum) = raw.split_at(raw.len() - CHECKSUM_SIZE);
    let expected = sha256d(body);
    if checksum != &expected[..CHECKSUM_SIZE] {
        return Err(Error::Checksum);
    }

    let mut checksum_out = [0u8; CHECKSUM_SIZE];
    checksum_out.copy_from_slice(checksum);
    Ok((body[0], body[1..].to_vec(), checksum_out))
}

fn alphabet_index(c: u8) -> Option<u32> {
    ALPHABET.iter().position(|&a| a == c).map(|i| i as u32)
}

fn base58_encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Base-58 digits, least significant first. log(256)/log(58) ≈ 1.37.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 137 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[digit as usize] as char);
    }
    out
}

fn base58_decode(s: &str) -> Result<Vec<u8>> {
    let zeros = s.bytes().take_while(|&b| b == b'1').count();

    // Bytes, least significant first. log(58)/log(256) ≈ 0.73.
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
    for c in s.bytes().skip(zeros) {
        let mut carry = alphabet_index(c).ok_or(Error::Format {
            context: "base-58 string",
            reason: "character outside the base-58 alphabet",
        })?;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

#[cfg(test)]
mod tests;

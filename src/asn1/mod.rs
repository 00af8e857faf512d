//! Fixed-schema DER codecs for EC keys
//!
//! Implements exactly the two ASN.1 structures needed for key interchange,
//! both pinned to the secp256k1 object identifier:
//!
//! - SEC1 `ECPrivateKey`: version INTEGER 1, the scalar as an OCTET STRING,
//!   the curve OID in context tag \[0\], and the uncompressed public point
//!   as a BIT STRING in context tag \[1\].
//! - X.509 `SubjectPublicKeyInfo`: an algorithm identifier (id-ecPublicKey
//!   plus the curve OID) and the uncompressed point as a BIT STRING.
//!
//! This is not a general ASN.1 library. The encoders must byte-match
//! standard SEC1/X.509 tooling for the same key material; the decoders
//! reject anything that deviates from the two schemas.

pub mod pem;

use crate::error::{Error, Result};
use crate::params::{
    EC_PUBLIC_KEY_OID, PRIVATE_KEY_SIZE, PUBLIC_KEY_UNCOMPRESSED_SIZE, SECP256K1_OID,
};

// ASN.1 tag bytes used by the two schemas
const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_OCTET_STRING: u8 = 0x04;
const TAG_OID: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;
const TAG_CONTEXT_0: u8 = 0xa0;
const TAG_CONTEXT_1: u8 = 0xa1;

/// Encode a SEC1 `ECPrivateKey` structure
pub fn encode_private_der(
    scalar: &[u8; PRIVATE_KEY_SIZE],
    point: &[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE],
) -> Vec<u8> {
    let mut body = Vec::new();
    write_tlv(&mut body, TAG_INTEGER, &[0x01]);
    write_tlv(&mut body, TAG_OCTET_STRING, scalar);

    let mut parameters = Vec::new();
    write_tlv(&mut parameters, TAG_OID, &SECP256K1_OID);
    write_tlv(&mut body, TAG_CONTEXT_0, &parameters);

    let mut public_key = Vec::new();
    write_tlv(&mut public_key, TAG_BIT_STRING, &bit_string(point));
    write_tlv(&mut body, TAG_CONTEXT_1, &public_key);

    let mut out = Vec::new();
    write_tlv(&mut out, TAG_SEQUENCE, &body);
    out
}

/// Decode a SEC1 `ECPrivateKey` structure into its scalar and point
pub fn decode_private_der(
    der: &[u8],
) -> Result<([u8; PRIVATE_KEY_SIZE], [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE])> {
    let mut outer = Reader::new(der);
    let body = outer.read(TAG_SEQUENCE, "missing ECPrivateKey sequence")?;
    outer.finish("trailing data after ECPrivateKey")?;

    let mut seq = Reader::new(body);
    let version = seq.read(TAG_INTEGER, "missing ECPrivateKey version")?;
    if version != [0x01] {
        return Err(Error::Asn1 {
            reason: "unsupported ECPrivateKey version",
        });
    }

    let scalar_bytes = seq.read(TAG_OCTET_STRING, "missing private key octet string")?;
    if scalar_bytes.len() != PRIVATE_KEY_SIZE {
        return Err(Error::Asn1 {
            reason: "private key octet string is not 32 bytes",
        });
    }

    let parameters = seq.read(TAG_CONTEXT_0, "missing curve parameters")?;
    let mut params_reader = Reader::new(parameters);
    let oid = params_reader.read(TAG_OID, "missing curve object identifier")?;
    params_reader.finish("trailing data after curve object identifier")?;
    if oid != SECP256K1_OID {
        return Err(Error::Asn1 {
            reason: "unexpected curve object identifier",
        });
    }

    let public_key = seq.read(TAG_CONTEXT_1, "missing public key field")?;
    let mut public_reader = Reader::new(public_key);
    let bits = public_reader.read(TAG_BIT_STRING, "missing public key bit string")?;
    public_reader.finish("trailing data after public key bit string")?;
    seq.finish("trailing data inside ECPrivateKey")?;

    let point = read_bit_string_point(bits)?;
    let mut scalar = [0u8; PRIVATE_KEY_SIZE];
    scalar.copy_from_slice(scalar_bytes);
    Ok((scalar, point))
}

/// Encode an X.509 `SubjectPublicKeyInfo` structure
pub fn encode_public_der(point: &[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]) -> Vec<u8> {
    let mut algorithm = Vec::new();
    write_tlv(&mut algorithm, TAG_OID, &EC_PUBLIC_KEY_OID);
    write_tlv(&mut algorithm, TAG_OID, &SECP256K1_OID);

    let mut body = Vec::new();
    write_tlv(&mut body, TAG_SEQUENCE, &algorithm);
    write_tlv(&mut body, TAG_BIT_STRING, &bit_string(point));

    let mut out = Vec::new();
    write_tlv(&mut out, TAG_SEQUENCE, &body);
    out
}

/// Decode an X.509 `SubjectPublicKeyInfo` structure into its point
pub fn decode_public_der(der: &[u8]) -> Result<[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]> {
    let mut outer = Reader::new(der);
    let body = outer.read(TAG_SEQUENCE, "missing SubjectPublicKeyInfo sequence")?;
    outer.finish("trailing data after SubjectPublicKeyInfo")?;

    let mut seq = Reader::new(body);
    let algorithm = seq.read(TAG_SEQUENCE, "missing algorithm identifier")?;
    let mut alg_reader = Reader::new(algorithm);
    let algorithm_oid = alg_reader.read(TAG_OID, "missing algorithm object identifier")?;
    if algorithm_oid != EC_PUBLIC_KEY_OID {
        return Err(Error::Asn1 {
            reason: "unexpected algorithm object identifier",
        });
    }
    let curve_oid = alg_reader.read(TAG_OID, "missing curve object identifier")?;
    alg_reader.finish("trailing data after algorithm identifier")?;
    if curve_oid != SECP256K1_OID {
        return Err(Error::Asn1 {
            reason: "unexpected curve object identifier",
        });
    }

    let bits = seq.read(TAG_BIT_STRING, "missing public key bit string")?;
    seq.finish("trailing data inside SubjectPublicKeyInfo")?;

    read_bit_string_point(bits)
}

// The public point as BIT STRING content: a zero unused-bits octet
// followed by the uncompressed SEC1 bytes.
fn bit_string(point: &[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + PUBLIC_KEY_UNCOMPRESSED_SIZE);
    out.push(0x00);
    out.extend_from_slice(point);
    out
}

fn read_bit_string_point(bits: &[u8]) -> Result<[u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]> {
    if bits.len() != 1 + PUBLIC_KEY_UNCOMPRESSED_SIZE || bits[0] != 0x00 {
        return Err(Error::Asn1 {
            reason: "public key bit string is not a 65-byte point",
        });
    }
    if bits[1] != 0x04 {
        return Err(Error::Asn1 {
            reason: "public key point is not in uncompressed form",
        });
    }
    let mut point = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
    point.copy_from_slice(&bits[1..]);
    Ok(point)
}

fn write_tlv(out: &mut Vec<u8>, tag: u8, value: &[u8]) {
    out.push(tag);
    let len = value.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
    out.extend_from_slice(value);
}

/// Cursor over a DER byte string, yielding one TLV element at a time
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    /// Read the next element, requiring `expected_tag`
    fn read(&mut self, expected_tag: u8, what: &'static str) -> Result<&'a [u8]> {
        let tag = self.next_byte(what)?;
        if tag != expected_tag {
            return Err(Error::Asn1 { reason: what });
        }
        let len = self.read_length(what)?;
        if self.data.len() - self.pos < len {
            return Err(Error::Asn1 { reason: what });
        }
        let value = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(value)
    }

    /// Require that the whole input has been consumed
    fn finish(&self, reason: &'static str) -> Result<()> {
        if self.pos != self.data.len() {
            return Err(Error::Asn1 { reason });
        }
        Ok(())
    }

    fn next_byte(&mut self, what: &'static str) -> Result<u8> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(Error::Asn1 { reason: what })?;
        self.pos += 1;
        Ok(byte)
    }

    // Definite lengths only; one- and two-byte long forms cover every
    // structure these schemas can produce.
    fn read_length(&mut self, what: &'static str) -> Result<usize> {
        let first = self.next_byte(what)?;
        match first {
            0x00..=0x7f => Ok(first as usize),
            0x81 => Ok(self.next_byte(what)? as usize),
            0x82 => {
                let hi = self.next_byte(what)? as usize;
                let lo = self.next_byte(what)? as usize;
                Ok((hi << 8) | lo)
            }
            _ => Err(Error::Asn1 { reason: what }),
        }
    }
}

#[cfg(test)]
mod tests;

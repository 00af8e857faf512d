use super::*;

const WIF_REFERENCE: &str = "5KJvsngHeMpm884wtkJNzQGaCErckhHJBGFsvd3VyK5qMZXj3hS";
const SCALAR_HEX: &str = "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a";

#[test]
fn test_encode_wif_reference() {
    let payload = hex::decode(SCALAR_HEX).unwrap();
    assert_eq!(encode(&payload, 0x80), WIF_REFERENCE);
}

#[test]
fn test_encode_address_reference() {
    let payload = hex::decode("c4c5d791fcb4654a1ef5e03fe0ad3d9c598f9827").unwrap();
    assert_eq!(encode(&payload, 0x00), "1JwSSubhmg6iPtRjtyqhUYYH7bZg3Lfy1T");
}

#[test]
fn test_decode_reference() {
    let decoded = decode(WIF_REFERENCE).unwrap();
    assert_eq!(decoded[0], 0x80);
    assert_eq!(hex::encode(&decoded[1..]), SCALAR_HEX);
}

#[test]
fn test_unpack_reference() {
    let (version_byte, payload, checksum) = unpack(WIF_REFERENCE).unwrap();
    assert_eq!(version_byte, 0x80);
    assert_eq!(hex::encode(&payload), SCALAR_HEX);

    // The checksum field is what encode would recompute
    let mut body = vec![version_byte];
    body.extend_from_slice(&payload);
    assert_eq!(checksum[..], sha256d(&body)[..CHECKSUM_SIZE]);

    assert_eq!(encode(&payload, version_byte), WIF_REFERENCE);
}

#[test]
fn test_leading_zero_bytes_map_to_ones() {
    let encoded = encode(&[0x00, 0x00, 0x07], 0x00);
    assert!(encoded.starts_with("111"));
    assert_eq!(decode(&encoded).unwrap(), vec![0x00, 0x00, 0x00, 0x07]);
}

#[test]
fn test_empty_payload_roundtrip() {
    let encoded = encode(&[], 0x80);
    assert_eq!(decode(&encoded).unwrap(), vec![0x80]);
}

#[test]
fn test_character_outside_alphabet_rejected() {
    // '0', 'O', 'I' and 'l' are deliberately absent from the alphabet
    for bad in ["0", "O", "I", "l"] {
        let mut s = String::from(WIF_REFERENCE);
        s.replace_range(10..11, bad);
        assert_eq!(
            decode(&s),
            Err(Error::Format {
                context: "base-58 string",
                reason: "character outside the base-58 alphabet",
            })
        );
    }
}

#[test]
fn test_flipped_character_fails_checksum() {
    let mut s: Vec<u8> = WIF_REFERENCE.bytes().collect();
    let original = s[20];
    s[20] = if original == b'a' { b'b' } else { b'a' };
    let s = String::from_utf8(s).unwrap();
    assert_eq!(decode(&s), Err(Error::Checksum));
}

#[test]
fn test_truncated_string_rejected() {
    // Dropping trailing characters invalidates the checksum
    let truncated = &WIF_REFERENCE[..WIF_REFERENCE.len() - 2];
    assert!(decode(truncated).is_err());
}

#[test]
fn test_too_short_string_rejected() {
    // Decodes to fewer than version + checksum bytes
    assert_eq!(
        unpack("1111"),
        Err(Error::Length {
            context: "base58check string",
            expected: 5,
            actual: 4,
        })
    );
}

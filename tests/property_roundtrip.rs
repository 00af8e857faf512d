//! Property-based tests for the codec round-trips

use keycodec::{b58check, Error, PrivateKey, PublicKey};
use proptest::prelude::*;

/// Indices into a base-58 string, paired with a replacement alphabet slot
fn flip_params() -> impl Strategy<Value = (prop::sample::Index, usize)> {
    (any::<prop::sample::Index>(), 0..58usize)
}

proptest! {
    #[test]
    fn wif_roundtrip(scalar in any::<[u8; 32]>(), compressed in any::<bool>()) {
        // Zero or above-order scalars are rejected at construction;
        // both are vanishingly rare under a uniform draw
        let Ok(key) = PrivateKey::from_bytes(&scalar, compressed) else {
            return Ok(());
        };
        let parsed = PrivateKey::from_wif(&key.to_wif()).unwrap();
        prop_assert_eq!(parsed.to_hex(), key.to_hex());
        prop_assert_eq!(parsed.compressed(), compressed);
        prop_assert_eq!(&parsed, &key);
    }

    #[test]
    fn public_key_sec1_roundtrip(scalar in any::<[u8; 32]>(), compressed in any::<bool>()) {
        let Ok(key) = PrivateKey::from_bytes(&scalar, compressed) else {
            return Ok(());
        };
        let public_key = key.public_key();
        let reparsed = PublicKey::from_bytes(&public_key.to_bytes()).unwrap();
        prop_assert_eq!(reparsed.to_bytes(), public_key.to_bytes());
        prop_assert_eq!(reparsed.address(), public_key.address());
    }

    #[test]
    fn der_pem_roundtrip(scalar in any::<[u8; 32]>()) {
        let Ok(key) = PrivateKey::from_bytes(&scalar, false) else {
            return Ok(());
        };
        prop_assert_eq!(
            PrivateKey::from_der(&key.to_der()).unwrap().to_hex(),
            key.to_hex()
        );
        prop_assert_eq!(
            PrivateKey::from_pem(&key.to_pem()).unwrap().to_hex(),
            key.to_hex()
        );
    }

    #[test]
    fn b58check_roundtrip(
        payload in prop::collection::vec(any::<u8>(), 0..64),
        version_byte in any::<u8>()
    ) {
        let encoded = b58check::encode(&payload, version_byte);
        let decoded = b58check::decode(&encoded).unwrap();
        prop_assert_eq!(decoded[0], version_byte);
        prop_assert_eq!(&decoded[1..], &payload[..]);

        let (version, unpacked, _checksum) = b58check::unpack(&encoded).unwrap();
        prop_assert_eq!(version, version_byte);
        prop_assert_eq!(unpacked, payload);
    }

    #[test]
    fn b58check_rejects_flipped_character(
        payload in prop::collection::vec(any::<u8>(), 1..48),
        version_byte in any::<u8>(),
        (index, replacement_slot) in flip_params()
    ) {
        let encoded = b58check::encode(&payload, version_byte);
        let mut chars: Vec<u8> = encoded.bytes().collect();
        let i = index.index(chars.len());
        let replacement = b58check::ALPHABET[replacement_slot];
        prop_assume!(chars[i] != replacement);
        chars[i] = replacement;
        let corrupted = String::from_utf8(chars).unwrap();

        prop_assert_eq!(b58check::decode(&corrupted), Err(Error::Checksum));
    }
}

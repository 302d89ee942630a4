//! Identifier codec at the crate boundary

use crate::common::*;
use proptest::prelude::*;
use tyname::{decode_hex_to_binary_id, encode_binary_id, BinaryId, Error, HEX_LENGTH};

const OBJECT: &str = "fdc6d587c83a348e456b034e1e0c31e9a7e1a3aa";

#[test]
fn object_id_round_trips_to_same_lowercase_string() {
    let id = decode_hex_to_binary_id(&text(OBJECT)).unwrap();
    assert_eq!(encode_binary_id(&id), OBJECT);
}

#[test]
fn mixed_case_input_renders_lowercase() {
    let mixed = "FDC6d587C83A348e456b034e1e0c31e9a7e1a3AA";
    let id = decode_hex_to_binary_id(&text(mixed)).unwrap();
    assert_eq!(id.to_string(), OBJECT);
}

#[test]
fn prefixed_literal_is_not_accepted() {
    let prefixed = format!("0x{}", &OBJECT[2..]);
    assert_eq!(prefixed.len(), HEX_LENGTH);
    assert!(matches!(
        decode_hex_to_binary_id(&text(&prefixed)),
        Err(Error::InvalidHexCharacter {
            character: b'x',
            position: 1
        })
    ));
}

#[test]
fn bincode_bytes_match_host_address_layout() {
    let id = BinaryId::from_hex(OBJECT).unwrap();
    let encoded = bincode::serialize(&id).unwrap();
    assert_eq!(encoded.len(), 20);
    assert_eq!(encoded[0], 0xfd);
    assert_eq!(encoded[19], 0xaa);
}

proptest! {
    #[test]
    fn binary_survives_hex_round_trip(bytes in proptest::array::uniform20(any::<u8>())) {
        let id = BinaryId::from_bytes(bytes);
        let hex = encode_binary_id(&id);
        prop_assert_eq!(hex.len(), HEX_LENGTH);
        prop_assert!(hex.as_bytes().iter().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b)));
        prop_assert_eq!(decode_hex_to_binary_id(&hex).unwrap(), id);
    }
}

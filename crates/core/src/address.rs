//! Package/object identifier codec
//!
//! Converts between the 20-byte binary identifier used for package and
//! object addresses and its 40-character lowercase hex rendering.
//!
//! - Encoding emits the high nibble of each byte first, keeps byte order, and
//!   never adds a `0x` prefix.
//! - Decoding accepts lowercase digits always and uppercase digits unless
//!   [`HexCase::Strict`] is requested.

use crate::ascii::AsciiText;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a binary identifier in bytes
pub const ID_LENGTH: usize = 20;

/// Width of the hex rendering of an identifier
pub const HEX_LENGTH: usize = ID_LENGTH * 2;

/// Which hex letters decoding accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    /// `a-f` and `A-F`
    #[default]
    Lenient,
    /// `a-f` only
    Strict,
}

/// Fixed-width binary identifier of a package or object
///
/// Byte order matches the host's own binary serialization of addresses:
/// byte 0 is rendered as the first two hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BinaryId([u8; ID_LENGTH]);

impl BinaryId {
    /// The all-zero identifier
    pub const ZERO: BinaryId = BinaryId([0; ID_LENGTH]);

    /// Create a BinaryId from raw bytes
    pub const fn from_bytes(bytes: [u8; ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create a BinaryId from a byte slice of exactly [`ID_LENGTH`] bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdLength` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ID_LENGTH] = bytes.try_into().map_err(|_| Error::InvalidIdLength {
            expected: ID_LENGTH,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes of this BinaryId
    pub fn as_bytes(&self) -> &[u8; ID_LENGTH] {
        &self.0
    }

    /// Lowercase hex rendering, no prefix
    pub fn to_hex(&self) -> AsciiText {
        encode_binary_id(self)
    }

    /// Parse a 40-character hex string (either case)
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdLength`, `InvalidHexCharacter` or
    /// `InvalidAsciiCharacter` for malformed input.
    pub fn from_hex(s: &str) -> Result<Self> {
        decode_hex_to_binary_id(&AsciiText::try_from(s)?)
    }
}

impl fmt::Display for BinaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for BinaryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BinaryId::from_hex(s)
    }
}

impl From<[u8; ID_LENGTH]> for BinaryId {
    fn from(bytes: [u8; ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

/// Hex digit for a nibble: `0-9` map to `'0'..'9'`, `10-15` to `'a'..'f'`
#[inline]
pub fn nibble_to_hex_ascii(nibble: u8) -> u8 {
    debug_assert!(nibble < 16);
    if nibble < 10 {
        nibble + 48
    } else {
        nibble + 87
    }
}

/// Nibble value of a hex digit, or `None` if `c` is not one under `case`
#[inline]
pub fn hex_ascii_to_nibble(c: u8, case: HexCase) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' if case == HexCase::Lenient => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Render an identifier as 40 lowercase hex characters
pub fn encode_binary_id(id: &BinaryId) -> AsciiText {
    let mut out = Vec::with_capacity(HEX_LENGTH);
    for &byte in id.as_bytes() {
        out.push(nibble_to_hex_ascii(byte >> 4));
        out.push(nibble_to_hex_ascii(byte & 0x0F));
    }
    AsciiText::from_ascii_unchecked(out)
}

/// Decode 40 hex characters (either case) into an identifier
///
/// # Errors
///
/// Returns `InvalidIdLength` unless `text` is exactly [`HEX_LENGTH`] bytes,
/// and `InvalidHexCharacter` at the first non-hex byte.
pub fn decode_hex_to_binary_id(text: &AsciiText) -> Result<BinaryId> {
    decode_hex_with_case(text.as_bytes(), HexCase::Lenient)
}

/// Decode 40 hex characters into an identifier under the given case policy
///
/// # Errors
///
/// Same as [`decode_hex_to_binary_id`]; under [`HexCase::Strict`] uppercase
/// letters are `InvalidHexCharacter`.
pub fn decode_hex_with_case(hex: &[u8], case: HexCase) -> Result<BinaryId> {
    if hex.len() != HEX_LENGTH {
        return Err(Error::InvalidIdLength {
            expected: HEX_LENGTH,
            actual: hex.len(),
        });
    }

    let mut bytes = [0u8; ID_LENGTH];
    for (i, pair) in hex.chunks_exact(2).enumerate() {
        let high = decode_digit(pair[0], 2 * i, case)?;
        let low = decode_digit(pair[1], 2 * i + 1, case)?;
        bytes[i] = high * 16 + low;
    }
    Ok(BinaryId(bytes))
}

fn decode_digit(c: u8, position: usize, case: HexCase) -> Result<u8> {
    hex_ascii_to_nibble(c, case).ok_or(Error::InvalidHexCharacter {
        character: c,
        position,
    })
}

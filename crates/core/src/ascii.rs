//! ASCII text primitives
//!
//! `AsciiText` is a byte sequence whose every byte is a 7-bit ASCII code
//! unit. The free functions here operate on plain byte slices and carry the
//! actual algorithms; the `AsciiText` methods are thin, validated wrappers.
//!
//! ## Not-found sentinel
//!
//! [`index_of`] never returns `-1` or an `Option`. A needle that does not
//! occur yields `haystack.len()`. Callers test
//! `index + needle.len() <= haystack.len()` to tell a hit from a miss.
//!
//! ## Case folding
//!
//! Only `A..=Z` and `a..=z` are remapped. Every other byte, including the
//! punctuation that sits between the two letter ranges (`[`, `` ` ``, `_`),
//! passes through unchanged.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest valid ASCII code unit
pub const MAX_ASCII_CHAR: u8 = 0x7F;

/// Distance between an uppercase letter and its lowercase counterpart
const CASE_OFFSET: u8 = b'a' - b'A';

/// Whether `byte` is a 7-bit ASCII code unit
#[inline]
pub fn is_valid_char(byte: u8) -> bool {
    byte <= MAX_ASCII_CHAR
}

/// Whether `byte` is a printable ASCII character (space through `~`)
#[inline]
pub fn is_printable_char(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Half-open range `[start, end)` of `bytes`
///
/// `start == end` yields an empty slice.
///
/// # Errors
///
/// Returns `OutOfRange` if `end > bytes.len()` or `start > end`.
pub fn slice(bytes: &[u8], start: usize, end: usize) -> Result<&[u8]> {
    if start > end || end > bytes.len() {
        return Err(Error::OutOfRange {
            start,
            end,
            len: bytes.len(),
        });
    }
    Ok(&bytes[start..end])
}

/// Byte at `index`
///
/// # Errors
///
/// Returns `OutOfRange` if `index >= bytes.len()`.
pub fn char_at(bytes: &[u8], index: usize) -> Result<u8> {
    bytes
        .get(index)
        .copied()
        .ok_or_else(|| Error::index_out_of_range(index, bytes.len()))
}

/// Concatenation of `dst` then `src` into a fresh buffer
pub fn append(dst: &[u8], src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(dst.len() + src.len());
    out.extend_from_slice(dst);
    out.extend_from_slice(src);
    out
}

/// Index of the first occurrence of `needle` in `haystack`
///
/// Returns `haystack.len()` when the needle does not occur, and `0` for an
/// empty needle.
///
/// Naive O(n·m) scan. Each candidate window is compared from its last byte
/// backwards, so windows that differ near the end are rejected after one
/// comparison. Inputs are type names, well under a few hundred bytes.
pub fn index_of(haystack: &[u8], needle: &[u8]) -> usize {
    let n = haystack.len();
    let m = needle.len();
    if m == 0 {
        return 0;
    }

    let mut i = 0;
    while i + m - 1 < n {
        let mut j = m;
        while haystack[i + j - 1] == needle[j - 1] {
            j -= 1;
            if j == 0 {
                return i;
            }
        }
        i += 1;
    }
    n
}

/// Lowercase a single byte; non-letters pass through
#[inline]
pub fn to_lower_char(byte: u8) -> u8 {
    if (b'A'..=b'Z').contains(&byte) {
        byte + CASE_OFFSET
    } else {
        byte
    }
}

/// Uppercase a single byte; non-letters pass through
#[inline]
pub fn to_upper_char(byte: u8) -> u8 {
    if (b'a'..=b'z').contains(&byte) {
        byte - CASE_OFFSET
    } else {
        byte
    }
}

/// Byte-wise lowercase copy of `bytes`
pub fn to_lower_case(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| to_lower_char(b)).collect()
}

/// Byte-wise uppercase copy of `bytes`
pub fn to_upper_case(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| to_upper_char(b)).collect()
}

/// Validated ASCII byte string
///
/// Equality is byte-for-byte. Values are immutable by convention: every
/// transforming operation returns a new `AsciiText` and leaves the receiver
/// untouched, so other holders of a clone never observe a change.
///
/// # Examples
///
/// ```
/// use tyname_core::AsciiText;
///
/// let text = AsciiText::try_from("coin::Coin").unwrap();
/// let sep = AsciiText::try_from("::").unwrap();
/// assert_eq!(text.index_of(&sep), 4);
/// assert_eq!(text.slice(6, 10).unwrap(), "Coin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AsciiText(Vec<u8>);

impl AsciiText {
    /// Create an `AsciiText`, validating every byte
    ///
    /// # Errors
    ///
    /// Returns `InvalidAsciiCharacter` at the first byte above `0x7F`.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        Self::validate(&bytes)?;
        Ok(AsciiText(bytes))
    }

    /// Wrap bytes already known to be ASCII
    ///
    /// Only for buffers derived from validated text (slices, concatenations,
    /// case folds) or produced by this crate's own encoders.
    pub(crate) fn from_ascii_unchecked(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.iter().all(|&b| is_valid_char(b)));
        AsciiText(bytes)
    }

    /// Check that every byte is 7-bit ASCII
    ///
    /// # Errors
    ///
    /// Returns `InvalidAsciiCharacter` with the offending byte and position.
    pub fn validate(bytes: &[u8]) -> Result<()> {
        match bytes.iter().position(|&b| !is_valid_char(b)) {
            Some(position) => Err(Error::InvalidAsciiCharacter {
                byte: bytes[position],
                position,
            }),
            None => Ok(()),
        }
    }

    /// Number of bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the text is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Append a single byte in place
    ///
    /// # Errors
    ///
    /// Returns `InvalidAsciiCharacter` if `byte > 0x7F`; the text is unchanged.
    pub fn push_byte(&mut self, byte: u8) -> Result<()> {
        if !is_valid_char(byte) {
            return Err(Error::InvalidAsciiCharacter {
                byte,
                position: self.0.len(),
            });
        }
        self.0.push(byte);
        Ok(())
    }

    /// Byte at `index`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= self.len()`.
    pub fn char_at(&self, index: usize) -> Result<u8> {
        char_at(&self.0, index)
    }

    /// Copy of the half-open range `[start, end)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `end > self.len()` or `start > end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<AsciiText> {
        slice(&self.0, start, end).map(|s| AsciiText(s.to_vec()))
    }

    /// Copy of everything from `start` to the end
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `start > self.len()`.
    pub fn slice_from(&self, start: usize) -> Result<AsciiText> {
        self.slice(start, self.len())
    }

    /// New text holding `self` followed by `other`
    pub fn append(&self, other: &AsciiText) -> AsciiText {
        AsciiText(append(&self.0, &other.0))
    }

    /// Index of the first occurrence of `needle`, or `self.len()` if absent
    ///
    /// See [`index_of`] for the sentinel and empty-needle conventions.
    pub fn index_of(&self, needle: &AsciiText) -> usize {
        index_of(&self.0, &needle.0)
    }

    /// Whether `needle` occurs in this text
    pub fn contains(&self, needle: &AsciiText) -> bool {
        self.index_of(needle) + needle.len() <= self.len()
    }

    /// Lowercased copy
    pub fn to_lower_case(&self) -> AsciiText {
        AsciiText(to_lower_case(&self.0))
    }

    /// Uppercased copy
    pub fn to_upper_case(&self) -> AsciiText {
        AsciiText(to_upper_case(&self.0))
    }

    /// Whether every byte is printable (space through `~`)
    pub fn all_characters_printable(&self) -> bool {
        self.0.iter().all(|&b| is_printable_char(b))
    }
}

impl fmt::Display for AsciiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &b in &self.0 {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for AsciiText {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for AsciiText {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AsciiText::new(s.as_bytes())
    }
}

impl TryFrom<&str> for AsciiText {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        AsciiText::new(value.as_bytes())
    }
}

impl TryFrom<String> for AsciiText {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        AsciiText::new(value.into_bytes())
    }
}

impl TryFrom<Vec<u8>> for AsciiText {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        AsciiText::new(value)
    }
}

impl From<AsciiText> for String {
    fn from(text: AsciiText) -> Self {
        text.0.into_iter().map(char::from).collect()
    }
}

impl PartialEq<str> for AsciiText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for AsciiText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

// ============================================================================
// Tests
// ============================================================================

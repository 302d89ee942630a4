//! Fully-qualified type names
//!
//! A type name has the shape `PackageId::ModuleName::StructBody`:
//!
//! - `PackageId`: exactly 40 lowercase hex characters, no `0x`
//! - `ModuleName`: bare identifier without `::`
//! - `StructBody`: opaque tail; may contain `::` and nested `<...>` generic
//!   arguments that follow the same grammar
//!
//! Only the first two `::` occurrences (scanned left to right) are ever
//! interpreted. The struct body is never split, so generic arguments are
//! carried through untouched.
//!
//! ```
//! use tyname_core::TypeName;
//!
//! let coin: TypeName = "0000000000000000000000000000000000000002::coin::Coin<0000000000000000000000000000000000000002::sui::SUI>"
//!     .parse()
//!     .unwrap();
//! assert_eq!(coin.module_address().unwrap().to_string(), "0000000000000000000000000000000000000002::coin");
//! assert_eq!(coin.struct_name().unwrap(), "Coin<0000000000000000000000000000000000000002::sui::SUI>");
//! ```

use crate::address::{decode_hex_with_case, BinaryId, HexCase, HEX_LENGTH};
use crate::ascii::{self, AsciiText};
use crate::config::CodecConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Delimiter between package id, module name and struct body
pub const SEPARATOR: &[u8] = b"::";

/// Canonical `PackageId::ModuleName::StructBody` string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(AsciiText);

/// `PackageId::ModuleName` prefix identifying a declaring module
///
/// Two module addresses denote the same module iff they are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleAddress(AsciiText);

impl TypeName {
    /// Wrap text as a type name
    ///
    /// The text is treated as trusted-format; malformed names surface as
    /// errors from the decomposing accessors instead.
    pub fn new(text: AsciiText) -> Self {
        TypeName(text)
    }

    /// Underlying text
    pub fn as_text(&self) -> &AsciiText {
        &self.0
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume and return the underlying text
    pub fn into_text(self) -> AsciiText {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the name is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Declaring module (`PackageId::ModuleName`)
    pub fn module_address(&self) -> Result<ModuleAddress> {
        decompose_type_name(self).map(|(module, _)| module)
    }

    /// Everything after the second `::`
    pub fn struct_name(&self) -> Result<AsciiText> {
        decompose_type_name(self).map(|(_, body)| body)
    }

    /// Binary id decoded from the leading 40 hex characters
    pub fn package_id(&self) -> Result<BinaryId> {
        derive_package_id(self)
    }

    /// Whether both names are declared by the same module
    pub fn is_same_module(&self, other: &TypeName) -> Result<bool> {
        is_same_module(self, other)
    }
}

impl ModuleAddress {
    /// Wrap text as a module address
    pub fn new(text: AsciiText) -> Self {
        ModuleAddress(text)
    }

    /// Underlying text
    pub fn as_text(&self) -> &AsciiText {
        &self.0
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume and return the underlying text
    pub fn into_text(self) -> AsciiText {
        self.0
    }

    /// Package id segment, still as hex text
    pub fn package_id_text(&self) -> Result<AsciiText> {
        decompose_module_address(self).map(|(package, _)| package)
    }

    /// Module name segment
    pub fn module_name(&self) -> Result<AsciiText> {
        decompose_module_address(self).map(|(_, module)| module)
    }

    /// Package id segment decoded to binary
    pub fn package_id(&self) -> Result<BinaryId> {
        let package = self.package_id_text()?;
        decode_hex_with_case(package.as_bytes(), HexCase::Lenient)
    }
}

/// Position of the first `::`, or `None` when `index_of` hits its sentinel
fn find_separator(bytes: &[u8]) -> Option<usize> {
    let i = ascii::index_of(bytes, SEPARATOR);
    if i == bytes.len() {
        None
    } else {
        Some(i)
    }
}

fn invalid_format(bytes: &[u8]) -> Error {
    Error::InvalidTypeNameFormat(String::from_utf8_lossy(bytes).into_owned())
}

/// Split a type name into its declaring module and struct body
///
/// Locates the first `::` at `i`, then the first `::` at `j` inside the
/// remainder `rest = name[i+2..]`. The module address is `name[0, i+j+2)`
/// and the struct body is `rest[j+2..]`.
///
/// # Errors
///
/// Returns `InvalidTypeNameFormat` if either `::` is missing.
pub fn decompose_type_name(name: &TypeName) -> Result<(ModuleAddress, AsciiText)> {
    let bytes = name.as_bytes();
    let i = find_separator(bytes).ok_or_else(|| invalid_format(bytes))?;
    let rest = ascii::slice(bytes, i + SEPARATOR.len(), bytes.len())?;
    let j = find_separator(rest).ok_or_else(|| invalid_format(bytes))?;

    let module = ascii::slice(bytes, 0, i + j + SEPARATOR.len())?;
    let body = ascii::slice(rest, j + SEPARATOR.len(), rest.len())?;
    Ok((
        ModuleAddress(AsciiText::from_ascii_unchecked(module.to_vec())),
        AsciiText::from_ascii_unchecked(body.to_vec()),
    ))
}

/// Split a module address into package id text and module name
///
/// # Errors
///
/// Returns `InvalidTypeNameFormat` if the address has no `::`.
pub fn decompose_module_address(address: &ModuleAddress) -> Result<(AsciiText, AsciiText)> {
    let bytes = address.as_bytes();
    let i = find_separator(bytes).ok_or_else(|| invalid_format(bytes))?;
    let package = ascii::slice(bytes, 0, i)?;
    let module = ascii::slice(bytes, i + SEPARATOR.len(), bytes.len())?;
    Ok((
        AsciiText::from_ascii_unchecked(package.to_vec()),
        AsciiText::from_ascii_unchecked(module.to_vec()),
    ))
}

/// Decode the package id from the first 40 characters of a type name
///
/// The name must start with a well-formed 40-character package id.
///
/// # Errors
///
/// Returns `OutOfRange` for names shorter than 40 bytes and
/// `InvalidHexCharacter` if the prefix is not hex.
pub fn derive_package_id(name: &TypeName) -> Result<BinaryId> {
    let prefix = ascii::slice(name.as_bytes(), 0, HEX_LENGTH)?;
    decode_hex_with_case(prefix, HexCase::Lenient)
}

/// Build `module_addr::struct_name`
///
/// Pure concatenation; nothing checks that the result names a real type.
pub fn append_struct_name(module_addr: &ModuleAddress, struct_name: &AsciiText) -> TypeName {
    let joined = ascii::append(
        &ascii::append(module_addr.as_bytes(), SEPARATOR),
        struct_name.as_bytes(),
    );
    TypeName(AsciiText::from_ascii_unchecked(joined))
}

/// Whether two type names share their declaring module
///
/// # Errors
///
/// Returns `InvalidTypeNameFormat` if either name fails to decompose.
pub fn is_same_module(a: &TypeName, b: &TypeName) -> Result<bool> {
    Ok(a.module_address()? == b.module_address()?)
}

/// Configured entry point for names coming from outside the crate
///
/// Applies the ASCII check and the `max_type_name_bytes` limit when
/// parsing, and the configured [`HexCase`] when deriving package ids.
#[derive(Debug, Clone, Default)]
pub struct TypeNameCodec {
    config: CodecConfig,
}

impl TypeNameCodec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Validate an external string into a `TypeName`
    ///
    /// # Errors
    ///
    /// Returns `TypeNameTooLong` past the configured limit and
    /// `InvalidAsciiCharacter` for non-ASCII input.
    pub fn parse(&self, s: &str) -> Result<TypeName> {
        let max = self.config.max_type_name_bytes;
        if s.len() > max {
            trace!(length = s.len(), max, "rejecting oversized type name");
            return Err(Error::TypeNameTooLong {
                length: s.len(),
                max,
            });
        }
        Ok(TypeName(AsciiText::try_from(s)?))
    }

    /// Package id of `name` under the configured hex case policy
    pub fn package_id(&self, name: &TypeName) -> Result<BinaryId> {
        let prefix = ascii::slice(name.as_bytes(), 0, HEX_LENGTH)?;
        decode_hex_with_case(prefix, self.config.hex_case)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ModuleAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(TypeName(AsciiText::try_from(s)?))
    }
}

impl TryFrom<&str> for TypeName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for ModuleAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(ModuleAddress(AsciiText::try_from(s)?))
    }
}

impl From<AsciiText> for TypeName {
    fn from(text: AsciiText) -> Self {
        TypeName(text)
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<&str> for ModuleAddress {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Value types for attribute slots
//!
//! An attribute store is heterogeneous: each slot may hold a value of a
//! different kind, and a slot may change kind over its lifetime. `Value`
//! carries the kind as its variant, and [`ValueKind`] names it without the
//! payload so stores can check "stored as" without cloning.
//!
//! ## Type Rules
//!
//! - Different kinds are NEVER equal: `U64(1) != Bool(true)`
//! - `Bytes` are not `Text`, even when the bytes are ASCII

use serde::{Deserialize, Serialize};
use std::fmt;
use tyname_core::{AsciiText, BinaryId, TypeName};

/// Value held in an attribute slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit unsigned integer
    U64(u64),
    /// Package or object identifier
    Address(BinaryId),
    /// ASCII text
    Text(AsciiText),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Fully-qualified type name
    TypeName(TypeName),
}

/// Kind tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKind {
    /// `Value::Bool`
    Bool,
    /// `Value::U64`
    U64,
    /// `Value::Address`
    Address,
    /// `Value::Text`
    Text,
    /// `Value::Bytes`
    Bytes,
    /// `Value::TypeName`
    TypeName,
}

impl Value {
    /// Kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::U64(_) => ValueKind::U64,
            Value::Address(_) => ValueKind::Address,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::TypeName(_) => ValueKind::TypeName,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as u64 if this is a U64 value
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as identifier if this is an Address value
    pub fn as_address(&self) -> Option<&BinaryId> {
        match self {
            Value::Address(id) => Some(id),
            _ => None,
        }
    }

    /// Get as text if this is a Text value
    pub fn as_text(&self) -> Option<&AsciiText> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get as bytes if this is a Bytes value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get as type name if this is a TypeName value
    pub fn as_type_name(&self) -> Option<&TypeName> {
        match self {
            Value::TypeName(t) => Some(t),
            _ => None,
        }
    }
}

impl ValueKind {
    /// Name of the kind, as used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "Bool",
            ValueKind::U64 => "U64",
            ValueKind::Address => "Address",
            ValueKind::Text => "Text",
            ValueKind::Bytes => "Bytes",
            ValueKind::TypeName => "TypeName",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<BinaryId> for Value {
    fn from(id: BinaryId) -> Self {
        Value::Address(id)
    }
}

impl From<AsciiText> for Value {
    fn from(t: AsciiText) -> Self {
        Value::Text(t)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<TypeName> for Value {
    fn from(t: TypeName) -> Self {
        Value::TypeName(t)
    }
}

//! Core types and codecs for tyname
//!
//! This crate defines the pure, synchronous layer of the system:
//! - AsciiText: validated ASCII byte strings and the search/slice/case primitives
//! - BinaryId: 20-byte package/object identifier and its hex codec
//! - TypeName / ModuleAddress: decomposition of `PackageId::ModuleName::StructBody`
//! - TypeNameSource: injected capability mapping Rust types to canonical names
//! - CodecConfig: `tyname.toml` settings
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod ascii;
pub mod config;
pub mod error;
pub mod source;
pub mod type_name;

pub use address::{
    decode_hex_to_binary_id, decode_hex_with_case, encode_binary_id, BinaryId, HexCase, HEX_LENGTH,
    ID_LENGTH,
};
pub use ascii::AsciiText;
pub use config::{CodecConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use source::{TypeNameSource, TypeRegistry};
pub use type_name::{
    append_struct_name, decompose_module_address, decompose_type_name, derive_package_id,
    is_same_module, ModuleAddress, TypeName, TypeNameCodec,
};

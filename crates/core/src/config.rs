//! Codec configuration via `tyname.toml`
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the same behavior as [`CodecConfig::default`].

use crate::address::HexCase;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "tyname.toml";

/// Default upper bound on external type name strings
pub const DEFAULT_MAX_TYPE_NAME_BYTES: usize = 1024;

/// Codec configuration loaded from `tyname.toml`.
///
/// # Example
///
/// ```toml
/// hex_case = "lenient"
/// max_type_name_bytes = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Whether package id decoding accepts uppercase hex: `"lenient"` or `"strict"`.
    #[serde(default)]
    pub hex_case: HexCase,
    /// Longest type name accepted by `TypeNameCodec::parse`.
    #[serde(default = "default_max_type_name_bytes")]
    pub max_type_name_bytes: usize,
}

fn default_max_type_name_bytes() -> usize {
    DEFAULT_MAX_TYPE_NAME_BYTES
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::default(),
            max_type_name_bytes: default_max_type_name_bytes(),
        }
    }
}

impl CodecConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# tyname codec configuration
#
# Hex case accepted when decoding package ids: "lenient" (default) or "strict"
#   "lenient" = accept 0-9, a-f and A-F
#   "strict"  = accept 0-9 and a-f only
hex_case = "lenient"

# Longest type name string accepted from outside, in bytes (default: 1024)
max_type_name_bytes = 1024
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not valid TOML for this schema
    /// or sets a zero length limit.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::InvalidConfig(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_type_name_bytes == 0 {
            return Err(Error::InvalidConfig(
                "max_type_name_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

//! Options for generating resources.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options for generating resources.
///
/// Every field has a default, so a configuration file only needs to name the ones it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Domain of names without an explicit `domain:` prefix.
    pub domain: String,
    /// Directory that contains the `assets` and `data` directories.
    pub resource_dir: PathBuf,
    /// Indent width of written JSON.
    pub indent: usize,
    /// Pack format, which decides directory names that changed between versions.
    pub pack_format: u8,
}

impl GenerateOptions {
    /// Default domain.
    pub const DEFAULT_DOMAIN: &'static str = "minecraft";
    /// Default pack format.
    pub const DEFAULT_PACK_FORMAT: u8 = 6;

    /// Set the default domain.
    #[must_use]
    pub fn with_domain(self, domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ..self
        }
    }

    /// Set the resource directory.
    #[must_use]
    pub fn with_resource_dir(self, resource_dir: impl Into<PathBuf>) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            ..self
        }
    }

    /// Set the indent width of written JSON.
    #[must_use]
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    /// Set the pack format.
    #[must_use]
    pub fn with_pack_format(self, pack_format: u8) -> Self {
        Self {
            pack_format,
            ..self
        }
    }

    /// Parse options from JSON.
    ///
    /// # Errors
    /// - If the text is not valid JSON or has fields of the wrong type
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read options from a JSON file.
    ///
    /// # Errors
    /// - If the file cannot be read or parsed
    #[cfg(feature = "fs_access")]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            domain: String::from(Self::DEFAULT_DOMAIN),
            resource_dir: PathBuf::from("src/main/resources"),
            indent: 2,
            pack_format: Self::DEFAULT_PACK_FORMAT,
        }
    }
}

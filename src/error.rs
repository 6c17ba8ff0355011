//! Error types for resource generation.

use serde_json::Value;
use thiserror::Error;

/// Result type alias using [`ResourceError`].
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Main error type for resource generation.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A resource name could not be resolved into a location.
    #[error("invalid resource name `{name}`: {reason}")]
    InvalidName {
        /// The offending name, as given.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// A shorthand value had a shape the normalizer does not accept.
    #[error("invalid {expected} shorthand: {found}")]
    InvalidShorthand {
        /// What kind of value was expected.
        expected: &'static str,
        /// The rejected value.
        found: String,
    },

    /// A single ingredient was given for a pattern with several keys.
    #[error("a single ingredient cannot be assigned to pattern keys {keys:?}")]
    AmbiguousIngredient {
        /// The distinct keys found in the pattern.
        keys: Vec<char>,
    },

    /// A shaped crafting pattern is malformed.
    #[error("invalid crafting pattern: {0}")]
    InvalidPattern(String),

    /// I/O error at the write boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResourceError {
    pub(crate) fn name(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason,
        }
    }

    pub(crate) fn shorthand(expected: &'static str, found: &Value) -> Self {
        Self::InvalidShorthand {
            expected,
            found: found.to_string(),
        }
    }
}

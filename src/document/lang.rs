//! Language files.

use serde_json::{Map, Value};

use super::Document;

/// Language of translations when none is given.
pub const DEFAULT_LANGUAGE: &str = "en_us";

/// Translations of one language, in the order keys were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lang {
    entries: Map<String, Value>,
}

impl Lang {
    /// Create a new, empty language file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the translations.
    #[must_use]
    pub fn get_entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Add translations. A later translation of the same key replaces the earlier text
    /// but keeps its position.
    pub fn contribute(&mut self, entries: Map<String, Value>) {
        for (key, text) in entries {
            self.entries.insert(key, text);
        }
    }

    /// Compile the translations into a document.
    #[must_use]
    pub fn compile(&self) -> Document {
        Document::new(self.entries.clone())
    }
}

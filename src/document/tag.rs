//! Tags of items, blocks, fluids and entities.

use std::fmt::Display;

use serde_json::{json, Value};

use super::Document;

/// A tag under construction.
///
/// Values keep the order they were first added in, duplicates are skipped. Once `replace`
/// is set it stays set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tag {
    replace: bool,
    values: Vec<TagValue>,
}
impl Tag {
    /// Create a new, empty tag.
    #[must_use]
    pub fn new(replace: bool) -> Self {
        Self {
            replace,
            values: Vec::new(),
        }
    }

    /// Get whether the tag should replace existing values.
    #[must_use]
    pub fn get_replace(&self) -> bool {
        self.replace
    }

    /// Get the values of the tag.
    #[must_use]
    pub fn get_values(&self) -> &Vec<TagValue> {
        &self.values
    }

    /// Add values to the tag, skipping ones already present.
    /// A `replace` of `true` makes the whole tag replacing.
    pub fn contribute(&mut self, values: impl IntoIterator<Item = TagValue>, replace: bool) {
        self.replace |= replace;
        for value in values {
            if !self.values.contains(&value) {
                self.values.push(value);
            }
        }
    }

    /// Compile the tag into a document.
    #[must_use]
    pub fn compile(&self) -> Document {
        Document::from(json!({
            "replace": self.replace,
            "values": self.values.iter().map(TagValue::compile).collect::<Vec<_>>()
        }))
    }
}

/// The type of a tag.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagType {
    /// A tag for blocks.
    Block,
    /// A tag for fluids.
    Fluid,
    /// A tag for items.
    Item,
    /// A tag for entities.
    Entity,
    /// A custom tag type.
    /// `Other(<registry path>)` => `data/<namespace>/tags/<registry path>`
    Other(String),
}

impl TagType {
    /// Get the name of the tag directory depending on the pack format.
    #[must_use]
    pub fn get_directory_name(&self, pack_format: u8) -> &str {
        if pack_format < 43 {
            match self {
                Self::Block => "blocks",
                Self::Fluid => "fluids",
                Self::Item => "items",
                Self::Entity => "entity_types",
                Self::Other(path) => path,
            }
        } else {
            match self {
                Self::Block => "block",
                Self::Fluid => "fluid",
                Self::Item => "item",
                Self::Entity => "entity_type",
                Self::Other(path) => path,
            }
        }
    }
}

impl Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Block => "block",
            Self::Fluid => "fluid",
            Self::Item => "item",
            Self::Entity => "entity_type",
            Self::Other(path) => path,
        })
    }
}

/// The value of a tag.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagValue {
    /// A simple value, either a resource location or an id of another tag.
    Simple(String),
    /// An advanced value, with an id (same as above) and whether the loading of the tag should fail when entry is not found.
    Advanced {
        /// The id of the tag.
        id: String,
        /// Whether the loading of the tag should fail when the entry is not found.
        required: bool,
    },
}
impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::Simple(value.to_string())
    }
}
impl TagValue {
    /// Compile the tag value into a JSON value.
    #[must_use]
    pub fn compile(&self) -> Value {
        match self {
            Self::Simple(value) => Value::String(value.clone()),
            Self::Advanced { id, required } => {
                json!({
                    "id": id,
                    "required": *required
                })
            }
        }
    }
}

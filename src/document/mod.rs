//! Generated documents, their provenance marker and where they are placed.

pub mod blockstate;
pub mod lang;
pub mod loot;
pub mod model;
pub mod recipe;
pub mod tag;

use std::fmt::Display;

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::{
    location::ResourceLocation,
    util::pack_format::{
        advancement_directory_name, loot_table_directory_name, recipe_directory_name,
    },
};

use tag::TagType;

/// Key of the provenance field injected into every document.
pub const PROVENANCE_KEY: &str = "__comment__";
/// Value of the provenance field injected into every document.
pub const PROVENANCE_MARKER: &str = "This file was automatically created by mcresgen";

/// A generated JSON document.
///
/// The provenance field is always the first key, and `null` values are removed
/// recursively, so optional fields are simply left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    content: Map<String, Value>,
}

impl Document {
    /// Create a document from its content, injecting the provenance field.
    #[must_use]
    pub fn new(content: Map<String, Value>) -> Self {
        let mut map = Map::new();
        map.insert(
            PROVENANCE_KEY.to_string(),
            Value::String(PROVENANCE_MARKER.to_string()),
        );
        for (key, value) in content {
            if key == PROVENANCE_KEY || value.is_null() {
                continue;
            }
            map.insert(key, strip_nulls(value));
        }
        Self { content: map }
    }

    /// Get a top level value of the document.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.content.get(key)
    }

    /// Get the whole document, including the provenance field.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.content
    }

    /// Convert the document into a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.content)
    }

    /// Render the document as pretty printed JSON with the given indent width.
    ///
    /// # Errors
    /// - If serialization fails
    pub fn render(&self, indent: usize) -> serde_json::Result<String> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        self.content.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Check whether rendered JSON is a document generated by this crate.
    /// Anything that is not valid JSON is not generated.
    #[must_use]
    pub fn is_generated(bytes: impl AsRef<[u8]>) -> bool {
        serde_json::from_slice::<Value>(bytes.as_ref())
            .ok()
            .and_then(|value| {
                value
                    .get(PROVENANCE_KEY)
                    .and_then(Value::as_str)
                    .map(|marker| marker == PROVENANCE_MARKER)
            })
            .unwrap_or(false)
    }
}

impl From<Value> for Document {
    /// Non-object values are wrapped under a `value` key.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                Self::new(map)
            }
        }
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(values) => Value::Array(
            values
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}

/// Top level directory of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PackRoot {
    /// Client resources: blockstates, models, translations.
    Assets,
    /// Server data: recipes, tags, loot tables, advancements.
    Data,
}

impl Display for PackRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Assets => "assets",
            Self::Data => "data",
        })
    }
}

/// The kind of a document, which determines its directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// `assets/<domain>/blockstates`
    Blockstate,
    /// `assets/<domain>/models/block`
    BlockModel,
    /// `assets/<domain>/models/item`
    ItemModel,
    /// `assets/<domain>/lang`
    Lang,
    /// `data/<domain>/recipes`
    Recipe,
    /// `data/<domain>/tags/<tag type>`
    Tag(TagType),
    /// `data/<domain>/loot_tables`
    LootTable,
    /// `data/<domain>/advancements`
    Advancement,
    /// `data/<domain>`, placed by the caller
    Data,
}

impl DocumentKind {
    /// Get the top level directory of this kind.
    #[must_use]
    pub fn root(&self) -> PackRoot {
        match self {
            Self::Blockstate | Self::BlockModel | Self::ItemModel | Self::Lang => PackRoot::Assets,
            Self::Recipe | Self::Tag(_) | Self::LootTable | Self::Advancement | Self::Data => {
                PackRoot::Data
            }
        }
    }

    /// Get the directories between the domain and the document path.
    #[must_use]
    pub fn directories(&self, pack_format: u8) -> Vec<&str> {
        match self {
            Self::Blockstate => vec!["blockstates"],
            Self::BlockModel => vec!["models", "block"],
            Self::ItemModel => vec!["models", "item"],
            Self::Lang => vec!["lang"],
            Self::Recipe => vec![recipe_directory_name(pack_format)],
            Self::Tag(tag_type) => vec!["tags", tag_type.get_directory_name(pack_format)],
            Self::LootTable => vec![loot_table_directory_name(pack_format)],
            Self::Advancement => vec![advancement_directory_name(pack_format)],
            Self::Data => Vec::new(),
        }
    }
}

/// Where a document is written, relative to the resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath {
    root: PackRoot,
    domain: String,
    segments: Vec<String>,
}

impl DocumentPath {
    /// Create the path of a document of the given kind for a location.
    #[must_use]
    pub fn new(kind: &DocumentKind, location: &ResourceLocation, pack_format: u8) -> Self {
        let segments = kind
            .directories(pack_format)
            .into_iter()
            .map(str::to_string)
            .chain(location.path().iter().cloned())
            .collect();
        Self {
            root: kind.root(),
            domain: location.domain().clone(),
            segments,
        }
    }

    /// Get the top level directory.
    #[must_use]
    pub fn root(&self) -> PackRoot {
        self.root
    }

    /// Get the domain directory.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Get the segments below the domain directory, the last one without extension.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the `/` separated file path, e.g. `assets/mod/blockstates/rock.json`.
    #[must_use]
    pub fn relative_path(&self) -> String {
        format!("{}/{}/{}.json", self.root, self.domain, self.segments.join("/"))
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.relative_path())
    }
}

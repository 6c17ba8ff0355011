//! Block and item model documents.

use serde_json::{json, Map, Value};

use super::Document;
use crate::location::ResourceLocation;

/// Parent of block models when none is given.
pub const DEFAULT_BLOCK_PARENT: &str = "block/cube_all";
/// Parent of item models when none is given.
pub const DEFAULT_ITEM_PARENT: &str = "item/generated";

/// Options of a block model.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockModelOptions {
    /// Textures shorthand, `{"all": domain:block/<path>}` if unset.
    pub textures: Option<Value>,
    /// Parent model.
    pub parent: String,
    /// Model elements, passed through as is.
    pub elements: Option<Value>,
    /// Leave out the textures entirely.
    pub no_textures: bool,
}

impl Default for BlockModelOptions {
    fn default() -> Self {
        Self {
            textures: None,
            parent: DEFAULT_BLOCK_PARENT.to_string(),
            elements: None,
            no_textures: false,
        }
    }
}

impl BlockModelOptions {
    /// Set the textures shorthand.
    #[must_use]
    pub fn with_textures(self, textures: impl Into<Value>) -> Self {
        Self {
            textures: Some(textures.into()),
            ..self
        }
    }

    /// Set the parent model.
    #[must_use]
    pub fn with_parent(self, parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
            ..self
        }
    }

    /// Set the model elements.
    #[must_use]
    pub fn with_elements(self, elements: Value) -> Self {
        Self {
            elements: Some(elements),
            ..self
        }
    }

    /// Leave out the textures.
    #[must_use]
    pub fn without_textures(self) -> Self {
        Self {
            no_textures: true,
            ..self
        }
    }
}

/// Options of an item model.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemModelOptions {
    /// Textures shorthand, `{"layer0": domain:item/<path>}` if unset.
    pub textures: Option<Value>,
    /// Parent model.
    pub parent: String,
    /// Leave out the textures entirely.
    pub no_textures: bool,
}

impl Default for ItemModelOptions {
    fn default() -> Self {
        Self {
            textures: None,
            parent: DEFAULT_ITEM_PARENT.to_string(),
            no_textures: false,
        }
    }
}

impl ItemModelOptions {
    /// Set the textures shorthand.
    #[must_use]
    pub fn with_textures(self, textures: impl Into<Value>) -> Self {
        Self {
            textures: Some(textures.into()),
            ..self
        }
    }

    /// Set the parent model.
    #[must_use]
    pub fn with_parent(self, parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
            ..self
        }
    }

    /// Leave out the textures.
    #[must_use]
    pub fn without_textures(self) -> Self {
        Self {
            no_textures: true,
            ..self
        }
    }
}

/// Build a block model from normalized textures. `None` textures are left out.
#[must_use]
pub fn block(
    parent: &str,
    textures: Option<Map<String, Value>>,
    elements: Option<Value>,
) -> Document {
    Document::from(json!({
        "parent": parent,
        "textures": textures,
        "elements": elements,
    }))
}

/// Build an item model from normalized textures. `None` textures are left out.
#[must_use]
pub fn item(parent: &str, textures: Option<Map<String, Value>>) -> Document {
    Document::from(json!({
        "parent": parent,
        "textures": textures,
    }))
}

/// Build an item model that displays a block model, by default the one of the same name.
#[must_use]
pub fn block_item(location: &ResourceLocation, parent: Option<&str>) -> Document {
    let parent = parent.map_or_else(|| location.block_model(), str::to_string);
    Document::from(json!({ "parent": parent }))
}

/// Get the textures of a block model when none are given.
#[must_use]
pub fn default_block_textures(location: &ResourceLocation) -> Map<String, Value> {
    let mut textures = Map::new();
    textures.insert("all".to_string(), Value::String(location.block_model()));
    textures
}

/// Get the textures of an item model when none are given.
#[must_use]
pub fn default_item_textures(location: &ResourceLocation) -> Map<String, Value> {
    let mut textures = Map::new();
    textures.insert("layer0".to_string(), Value::String(location.item_model()));
    textures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::resolve;

    #[test]
    fn test_block_model() {
        let location = resolve("rock", "mod").unwrap();
        let document = block(
            DEFAULT_BLOCK_PARENT,
            Some(default_block_textures(&location)),
            None,
        );
        assert_eq!(document.get("parent"), Some(&json!("block/cube_all")));
        assert_eq!(document.get("textures"), Some(&json!({"all": "mod:block/rock"})));
        assert_eq!(document.get("elements"), None);

        let bare = block("block/block", None, Some(json!([{"from": [0, 0, 0]}])));
        assert_eq!(bare.get("textures"), None);
        assert!(bare.get("elements").is_some());
    }

    #[test]
    fn test_item_models() {
        let location = resolve("tools/gem", "mod").unwrap();
        let document = item(DEFAULT_ITEM_PARENT, Some(default_item_textures(&location)));
        assert_eq!(
            document.get("textures"),
            Some(&json!({"layer0": "mod:item/tools/gem"}))
        );

        let document = block_item(&location, None);
        assert_eq!(document.get("parent"), Some(&json!("mod:block/tools/gem")));
        assert_eq!(document.get("textures"), None);
    }
}

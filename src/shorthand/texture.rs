//! Model texture shorthands.

use serde_json::{Map, Value};

use crate::error::{ResourceError, Result};

/// Default texture slot of block models.
pub const BLOCK_TEXTURE_SLOT: &str = "all";
/// Default texture slot of item models.
pub const ITEM_TEXTURE_SLOT: &str = "layer0";

/// Model textures as accepted from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureSpec {
    /// A complete slot to texture mapping, used verbatim.
    Full(Map<String, Value>),
    /// A single texture for the default slot.
    Single(String),
    /// Textures for `layer0`, `layer1`, ... in order.
    Layers(Vec<String>),
}

impl TextureSpec {
    /// Detect the shape of a texture shorthand.
    ///
    /// # Errors
    /// - If the value is not a string, a list of strings or an object
    pub fn detect(value: Value) -> Result<Self> {
        match value {
            Value::String(texture) => Ok(Self::Single(texture)),
            Value::Object(map) => Ok(Self::Full(map)),
            Value::Array(layers) => layers
                .into_iter()
                .map(|layer| match layer {
                    Value::String(texture) => Ok(texture),
                    other => Err(ResourceError::shorthand("texture layer", &other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Layers),
            other => Err(ResourceError::shorthand("textures", &other)),
        }
    }

    /// Convert into the canonical slot to texture mapping.
    #[must_use]
    pub fn normalize(self, default_slot: &str) -> Map<String, Value> {
        match self {
            Self::Full(map) => map,
            Self::Single(texture) => {
                let mut map = Map::new();
                map.insert(default_slot.to_string(), Value::String(texture));
                map
            }
            Self::Layers(layers) => layers
                .into_iter()
                .enumerate()
                .map(|(i, texture)| (format!("layer{i}"), Value::String(texture)))
                .collect(),
        }
    }
}

/// Normalize model textures, assigning a single texture to `default_slot`.
///
/// # Errors
/// - If the value is not a texture shorthand
pub fn textures(value: impl Into<Value>, default_slot: &str) -> Result<Map<String, Value>> {
    TextureSpec::detect(value.into()).map(|spec| spec.normalize(default_slot))
}

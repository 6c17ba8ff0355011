//! Shorthands for blockstate parts, tag values and translations.

use serde_json::{Map, Value};

use crate::{
    document::tag::TagValue,
    error::{ResourceError, Result},
};

/// A part of a multipart blockstate.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    /// A canonical part with `apply` and an optional `when`, passed through.
    Full(Map<String, Value>),
    /// A model that always applies.
    Apply(Value),
    /// A model that applies when the condition matches, given as `[when, apply]`.
    When(Value, Value),
}

impl MultipartPart {
    /// Detect the shape of a multipart part.
    ///
    /// # Errors
    /// - If the value is neither an object nor a `[when, apply]` pair
    pub fn detect(value: Value) -> Result<Self> {
        match value {
            Value::Object(map)
                if map.contains_key("apply")
                    && map.keys().all(|key| key == "apply" || key == "when") =>
            {
                Ok(Self::Full(map))
            }
            Value::Object(_) => Ok(Self::Apply(value)),
            Value::Array(mut pair) if pair.len() == 2 => {
                let apply = pair.pop().unwrap_or(Value::Null);
                let when = pair.pop().unwrap_or(Value::Null);
                Ok(Self::When(when, apply))
            }
            other => Err(ResourceError::shorthand("multipart part", &other)),
        }
    }

    /// Convert into the canonical part object.
    #[must_use]
    pub fn normalize(self) -> Map<String, Value> {
        let mut map = Map::new();
        match self {
            Self::Full(part) => return part,
            Self::Apply(apply) => {
                map.insert("apply".to_string(), apply);
            }
            Self::When(when, apply) => {
                map.insert("when".to_string(), when);
                map.insert("apply".to_string(), apply);
            }
        }
        map
    }
}

/// Normalize the parts of a multipart blockstate.
///
/// # Errors
/// - If any part is not a multipart shorthand
pub fn multipart_parts(parts: impl IntoIterator<Item = Value>) -> Result<Vec<Map<String, Value>>> {
    parts
        .into_iter()
        .map(|part| MultipartPart::detect(part).map(MultipartPart::normalize))
        .collect()
}

/// Normalize tag values into a flat list.
///
/// Strings are simple entries, objects with an `id` and optional `required` flag are
/// advanced entries, nested lists are flattened.
///
/// # Errors
/// - If any value is not a tag entry shorthand
pub fn tag_values(value: impl Into<Value>) -> Result<Vec<TagValue>> {
    let mut values = Vec::new();
    collect_tag_values(value.into(), &mut values)?;
    Ok(values)
}

fn collect_tag_values(value: Value, values: &mut Vec<TagValue>) -> Result<()> {
    match value {
        Value::String(id) => values.push(TagValue::Simple(id)),
        Value::Array(nested) => {
            for value in nested {
                collect_tag_values(value, values)?;
            }
        }
        Value::Object(ref map) => {
            let id = map.get("id").and_then(Value::as_str);
            let required = match map.get("required") {
                None => Some(true),
                Some(required) => required.as_bool(),
            };
            match (id, required) {
                (Some(id), Some(required)) => values.push(TagValue::Advanced {
                    id: id.to_string(),
                    required,
                }),
                _ => return Err(ResourceError::shorthand("tag entry", &value)),
            }
        }
        other => return Err(ResourceError::shorthand("tag entry", &other)),
    }
    Ok(())
}

/// Normalize translation entries.
///
/// Accepts an object of entries, or a list of alternating keys and values where nested
/// lists are expanded in place and objects are merged.
///
/// # Errors
/// - If a key has no value, or a key or value is not a string
pub fn lang_entries(value: impl Into<Value>) -> Result<Map<String, Value>> {
    let mut entries = Map::new();
    collect_lang_entries(value.into(), &mut entries)?;
    Ok(entries)
}

fn collect_lang_entries(value: Value, entries: &mut Map<String, Value>) -> Result<()> {
    match value {
        Value::Object(map) => merge_lang_object(map, entries),
        Value::Array(parts) => {
            let mut parts = parts.into_iter();
            while let Some(part) = parts.next() {
                match part {
                    Value::String(key) => match parts.next() {
                        Some(Value::String(text)) => {
                            entries.insert(key, Value::String(text));
                        }
                        Some(other) => return Err(ResourceError::shorthand("translation", &other)),
                        None => {
                            return Err(ResourceError::InvalidShorthand {
                                expected: "translation",
                                found: format!("missing value for key `{key}`"),
                            })
                        }
                    },
                    nested @ (Value::Array(_) | Value::Object(_)) => {
                        collect_lang_entries(nested, entries)?;
                    }
                    other => return Err(ResourceError::shorthand("translation key", &other)),
                }
            }
            Ok(())
        }
        other => Err(ResourceError::shorthand("translations", &other)),
    }
}

fn merge_lang_object(map: Map<String, Value>, entries: &mut Map<String, Value>) -> Result<()> {
    for (key, text) in map {
        if !text.is_string() {
            return Err(ResourceError::shorthand("translation", &text));
        }
        entries.insert(key, text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_multipart_parts() {
        let parts = multipart_parts(vec![
            json!({"model": "mod:block/post"}),
            json!([{"north": "true"}, {"model": "mod:block/side", "uvlock": true}]),
        ])
        .unwrap();
        assert_eq!(
            Value::Array(parts.into_iter().map(Value::Object).collect()),
            json!([
                {"apply": {"model": "mod:block/post"}},
                {"when": {"north": "true"}, "apply": {"model": "mod:block/side", "uvlock": true}}
            ])
        );
        assert!(multipart_parts(vec![json!("mod:block/post")]).is_err());
    }

    #[test]
    fn test_multipart_parts_idempotent() {
        let once = multipart_parts(vec![
            json!({"model": "mod:block/post"}),
            json!([{"north": "true"}, {"model": "mod:block/side"}]),
        ])
        .unwrap();
        let twice = multipart_parts(once.iter().cloned().map(Value::Object)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tag_values() {
        let values = tag_values(json!([
            "minecraft:oak_log",
            ["#minecraft:logs"],
            {"id": "othermod:log", "required": false}
        ]))
        .unwrap();
        assert_eq!(
            values,
            vec![
                TagValue::from("minecraft:oak_log"),
                TagValue::from("#minecraft:logs"),
                TagValue::Advanced {
                    id: "othermod:log".to_string(),
                    required: false
                },
            ]
        );
        assert_eq!(tag_values("a:b").unwrap().len(), 1);
        assert!(tag_values(json!(4)).is_err());
        assert!(tag_values(json!({"required": true})).is_err());
    }

    #[test]
    fn test_lang_entries() {
        let entries = lang_entries(json!([
            "block.mod.rock", "Rock",
            ["item.mod.gem", "Gem"],
            {"itemGroup.mod": "My Mod"}
        ]))
        .unwrap();
        assert_eq!(
            Value::Object(entries),
            json!({
                "block.mod.rock": "Rock",
                "item.mod.gem": "Gem",
                "itemGroup.mod": "My Mod"
            })
        );
        assert!(lang_entries(json!(["dangling"])).is_err());
        assert!(lang_entries(json!({"key": 3})).is_err());
        assert!(lang_entries("just a string").is_err());
    }
}

//! Blockstate documents.

use serde_json::{json, Map, Value};

use super::Document;
use crate::{
    error::{ResourceError, Result},
    location::ResourceLocation,
};

/// Options of a variant blockstate.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockstateOptions {
    /// Model used by default, `domain:block/<path>` if unset.
    pub model: Option<String>,
    /// Variants by property string. A single `""` variant with the default model if unset.
    pub variants: Option<Map<String, Value>>,
    /// Whether variants without a model get the default model.
    pub use_default_model: bool,
}

impl Default for BlockstateOptions {
    fn default() -> Self {
        Self {
            model: None,
            variants: None,
            use_default_model: true,
        }
    }
}

impl BlockstateOptions {
    /// Set the default model.
    #[must_use]
    pub fn with_model(self, model: &str) -> Self {
        Self {
            model: Some(model.to_string()),
            ..self
        }
    }

    /// Set the variants.
    #[must_use]
    pub fn with_variants(self, variants: Map<String, Value>) -> Self {
        Self {
            variants: Some(variants),
            ..self
        }
    }

    /// Set whether variants without a model get the default model.
    #[must_use]
    pub fn with_default_model(self, use_default_model: bool) -> Self {
        Self {
            use_default_model,
            ..self
        }
    }
}

/// Build a variant blockstate.
///
/// # Errors
/// - If a variant is neither an object nor a list of objects
pub fn variants(location: &ResourceLocation, options: BlockstateOptions) -> Result<Document> {
    let model = options.model.unwrap_or_else(|| location.block_model());

    let variants = match options.variants {
        None => {
            let mut variants = Map::new();
            variants.insert(String::new(), json!({ "model": model }));
            variants
        }
        Some(variants) if options.use_default_model => variants
            .into_iter()
            .map(|(key, variant)| Ok((key, with_default_model(variant, &model)?)))
            .collect::<Result<Map<String, Value>>>()?,
        Some(variants) => variants,
    };

    Ok(Document::from(json!({ "variants": variants })))
}

fn with_default_model(variant: Value, model: &str) -> Result<Value> {
    match variant {
        Value::Object(mut map) => {
            if !map.contains_key("model") {
                map.insert("model".to_string(), Value::String(model.to_string()));
            }
            Ok(Value::Object(map))
        }
        Value::Array(weighted) => weighted
            .into_iter()
            .map(|variant| match variant {
                Value::Object(_) => with_default_model(variant, model),
                other => Err(ResourceError::shorthand("blockstate variant", &other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Err(ResourceError::shorthand("blockstate variant", &other)),
    }
}

/// Build a multipart blockstate from normalized parts.
#[must_use]
pub fn multipart(parts: Vec<Map<String, Value>>) -> Document {
    Document::from(json!({ "multipart": parts }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::resolve;

    fn variants_of(document: &Document) -> &Value {
        document.get("variants").expect("no variants")
    }

    #[test]
    fn test_default_variant() {
        let location = resolve("pink_grass", "mod").unwrap();
        let document = variants(&location, BlockstateOptions::default()).unwrap();
        assert_eq!(
            variants_of(&document),
            &json!({"": {"model": "mod:block/pink_grass"}})
        );
    }

    #[test]
    fn test_default_model_merged() {
        let location = resolve("lamp", "mod").unwrap();
        let given = json!({
            "lit=true": {"model": "mod:block/lamp_on"},
            "lit=false": {"y": 90},
            "random": [{"weight": 2}, {"model": "mod:block/lamp_alt"}]
        });
        let Value::Object(given) = given else {
            unreachable!()
        };
        let document = variants(&location, BlockstateOptions::default().with_variants(given.clone()))
            .unwrap();
        assert_eq!(
            variants_of(&document),
            &json!({
                "lit=true": {"model": "mod:block/lamp_on"},
                "lit=false": {"y": 90, "model": "mod:block/lamp"},
                "random": [{"weight": 2, "model": "mod:block/lamp"}, {"model": "mod:block/lamp_alt"}]
            })
        );

        let untouched = variants(
            &location,
            BlockstateOptions::default()
                .with_variants(given.clone())
                .with_default_model(false),
        )
        .unwrap();
        assert_eq!(variants_of(&untouched), &Value::Object(given));
    }

    #[test]
    fn test_explicit_model() {
        let location = resolve("lamp", "mod").unwrap();
        let document =
            variants(&location, BlockstateOptions::default().with_model("other:block/x")).unwrap();
        assert_eq!(variants_of(&document), &json!({"": {"model": "other:block/x"}}));
    }

    #[test]
    fn test_invalid_variant() {
        let location = resolve("lamp", "mod").unwrap();
        let mut given = Map::new();
        given.insert("lit=true".to_string(), json!("mod:block/lamp_on"));
        assert!(variants(&location, BlockstateOptions::default().with_variants(given)).is_err());
    }
}

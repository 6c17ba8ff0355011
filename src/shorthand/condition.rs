//! Recipe condition shorthands.

use serde_json::{Map, Value};

use crate::error::{ResourceError, Result};

/// A recipe condition as accepted from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionSpec {
    /// A complete condition, used verbatim.
    Full(Map<String, Value>),
    /// Only the condition type.
    Type(String),
    /// Several conditions that all apply.
    Many(Vec<ConditionSpec>),
}

impl ConditionSpec {
    /// Detect the shape of a shorthand condition.
    ///
    /// # Errors
    /// - If the value is not a string, an object or a flat list of those
    pub fn detect(value: Value) -> Result<Self> {
        match value {
            Value::Array(conditions) => conditions
                .into_iter()
                .map(Self::detect_single)
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            other => Self::detect_single(other),
        }
    }

    fn detect_single(value: Value) -> Result<Self> {
        match value {
            Value::String(condition_type) => Ok(Self::Type(condition_type)),
            Value::Object(map) => Ok(Self::Full(map)),
            other => Err(ResourceError::shorthand("condition", &other)),
        }
    }

    /// Convert into the canonical list of condition objects.
    #[must_use]
    pub fn normalize(self) -> Vec<Map<String, Value>> {
        match self {
            Self::Full(map) => vec![map],
            Self::Type(condition_type) => {
                let mut map = Map::new();
                map.insert("type".to_string(), Value::String(condition_type));
                vec![map]
            }
            Self::Many(conditions) => conditions
                .into_iter()
                .flat_map(ConditionSpec::normalize)
                .collect(),
        }
    }
}

/// Normalize recipe conditions into a list of condition objects.
///
/// # Errors
/// - If the value is not a condition shorthand
pub fn conditions(value: impl Into<Value>) -> Result<Vec<Map<String, Value>>> {
    ConditionSpec::detect(value.into()).map(ConditionSpec::normalize)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn as_value(conditions: Vec<Map<String, Value>>) -> Value {
        Value::Array(conditions.into_iter().map(Value::Object).collect())
    }

    #[test]
    fn test_condition_shapes() {
        assert_eq!(
            as_value(conditions("forge:true").unwrap()),
            json!([{"type": "forge:true"}])
        );
        assert_eq!(
            as_value(conditions(json!({"type": "forge:mod_loaded", "modid": "jei"})).unwrap()),
            json!([{"type": "forge:mod_loaded", "modid": "jei"}])
        );
        assert_eq!(
            as_value(conditions(json!(["forge:true", {"type": "forge:false"}])).unwrap()),
            json!([{"type": "forge:true"}, {"type": "forge:false"}])
        );
    }

    #[test]
    fn test_condition_idempotent() {
        let once = conditions(json!(["a:b", {"type": "c:d", "value": 1}])).unwrap();
        let twice = conditions(as_value(once.clone())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_condition_rejects() {
        assert!(conditions(json!(1)).is_err());
        assert!(conditions(json!([["nested"]])).is_err());
        assert!(conditions(json!([true])).is_err());
    }
}

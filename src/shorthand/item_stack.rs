//! Item stack shorthands.

use serde_json::{Map, Value};

use crate::error::{ResourceError, Result};

/// Prefix that marks a shorthand item id as a tag id.
pub const TAG_PREFIX: &str = "tag!";

/// An item stack as accepted from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemStackSpec {
    /// A complete stack, used verbatim.
    Full(Map<String, Value>),
    /// A plain item id.
    Item(String),
    /// A tag id, with the [`TAG_PREFIX`] already stripped.
    Tag(String),
    /// A stack with an explicit count, given as `[count, stack]`.
    Counted(u64, Box<ItemStackSpec>),
}

impl ItemStackSpec {
    /// Detect the shape of a shorthand item stack.
    ///
    /// # Errors
    /// - If the value is neither a string, an object nor a `[count, stack]` pair
    pub fn detect(value: Value) -> Result<Self> {
        match value {
            Value::String(id) => Ok(Self::from(id.as_str())),
            Value::Object(map) => Ok(Self::Full(map)),
            Value::Array(mut pair) if pair.len() == 2 => {
                let stack = pair.pop().unwrap_or(Value::Null);
                let count = pair.pop().unwrap_or(Value::Null);
                let count = count
                    .as_u64()
                    .ok_or_else(|| ResourceError::shorthand("item stack count", &count))?;
                Ok(Self::Counted(count, Box::new(Self::detect(stack)?)))
            }
            other => Err(ResourceError::shorthand("item stack", &other)),
        }
    }

    /// Convert into the canonical item stack object.
    #[must_use]
    pub fn normalize(self) -> Map<String, Value> {
        match self {
            Self::Full(map) => map,
            Self::Item(id) => single("item", id),
            Self::Tag(id) => single("tag", id),
            Self::Counted(count, stack) => {
                let mut map = Map::new();
                map.insert("count".to_string(), Value::from(count));
                map.extend(stack.normalize());
                map
            }
        }
    }
}

impl From<&str> for ItemStackSpec {
    fn from(value: &str) -> Self {
        match value.strip_prefix(TAG_PREFIX) {
            Some(tag) => Self::Tag(tag.to_string()),
            None => Self::Item(value.to_string()),
        }
    }
}

fn single(key: &str, id: String) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::String(id));
    map
}

/// Normalize a single item stack.
///
/// # Errors
/// - If the value is not an item stack shorthand
pub fn item_stack(value: impl Into<Value>) -> Result<Map<String, Value>> {
    ItemStackSpec::detect(value.into()).map(ItemStackSpec::normalize)
}

/// Normalize a list of item stacks. A single stack becomes a one element list.
///
/// # Errors
/// - If any element is not an item stack shorthand
pub fn item_stack_list(value: impl Into<Value>) -> Result<Vec<Map<String, Value>>> {
    match value.into() {
        Value::Array(stacks) => stacks.into_iter().map(item_stack).collect(),
        single @ (Value::String(_) | Value::Object(_)) => Ok(vec![item_stack(single)?]),
        other => Err(ResourceError::shorthand("item stack list", &other)),
    }
}

/// Get the distinct ingredient keys of a crafting pattern, in order of appearance.
#[must_use]
pub fn pattern_keys(pattern: &[String]) -> Vec<char> {
    let mut keys = Vec::new();
    for c in pattern.iter().flat_map(|row| row.chars()) {
        if c != ' ' && !keys.contains(&c) {
            keys.push(c);
        }
    }
    keys
}

/// Normalize the key of a shaped crafting recipe.
///
/// An object maps pattern characters to item stacks. Any other item stack shorthand is
/// assigned to the only key of the pattern.
///
/// # Errors
/// - If a mapping key is not a single character of the pattern
/// - If a single stack is given for a pattern with more than one key
pub fn item_stack_key(value: impl Into<Value>, pattern: &[String]) -> Result<Map<String, Value>> {
    let keys = pattern_keys(pattern);
    match value.into() {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, stack)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if keys.contains(&c) => Ok((key, Value::Object(item_stack(stack)?))),
                    _ => Err(ResourceError::InvalidShorthand {
                        expected: "single character pattern key",
                        found: key,
                    }),
                }
            })
            .collect(),
        single => match keys.as_slice() {
            [key] => {
                let mut map = Map::new();
                map.insert(key.to_string(), Value::Object(item_stack(single)?));
                Ok(map)
            }
            [] => Err(ResourceError::InvalidPattern(
                "pattern has no ingredient keys".to_string(),
            )),
            _ => Err(ResourceError::AmbiguousIngredient { keys }),
        },
    }
}

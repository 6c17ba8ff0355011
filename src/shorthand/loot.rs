//! Loot table shorthands.

use serde_json::{json, Map, Value};

use super::item_stack::TAG_PREFIX;
use crate::error::{ResourceError, Result};

/// Name given to every generated loot pool.
pub const POOL_NAME: &str = "loot_pool";

/// Normalize loot pools.
///
/// - a string is a single pool with a single entry
/// - an object is a single pool, whose `entries` default to the object itself
/// - a list is a list of pools
///
/// Pools without explicit conditions get the default conditions of the loot type.
///
/// # Errors
/// - If any pool, entry, function or condition is not a loot shorthand
pub fn loot_pools(value: impl Into<Value>, loot_type: &str) -> Result<Vec<Value>> {
    let mut pools = Vec::new();
    collect_pools(value.into(), loot_type, &mut pools)?;
    Ok(pools)
}

fn collect_pools(value: Value, loot_type: &str, pools: &mut Vec<Value>) -> Result<()> {
    match value {
        Value::String(_) => pools.push(json!({
            "name": POOL_NAME,
            "rolls": 1,
            "entries": loot_entries(value)?,
            "conditions": default_conditions(loot_type),
        })),
        Value::Object(ref map) => {
            let entries = match map.get("entries") {
                Some(entries) => loot_entries(entries.clone())?,
                None => loot_entries(value.clone())?,
            };
            let conditions = match map.get("conditions") {
                Some(conditions) => Some(loot_conditions(conditions.clone())?),
                None => default_conditions(loot_type),
            };
            let functions = map.get("functions").cloned().map(loot_functions).transpose()?;
            pools.push(json!({
                "name": POOL_NAME,
                "rolls": map.get("rolls").cloned().unwrap_or_else(|| Value::from(1)),
                "bonus_rolls": map.get("bonus_rolls"),
                "entries": entries,
                "conditions": conditions,
                "functions": functions,
            }));
        }
        Value::Array(nested) => {
            for pool in nested {
                collect_pools(pool, loot_type, pools)?;
            }
        }
        other => return Err(ResourceError::shorthand("loot pool", &other)),
    }
    Ok(())
}

/// Normalize loot pool entries.
///
/// A string is an item entry, or a tag entry when prefixed with `tag!`.
///
/// # Errors
/// - If any entry is not a loot entry shorthand
pub fn loot_entries(value: impl Into<Value>) -> Result<Vec<Value>> {
    match value.into() {
        Value::String(name) => Ok(vec![match name.strip_prefix(TAG_PREFIX) {
            Some(tag) => json!({"type": "minecraft:tag", "name": tag}),
            None => json!({"type": "minecraft:item", "name": name}),
        }]),
        Value::Array(nested) => Ok(nested
            .into_iter()
            .map(loot_entries)
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect()),
        Value::Object(map) => {
            let conditions = map.get("conditions").cloned().map(loot_conditions).transpose()?;
            let functions = map.get("functions").cloned().map(loot_functions).transpose()?;
            Ok(vec![json!({
                "type": map.get("type").cloned().unwrap_or_else(|| Value::from("item")),
                "conditions": conditions,
                "name": map.get("name"),
                "children": map.get("children"),
                "expand": map.get("expand"),
                "functions": functions,
                "weight": map.get("weight"),
                "quality": map.get("quality"),
            })])
        }
        other => Err(ResourceError::shorthand("loot entry", &other)),
    }
}

/// Normalize loot functions. A string is the function name.
///
/// # Errors
/// - If any function is not a string or an object
pub fn loot_functions(value: impl Into<Value>) -> Result<Vec<Value>> {
    flat_named(value.into(), "function", "loot function")
}

/// Normalize loot conditions. A string is the condition name.
///
/// # Errors
/// - If any condition is not a string or an object
pub fn loot_conditions(value: impl Into<Value>) -> Result<Vec<Value>> {
    flat_named(value.into(), "condition", "loot condition")
}

fn flat_named(value: Value, key: &str, expected: &'static str) -> Result<Vec<Value>> {
    match value {
        Value::String(name) => {
            let mut map = Map::new();
            map.insert(key.to_string(), Value::String(name));
            Ok(vec![Value::Object(map)])
        }
        Value::Object(_) => Ok(vec![value]),
        Value::Array(nested) => {
            let mut flat = Vec::new();
            for value in nested {
                flat.extend(flat_named(value, key, expected)?);
            }
            Ok(flat)
        }
        other => Err(ResourceError::shorthand(expected, &other)),
    }
}

/// Get the conditions applied to pools of a loot type when none are given.
#[must_use]
pub fn default_conditions(loot_type: &str) -> Option<Vec<Value>> {
    (loot_type == "block").then(|| vec![json!({"condition": "minecraft:survives_explosion"})])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_pool() {
        let pools = loot_pools("mod:rock", "block").unwrap();
        assert_eq!(
            Value::Array(pools),
            json!([{
                "name": "loot_pool",
                "rolls": 1,
                "entries": [{"type": "minecraft:item", "name": "mod:rock"}],
                "conditions": [{"condition": "minecraft:survives_explosion"}]
            }])
        );
    }

    #[test]
    fn test_object_pool() {
        let pools = loot_pools(
            json!({
                "rolls": 2,
                "entries": ["tag!mod:gems", {"name": "mod:dust", "weight": 3, "functions": "minecraft:explosion_decay"}],
                "conditions": "minecraft:random_chance"
            }),
            "entity",
        )
        .unwrap();
        assert_eq!(pools.len(), 1);
        let pool = &pools[0];
        assert_eq!(pool["rolls"], json!(2));
        assert_eq!(pool["bonus_rolls"], Value::Null);
        assert_eq!(pool["conditions"], json!([{"condition": "minecraft:random_chance"}]));
        assert_eq!(pool["entries"][0], json!({"type": "minecraft:tag", "name": "mod:gems"}));
        assert_eq!(pool["entries"][1]["type"], json!("item"));
        assert_eq!(pool["entries"][1]["weight"], json!(3));
        assert_eq!(
            pool["entries"][1]["functions"],
            json!([{"function": "minecraft:explosion_decay"}])
        );
    }

    #[test]
    fn test_object_pool_is_its_own_entry() {
        let pools = loot_pools(json!({"name": "mod:rock"}), "chest").unwrap();
        assert_eq!(pools[0]["entries"][0]["name"], json!("mod:rock"));
        assert_eq!(pools[0]["conditions"], Value::Null);
    }

    #[test]
    fn test_rejects() {
        assert!(loot_pools(json!(3), "block").is_err());
        assert!(loot_entries(json!(true)).is_err());
        assert!(loot_functions(json!([1])).is_err());
        assert!(loot_conditions(json!(null)).is_err());
    }
}

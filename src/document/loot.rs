//! Loot table documents.

use serde_json::{json, Value};

use super::Document;

/// Build a loot table from normalized pools.
#[must_use]
pub fn table(loot_type: &str, pools: Vec<Value>) -> Document {
    Document::from(json!({
        "type": format!("minecraft:{loot_type}"),
        "pools": pools,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shorthand::loot::loot_pools;

    #[test]
    fn test_block_table() {
        let document = table("block", loot_pools("mod:rock", "block").unwrap());
        assert_eq!(document.get("type"), Some(&json!("minecraft:block")));
        assert_eq!(
            document.get("pools").and_then(|pools| pools.pointer("/0/entries/0/name")),
            Some(&json!("mod:rock"))
        );
    }

    #[test]
    fn test_unset_fields_are_left_out() {
        let document = table("entity", loot_pools(json!({"name": "mod:hide"}), "entity").unwrap());
        let pool = document.get("pools").and_then(|pools| pools.get(0)).unwrap();
        assert!(pool.get("conditions").is_none());
        assert!(pool.get("bonus_rolls").is_none());
        assert_eq!(pool["entries"][0], json!({"type": "item", "name": "mod:hide"}));
    }
}

//! Recipe documents and their unlock advancements.

use serde_json::{json, Map, Value};

use super::Document;
use crate::{
    error::{ResourceError, Result},
    location::ResourceLocation,
};

/// Options shared by all recipes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeOptions {
    /// Recipe book group.
    pub group: Option<String>,
    /// Conditions shorthand, left out if unset.
    pub conditions: Option<Value>,
}

impl RecipeOptions {
    /// Set the recipe book group.
    #[must_use]
    pub fn with_group(self, group: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            ..self
        }
    }

    /// Set the conditions shorthand.
    #[must_use]
    pub fn with_conditions(self, conditions: impl Into<Value>) -> Self {
        Self {
            conditions: Some(conditions.into()),
            ..self
        }
    }
}

/// Build a shapeless crafting recipe from normalized stacks and conditions.
#[must_use]
pub fn shapeless(
    ingredients: Vec<Map<String, Value>>,
    result: Map<String, Value>,
    group: Option<&str>,
    conditions: Option<Vec<Map<String, Value>>>,
) -> Document {
    Document::from(json!({
        "type": "minecraft:crafting_shapeless",
        "group": group,
        "ingredients": ingredients,
        "result": result,
        "conditions": conditions,
    }))
}

/// Build a shaped crafting recipe from a pattern and a normalized key.
#[must_use]
pub fn shaped(
    pattern: &[String],
    key: Map<String, Value>,
    result: Map<String, Value>,
    group: Option<&str>,
    conditions: Option<Vec<Map<String, Value>>>,
) -> Document {
    Document::from(json!({
        "type": "minecraft:crafting_shaped",
        "group": group,
        "pattern": pattern,
        "key": key,
        "result": result,
        "conditions": conditions,
    }))
}

/// Check that a crafting pattern has at least one row and rows of equal, non-zero length.
///
/// # Errors
/// - If the pattern is empty or its rows differ in length
pub fn validate_pattern(pattern: &[String]) -> Result<()> {
    let Some(first) = pattern.first() else {
        return Err(ResourceError::InvalidPattern("pattern has no rows".to_string()));
    };
    let width = first.chars().count();
    if width == 0 {
        return Err(ResourceError::InvalidPattern("pattern rows are empty".to_string()));
    }
    if let Some(row) = pattern.iter().find(|row| row.chars().count() != width) {
        return Err(ResourceError::InvalidPattern(format!(
            "row `{row}` is not {width} characters wide"
        )));
    }
    Ok(())
}

/// Build a recipe of any type, merging the data into the top level object.
///
/// # Errors
/// - If the data is not an object
pub fn generic(
    recipe_type: &str,
    data: Value,
    group: Option<&str>,
    conditions: Option<Vec<Map<String, Value>>>,
) -> Result<Document> {
    let data = match data {
        Value::Object(data) => data,
        other => return Err(ResourceError::shorthand("recipe data", &other)),
    };

    let mut content = Map::new();
    content.insert("type".to_string(), Value::String(recipe_type.to_string()));
    content.insert("group".to_string(), json!(group));
    content.extend(data);
    if let Some(conditions) = conditions {
        content.insert("conditions".to_string(), json!(conditions));
    }
    Ok(Document::new(content))
}

/// Build the advancement that unlocks a recipe once the player has one of its items.
#[must_use]
pub fn unlock_advancement(recipe: &ResourceLocation, item: Map<String, Value>) -> Document {
    let recipe = recipe.to_string();
    Document::from(json!({
        "parent": "minecraft:recipes/root",
        "rewards": {
            "recipes": [recipe]
        },
        "criteria": {
            "has_item": {
                "trigger": "minecraft:inventory_changed",
                "conditions": {
                    "items": [item]
                }
            },
            "has_the_recipe": {
                "trigger": "minecraft:recipe_unlocked",
                "conditions": {
                    "recipe": recipe
                }
            }
        },
        "requirements": [["has_item", "has_the_recipe"]]
    }))
}

//! Directory names that changed between pack formats.

/// Get the name of the recipe directory depending on the pack format.
#[must_use]
pub const fn recipe_directory_name(pack_format: u8) -> &'static str {
    if pack_format < 45 {
        "recipes"
    } else {
        "recipe"
    }
}

/// Get the name of the loot table directory depending on the pack format.
#[must_use]
pub const fn loot_table_directory_name(pack_format: u8) -> &'static str {
    if pack_format < 45 {
        "loot_tables"
    } else {
        "loot_table"
    }
}

/// Get the name of the advancement directory depending on the pack format.
#[must_use]
pub const fn advancement_directory_name(pack_format: u8) -> &'static str {
    if pack_format < 45 {
        "advancements"
    } else {
        "advancement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_names() {
        assert_eq!(recipe_directory_name(6), "recipes");
        assert_eq!(recipe_directory_name(48), "recipe");
        assert_eq!(loot_table_directory_name(15), "loot_tables");
        assert_eq!(advancement_directory_name(45), "advancement");
    }
}

//! Contexts returned by generators, for chaining related documents onto the same name.

use serde_json::{json, Value};

use crate::{
    document::model::{BlockModelOptions, ItemModelOptions},
    error::Result,
    location::{NameSpec, ResourceLocation},
    manager::ResourceManager,
    vanilla::{self, ArchetypeTextures},
    writer::ResourceWriter,
};

/// A block that was just generated.
#[derive(Debug)]
pub struct BlockContext<'a, W: ResourceWriter> {
    manager: &'a mut ResourceManager<W>,
    location: ResourceLocation,
}

/// Generates `make_<archetype>` and `make_<archetype>_with` for a vanilla factory.
macro_rules! archetype_methods {
    ($($name:ident, $with:ident, $what:literal;)*) => {
        $(
            #[doc = concat!("Write ", $what, " of this block, textured with this block.")]
            ///
            /// # Errors
            /// - If writing fails
            pub fn $name(self) -> Result<Self> {
                self.$with(&ArchetypeTextures::default())
            }

            #[doc = concat!("Write ", $what, " of this block with texture overrides.")]
            ///
            /// # Errors
            /// - If writing fails
            pub fn $with(self, textures: &ArchetypeTextures) -> Result<Self> {
                vanilla::$name(self.manager, &self.location, textures)?;
                Ok(self)
            }
        )*
    };
}

impl<'a, W: ResourceWriter> BlockContext<'a, W> {
    pub(crate) fn new(manager: &'a mut ResourceManager<W>, location: ResourceLocation) -> Self {
        Self { manager, location }
    }

    /// Get the location of the block.
    #[must_use]
    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Write the block model of this block.
    ///
    /// # Errors
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    pub fn with_block_model(self, textures: impl Into<Value>, parent: &str) -> Result<Self> {
        let options = BlockModelOptions::default()
            .with_textures(textures)
            .with_parent(parent);
        self.with_block_model_options(options)
    }

    /// Write the block model of this block with the given options.
    ///
    /// # Errors
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    pub fn with_block_model_options(self, options: BlockModelOptions) -> Result<Self> {
        self.manager.block_model_with(&self.location, options)?;
        Ok(self)
    }

    /// Write an item model that displays the block model of this block.
    ///
    /// # Errors
    /// - If writing fails
    pub fn with_item_model(self) -> Result<Self> {
        self.manager.block_item_model(&self.location)?;
        Ok(self)
    }

    /// Add the `block.<domain>.<path>` translation of this block.
    ///
    /// # Errors
    /// - If the translation cannot be buffered
    pub fn with_lang(self, text: &str) -> Result<Self> {
        let key = self.location.translation_key("block");
        self.manager.lang(json!({ key: text }))?;
        Ok(self)
    }

    /// Add this block to a block tag.
    ///
    /// # Errors
    /// - If the tag name is malformed
    pub fn with_tag(self, tag: impl Into<NameSpec>) -> Result<Self> {
        self.manager.block_tag(tag, self.location.to_string())?;
        Ok(self)
    }

    /// Add the item of this block to an item tag.
    ///
    /// # Errors
    /// - If the tag name is malformed
    pub fn with_item_tag(self, tag: impl Into<NameSpec>) -> Result<Self> {
        self.manager.item_tag(tag, self.location.to_string())?;
        Ok(self)
    }

    /// Write the loot table of this block at `blocks/<path>`.
    ///
    /// # Errors
    /// - If the pools are not a loot shorthand
    /// - If writing fails
    pub fn with_block_loot(self, pools: impl Into<Value>) -> Result<Self> {
        let table = ResourceLocation::new(
            self.location.domain(),
            &format!("blocks/{}", self.location.path_string()),
        )?;
        self.manager.loot(&table, pools, "block")?;
        Ok(self)
    }

    archetype_methods! {
        make_slab, make_slab_with, "a slab";
        make_stairs, make_stairs_with, "stairs";
        make_fence, make_fence_with, "a fence";
        make_fence_gate, make_fence_gate_with, "a fence gate";
        make_wall, make_wall_with, "a wall";
        make_door, make_door_with, "a door";
        make_trapdoor, make_trapdoor_with, "a trapdoor";
        make_button, make_button_with, "a button";
        make_pressure_plate, make_pressure_plate_with, "a pressure plate";
    }
}

/// An item that was just generated.
#[derive(Debug)]
pub struct ItemContext<'a, W: ResourceWriter> {
    manager: &'a mut ResourceManager<W>,
    location: ResourceLocation,
}

impl<'a, W: ResourceWriter> ItemContext<'a, W> {
    pub(crate) fn new(manager: &'a mut ResourceManager<W>, location: ResourceLocation) -> Self {
        Self { manager, location }
    }

    /// Get the location of the item.
    #[must_use]
    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Write a generated item model of this item with the given textures.
    ///
    /// # Errors
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    pub fn with_item_model(self, textures: impl Into<Value>) -> Result<Self> {
        self.with_item_model_options(ItemModelOptions::default().with_textures(textures))
    }

    /// Write the item model of this item with the given options.
    ///
    /// # Errors
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    pub fn with_item_model_options(self, options: ItemModelOptions) -> Result<Self> {
        self.manager.item_model_with(&self.location, options)?;
        Ok(self)
    }

    /// Add the `item.<domain>.<path>` translation of this item.
    ///
    /// # Errors
    /// - If the translation cannot be buffered
    pub fn with_lang(self, text: &str) -> Result<Self> {
        let key = self.location.translation_key("item");
        self.manager.lang(json!({ key: text }))?;
        Ok(self)
    }

    /// Add this item to an item tag.
    ///
    /// # Errors
    /// - If the tag name is malformed
    pub fn with_tag(self, tag: impl Into<NameSpec>) -> Result<Self> {
        self.manager.item_tag(tag, self.location.to_string())?;
        Ok(self)
    }
}

/// A recipe that was just generated.
#[derive(Debug)]
pub struct RecipeContext<'a, W: ResourceWriter> {
    manager: &'a mut ResourceManager<W>,
    location: ResourceLocation,
}

impl<'a, W: ResourceWriter> RecipeContext<'a, W> {
    pub(crate) fn new(manager: &'a mut ResourceManager<W>, location: ResourceLocation) -> Self {
        Self { manager, location }
    }

    /// Get the location of the recipe.
    #[must_use]
    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Write the advancement at `recipes/<path>` that unlocks this recipe once the player
    /// has the given item.
    ///
    /// # Errors
    /// - If the item is not an item stack shorthand
    /// - If writing fails
    pub fn with_unlock_advancement(self, item: impl Into<Value>) -> Result<Self> {
        self.manager.recipe_advancement(&self.location, item)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{util::options::GenerateOptions, virtual_fs::VFolder};

    fn manager() -> ResourceManager<VFolder> {
        ResourceManager::in_memory(GenerateOptions::default().with_domain("mod"))
    }

    fn read(manager: &ResourceManager<VFolder>, path: &str) -> Value {
        manager
            .writer()
            .get_file(path)
            .unwrap_or_else(|| panic!("{path} not written"))
            .parse_json()
            .expect("invalid json")
    }

    #[test]
    fn test_block_chain() {
        let mut manager = manager();
        manager
            .blockstate("ores/copper")
            .and_then(|block| block.with_block_model("mod:block/copper_ore", "block/cube_all"))
            .and_then(BlockContext::with_item_model)
            .and_then(|block| block.with_lang("Copper Ore"))
            .and_then(|block| block.with_tag("ores"))
            .and_then(|block| block.with_item_tag("forge:ores"))
            .and_then(|block| block.with_block_loot("mod:ores/copper"))
            .unwrap();
        manager.flush().unwrap();

        assert!(manager
            .writer()
            .get_file("assets/mod/models/block/ores/copper.json")
            .is_some());
        assert_eq!(
            read(&manager, "assets/mod/models/item/ores/copper.json")["parent"],
            json!("mod:block/ores/copper")
        );
        assert_eq!(
            read(&manager, "assets/mod/lang/en_us.json")["block.mod.ores.copper"],
            json!("Copper Ore")
        );
        assert_eq!(
            read(&manager, "data/mod/tags/blocks/ores.json")["values"],
            json!(["mod:ores/copper"])
        );
        assert_eq!(
            read(&manager, "data/forge/tags/items/ores.json")["values"],
            json!(["mod:ores/copper"])
        );
        assert_eq!(
            read(&manager, "data/mod/loot_tables/blocks/ores/copper.json")["type"],
            json!("minecraft:block")
        );
    }

    #[test]
    fn test_block_archetype_chain() {
        let mut manager = manager();
        let location = manager
            .blockstate("marble")
            .and_then(BlockContext::make_slab)
            .and_then(|block| {
                block.make_stairs_with(&ArchetypeTextures::default().with_top("mod:block/marble_top"))
            })
            .map(|block| block.location().clone())
            .unwrap();

        assert_eq!(location.to_string(), "mod:marble");
        assert!(manager
            .writer()
            .get_file("assets/mod/blockstates/marble_slab.json")
            .is_some());
        assert_eq!(
            read(&manager, "assets/mod/models/block/marble_stairs.json")["textures"]["top"],
            json!("mod:block/marble_top")
        );
    }

    #[test]
    fn test_item_chain() {
        let mut manager = manager();
        manager
            .item_model("gem", "mod:item/gem")
            .and_then(|item| item.with_lang("Gem"))
            .and_then(|item| item.with_tag("gems"))
            .unwrap();
        manager.flush().unwrap();

        assert_eq!(
            read(&manager, "assets/mod/lang/en_us.json")["item.mod.gem"],
            json!("Gem")
        );
        assert_eq!(
            read(&manager, "data/mod/tags/items/gems.json")["values"],
            json!(["mod:gem"])
        );
    }

    #[test]
    fn test_recipe_unlock_advancement() {
        let mut manager = manager();
        manager
            .crafting_shapeless("gem", "mod:shard", "mod:gem")
            .and_then(|recipe| recipe.with_unlock_advancement("mod:shard"))
            .unwrap();

        let advancement = read(&manager, "data/mod/advancements/recipes/gem.json");
        assert_eq!(advancement["rewards"]["recipes"], json!(["mod:gem"]));
        assert_eq!(
            advancement["criteria"]["has_item"]["conditions"]["items"],
            json!([{"item": "mod:shard"}])
        );
    }
}

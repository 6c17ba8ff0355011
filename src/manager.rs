//! The resource manager, entry point of every generator.

use getset::Getters;
use serde_json::{Map, Value};

#[cfg(feature = "fs_access")]
use crate::writer::DirectoryWriter;
use crate::{
    buffer::AggregationBuffers,
    context::{BlockContext, ItemContext, RecipeContext},
    document::{
        blockstate::{self, BlockstateOptions},
        lang::DEFAULT_LANGUAGE,
        loot,
        model::{self, BlockModelOptions, ItemModelOptions},
        recipe::{self, RecipeOptions},
        tag::TagType,
        Document, DocumentKind, DocumentPath,
    },
    error::Result,
    location::{resolve, NameSpec, ResourceLocation},
    shorthand::{
        conditions, item_stack, item_stack_key, item_stack_list, lang_entries, loot::loot_pools,
        multipart_parts, tag_values, textures, BLOCK_TEXTURE_SLOT, ITEM_TEXTURE_SLOT,
    },
    util::options::GenerateOptions,
    virtual_fs::VFolder,
    writer::ResourceWriter,
};

/// Generates resource and data pack documents and hands them to a [`ResourceWriter`].
///
/// Most documents are written as soon as they are generated. Tags and translations collect
/// values from many calls and are only written by [`ResourceManager::flush`].
#[derive(Debug, Getters)]
pub struct ResourceManager<W: ResourceWriter> {
    /// Options names are resolved and documents are placed with.
    #[get = "pub"]
    options: GenerateOptions,
    /// Destination of generated documents.
    #[get = "pub"]
    writer: W,
    /// Tags and translations waiting to be flushed.
    #[get = "pub"]
    buffers: AggregationBuffers,
}

impl ResourceManager<VFolder> {
    /// Create a manager that collects documents in memory.
    #[must_use]
    pub fn in_memory(options: GenerateOptions) -> Self {
        Self::new(options, VFolder::new())
    }
}

#[cfg(feature = "fs_access")]
impl ResourceManager<DirectoryWriter> {
    /// Create a manager that writes documents below the configured resource directory.
    #[must_use]
    pub fn on_disk(options: GenerateOptions) -> Self {
        let writer = DirectoryWriter::new(&options.resource_dir).with_indent(options.indent);
        Self::new(options, writer)
    }
}

impl<W: ResourceWriter> ResourceManager<W> {
    /// Create a manager writing to the given writer.
    #[must_use]
    pub fn new(options: GenerateOptions, writer: W) -> Self {
        Self {
            options,
            writer,
            buffers: AggregationBuffers::new(),
        }
    }

    /// Get the domain of names without an explicit domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.options.domain
    }

    /// Get the writer mutably.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the manager and return its writer. Buffered values that were not flushed are lost.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Resolve a name against the default domain.
    ///
    /// # Errors
    /// - If the name is malformed
    pub fn resolve(&self, name: impl Into<NameSpec>) -> Result<ResourceLocation> {
        resolve(name, &self.options.domain)
    }

    fn write(
        &mut self,
        kind: &DocumentKind,
        location: &ResourceLocation,
        document: &Document,
    ) -> Result<()> {
        let path = DocumentPath::new(kind, location, self.options.pack_format);
        tracing::debug!("Writing {path}");
        self.writer.write(&path, document)?;
        Ok(())
    }

    /// Write a blockstate with a single variant showing the block model of the same name.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If writing fails
    pub fn blockstate(&mut self, name: impl Into<NameSpec>) -> Result<BlockContext<'_, W>> {
        self.blockstate_with(name, BlockstateOptions::default())
    }

    /// Write a variant blockstate.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If a variant is not an object or list of objects
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn blockstate_with(
        &mut self,
        name: impl Into<NameSpec>,
        options: BlockstateOptions,
    ) -> Result<BlockContext<'_, W>> {
        let location = self.resolve(name)?;
        let document = blockstate::variants(&location, options)?;
        self.write(&DocumentKind::Blockstate, &location, &document)?;
        Ok(BlockContext::new(self, location))
    }

    /// Write a multipart blockstate.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If a part is neither an object nor a `[when, apply]` pair
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn blockstate_multipart(
        &mut self,
        name: impl Into<NameSpec>,
        parts: impl IntoIterator<Item = Value>,
    ) -> Result<BlockContext<'_, W>> {
        let location = self.resolve(name)?;
        let document = blockstate::multipart(multipart_parts(parts)?);
        self.write(&DocumentKind::Blockstate, &location, &document)?;
        Ok(BlockContext::new(self, location))
    }

    /// Write a block model with the given textures and parent.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    pub fn block_model(
        &mut self,
        name: impl Into<NameSpec>,
        textures: impl Into<Value>,
        parent: &str,
    ) -> Result<BlockContext<'_, W>> {
        let options = BlockModelOptions::default()
            .with_textures(textures)
            .with_parent(parent);
        self.block_model_with(name, options)
    }

    /// Write a block model.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn block_model_with(
        &mut self,
        name: impl Into<NameSpec>,
        options: BlockModelOptions,
    ) -> Result<BlockContext<'_, W>> {
        let location = self.resolve(name)?;
        let slots = match (options.no_textures, options.textures) {
            (true, _) => None,
            (false, Some(value)) => Some(textures(value, BLOCK_TEXTURE_SLOT)?),
            (false, None) => Some(model::default_block_textures(&location)),
        };
        let document = model::block(&options.parent, slots, options.elements);
        self.write(&DocumentKind::BlockModel, &location, &document)?;
        Ok(BlockContext::new(self, location))
    }

    /// Write a generated item model with the given textures.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    pub fn item_model(
        &mut self,
        name: impl Into<NameSpec>,
        textures: impl Into<Value>,
    ) -> Result<ItemContext<'_, W>> {
        self.item_model_with(name, ItemModelOptions::default().with_textures(textures))
    }

    /// Write an item model.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the textures are not a texture shorthand
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn item_model_with(
        &mut self,
        name: impl Into<NameSpec>,
        options: ItemModelOptions,
    ) -> Result<ItemContext<'_, W>> {
        let location = self.resolve(name)?;
        let slots = match (options.no_textures, options.textures) {
            (true, _) => None,
            (false, Some(value)) => Some(textures(value, ITEM_TEXTURE_SLOT)?),
            (false, None) => Some(model::default_item_textures(&location)),
        };
        let document = model::item(&options.parent, slots);
        self.write(&DocumentKind::ItemModel, &location, &document)?;
        Ok(ItemContext::new(self, location))
    }

    /// Write an item model that displays the block model of the same name.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If writing fails
    pub fn block_item_model(&mut self, name: impl Into<NameSpec>) -> Result<ItemContext<'_, W>> {
        let location = self.resolve(name)?;
        let document = model::block_item(&location, None);
        self.write(&DocumentKind::ItemModel, &location, &document)?;
        Ok(ItemContext::new(self, location))
    }

    /// Write an item model that displays the given block model.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If writing fails
    pub fn block_item_model_with_parent(
        &mut self,
        name: impl Into<NameSpec>,
        parent: &str,
    ) -> Result<ItemContext<'_, W>> {
        let location = self.resolve(name)?;
        let document = model::block_item(&location, Some(parent));
        self.write(&DocumentKind::ItemModel, &location, &document)?;
        Ok(ItemContext::new(self, location))
    }

    /// Write a shapeless crafting recipe.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If an ingredient or the result is not an item stack shorthand
    /// - If writing fails
    pub fn crafting_shapeless(
        &mut self,
        name: impl Into<NameSpec>,
        ingredients: impl Into<Value>,
        result: impl Into<Value>,
    ) -> Result<RecipeContext<'_, W>> {
        self.crafting_shapeless_with(name, ingredients, result, RecipeOptions::default())
    }

    /// Write a shapeless crafting recipe with a group or conditions.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If an ingredient, the result or a condition is not a valid shorthand
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn crafting_shapeless_with(
        &mut self,
        name: impl Into<NameSpec>,
        ingredients: impl Into<Value>,
        result: impl Into<Value>,
        options: RecipeOptions,
    ) -> Result<RecipeContext<'_, W>> {
        let location = self.resolve(name)?;
        let ingredients = item_stack_list(ingredients)?;
        let result = item_stack(result)?;
        let conditions = options.conditions.map(conditions).transpose()?;
        let document =
            recipe::shapeless(ingredients, result, options.group.as_deref(), conditions);
        self.write(&DocumentKind::Recipe, &location, &document)?;
        Ok(RecipeContext::new(self, location))
    }

    /// Write a shaped crafting recipe.
    ///
    /// The ingredients are either an object from pattern characters to item stacks, or a
    /// single item stack for a pattern with exactly one character.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the pattern is empty or its rows differ in length
    /// - If the ingredients do not match the pattern
    /// - If writing fails
    pub fn crafting_shaped(
        &mut self,
        name: impl Into<NameSpec>,
        pattern: &[&str],
        ingredients: impl Into<Value>,
        result: impl Into<Value>,
    ) -> Result<RecipeContext<'_, W>> {
        self.crafting_shaped_with(name, pattern, ingredients, result, RecipeOptions::default())
    }

    /// Write a shaped crafting recipe with a group or conditions.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the pattern is empty or its rows differ in length
    /// - If the ingredients do not match the pattern
    /// - If the result or a condition is not a valid shorthand
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn crafting_shaped_with(
        &mut self,
        name: impl Into<NameSpec>,
        pattern: &[&str],
        ingredients: impl Into<Value>,
        result: impl Into<Value>,
        options: RecipeOptions,
    ) -> Result<RecipeContext<'_, W>> {
        let location = self.resolve(name)?;
        let pattern = pattern.iter().map(|row| (*row).to_string()).collect::<Vec<_>>();
        recipe::validate_pattern(&pattern)?;
        let key = item_stack_key(ingredients, &pattern)?;
        let result = item_stack(result)?;
        let conditions = options.conditions.map(conditions).transpose()?;
        let document = recipe::shaped(&pattern, key, result, options.group.as_deref(), conditions);
        self.write(&DocumentKind::Recipe, &location, &document)?;
        Ok(RecipeContext::new(self, location))
    }

    /// Write a recipe of any type. The data object is merged into the recipe as is.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the data is not an object
    /// - If writing fails
    pub fn recipe(
        &mut self,
        name: impl Into<NameSpec>,
        recipe_type: &str,
        data: impl Into<Value>,
    ) -> Result<RecipeContext<'_, W>> {
        self.recipe_with(name, recipe_type, data, RecipeOptions::default())
    }

    /// Write a recipe of any type with a group or conditions.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the data is not an object or a condition is not a condition shorthand
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all, fields(recipe_type = %recipe_type))]
    pub fn recipe_with(
        &mut self,
        name: impl Into<NameSpec>,
        recipe_type: &str,
        data: impl Into<Value>,
        options: RecipeOptions,
    ) -> Result<RecipeContext<'_, W>> {
        let location = self.resolve(name)?;
        let conditions = options.conditions.map(conditions).transpose()?;
        let document = recipe::generic(
            recipe_type,
            data.into(),
            options.group.as_deref(),
            conditions,
        )?;
        self.write(&DocumentKind::Recipe, &location, &document)?;
        Ok(RecipeContext::new(self, location))
    }

    /// Write an arbitrary document below `data/<domain>/`.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If writing fails
    pub fn data(&mut self, name: impl Into<NameSpec>, data: impl Into<Value>) -> Result<()> {
        let location = self.resolve(name)?;
        self.write(&DocumentKind::Data, &location, &Document::from(data.into()))
    }

    /// Write the advancement that unlocks a recipe once the player has the given item.
    ///
    /// # Errors
    /// - If the recipe name is malformed
    /// - If the item is not an item stack shorthand
    /// - If writing fails
    pub fn recipe_advancement(
        &mut self,
        recipe_name: impl Into<NameSpec>,
        item: impl Into<Value>,
    ) -> Result<()> {
        let recipe = self.resolve(recipe_name)?;
        let location = ResourceLocation::new(
            recipe.domain(),
            &format!("recipes/{}", recipe.path_string()),
        )?;
        let document = recipe::unlock_advancement(&recipe, item_stack(item)?);
        self.write(&DocumentKind::Advancement, &location, &document)
    }

    /// Write a loot table of the given loot type, e.g. `block` or `entity`.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the pools are not a loot shorthand
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all, fields(loot_type = %loot_type))]
    pub fn loot(
        &mut self,
        name: impl Into<NameSpec>,
        pools: impl Into<Value>,
        loot_type: &str,
    ) -> Result<()> {
        let location = self.resolve(name)?;
        let document = loot::table(loot_type, loot_pools(pools, loot_type)?);
        self.write(&DocumentKind::LootTable, &location, &document)
    }

    /// Add values to a tag. The tag is written by the next flush.
    ///
    /// Once any contribution sets `replace`, the tag replaces lower priority tags.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the values are not a tag value shorthand
    pub fn tag(
        &mut self,
        tag_type: TagType,
        name: impl Into<NameSpec>,
        values: impl Into<Value>,
        replace: bool,
    ) -> Result<()> {
        let location = self.resolve(name)?;
        let values = tag_values(values)?;
        self.buffers.contribute_tag(tag_type, location, values, replace);
        Ok(())
    }

    /// Add values to an item tag.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the values are not a tag value shorthand
    pub fn item_tag(&mut self, name: impl Into<NameSpec>, values: impl Into<Value>) -> Result<()> {
        self.tag(TagType::Item, name, values, false)
    }

    /// Add values to a block tag.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the values are not a tag value shorthand
    pub fn block_tag(&mut self, name: impl Into<NameSpec>, values: impl Into<Value>) -> Result<()> {
        self.tag(TagType::Block, name, values, false)
    }

    /// Add values to a fluid tag.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the values are not a tag value shorthand
    pub fn fluid_tag(&mut self, name: impl Into<NameSpec>, values: impl Into<Value>) -> Result<()> {
        self.tag(TagType::Fluid, name, values, false)
    }

    /// Add values to an entity type tag.
    ///
    /// # Errors
    /// - If the name is malformed
    /// - If the values are not a tag value shorthand
    pub fn entity_tag(
        &mut self,
        name: impl Into<NameSpec>,
        values: impl Into<Value>,
    ) -> Result<()> {
        self.tag(TagType::Entity, name, values, false)
    }

    /// Add translations to the `en_us` language file of the default domain.
    ///
    /// # Errors
    /// - If the entries are not a lang shorthand
    pub fn lang(&mut self, entries: impl Into<Value>) -> Result<()> {
        self.lang_in(DEFAULT_LANGUAGE, entries)
    }

    /// Add translations to a language file of the default domain.
    ///
    /// # Errors
    /// - If the language is not a valid file name
    /// - If the entries are not a lang shorthand
    pub fn lang_in(&mut self, language: &str, entries: impl Into<Value>) -> Result<()> {
        let location = self.resolve([language])?;
        let entries: Map<String, Value> = lang_entries(entries)?;
        self.buffers.contribute_lang(location, entries);
        Ok(())
    }

    /// Write every buffered tag and language file and empty the buffers.
    ///
    /// The buffers are emptied before writing, so documents after a failed write are lost.
    ///
    /// # Errors
    /// - If writing fails
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn flush(&mut self) -> Result<()> {
        let documents = self.buffers.drain(self.options.pack_format);
        tracing::debug!("Flushing {} buffered documents", documents.len());
        for (path, document) in documents {
            tracing::debug!("Writing {path}");
            self.writer.write(&path, &document)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ResourceError;

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
    fn test_default_blockstate() {
        let mut manager = manager();
        manager.blockstate("pink_grass").unwrap();
        assert_eq!(
            read(&manager, "assets/mod/blockstates/pink_grass.json"),
            json!({
                "__comment__": "This file was automatically created by mcresgen",
                "variants": {"": {"model": "mod:block/pink_grass"}}
            })
        );
    }

    #[test]
    fn test_block_and_item_models() {
        let mut manager = manager();
        manager
            .block_model("rock", "mod:block/rock_texture", "block/cube_all")
            .unwrap();
        manager
            .item_model("gem", json!(["mod:item/gem", "mod:item/gem_glow"]))
            .unwrap();
        manager
            .item_model_with("stick", ItemModelOptions::default().with_parent("item/handheld"))
            .unwrap();
        manager.block_item_model("rock").unwrap();

        assert_eq!(
            read(&manager, "assets/mod/models/block/rock.json")["textures"],
            json!({"all": "mod:block/rock_texture"})
        );
        assert_eq!(
            read(&manager, "assets/mod/models/item/gem.json")["textures"],
            json!({"layer0": "mod:item/gem", "layer1": "mod:item/gem_glow"})
        );
        let stick = read(&manager, "assets/mod/models/item/stick.json");
        assert_eq!(stick["parent"], json!("item/handheld"));
        assert_eq!(stick["textures"], json!({"layer0": "mod:item/stick"}));
        assert_eq!(
            read(&manager, "assets/mod/models/item/rock.json")["parent"],
            json!("mod:block/rock")
        );
    }

    #[test]
    fn test_model_without_textures() {
        let mut manager = manager();
        manager
            .block_model_with("glass", BlockModelOptions::default().without_textures())
            .unwrap();
        let glass = read(&manager, "assets/mod/models/block/glass.json");
        assert!(glass.get("textures").is_none());
    }

    #[test]
    fn test_tags_accumulate_until_flush() {
        let mut manager = manager();
        manager.item_tag("logs", "mod:oak_log").unwrap();
        manager
            .item_tag("logs", json!(["mod:birch_log", "mod:oak_log"]))
            .unwrap();
        assert!(manager.writer().is_empty());

        manager.flush().unwrap();
        assert_eq!(
            read(&manager, "data/mod/tags/items/logs.json"),
            json!({
                "__comment__": "This file was automatically created by mcresgen",
                "replace": false,
                "values": ["mod:oak_log", "mod:birch_log"]
            })
        );

        manager.item_tag("logs", "mod:spruce_log").unwrap();
        manager.flush().unwrap();
        assert_eq!(
            read(&manager, "data/mod/tags/items/logs.json")["values"],
            json!(["mod:spruce_log"])
        );
    }

    #[test]
    fn test_lang_merges_until_flush() {
        let mut manager = manager();
        manager.lang(json!({"block.mod.rock": "Rock"})).unwrap();
        manager.lang(json!(["item.mod.gem", "Gem"])).unwrap();
        manager
            .lang_in("de_de", json!(["item.mod.gem", "Edelstein"]))
            .unwrap();
        manager.flush().unwrap();

        assert_eq!(
            read(&manager, "assets/mod/lang/en_us.json"),
            json!({
                "__comment__": "This file was automatically created by mcresgen",
                "block.mod.rock": "Rock",
                "item.mod.gem": "Gem"
            })
        );
        assert_eq!(
            read(&manager, "assets/mod/lang/de_de.json")["item.mod.gem"],
            json!("Edelstein")
        );
    }

    #[test]
    fn test_shaped_recipe() {
        let mut manager = manager();
        manager
            .crafting_shaped(
                "torch",
                &["C", "S"],
                json!({"C": "minecraft:coal", "S": "tag!forge:rods/wooden"}),
                json!([4, "minecraft:torch"]),
            )
            .unwrap();
        assert_eq!(
            read(&manager, "data/mod/recipes/torch.json"),
            json!({
                "__comment__": "This file was automatically created by mcresgen",
                "type": "minecraft:crafting_shaped",
                "pattern": ["C", "S"],
                "key": {
                    "C": {"item": "minecraft:coal"},
                    "S": {"tag": "forge:rods/wooden"}
                },
                "result": {"count": 4, "item": "minecraft:torch"}
            })
        );
    }

    #[test]
    fn test_ambiguous_single_ingredient() {
        let mut manager = manager();
        let error = manager
            .crafting_shaped("thing", &["XXX", " S ", "   "], "minecraft:stick", "mod:thing")
            .err()
            .expect("recipe must be rejected");
        assert!(matches!(error, ResourceError::AmbiguousIngredient { .. }));
        assert!(manager.writer().is_empty());
    }

    #[test]
    fn test_uneven_pattern() {
        let mut manager = manager();
        let error = manager
            .crafting_shaped("thing", &["XX", "X"], "minecraft:stick", "mod:thing")
            .err()
            .expect("recipe must be rejected");
        assert!(matches!(error, ResourceError::InvalidPattern(_)));
    }

    #[test]
    fn test_shapeless_recipe_with_options() {
        let mut manager = manager();
        manager
            .crafting_shapeless_with(
                "dye",
                json!(["minecraft:red_dye", "minecraft:blue_dye"]),
                "minecraft:purple_dye",
                RecipeOptions::default()
                    .with_group("dyes")
                    .with_conditions("forge:true"),
            )
            .unwrap();
        let dye = read(&manager, "data/mod/recipes/dye.json");
        assert_eq!(dye["group"], json!("dyes"));
        assert_eq!(dye["conditions"], json!([{"type": "forge:true"}]));
        assert_eq!(dye["ingredients"][1], json!({"item": "minecraft:blue_dye"}));
    }

    #[test]
    fn test_generic_recipe_and_data() {
        let mut manager = manager();
        manager
            .recipe(
                "iron_from_ore",
                "minecraft:smelting",
                json!({"ingredient": {"item": "minecraft:iron_ore"}, "result": "minecraft:iron_ingot", "experience": 0.7}),
            )
            .unwrap();
        manager
            .data(["worldgen", "feature", "ore"], json!({"type": "minecraft:ore"}))
            .unwrap();

        let recipe = read(&manager, "data/mod/recipes/iron_from_ore.json");
        assert_eq!(recipe["type"], json!("minecraft:smelting"));
        assert_eq!(recipe["experience"], json!(0.7));
        assert!(recipe.get("group").is_none());
        assert_eq!(
            read(&manager, "data/mod/worldgen/feature/ore.json")["type"],
            json!("minecraft:ore")
        );
    }

    #[test]
    fn test_loot_table() {
        let mut manager = manager();
        manager.loot("blocks/rock", "mod:rock", "block").unwrap();
        let table = read(&manager, "data/mod/loot_tables/blocks/rock.json");
        assert_eq!(table["type"], json!("minecraft:block"));
        assert_eq!(
            table["pools"][0]["entries"],
            json!([{"type": "minecraft:item", "name": "mod:rock"}])
        );
    }

    #[test]
    fn test_pack_format_directories() {
        let mut manager =
            ResourceManager::in_memory(GenerateOptions::default().with_domain("mod").with_pack_format(48));
        manager.block_tag("ores", "mod:copper_ore").unwrap();
        manager.crafting_shapeless("gem", "mod:shard", "mod:gem").unwrap();
        manager.flush().unwrap();
        assert!(manager.writer().get_file("data/mod/tags/block/ores.json").is_some());
        assert!(manager.writer().get_file("data/mod/recipe/gem.json").is_some());
    }

    #[test]
    fn test_invalid_name_writes_nothing() {
        let mut manager = manager();
        let error = manager.blockstate("mod:").err().expect("name must be rejected");
        assert!(matches!(error, ResourceError::InvalidName { .. }));
        assert!(manager.writer().is_empty());
    }

    /// Records written paths and fails on one chosen write.
    #[derive(Debug)]
    struct FailingWriter {
        fail_at: usize,
        writes: usize,
        written: Vec<String>,
    }

    impl FailingWriter {
        fn new(fail_at: usize) -> Self {
            Self {
                fail_at,
                writes: 0,
                written: Vec::new(),
            }
        }
    }

    impl ResourceWriter for FailingWriter {
        fn write(&mut self, path: &DocumentPath, _document: &Document) -> std::io::Result<()> {
            self.writes += 1;
            if self.writes == self.fail_at {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            self.written.push(path.relative_path());
            Ok(())
        }
    }

    #[test]
    fn test_failed_flush_drops_remaining_documents() {
        let options = GenerateOptions::default().with_domain("mod");
        let mut manager = ResourceManager::new(options, FailingWriter::new(2));
        manager.block_tag("ores", "mod:copper_ore").unwrap();
        manager.item_tag("ores", "mod:copper_ore").unwrap();
        manager.lang(json!({"block.mod.copper_ore": "Copper Ore"})).unwrap();

        let error = manager.flush().err().expect("flush must fail");
        assert!(matches!(error, ResourceError::Io(_)));
        assert!(manager.buffers().is_empty());
        assert_eq!(manager.writer().written.len(), 1);

        manager.flush().unwrap();
        assert_eq!(manager.writer().written.len(), 1);
    }

    #[test]
    fn test_failed_write_returns_no_context() {
        let options = GenerateOptions::default().with_domain("mod");
        let mut manager = ResourceManager::new(options, FailingWriter::new(1));
        let result = manager.blockstate("rock").map(|block| block.location().clone());
        assert!(matches!(result, Err(ResourceError::Io(_))));
        assert!(manager.writer().written.is_empty());

        manager.blockstate("rock").unwrap();
        assert_eq!(
            manager.writer().written,
            vec!["assets/mod/blockstates/rock.json"]
        );
    }

    #[cfg(feature = "fs_access")]
    #[test]
    fn test_on_disk() {
        let dir = tempfile::tempdir().expect("error creating tempdir");
        let options = GenerateOptions::default()
            .with_domain("mod")
            .with_resource_dir(dir.path());
        let mut manager = ResourceManager::on_disk(options);
        manager.blockstate("rock").unwrap();
        manager.block_tag("ores", "mod:rock").unwrap();
        manager.flush().unwrap();

        assert!(dir.path().join("assets/mod/blockstates/rock.json").exists());
        assert!(dir.path().join("data/mod/tags/blocks/ores.json").exists());

        let removed = crate::util::clean::clean_generated_resources(dir.path()).unwrap();
        assert_eq!(removed, 2);
        assert!(!dir.path().join("assets").exists());
    }
}

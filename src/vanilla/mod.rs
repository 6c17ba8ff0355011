//! Factories for the block archetypes of vanilla Minecraft.
//!
//! Each factory takes a base block `b` and writes the blockstate, block models and item
//! model of a derived block such as `b_slab`, textured with the base block by default.

pub mod variants;

use serde_json::json;

use crate::{
    document::{
        blockstate::BlockstateOptions,
        model::{BlockModelOptions, ItemModelOptions},
    },
    error::Result,
    location::ResourceLocation,
    manager::ResourceManager,
    writer::ResourceWriter,
};

/// Texture overrides of an archetype.
///
/// `texture` replaces every slot that has no more specific override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchetypeTextures {
    /// Texture of every slot.
    pub texture: Option<String>,
    /// Top texture of slabs, stairs and doors.
    pub top: Option<String>,
    /// Side texture of slabs and stairs.
    pub side: Option<String>,
    /// Bottom texture of slabs, stairs and doors.
    pub bottom: Option<String>,
}

impl ArchetypeTextures {
    /// Override every slot.
    #[must_use]
    pub fn with_texture(self, texture: &str) -> Self {
        Self {
            texture: Some(texture.to_string()),
            ..self
        }
    }

    /// Override the top texture.
    #[must_use]
    pub fn with_top(self, top: &str) -> Self {
        Self {
            top: Some(top.to_string()),
            ..self
        }
    }

    /// Override the side texture.
    #[must_use]
    pub fn with_side(self, side: &str) -> Self {
        Self {
            side: Some(side.to_string()),
            ..self
        }
    }

    /// Override the bottom texture.
    #[must_use]
    pub fn with_bottom(self, bottom: &str) -> Self {
        Self {
            bottom: Some(bottom.to_string()),
            ..self
        }
    }

    fn pick(&self, slot: Option<&String>, default: String) -> String {
        slot.or(self.texture.as_ref()).cloned().unwrap_or(default)
    }

    fn single(&self, default: String) -> String {
        self.pick(None, default)
    }
}

fn block_model<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    location: &ResourceLocation,
    parent: &str,
    textures: serde_json::Value,
) -> Result<()> {
    let options = BlockModelOptions::default()
        .with_parent(parent)
        .with_textures(textures);
    manager.block_model_with(location, options)?;
    Ok(())
}

fn variant_blockstate<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    location: &ResourceLocation,
    variants: serde_json::Map<String, serde_json::Value>,
) -> Result<()> {
    manager.blockstate_with(location, BlockstateOptions::default().with_variants(variants))?;
    Ok(())
}

/// Write a slab `b_slab`.
///
/// # Errors
/// - If writing fails
pub fn make_slab<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let slab = base.with_suffix("_slab");
    let slab_top = base.with_suffix("_slab_top");
    let slots = json!({
        "bottom": textures.pick(textures.bottom.as_ref(), base.block_model()),
        "top": textures.pick(textures.top.as_ref(), base.block_model()),
        "side": textures.pick(textures.side.as_ref(), base.block_model()),
    });

    variant_blockstate(
        manager,
        &slab,
        variants::slab(
            &base.block_model(),
            &slab.block_model(),
            &slab_top.block_model(),
        ),
    )?;
    block_model(manager, &slab, "block/slab", slots.clone())?;
    block_model(manager, &slab_top, "block/slab_top", slots)?;
    manager.block_item_model(&slab)?;
    Ok(())
}

/// Write stairs `b_stairs`.
///
/// # Errors
/// - If writing fails
pub fn make_stairs<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let stairs = base.with_suffix("_stairs");
    let inner = base.with_suffix("_stairs_inner");
    let outer = base.with_suffix("_stairs_outer");
    let slots = json!({
        "bottom": textures.pick(textures.bottom.as_ref(), base.block_model()),
        "top": textures.pick(textures.top.as_ref(), base.block_model()),
        "side": textures.pick(textures.side.as_ref(), base.block_model()),
    });

    variant_blockstate(
        manager,
        &stairs,
        variants::stairs(
            &stairs.block_model(),
            &inner.block_model(),
            &outer.block_model(),
        ),
    )?;
    block_model(manager, &stairs, "block/stairs", slots.clone())?;
    block_model(manager, &inner, "block/inner_stairs", slots.clone())?;
    block_model(manager, &outer, "block/outer_stairs", slots)?;
    manager.block_item_model(&stairs)?;
    Ok(())
}

/// Write a fence `b_fence`.
///
/// # Errors
/// - If writing fails
pub fn make_fence<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let fence = base.with_suffix("_fence");
    let post = base.with_suffix("_fence_post");
    let side = base.with_suffix("_fence_side");
    let inventory = base.with_suffix("_fence_inventory");
    let slots = json!({ "texture": textures.single(base.block_model()) });

    manager.blockstate_multipart(
        &fence,
        variants::fence(&post.block_model(), &side.block_model()),
    )?;
    block_model(manager, &post, "block/fence_post", slots.clone())?;
    block_model(manager, &side, "block/fence_side", slots.clone())?;
    block_model(manager, &inventory, "block/fence_inventory", slots)?;
    manager.block_item_model_with_parent(&fence, &inventory.block_model())?;
    Ok(())
}

/// Write a fence gate `b_fence_gate`.
///
/// # Errors
/// - If writing fails
pub fn make_fence_gate<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let gate = base.with_suffix("_fence_gate");
    let open = base.with_suffix("_fence_gate_open");
    let wall = base.with_suffix("_fence_gate_wall");
    let wall_open = base.with_suffix("_fence_gate_wall_open");
    let slots = json!({ "texture": textures.single(base.block_model()) });

    variant_blockstate(
        manager,
        &gate,
        variants::fence_gate(
            &gate.block_model(),
            &open.block_model(),
            &wall.block_model(),
            &wall_open.block_model(),
        ),
    )?;
    block_model(manager, &gate, "block/template_fence_gate", slots.clone())?;
    block_model(manager, &open, "block/template_fence_gate_open", slots.clone())?;
    block_model(manager, &wall, "block/template_fence_gate_wall", slots.clone())?;
    block_model(manager, &wall_open, "block/template_fence_gate_wall_open", slots)?;
    manager.block_item_model(&gate)?;
    Ok(())
}

/// Write a wall `b_wall`.
///
/// # Errors
/// - If writing fails
pub fn make_wall<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let wall = base.with_suffix("_wall");
    let post = base.with_suffix("_wall_post");
    let side = base.with_suffix("_wall_side");
    let inventory = base.with_suffix("_wall_inventory");
    let slots = json!({ "wall": textures.single(base.block_model()) });

    manager.blockstate_multipart(
        &wall,
        variants::wall(&post.block_model(), &side.block_model()),
    )?;
    block_model(manager, &post, "block/template_wall_post", slots.clone())?;
    block_model(manager, &side, "block/template_wall_side", slots.clone())?;
    block_model(manager, &inventory, "block/wall_inventory", slots)?;
    manager.block_item_model_with_parent(&wall, &inventory.block_model())?;
    Ok(())
}

/// Write a door `b_door`. The item uses the flat texture `item/b_door`.
///
/// # Errors
/// - If writing fails
pub fn make_door<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let door = base.with_suffix("_door");
    let bottom = base.with_suffix("_door_bottom");
    let bottom_hinge = base.with_suffix("_door_bottom_hinge");
    let top = base.with_suffix("_door_top");
    let top_hinge = base.with_suffix("_door_top_hinge");
    let slots = json!({
        "top": textures.pick(textures.top.as_ref(), top.block_model()),
        "bottom": textures.pick(textures.bottom.as_ref(), bottom.block_model()),
    });

    variant_blockstate(
        manager,
        &door,
        variants::door(
            &bottom.block_model(),
            &bottom_hinge.block_model(),
            &top.block_model(),
            &top_hinge.block_model(),
        ),
    )?;
    block_model(manager, &bottom, "block/door_bottom", slots.clone())?;
    block_model(manager, &bottom_hinge, "block/door_bottom_rh", slots.clone())?;
    block_model(manager, &top, "block/door_top", slots.clone())?;
    block_model(manager, &top_hinge, "block/door_top_rh", slots)?;
    manager.item_model_with(&door, ItemModelOptions::default())?;
    Ok(())
}

/// Write a trapdoor `b_trapdoor`.
///
/// # Errors
/// - If writing fails
pub fn make_trapdoor<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let trapdoor = base.with_suffix("_trapdoor");
    let bottom = base.with_suffix("_trapdoor_bottom");
    let top = base.with_suffix("_trapdoor_top");
    let open = base.with_suffix("_trapdoor_open");
    let slots = json!({ "texture": textures.single(trapdoor.block_model()) });

    variant_blockstate(
        manager,
        &trapdoor,
        variants::trapdoor(&bottom.block_model(), &top.block_model(), &open.block_model()),
    )?;
    block_model(
        manager,
        &bottom,
        "block/template_orientable_trapdoor_bottom",
        slots.clone(),
    )?;
    block_model(manager, &top, "block/template_orientable_trapdoor_top", slots.clone())?;
    block_model(manager, &open, "block/template_orientable_trapdoor_open", slots)?;
    manager.block_item_model_with_parent(&trapdoor, &bottom.block_model())?;
    Ok(())
}

/// Write a button `b_button`.
///
/// # Errors
/// - If writing fails
pub fn make_button<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let button = base.with_suffix("_button");
    let pressed = base.with_suffix("_button_pressed");
    let inventory = base.with_suffix("_button_inventory");
    let slots = json!({ "texture": textures.single(base.block_model()) });

    variant_blockstate(
        manager,
        &button,
        variants::button(&button.block_model(), &pressed.block_model()),
    )?;
    block_model(manager, &button, "block/button", slots.clone())?;
    block_model(manager, &pressed, "block/button_pressed", slots.clone())?;
    block_model(manager, &inventory, "block/button_inventory", slots)?;
    manager.block_item_model_with_parent(&button, &inventory.block_model())?;
    Ok(())
}

/// Write a pressure plate `b_pressure_plate`.
///
/// # Errors
/// - If writing fails
pub fn make_pressure_plate<W: ResourceWriter>(
    manager: &mut ResourceManager<W>,
    base: &ResourceLocation,
    textures: &ArchetypeTextures,
) -> Result<()> {
    let plate = base.with_suffix("_pressure_plate");
    let down = base.with_suffix("_pressure_plate_down");
    let slots = json!({ "texture": textures.single(base.block_model()) });

    variant_blockstate(
        manager,
        &plate,
        variants::pressure_plate(&plate.block_model(), &down.block_model()),
    )?;
    block_model(manager, &plate, "block/pressure_plate_up", slots.clone())?;
    block_model(manager, &down, "block/pressure_plate_down", slots)?;
    manager.block_item_model(&plate)?;
    Ok(())
}

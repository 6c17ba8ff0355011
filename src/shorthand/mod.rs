//! Normalizers turning compact shorthand values into canonical JSON.
//!
//! Every normalizer accepts either the full structure, which is passed through unchanged,
//! or a shorthand string or list. Each has a spec type with an explicit `detect` step that
//! rejects unsupported shapes with [`ResourceError::InvalidShorthand`], and a total
//! `normalize` step. Normalizers are pure and idempotent on their own output.
//!
//! [`ResourceError::InvalidShorthand`]: crate::error::ResourceError::InvalidShorthand

mod condition;
mod item_stack;
pub mod loot;
mod parts;
mod texture;

pub use condition::{conditions, ConditionSpec};
pub use item_stack::{
    item_stack, item_stack_key, item_stack_list, pattern_keys, ItemStackSpec, TAG_PREFIX,
};
pub use parts::{lang_entries, multipart_parts, tag_values, MultipartPart};
pub use texture::{textures, TextureSpec, BLOCK_TEXTURE_SLOT, ITEM_TEXTURE_SLOT};

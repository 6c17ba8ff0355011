//! Mcresgen is a library for generating the JSON documents of Minecraft resource and data packs.
//!
//! Blockstates, models, recipes, loot tables and advancements are written as soon as they are
//! generated. Tags and translations are collected across calls and written by
//! [`ResourceManager::flush`]. Every generated document carries a marker field, so
//! [`clean_generated_resources`](util::clean::clean_generated_resources) can remove them
//! again without touching hand written files.
//!
//! ```
//! use mcresgen::prelude::*;
//!
//! let mut manager = ResourceManager::in_memory(GenerateOptions::default().with_domain("mod"));
//! manager
//!     .blockstate("marble")?
//!     .with_block_model("mod:block/marble", "block/cube_all")?
//!     .with_item_model()?
//!     .with_lang("Marble")?
//!     .make_slab()?;
//! manager.flush()?;
//!
//! assert!(manager.writer().get_file("assets/mod/blockstates/marble_slab.json").is_some());
//! # Ok::<(), mcresgen::error::ResourceError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    nonstandard_style,
    clippy::complexity,
    clippy::style,
    clippy::suspicious
)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod context;
pub mod document;
pub mod error;
pub mod location;
pub mod manager;
pub mod shorthand;
pub mod util;
pub mod vanilla;
pub mod virtual_fs;
pub mod writer;

pub use manager::ResourceManager;

/// Re-exports of the types most generators need.
pub mod prelude {
    #[doc(inline)]
    pub use crate::{
        context::{BlockContext, ItemContext, RecipeContext},
        document::{
            blockstate::BlockstateOptions,
            model::{BlockModelOptions, ItemModelOptions},
            recipe::RecipeOptions,
            tag::{TagType, TagValue},
        },
        error::ResourceError,
        location::{NameSpec, ResourceLocation},
        manager::ResourceManager,
        util::options::GenerateOptions,
        vanilla::ArchetypeTextures,
        virtual_fs::VFolder,
        writer::ResourceWriter,
    };
    #[cfg(feature = "fs_access")]
    #[doc(inline)]
    pub use crate::writer::DirectoryWriter;
}

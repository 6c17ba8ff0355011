//! Utility functions for the mcresgen project.

#[cfg(feature = "fs_access")]
pub mod clean;
pub mod options;
pub(crate) mod pack_format;

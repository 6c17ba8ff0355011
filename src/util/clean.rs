//! Removal of previously generated files.

use std::{fs, io, path::Path};

use crate::document::Document;

/// Recursively remove every JSON file below `path` that was generated by this crate,
/// identified by its provenance field, and prune directories left empty.
///
/// Hand written files and their directories are never touched. `path` itself is kept.
/// Returns the number of removed files.
///
/// # Errors
/// - If reading a directory or file, or removing one, fails
#[tracing::instrument(level = "debug")]
pub fn clean_generated_resources(path: &Path) -> io::Result<usize> {
    let removed = clean_dir(path)?;
    tracing::debug!("Removed {removed} generated files");
    Ok(removed)
}

fn clean_dir(path: &Path) -> io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_dir() {
            removed += clean_dir(&entry_path)?;
            if fs::read_dir(&entry_path)?.next().is_none() {
                fs::remove_dir(&entry_path)?;
            }
        } else if entry_path.extension().is_some_and(|ext| ext == "json") {
            let bytes = fs::read(&entry_path)?;
            if Document::is_generated(&bytes) {
                tracing::trace!("Removing {}", entry_path.display());
                fs::remove_file(&entry_path)?;
                removed += 1;
            }
        }
    }
    Ok(removed)
}

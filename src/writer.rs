//! Destinations for generated documents.

use std::io;
#[cfg(feature = "fs_access")]
use std::path::{Path, PathBuf};

use crate::{
    document::{Document, DocumentPath},
    virtual_fs::{VFile, VFolder},
};

/// Indent width used when no other is configured.
pub const DEFAULT_INDENT: usize = 2;

/// Somewhere generated documents are written to.
pub trait ResourceWriter {
    /// Write a document, replacing any previous document at the same path.
    ///
    /// # Errors
    /// - If the underlying storage fails
    fn write(&mut self, path: &DocumentPath, document: &Document) -> io::Result<()>;
}

impl<W: ResourceWriter + ?Sized> ResourceWriter for &mut W {
    fn write(&mut self, path: &DocumentPath, document: &Document) -> io::Result<()> {
        (**self).write(path, document)
    }
}

/// Documents are collected in memory, to be inspected, placed or zipped later.
impl ResourceWriter for VFolder {
    fn write(&mut self, path: &DocumentPath, document: &Document) -> io::Result<()> {
        let text = document.render(DEFAULT_INDENT)?;
        self.add_file(&path.relative_path(), VFile::from(text));
        Ok(())
    }
}

/// Writes documents to a resource directory as soon as they are generated.
#[cfg(feature = "fs_access")]
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    root: PathBuf,
    indent: usize,
}

#[cfg(feature = "fs_access")]
impl DirectoryWriter {
    /// Create a writer for the given resource directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the indent width of written JSON.
    #[must_use]
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    /// Get the resource directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file a document path is written to.
    #[must_use]
    pub fn file_path(&self, path: &DocumentPath) -> PathBuf {
        let mut file = self.root.join(path.root().to_string()).join(path.domain());
        if let Some((name, dirs)) = path.segments().split_last() {
            file.extend(dirs);
            // names may contain dots, so the extension is appended rather than set
            file.push(format!("{name}.json"));
        }
        file
    }
}

#[cfg(feature = "fs_access")]
impl ResourceWriter for DirectoryWriter {
    fn write(&mut self, path: &DocumentPath, document: &Document) -> io::Result<()> {
        let file = self.file_path(path);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = document.render(self.indent)?;
        tracing::trace!("Writing {}", file.display());
        std::fs::write(file, text)
    }
}

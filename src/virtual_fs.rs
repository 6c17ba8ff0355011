//! Virtual file system for collecting generated files in memory.

use std::collections::BTreeMap;
#[cfg(feature = "fs_access")]
use std::{fs, path::Path};
#[cfg(feature = "zip")]
use std::io;

use serde::{Deserialize, Serialize};
#[cfg(feature = "zip")]
use zip::ZipWriter;

/// Folder representation in virtual file system.
///
/// Entries are kept sorted by name, so iterating, placing and zipping are deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VFolder {
    folders: BTreeMap<String, VFolder>,
    files: BTreeMap<String, VFile>,
}

/// Split a path into its first segment and the rest, if there is any rest.
fn split_head(path: &str) -> (&str, Option<&str>) {
    path.split_once('/')
        .map(|(h, t)| (h, (!t.is_empty()).then_some(t)))
        .unwrap_or((path, None))
}

impl VFolder {
    /// Create a new, empty virtual folder.
    #[must_use]
    pub fn new() -> VFolder {
        VFolder::default()
    }

    /// Get all direct subfolders in the folder.
    #[must_use]
    pub fn get_folders(&self) -> &BTreeMap<String, VFolder> {
        &self.folders
    }
    /// Get all direct files in the folder.
    #[must_use]
    pub fn get_files(&self) -> &BTreeMap<String, VFile> {
        &self.files
    }

    /// Check whether the folder contains no files, directly or in subfolders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.values().all(VFolder::is_empty)
    }

    /// Recursively add a file to the folder, creating missing subfolders.
    /// An existing file at the same path is replaced.
    pub fn add_file(&mut self, path: &str, file: VFile) {
        match split_head(path) {
            (head, Some(tail)) => self
                .folders
                .entry(head.to_string())
                .or_default()
                .add_file(tail, file),
            (name, None) => {
                self.files.insert(name.to_string(), file);
            }
        }
    }

    /// Recursively get a subfolder by path.
    #[must_use]
    pub fn get_folder(&self, path: &str) -> Option<&VFolder> {
        match split_head(path) {
            (head, Some(tail)) => self.folders.get(head)?.get_folder(tail),
            (name, None) => self.folders.get(name),
        }
    }

    /// Recursively get a file by path.
    #[must_use]
    pub fn get_file(&self, path: &str) -> Option<&VFile> {
        match split_head(path) {
            (head, Some(tail)) => self.folders.get(head)?.get_file(tail),
            (name, None) => self.files.get(name),
        }
    }

    /// Place the folder and its contents on the file system.
    ///
    /// # Errors
    /// - If creating a directory or writing a file fails
    #[cfg(feature = "fs_access")]
    pub fn place(&self, path: &Path) -> std::io::Result<()> {
        fs::create_dir_all(path)?;
        for (name, folder) in &self.folders {
            folder.place(&path.join(name))?;
        }
        for (name, file) in &self.files {
            fs::write(path.join(name), file.contents())?;
        }
        Ok(())
    }

    /// Zip the folder and its contents into a zip archive.
    ///
    /// # Errors
    /// - If creating the archive or writing an entry fails
    #[cfg(feature = "zip")]
    pub fn zip(&self, path: &std::path::Path) -> io::Result<()> {
        use io::Write;

        let file = std::fs::File::create(path)?;
        let mut writer = ZipWriter::new(file);

        for (path, file) in self.flatten() {
            writer.start_file(path, zip::write::SimpleFileOptions::default())?;
            writer.write_all(file.contents().as_bytes())?;
        }

        writer.finish()?;

        Ok(())
    }

    /// Flatten the folder and its contents into a list of files with full paths.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &VFile)> {
        let mut files = self
            .files
            .iter()
            .map(|(k, v)| (k.to_owned(), v))
            .collect::<Vec<_>>();

        for (name, folder) in &self.folders {
            files.extend(
                folder
                    .flatten()
                    .into_iter()
                    .map(|(path, file)| (format!("{name}/{path}"), file)),
            );
        }

        files
    }
}

/// File representation in virtual file system.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VFile {
    contents: String,
}

impl VFile {
    /// Get the text of the file.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Parse the file as JSON.
    ///
    /// # Errors
    /// - If the file is not valid JSON
    pub fn parse_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.contents)
    }
}

impl From<String> for VFile {
    fn from(value: String) -> Self {
        VFile { contents: value }
    }
}
impl From<&str> for VFile {
    fn from(value: &str) -> Self {
        VFile {
            contents: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "zip")]
    #[test]
    fn test_zip() {
        use std::io::Read;

        use crate::{manager::ResourceManager, util::options::GenerateOptions};

        let mut manager = ResourceManager::in_memory(GenerateOptions::default().with_domain("mod"));
        manager.blockstate("rock").unwrap();
        manager.block_item_model("rock").unwrap();
        let folder = manager.into_writer();

        let dir = tempfile::tempdir().expect("error creating tempdir");
        let path = dir.path().join("pack.zip");
        folder.zip(&path).expect("error zipping");

        let file = std::fs::File::open(&path).expect("archive not written");
        let mut archive = zip::ZipArchive::new(file).expect("invalid archive");
        let mut names = archive.file_names().map(str::to_string).collect::<Vec<_>>();
        names.sort();
        let mut expected = folder
            .flatten()
            .into_iter()
            .map(|(path, _)| path)
            .collect::<Vec<_>>();
        expected.sort();
        assert_eq!(names, expected);

        let mut contents = String::new();
        archive
            .by_name("assets/mod/blockstates/rock.json")
            .expect("entry missing")
            .read_to_string(&mut contents)
            .expect("error reading entry");
        assert_eq!(
            Some(contents.as_str()),
            folder
                .get_file("assets/mod/blockstates/rock.json")
                .map(VFile::contents)
        );
    }

    #[test]
    fn test_vfolder() {
        let mut v_folder = VFolder::new();
        assert!(v_folder.is_empty());
        v_folder.add_file("foo.json", VFile::from("{}"));

        assert_eq!(v_folder.get_files().len(), 1);
        assert_eq!(v_folder.get_folders().len(), 0);

        v_folder.add_file("assets/mod/lang/en_us.json", VFile::from("{\"a\": \"b\"}"));
        v_folder.add_file("assets/mod/blockstates/rock.json", VFile::from("{}"));

        assert_eq!(v_folder.get_files().len(), 1);
        assert_eq!(v_folder.get_folders().len(), 1);
        assert!(v_folder.get_file("assets/mod/lang/en_us.json").is_some());
        assert!(v_folder
            .get_folder("assets/mod")
            .expect("folder not found")
            .get_file("blockstates/rock.json")
            .is_some());
        assert_eq!(
            v_folder
                .get_file("assets/mod/lang/en_us.json")
                .and_then(|f| f.parse_json().ok()),
            Some(serde_json::json!({"a": "b"}))
        );

        let paths = v_folder
            .flatten()
            .into_iter()
            .map(|(path, _)| path)
            .collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                "foo.json",
                "assets/mod/blockstates/rock.json",
                "assets/mod/lang/en_us.json"
            ]
        );
    }

    #[cfg(feature = "fs_access")]
    #[test]
    fn test_place() {
        let dir = tempfile::tempdir().expect("error creating tempdir");
        let mut v_folder = VFolder::new();
        v_folder.add_file("data/mod/tags/items/gems.json", VFile::from("{}"));
        v_folder.place(dir.path()).expect("error placing folder");

        assert!(dir.path().join("data/mod/tags/items/gems.json").is_file());
    }
}

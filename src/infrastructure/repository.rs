//! File system access for source documents

use crate::error::{IngestError, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory of source documents
#[derive(Debug, Clone)]
pub struct DocumentDirectory {
    pub root: PathBuf,
    extension: String,
    recursive: bool,
}

impl DocumentDirectory {
    /// Create a document directory matching files with `extension` (without the dot)
    pub fn new(root: PathBuf, extension: &str, recursive: bool) -> Self {
        DocumentDirectory {
            root,
            extension: extension.trim_start_matches('.').to_lowercase(),
            recursive,
        }
    }

    /// Fail with `SourceNotFound` unless the root is an existing directory
    pub fn ensure_exists(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(IngestError::SourceNotFound(self.root.clone()))
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.to_lowercase() == self.extension)
    }

    fn collect_root_documents(&self) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.is_file() && self.matches_extension(&path) {
                documents.push(path);
            }
        }

        Ok(documents)
    }

    fn collect_recursive_documents(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.matches_extension(path))
            .collect()
    }

    /// List matching documents, sorted by path
    pub fn list_documents(&self) -> Result<Vec<PathBuf>> {
        self.ensure_exists()?;

        let mut documents = if self.recursive {
            self.collect_recursive_documents()
        } else {
            self.collect_root_documents()?
        };

        documents.sort();
        Ok(documents)
    }
}

const BOM: char = '\u{feff}';

/// Read a whole document as UTF-8 text, dropping a leading byte-order mark
pub fn read_document(path: &Path) -> Result<String> {
    let mut text = fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if text.starts_with(BOM) {
        text.drain(..BOM.len_utf8());
    }

    Ok(text)
}

/// Last-modified time of `path` in local time, or the Unix epoch when the
/// file metadata is unavailable.
pub fn modified_time(path: &Path) -> NaiveDateTime {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map(|modified| DateTime::<Local>::from(modified).naive_local())
        .unwrap_or_default()
}

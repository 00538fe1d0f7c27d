//! Ingest every document in a source directory

use crate::application::DocumentIngestor;
use crate::domain::{Entry, MarkupRenderer, StructuredDecoder};
use crate::error::Result;
use crate::infrastructure::DocumentDirectory;
use std::path::PathBuf;
use tracing::info;

/// Service for ingesting all documents of a directory, one at a time
pub struct IngestDirectoryService<R, D> {
    directory: DocumentDirectory,
    ingestor: DocumentIngestor<R, D>,
}

impl<R: MarkupRenderer, D: StructuredDecoder> IngestDirectoryService<R, D> {
    /// Create a new ingest service
    pub fn new(directory: DocumentDirectory, ingestor: DocumentIngestor<R, D>) -> Self {
        IngestDirectoryService {
            directory,
            ingestor,
        }
    }

    /// Ingest each matching document in path order.
    ///
    /// Only enumerating the directory can fail; per-document failures are
    /// carried inside the returned entries.
    pub fn execute(&self) -> Result<Vec<(PathBuf, Entry)>> {
        let documents = self.directory.list_documents()?;
        info!(
            root = %self.directory.root.display(),
            count = documents.len(),
            "Ingesting documents"
        );

        Ok(documents
            .into_iter()
            .map(|path| {
                let entry = self.ingestor.ingest(&path);
                (path, entry)
            })
            .collect())
    }
}

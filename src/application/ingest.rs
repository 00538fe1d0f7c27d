//! Ingest a single document into an Entry

use crate::domain::{Entry, FrontMatter, MarkupRenderer, StructuredDecoder};
use crate::error::Result;
use crate::infrastructure::{modified_time, read_document, CmarkRenderer, YamlDecoder};
use std::path::Path;
use tracing::{debug, warn};

/// Turns one source file into one [`Entry`].
///
/// Title and date start out as filesystem fallbacks and are replaced by the
/// front matter when the document has a metadata block. Failures never escape
/// [`DocumentIngestor::ingest`]; they are written into `rendered_body`.
#[derive(Debug, Clone, Default)]
pub struct DocumentIngestor<R = CmarkRenderer, D = YamlDecoder> {
    renderer: R,
    decoder: D,
}

impl<R: MarkupRenderer, D: StructuredDecoder> DocumentIngestor<R, D> {
    pub fn new(renderer: R, decoder: D) -> Self {
        DocumentIngestor { renderer, decoder }
    }

    /// Ingest the file at `path`
    pub fn ingest(&self, path: &Path) -> Entry {
        let mut entry = Entry::fallback(path, modified_time(path));

        match self.process(path, &mut entry) {
            Ok(rendered) => entry.rendered_body = rendered,
            Err(e) => {
                if e.is_decode_error() {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Invalid metadata block, skipping render"
                    );
                } else {
                    warn!(path = %path.display(), error = %e, "Failed to ingest document");
                }
                entry.rendered_body = e.to_string();
            }
        }

        entry
    }

    /// Read, apply front matter, render. Returns early on the first failure so
    /// a bad metadata block skips rendering.
    fn process(&self, path: &Path, entry: &mut Entry) -> Result<String> {
        let text = read_document(path)?;

        if let Some(front_matter) = self.front_matter(&text)? {
            debug!(path = %path.display(), title = %front_matter.title, "Applying front matter");
            entry.apply_front_matter(front_matter);
        }

        self.renderer.render(&text)
    }

    /// Locate and decode the metadata block, if the document has one
    fn front_matter(&self, text: &str) -> Result<Option<FrontMatter>> {
        let Some(span) = self.renderer.locate_metadata(text)? else {
            return Ok(None);
        };

        self.decoder.decode(&text[span]).map(Some)
    }
}

//! Collaborator interfaces for rendering and metadata decoding

use crate::domain::FrontMatter;
use crate::error::Result;
use std::ops::Range;

/// Converts document text to its rendered form
pub trait MarkupRenderer {
    /// Byte span of the first metadata block in `text`, delimiters included.
    ///
    /// Returns `Ok(None)` when the document has no metadata block.
    fn locate_metadata(&self, text: &str) -> Result<Option<Range<usize>>>;

    /// Render the whole document. Metadata blocks are recognised and kept
    /// out of the visible output.
    fn render(&self, text: &str) -> Result<String>;
}

/// Decodes a metadata fragment into front matter
pub trait StructuredDecoder {
    /// `fragment` is the exact metadata block span, envelope markers included.
    fn decode(&self, fragment: &str) -> Result<FrontMatter>;
}

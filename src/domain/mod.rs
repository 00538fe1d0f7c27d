//! Domain layer - Entry model and collaborator interfaces

pub mod entry;
pub mod markup;

pub use entry::{Entry, FrontMatter};
pub use markup::{MarkupRenderer, StructuredDecoder};

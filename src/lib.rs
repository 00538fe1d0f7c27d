//! mdpost - Markdown post ingestion
//!
//! Reads a directory of markdown documents with optional YAML front matter
//! and produces a title, a date and rendered HTML for each one.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::IngestError;

//! Application layer - Use cases and orchestration

pub mod ingest;
pub mod ingest_dir;

pub use ingest::DocumentIngestor;
pub use ingest_dir::IngestDirectoryService;

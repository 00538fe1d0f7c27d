//! Infrastructure layer - File system, rendering and decoding backends

pub mod config;
pub mod markdown;
pub mod repository;
pub mod yaml;

pub use config::Config;
pub use markdown::{CmarkRenderer, RenderOptions};
pub use repository::{modified_time, read_document, DocumentDirectory};
pub use yaml::YamlDecoder;

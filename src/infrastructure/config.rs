//! Configuration management

use crate::error::{IngestError, Result};
use crate::infrastructure::markdown::RenderOptions;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-directory config file
pub const CONFIG_FILE: &str = ".mdpost.toml";

/// Environment variable naming the default source directory
pub const SOURCE_DIR_ENV: &str = "MDPOST_DIR";

/// Source directory used when neither an argument nor the env var is given
pub const DEFAULT_SOURCE_DIR: &str = "Markdowns";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extension: String,
    pub recursive: bool,
    pub gfm: bool,
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extension: "md".to_string(),
            recursive: false,
            gfm: false,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Config {
    /// Load config from .mdpost.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(IngestError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| IngestError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Resolve the source directory: explicit argument, then MDPOST_DIR, then `Markdowns`
    pub fn resolve_source_dir(arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| std::env::var_os(SOURCE_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { gfm: self.gfm }
    }

    /// Reject settings that would fail later, such as an unknown strftime specifier
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(IngestError::Config("extension must not be empty".to_string()));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(IngestError::Config(format!(
                "Invalid date format: '{}'",
                self.date_format
            )));
        }

        Ok(())
    }
}

//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdpost")]
#[command(
    about = "Read markdown posts with YAML front matter and print title, date and HTML",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Directory of markdown files (default: $MDPOST_DIR, then ./Markdowns)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File extension to ingest (default: md)
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Enable tables, footnotes, strikethrough and task lists
    #[arg(long)]
    pub gfm: bool,

    /// chrono format string for printed dates (default: %Y-%m-%d)
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<String>,
}

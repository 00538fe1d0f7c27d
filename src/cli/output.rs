//! Output formatting utilities

use crate::domain::Entry;
use std::path::Path;

/// Format one ingested entry for display
pub fn format_entry(path: &Path, entry: &Entry, date_format: &str) -> String {
    format!(
        "File: {}\n * Title = {}\n * Date = {}\n * Html = {}\n",
        path.display(),
        entry.title,
        entry.date.format(date_format),
        entry.rendered_body
    )
}

/// Format all entries, in order
pub fn format_entries<'a, I>(entries: I, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a (std::path::PathBuf, Entry)>,
{
    let mut output = String::new();
    for (path, entry) in entries {
        output.push_str(&format_entry(path, entry, date_format));
    }
    output
}

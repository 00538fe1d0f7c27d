//! Markdown rendering with pulldown-cmark

use crate::domain::MarkupRenderer;
use crate::error::{IngestError, Result};
use pulldown_cmark::{html, Event, MetadataBlockKind, Options, Parser, Tag};
use std::ops::Range;
use tracing::debug;

const FENCE: &str = "---";
const YAML_END: &str = "...";

/// Rendering switches beyond CommonMark
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tables, footnotes, strikethrough and task lists
    pub gfm: bool,
}

/// pulldown-cmark backed renderer with YAML metadata block recognition
#[derive(Debug, Clone, Default)]
pub struct CmarkRenderer {
    options: RenderOptions,
}

impl CmarkRenderer {
    pub fn new(options: RenderOptions) -> Self {
        CmarkRenderer { options }
    }

    fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

        if self.options.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_FOOTNOTES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
        }

        options
    }
}

impl MarkupRenderer for CmarkRenderer {
    fn locate_metadata(&self, text: &str) -> Result<Option<Range<usize>>> {
        let parser = Parser::new_ext(text, self.parser_options());

        for (event, range) in parser.into_offset_iter() {
            if let Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) = event {
                // Only a block leading the document counts as front matter
                if range.start == 0 {
                    debug!(start = range.start, end = range.end, "Found metadata block");
                    return Ok(Some(range));
                }
                break;
            }
        }

        if is_unterminated_block(text) {
            return Err(IngestError::UnterminatedMetadata);
        }

        Ok(None)
    }

    fn render(&self, text: &str) -> Result<String> {
        let parser = Parser::new_ext(text, self.parser_options());
        let mut output = String::with_capacity(text.len() + text.len() / 2);
        html::push_html(&mut output, parser);
        Ok(output)
    }
}

/// True when the document opens a front matter block that never closes:
/// a leading `---` line, a non-blank line after it, and no later `---` or
/// `...` line.
fn is_unterminated_block(text: &str) -> bool {
    let mut lines = text.lines();

    match lines.next() {
        Some(first) if first.trim_end() == FENCE => {}
        _ => return false,
    }

    match lines.next() {
        Some(second) if !second.trim().is_empty() => {}
        _ => return false,
    }

    !lines.any(|line| {
        let line = line.trim_end();
        line == FENCE || line == YAML_END
    })
}

//! YAML front matter decoding with serde_yaml

use crate::domain::{FrontMatter, StructuredDecoder};
use crate::error::Result;

const OPENER: &str = "---";
const CLOSERS: [&str; 2] = ["---", "..."];

/// Decodes a YAML metadata block into [`FrontMatter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl YamlDecoder {
    /// Serialize front matter as a complete metadata block, fences included.
    pub fn encode(front_matter: &FrontMatter) -> Result<String> {
        let body = serde_yaml::to_string(front_matter)?;
        Ok(format!("{OPENER}\n{body}{OPENER}\n"))
    }
}

impl StructuredDecoder for YamlDecoder {
    fn decode(&self, fragment: &str) -> Result<FrontMatter> {
        let payload = strip_envelope(fragment);
        if payload.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        let front_matter: Option<FrontMatter> = serde_yaml::from_str(&payload)?;
        Ok(front_matter.unwrap_or_default())
    }
}

/// Drop the opening fence and the closing `---` / `...` line, keeping only
/// the YAML payload between them.
fn strip_envelope(fragment: &str) -> String {
    let mut lines: Vec<&str> = fragment.lines().collect();

    if lines.first().is_some_and(|line| line.trim_end() == OPENER) {
        lines.remove(0);
    }

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if lines
        .last()
        .is_some_and(|line| CLOSERS.contains(&line.trim_end()))
    {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use chrono::{NaiveDate, NaiveDateTime};

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_strip_envelope() {
        assert_eq!(strip_envelope("---\ntitle: a\n---\n"), "title: a");
        assert_eq!(strip_envelope("---\ntitle: a\n...\n"), "title: a");
        assert_eq!(strip_envelope("title: a"), "title: a");
    }

    #[test]
    fn test_decode_title_and_date() {
        let fm = YamlDecoder
            .decode("---\ntitle: \"Hello World\"\ndate: \"2024-01-01\"\n---\n")
            .unwrap();

        assert_eq!(fm.title, "Hello World");
        assert_eq!(fm.date, midnight(2024, 1, 1));
    }

    #[test]
    fn test_decode_unquoted_date() {
        let fm = YamlDecoder
            .decode("---\ntitle: Post\ndate: 2023-07-04 09:15:00\n---\n")
            .unwrap();

        assert_eq!(
            fm.date,
            NaiveDate::from_ymd_opt(2023, 7, 4)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_decode_missing_fields_use_defaults() {
        let fm = YamlDecoder.decode("---\nauthor: someone\n---\n").unwrap();

        assert_eq!(fm, FrontMatter::default());
        assert_eq!(fm.title, "");
        assert_eq!(fm.date, NaiveDateTime::default());
    }

    #[test]
    fn test_decode_null_fields_use_defaults() {
        let fm = YamlDecoder.decode("---\ntitle: ~\ndate:\n---\n").unwrap();

        assert_eq!(fm, FrontMatter::default());
    }

    #[test]
    fn test_decode_empty_payload() {
        assert_eq!(
            YamlDecoder.decode("---\n---\n").unwrap(),
            FrontMatter::default()
        );
    }

    #[test]
    fn test_decode_field_names_are_case_sensitive() {
        let fm = YamlDecoder.decode("---\nTitle: Upper\n---\n").unwrap();

        assert_eq!(fm.title, "");
    }

    #[test]
    fn test_decode_malformed_yaml() {
        let err = YamlDecoder
            .decode("---\ntitle: [unclosed\n---\n")
            .unwrap_err();

        assert!(matches!(err, IngestError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_decode_invalid_date() {
        let err = YamlDecoder
            .decode("---\ntitle: Post\ndate: someday\n---\n")
            .unwrap_err();

        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_decode_non_mapping() {
        let err = YamlDecoder.decode("---\n- one\n- two\n---\n").unwrap_err();

        assert!(err.is_decode_error());
    }

    #[test]
    fn test_encode_then_decode() {
        let original = FrontMatter {
            title: "Round: \"trip\" #1".to_string(),
            date: NaiveDate::from_ymd_opt(2022, 12, 31)
                .unwrap()
                .and_hms_milli_opt(23, 59, 58, 250)
                .unwrap(),
        };

        let block = YamlDecoder::encode(&original).unwrap();
        assert!(block.starts_with("---\n"));

        assert_eq!(YamlDecoder.decode(&block).unwrap(), original);
    }
}

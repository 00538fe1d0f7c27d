//! Entry and front matter models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One ingested document: display title, timestamp and rendered body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub date: NaiveDateTime,
    /// Rendered HTML, or a diagnostic when ingestion failed
    pub rendered_body: String,
}

impl Entry {
    /// Entry carrying only filesystem-derived values: the path as title and
    /// the given modification time as date.
    pub fn fallback(path: &Path, modified: NaiveDateTime) -> Self {
        Entry {
            title: path.display().to_string(),
            date: modified,
            rendered_body: String::new(),
        }
    }

    /// Replace title and date with decoded front matter values.
    ///
    /// Both fields are overwritten even when the decoded values are empty or
    /// defaulted, so a block without a title leaves the entry with an empty title.
    pub fn apply_front_matter(&mut self, front_matter: FrontMatter) {
        self.title = front_matter.title;
        self.date = front_matter.date;
    }
}

/// Typed front matter schema
///
/// Keys are camelCase in the metadata block. Missing or null fields take
/// their defaults: an empty title and the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(with = "front_matter_date")]
    pub date: NaiveDateTime,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lenient date parsing for front matter values
pub mod front_matter_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Parse a front matter date value.
    ///
    /// Accepts a bare date (midnight), a date with time separated by `T` or a
    /// space, or RFC 3339 with an offset (the wall-clock part is kept).
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();

        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0);
        }

        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
                return Some(datetime);
            }
        }

        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|datetime| datetime.naive_local())
    }

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(SERIALIZE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(NaiveDateTime::default()),
            Some(raw) => parse(&raw).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid date '{}'", raw))
            }),
        }
    }
}

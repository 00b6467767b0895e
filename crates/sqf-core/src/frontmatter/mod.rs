//! Front matter extraction
//!
//! A journal document may start with a metadata block delimited by `---`
//! lines. The block is parsed by one of two strategies: the YAML library
//! ([`MetadataParser::Structured`]) or a line scanner that understands the
//! subset of syntax sqf itself writes ([`MetadataParser::Fallback`]). Both
//! produce the same trailers for that subset.

mod fallback;
mod structured;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Delimiter line opening and closing a metadata block
pub const DELIMITER: &str = "---";

/// Key holding the nested trailer mapping
pub const TRAILERS_KEY: &str = "trailers";

/// A document split into its raw metadata block and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Text between the delimiter lines, `None` when there is no block
    pub metadata: Option<&'a str>,
    pub body: &'a str,
}

/// Split `text` into a metadata block and body.
///
/// The first line must be the delimiter for a block to exist. Without a
/// closing delimiter line the whole text is body.
pub fn split(text: &str) -> Split<'_> {
    let no_block = Split {
        metadata: None,
        body: text,
    };

    let Some(first_end) = text.find('\n') else {
        return no_block;
    };
    if text[..first_end].trim_end() != DELIMITER {
        return no_block;
    }

    let meta_start = first_end + 1;
    let mut line_start = meta_start;
    while line_start < text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |i| line_start + i);
        if text[line_start..line_end].trim_end() == DELIMITER {
            let body_start = (line_end + 1).min(text.len());
            return Split {
                metadata: Some(&text[meta_start..line_start]),
                body: &text[body_start..],
            };
        }
        line_start = line_end + 1;
    }

    no_block
}

/// Why a metadata block could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseProblem {
    #[error("invalid YAML: {0}")]
    Syntax(String),

    #[error("front matter is {0}, expected a mapping")]
    NotAMapping(&'static str),
}

/// Parsed metadata block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    fields: Mapping,
}

impl Metadata {
    pub fn new(fields: Mapping) -> Self {
        Metadata { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Scalar value of `key` rendered as a string
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// Non-empty `title`
    pub fn title(&self) -> Option<String> {
        self.get_str("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Calendar date of `created_at`, if present and parseable
    pub fn created_at(&self) -> Option<NaiveDate> {
        self.get_str("created_at").and_then(|s| parse_date(&s))
    }

    /// Trailer fields with values rendered as strings.
    ///
    /// Sequence and mapping values are skipped; `null` becomes empty.
    pub fn trailers(&self) -> BTreeMap<String, String> {
        let Some(Value::Mapping(trailers)) = self.get(TRAILERS_KEY) else {
            return BTreeMap::new();
        };

        trailers
            .iter()
            .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
            .collect()
    }
}

/// Render a scalar YAML value the way it reads in a document.
///
/// Numbers come back in the YAML library's rendering (`1.10` becomes
/// `1.1`), while the fallback scanner keeps the literal text. The two
/// strategies therefore agree on string, boolean and null trailers but
/// not on values that YAML reads as numbers.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Naive date-time layouts accepted after the offset-aware forms
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an ISO-8601 date or date-time, keeping the calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(value, format)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
}

/// Strategy used to parse metadata blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataParser {
    /// Full YAML via the structured-data library
    Structured,
    /// Line scanner for flat keys and one nested `trailers:` scope
    Fallback,
}

impl MetadataParser {
    /// Pick the strategy supported by this build.
    ///
    /// Builds without the `structured-frontmatter` feature use the line
    /// scanner.
    pub fn detect() -> Self {
        if cfg!(feature = "structured-frontmatter") {
            MetadataParser::Structured
        } else {
            MetadataParser::Fallback
        }
    }

    /// Parse a raw metadata block.
    ///
    /// The fallback scanner never fails.
    pub fn parse(self, raw: &str) -> Result<Metadata, ParseProblem> {
        match self {
            MetadataParser::Structured => structured::parse(raw).map(Metadata::new),
            MetadataParser::Fallback => Ok(Metadata::new(fallback::parse(raw))),
        }
    }

    /// Split `text` and parse its metadata block, if any.
    pub fn read(self, text: &str) -> Result<Metadata, ParseProblem> {
        match split(text).metadata {
            Some(raw) => self.parse(raw),
            None => Ok(Metadata::default()),
        }
    }
}

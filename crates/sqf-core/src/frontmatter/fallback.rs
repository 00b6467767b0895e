//! Line scanner for front matter written by sqf.
//!
//! Recognizes flat `key: value` lines and a single `trailers:` scope whose
//! indented `key: value` lines become a nested mapping. Nothing else of
//! YAML is understood.

use serde_yaml::{Mapping, Value};

use super::TRAILERS_KEY;

pub(super) fn parse(raw: &str) -> Mapping {
    let mut fields = Mapping::new();
    let mut trailers = Mapping::new();
    let mut in_trailers = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if trimmed == "trailers:" {
            in_trailers = true;
            continue;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            if in_trailers {
                if let Some((key, value)) = split_pair(trimmed) {
                    trailers.insert(key, value);
                }
            }
            continue;
        }

        // First non-indented line closes the scope
        in_trailers = false;
        if let Some((key, value)) = split_pair(trimmed) {
            fields.insert(key, value);
        }
    }

    if !trailers.is_empty() {
        fields.insert(Value::from(TRAILERS_KEY), Value::Mapping(trailers));
    }
    fields
}

/// Split `key: value` at the first colon.
fn split_pair(line: &str) -> Option<(Value, Value)> {
    let (key, value) = line.split_once(':')?;
    let key = unquote(key.trim());
    if key.is_empty() {
        return None;
    }
    Some((Value::from(key), Value::from(unquote(value.trim()))))
}

/// Remove one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

//! CI summary and commit trailer rendering from the newest journal entry

use std::collections::BTreeMap;

use crate::error::Result;
use crate::repository::JournalRepository;

/// Replace `{{key}}` for each of `keys` with its trailer value.
///
/// Absent trailers become empty strings. Placeholders for keys outside
/// `keys` are left as written.
pub fn substitute(template: &str, trailers: &BTreeMap<String, String>, keys: &[String]) -> String {
    keys.iter().fold(template.to_string(), |text, key| {
        let value = trailers.get(key).map(String::as_str).unwrap_or("");
        text.replace(&format!("{{{{{key}}}}}"), value)
    })
}

/// `key: value` lines for each non-empty trailer, in `keys` order.
pub fn trailer_lines(trailers: &BTreeMap<String, String>, keys: &[String]) -> String {
    keys.iter()
        .filter_map(|key| {
            let value = trailers.get(key)?.trim();
            (!value.is_empty()).then(|| format!("{key}: {value}"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trailers of the most recently modified document, if any.
pub fn latest_trailers(repo: &JournalRepository) -> Result<Option<BTreeMap<String, String>>> {
    let Some(path) = repo.latest_document()? else {
        tracing::debug!(root = %repo.root().display(), "no journal documents");
        return Ok(None);
    };
    tracing::debug!(path = %path.display(), "latest document");
    Ok(Some(repo.read_metadata(&path)?.trailers()))
}

/// Render `template` against the newest document; empty when there is none.
pub fn render_summary(repo: &JournalRepository, template: &str, keys: &[String]) -> Result<String> {
    Ok(latest_trailers(repo)?
        .map(|trailers| substitute(template, &trailers, keys))
        .unwrap_or_default())
}

/// Commit trailer lines from the newest document; empty when there is none.
pub fn render_trailers(repo: &JournalRepository, keys: &[String]) -> Result<String> {
    Ok(latest_trailers(repo)?
        .map(|trailers| trailer_lines(&trailers, keys))
        .unwrap_or_default())
}

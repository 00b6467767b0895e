use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::frontmatter::Metadata;

/// A dated journal record derived from one document's front matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub title: String,
    pub trailers: BTreeMap<String, String>,
    /// Document the entry was read from
    pub path: PathBuf,
}

impl Entry {
    /// Build an entry from parsed metadata.
    ///
    /// Returns `None` when `created_at` is absent or not a date. The title
    /// falls back to the file stem when metadata has none, or always when
    /// `prefer_frontmatter` is off.
    pub fn from_metadata(path: &Path, metadata: &Metadata, prefer_frontmatter: bool) -> Option<Self> {
        let date = metadata.created_at()?;
        let title = prefer_frontmatter
            .then(|| metadata.title())
            .flatten()
            .unwrap_or_else(|| file_title(path));

        Some(Entry {
            date,
            title,
            trailers: metadata.trailers(),
            path: path.to_path_buf(),
        })
    }

    /// Sort key: date first, then title.
    pub fn sort_key(&self) -> (NaiveDate, &str) {
        (self.date, &self.title)
    }
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

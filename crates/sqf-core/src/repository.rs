//! Journal document discovery
//!
//! Walks the journal directory in file-name order, selects documents by
//! glob and turns their front matter into [`Entry`] records.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::NaiveDate;
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::Config;
use crate::entry::Entry;
use crate::error::{Result, SqfError};
use crate::frontmatter::{Metadata, MetadataParser};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Read-only view of a journal directory
#[derive(Debug, Clone)]
pub struct JournalRepository {
    root: PathBuf,
    pattern: Pattern,
    parser: MetadataParser,
    prefer_frontmatter: bool,
}

impl JournalRepository {
    /// Open a repository over `root`, selecting documents with `entry_glob`.
    pub fn new(root: impl Into<PathBuf>, entry_glob: &str, parser: MetadataParser) -> Result<Self> {
        let pattern = Pattern::new(entry_glob).map_err(|e| SqfError::InvalidGlob {
            pattern: entry_glob.to_string(),
            reason: e.to_string(),
        })?;

        Ok(JournalRepository {
            root: root.into(),
            pattern,
            parser,
            prefer_frontmatter: true,
        })
    }

    /// Open the repository described by `config`.
    pub fn from_config(config: &Config, parser: MetadataParser) -> Result<Self> {
        Ok(Self::new(&config.journals_dir, &config.entry_glob, parser)?
            .with_prefer_frontmatter(config.prefer_frontmatter))
    }

    pub fn with_prefer_frontmatter(mut self, prefer: bool) -> Self {
        self.prefer_frontmatter = prefer;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn parser(&self) -> MetadataParser {
        self.parser
    }

    /// Matching documents in path order. Empty when the directory is absent.
    pub fn documents(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let walk = self.root.is_dir().then(|| {
            WalkDir::new(&self.root)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
        });

        walk.into_iter()
            .flatten()
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(move |path| self.matches(path))
    }

    fn matches(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .is_ok_and(|relative| self.pattern.matches_path_with(relative, MATCH_OPTIONS))
    }

    /// Entries dated on or after `cutoff`, lazily, in path order.
    ///
    /// Documents without a parseable `created_at` are skipped. Only read
    /// failures surface as errors.
    pub fn entries(&self, cutoff: NaiveDate) -> impl Iterator<Item = Result<Entry>> + '_ {
        self.documents()
            .filter_map(move |path| self.load_entry(&path).transpose())
            .filter(move |entry| match entry {
                Ok(entry) if entry.date < cutoff => {
                    tracing::debug!(path = %entry.path.display(), date = %entry.date, "entry before cutoff");
                    false
                }
                _ => true,
            })
    }

    /// Read one document into an entry, if it has a usable date.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load_entry(&self, path: &Path) -> Result<Option<Entry>> {
        let metadata = self.read_metadata(path)?;
        let entry = Entry::from_metadata(path, &metadata, self.prefer_frontmatter);
        if entry.is_none() {
            tracing::debug!("skipping document without created_at");
        }
        Ok(entry)
    }

    /// Read a document's metadata. Undecodable bytes and front matter that
    /// fails to parse both read as empty metadata.
    pub fn read_metadata(&self, path: &Path) -> Result<Metadata> {
        let bytes = fs::read(path).map_err(|e| SqfError::io_operation("read", path.display(), e))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e.utf8_error(), "ignoring front matter");
                return Ok(Metadata::default());
            }
        };

        Ok(self.parser.read(&text).unwrap_or_else(|problem| {
            tracing::debug!(path = %path.display(), %problem, "ignoring front matter");
            Metadata::default()
        }))
    }

    /// Most recently modified matching document.
    ///
    /// Equal modification times resolve to the greatest path in `Path`
    /// ordering.
    pub fn latest_document(&self) -> Result<Option<PathBuf>> {
        let mut latest: Option<(SystemTime, PathBuf)> = None;
        for path in self.documents() {
            let modified = fs::metadata(&path)
                .and_then(|m| m.modified())
                .map_err(|e| SqfError::io_operation("stat", path.display(), e))?;
            let candidate = (modified, path);
            if latest.as_ref().map_or(true, |current| candidate > *current) {
                latest = Some(candidate);
            }
        }
        Ok(latest.map(|(_, path)| path))
    }
}

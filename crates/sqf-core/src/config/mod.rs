//! Configuration for sqf
//!
//! Configuration is read once from `.squirrelfocus/config.yaml` and merged
//! over built-in defaults. Problems are returned alongside the merged
//! configuration rather than raised.

mod problem;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

pub use problem::{FieldKind, Problem, ProblemKind};

/// Default configuration location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".squirrelfocus/config.yaml";

/// Default summary template rendered for CI comments
pub const DEFAULT_SUMMARY_FORMAT: &str = "### CI Triage\n\
- **Fix:** {{fix}}\n\
- **Why:** {{why}}\n\
- **Change:** {{change}}\n\
- **Proof:** {{proof}}\n";

/// Known keys and the value shape each must have
const FIELDS: [(&str, FieldKind); 5] = [
    ("journals_dir", FieldKind::Text),
    ("entry_glob", FieldKind::Text),
    ("prefer_frontmatter", FieldKind::Flag),
    ("trailer_keys", FieldKind::TextList),
    ("summary_format", FieldKind::Text),
];

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding journal documents
    pub journals_dir: PathBuf,
    /// Glob selecting documents, relative to `journals_dir`
    pub entry_glob: String,
    /// Take entry titles from front matter when present
    pub prefer_frontmatter: bool,
    /// Trailer names, in parse and render order
    pub trailer_keys: Vec<String>,
    /// Template with `{{key}}` placeholders
    pub summary_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journals_dir: PathBuf::from("journal_logs"),
            entry_glob: "**/*.md".to_string(),
            prefer_frontmatter: true,
            trailer_keys: ["fix", "why", "change", "proof", "ref"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            summary_format: DEFAULT_SUMMARY_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Render this configuration's value for `key` as a config line,
    /// e.g. `trailer_keys: [fix, why]`.
    pub fn example_line(&self, key: &str) -> Option<String> {
        let value = match key {
            "journals_dir" => self.journals_dir.display().to_string(),
            "entry_glob" => format!("'{}'", self.entry_glob),
            "prefer_frontmatter" => self.prefer_frontmatter.to_string(),
            "trailer_keys" => format!("[{}]", self.trailer_keys.join(", ")),
            "summary_format" => format!("{:?}", self.summary_format),
            _ => return None,
        };
        Some(format!("{}: {}", key, value))
    }
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (FieldKind::Text, Value::String(_)) => true,
            (FieldKind::Flag, Value::Bool(_)) => true,
            (FieldKind::TextList, Value::Sequence(items)) => items.iter().all(Value::is_string),
            _ => false,
        }
    }
}

/// Load configuration from `path`.
///
/// An absent file yields the defaults and no problems. A file that cannot
/// be read or parsed yields the defaults and exactly one problem.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load(path: &Path) -> (Config, Vec<Problem>) {
    let defaults = Config::default();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("config absent, using defaults");
            return (defaults, Vec::new());
        }
        Err(e) => return (defaults, vec![Problem::unreadable(e)]),
    };

    match serde_yaml::from_str::<Value>(&content) {
        Ok(raw) => merge_defaults(&raw, &defaults),
        Err(e) => (defaults, vec![Problem::unparseable(e)]),
    }
}

/// Merge a parsed configuration document over `defaults`.
///
/// Every known key is checked and one problem is reported per offending
/// key. If any present key has the wrong type the source is rejected and
/// `defaults` is returned unchanged. Unknown keys are ignored.
pub fn merge_defaults(raw: &Value, defaults: &Config) -> (Config, Vec<Problem>) {
    let empty = Mapping::new();
    let map = match raw {
        Value::Mapping(map) => map,
        Value::Null => &empty,
        _ => {
            return (
                defaults.clone(),
                vec![Problem::unparseable("expected a mapping at the top level")],
            )
        }
    };

    let mut problems = Vec::new();
    for (key, kind) in FIELDS {
        match map.get(key) {
            None => problems.push(Problem::missing(key)),
            Some(value) if !kind.accepts(value) => problems.push(Problem::wrong_type(key, kind)),
            Some(_) => {}
        }
    }

    if problems.iter().any(|p| p.kind == ProblemKind::WrongType) {
        return (defaults.clone(), problems);
    }

    let mut config = defaults.clone();
    if let Some(Value::String(dir)) = map.get("journals_dir") {
        config.journals_dir = PathBuf::from(dir);
    }
    if let Some(Value::String(glob)) = map.get("entry_glob") {
        config.entry_glob = glob.clone();
    }
    if let Some(Value::Bool(prefer)) = map.get("prefer_frontmatter") {
        config.prefer_frontmatter = *prefer;
    }
    if let Some(Value::Sequence(keys)) = map.get("trailer_keys") {
        config.trailer_keys = keys
            .iter()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect();
    }
    if let Some(Value::String(format)) = map.get("summary_format") {
        config.summary_format = format.clone();
    }

    (config, problems)
}

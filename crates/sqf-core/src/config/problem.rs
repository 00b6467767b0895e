use std::fmt;

/// Category of a configuration problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// A known key is absent from the source
    Missing,
    /// A known key is present with a value of the wrong type
    WrongType,
    /// The source is not valid YAML or its root is not a mapping
    Unparseable,
    /// The source exists but could not be read
    Unreadable,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Missing => write!(f, "missing"),
            ProblemKind::WrongType => write!(f, "wrong-type"),
            ProblemKind::Unparseable => write!(f, "unparseable"),
            ProblemKind::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// Expected shape of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    TextList,
}

impl FieldKind {
    fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Flag => "a boolean",
            FieldKind::TextList => "a list of strings",
        }
    }
}

/// A human-readable configuration problem
///
/// Problems are collected, never raised; the caller decides which are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub kind: ProblemKind,
    /// Offending key, when the problem concerns a single key
    pub key: Option<String>,
    pub message: String,
}

impl Problem {
    pub fn missing(key: &str) -> Self {
        Problem {
            kind: ProblemKind::Missing,
            key: Some(key.to_string()),
            message: format!("missing '{}'", key),
        }
    }

    pub fn wrong_type(key: &str, expected: FieldKind) -> Self {
        Problem {
            kind: ProblemKind::WrongType,
            key: Some(key.to_string()),
            message: format!("'{}' should be {}", key, expected.describe()),
        }
    }

    pub fn unparseable(detail: impl fmt::Display) -> Self {
        Problem {
            kind: ProblemKind::Unparseable,
            key: None,
            message: format!("Failed to parse config: {}", detail),
        }
    }

    pub fn unreadable(detail: impl fmt::Display) -> Self {
        Problem {
            kind: ProblemKind::Unreadable,
            key: None,
            message: format!("Could not read config: {}", detail),
        }
    }

    /// Whether this problem makes the loaded configuration unusable.
    ///
    /// A missing key still leaves a usable configuration because the
    /// default fills the gap.
    pub fn is_fatal(&self) -> bool {
        self.kind != ProblemKind::Missing
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

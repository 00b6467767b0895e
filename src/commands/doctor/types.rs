/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Warning - journal is usable but some documents are ignored
    Warning,
    /// Error - configuration or layout prevents normal use
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic issue
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: Severity,
    /// Issue category (e.g., "config-missing", "invalid-frontmatter")
    pub category: String,
    /// Human-readable description
    pub message: String,
    /// Affected file path (if applicable)
    pub path: Option<String>,
}

impl Issue {
    pub fn error(category: &str, message: impl Into<String>) -> Self {
        Issue {
            severity: Severity::Error,
            category: category.to_string(),
            message: message.into(),
            path: None,
        }
    }

    pub fn warning(category: &str, message: impl Into<String>) -> Self {
        Issue {
            severity: Severity::Warning,
            ..Issue::error(category, message)
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Result of running doctor checks
#[derive(Debug, Clone, Default)]
pub struct DoctorResult {
    /// Journal documents scanned
    pub documents_scanned: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<Issue>,
}

impl DoctorResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

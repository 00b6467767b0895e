//! Report rendering over journal entries

use std::fmt::Write;

use chrono::{Days, NaiveDate};

use crate::entry::Entry;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `### date title` headers and `- ` prefixed trailer lines
    #[default]
    Markdown,
    /// Unadorned `date title` headers and trailer lines
    Plain,
}

impl ReportFormat {
    fn header_prefix(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "### ",
            ReportFormat::Plain => "",
        }
    }

    fn line_prefix(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "- ",
            ReportFormat::Plain => "",
        }
    }
}

/// Earliest date included when looking back `since_days` from `today`.
pub fn cutoff(today: NaiveDate, since_days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(since_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Render entries sorted by date then title.
///
/// Each entry gets a header line, one `key: value` line per configured
/// trailer key it carries (in `trailer_keys` order), and a blank line.
/// Returns `None` when there are no entries.
pub fn render(entries: &[Entry], trailer_keys: &[String], format: ReportFormat) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut out = String::new();
    for entry in sorted {
        let _ = writeln!(out, "{}{} {}", format.header_prefix(), entry.date, entry.title);
        for key in trailer_keys {
            if let Some(value) = entry.trailers.get(key) {
                let _ = writeln!(out, "{}{}: {}", format.line_prefix(), key, value);
            }
        }
        out.push('\n');
    }

    Some(out)
}

use clap::ValueEnum;
use sqf_core::report::ReportFormat;

/// Report format as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    /// Markdown headings and bullets
    Md,
    /// Plain text
    Txt,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Md => ReportFormat::Markdown,
            ReportFormatArg::Txt => ReportFormat::Plain,
        }
    }
}

/// What `preview` renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// Summary template with trailer values substituted
    Summary,
    /// `key: value` commit trailer lines
    Trailers,
}

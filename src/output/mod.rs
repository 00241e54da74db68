//! Output formatting module
//!
//! Renders a built [`Report`] as indented text or CSV. Rendering is pure:
//! the caller decides where the string goes.

mod csv;
mod text;

use crate::cli::ReportFormat;
use crate::report::Report;

pub use self::csv::CsvFormatter;
pub use self::text::TextFormatter;

/// Trait for report formatters
pub trait Formatter {
    /// Render the report; `username` is the acting user
    fn format(&self, report: &Report, username: &str) -> String;
}

/// Render the report in the requested format
pub fn render(report: &Report, format: ReportFormat, username: &str) -> String {
    match format {
        ReportFormat::Text => TextFormatter.format(report, username),
        ReportFormat::Csv => CsvFormatter.format(report, username),
    }
}

//! CSV output formatter

use super::Formatter;
use crate::config::report::{CSV_FIELD_SEPARATOR, CSV_HEADERS, CSV_MANAGER_SEPARATOR};
use crate::report::Report;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &Report, _username: &str) -> String {
        let mut out = CSV_HEADERS.join(CSV_FIELD_SEPARATOR);
        out.push('\n');

        for row in report.rows() {
            let managers = row.managers().join(CSV_MANAGER_SEPARATOR);
            let fields = [
                escape_csv(row.service),
                escape_csv(row.plan),
                escape_csv(row.org_name()),
                escape_csv(row.space_name()),
                escape_csv(row.instance_name()),
                escape_csv(&managers),
            ];
            out.push_str(&fields.join(CSV_FIELD_SEPARATOR));
            out.push('\n');
        }

        out
    }
}

/// Escape a value for CSV output
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

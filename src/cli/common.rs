//! Common CLI types

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Indented, human-readable text (default)
    #[default]
    Text,
    /// Comma-separated values, one row per service instance
    Csv,
}

impl ReportFormat {
    /// Map the raw `-f` value to a format
    ///
    /// Only the exact value `csv` selects CSV; every other value, including
    /// the flag's default, selects text.
    pub fn from_flag(value: &str) -> Self {
        if value == "csv" {
            ReportFormat::Csv
        } else {
            ReportFormat::Text
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

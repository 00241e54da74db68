//! Text output formatter

use std::fmt::Write;

use super::Formatter;
use crate::config::report::TEXT_MANAGER_SEPARATOR;
use crate::report::Report;

/// Formatter for the indented text report
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, report: &Report, username: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = write!(out, "Getting service use information as {}...\n\n", username);

        for service in report.services() {
            let _ = writeln!(out, "Service {}:", service.label);
            for plan in &service.plans {
                let _ = writeln!(out, " Plan {}:", plan.name);
                for instance in &plan.instances {
                    let org = &instance.space.organization;
                    let _ = writeln!(
                        out,
                        "  Org: {}, Space: {}, Instance: {}, Managers: [{}]",
                        org.name,
                        instance.space.name,
                        instance.name,
                        org.managers.join(TEXT_MANAGER_SEPARATOR)
                    );
                }
            }
        }

        out
    }
}

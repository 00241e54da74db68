//! CLI argument parsing

mod common;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{defaults, session};
use crate::error::CfError;
use crate::report::CachePolicy;

pub use common::ReportFormat;

/// Service use report for Cloud Foundry
#[derive(Parser, Debug)]
#[command(name = "service-use")]
#[command(version)]
#[command(
    about = "Information about service instances and the orgs, spaces and managers that own them",
    long_about = None
)]
pub struct Cli {
    /// Output format: "csv" for CSV, anything else prints text
    #[arg(short = 'f', long = "format", value_name = "csv", default_value = defaults::FORMAT)]
    pub format: String,

    /// Directory holding the CF CLI configuration (.cf/config.json)
    #[arg(long, env = session::HOME_ENV_VAR)]
    pub cf_home: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress spinner
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Fail when an organization cannot be resolved, instead of reporting it empty
    #[arg(long, default_value_t = false)]
    pub strict_orgs: bool,
}

impl Cli {
    /// Parse arguments, falling back to defaults on any parse error
    ///
    /// Help and version requests print and exit as usual. Any other error is
    /// returned alongside a default `Cli` (text output) instead of aborting.
    pub fn parse_lenient<I, T>(args: I) -> (Self, Option<CfError>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => (cli, None),
            Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                let message = e
                    .to_string()
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ")
                    .to_string();
                (Self::fallback(), Some(CfError::Flag(message)))
            }
        }
    }

    /// Defaults used when the command line cannot be parsed
    fn fallback() -> Self {
        Self {
            format: defaults::FORMAT.to_string(),
            cf_home: std::env::var_os(session::HOME_ENV_VAR).map(PathBuf::from),
            log_level: defaults::LOG_LEVEL.to_string(),
            batch: false,
            strict_orgs: false,
        }
    }

    /// Organization cache policy selected by `--strict-orgs`
    pub fn cache_policy(&self) -> CachePolicy {
        if self.strict_orgs {
            CachePolicy::SuccessOnly
        } else {
            CachePolicy::CacheFailures
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["service-use"]);
        assert_eq!(cli.format, defaults::FORMAT);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(!cli.strict_orgs);
        assert_eq!(ReportFormat::from_flag(&cli.format), ReportFormat::Text);
        assert_eq!(cli.cache_policy(), CachePolicy::CacheFailures);
    }

    #[test]
    fn test_cli_csv_flag() {
        let cli = Cli::parse_from(["service-use", "-f", "csv"]);
        assert_eq!(ReportFormat::from_flag(&cli.format), ReportFormat::Csv);

        let cli = Cli::parse_from(["service-use", "--format=csv"]);
        assert_eq!(ReportFormat::from_flag(&cli.format), ReportFormat::Csv);
    }

    #[test]
    fn test_cli_unknown_format_value_is_text() {
        let cli = Cli::parse_from(["service-use", "-f", "json"]);
        assert_eq!(cli.format, "json");
        assert_eq!(ReportFormat::from_flag(&cli.format), ReportFormat::Text);
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::parse_from([
            "service-use",
            "-f",
            "csv",
            "--cf-home",
            "/tmp/cf",
            "-l",
            "debug",
            "--batch",
            "--strict-orgs",
        ]);

        assert_eq!(cli.format, "csv");
        assert_eq!(cli.cf_home, Some(PathBuf::from("/tmp/cf")));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.batch);
        assert_eq!(cli.cache_policy(), CachePolicy::SuccessOnly);
    }

    #[test]
    fn test_parse_lenient_ok() {
        let (cli, err) = Cli::parse_lenient(["service-use", "-f", "csv", "--batch"]);
        assert!(err.is_none());
        assert_eq!(cli.format, "csv");
        assert!(cli.batch);
    }

    #[test]
    fn test_parse_lenient_unknown_flag_falls_back_to_text() {
        let (cli, err) = Cli::parse_lenient(["service-use", "-f", "csv", "--bogus"]);
        let err = err.unwrap();
        assert_eq!(err.kind(), ErrorKind::Flag);
        assert!(err.to_string().contains("--bogus"));
        assert_eq!(ReportFormat::from_flag(&cli.format), ReportFormat::Text);
        assert!(!cli.batch);
    }

    #[test]
    fn test_parse_lenient_missing_value_falls_back_to_text() {
        let (cli, err) = Cli::parse_lenient(["service-use", "-f"]);
        assert_eq!(err.unwrap().kind(), ErrorKind::Flag);
        assert_eq!(cli.format, defaults::FORMAT);
    }
}

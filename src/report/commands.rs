//! service-use command handler

use log::debug;

use crate::cf::{CfClient, SessionResolver};
use crate::cli::{Cli, ReportFormat};
use crate::error::Result;
use crate::output::render;
use crate::ui::{create_spinner, finish_spinner};

use super::ReportBuilder;

/// Run the service-use command
///
/// Checks the CLI session, builds the whole report and prints it to stdout.
/// Any session or traversal error aborts before anything is printed.
pub async fn run_service_use_command(cli: &Cli) -> Result<()> {
    let format = ReportFormat::from_flag(&cli.format);
    debug!("Report format: {} (flag value '{}')", format, cli.format);

    let session = SessionResolver::new(cli.cf_home.as_deref()).resolve()?;
    let username = session.username();
    let client = CfClient::new(&session);

    let spinner = create_spinner("Getting service use information...", cli.batch);
    let builder = ReportBuilder::with_policy(&client, cli.cache_policy());
    let result = builder.build().await;
    finish_spinner(spinner);

    let report = result?;
    println!("{}", render(&report, format, &username));
    Ok(())
}

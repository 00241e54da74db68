//! service-use - Main entry point

use log::{debug, info, warn};

use service_use::{run_service_use_command, Cli};

#[tokio::main]
async fn main() {
    let (cli, flag_error) = Cli::parse_lenient(std::env::args_os());

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting service-use v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = flag_error {
        warn!("{}; falling back to text output", e);
    }
    debug!(
        "CLI args: format={}, cf_home={:?}, batch={}, strict_orgs={}",
        cli.format, cli.cf_home, cli.batch, cli.strict_orgs
    );

    if let Err(e) = run_service_use_command(&cli).await {
        debug!("Command failed ({:?}): {}", e.kind(), e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

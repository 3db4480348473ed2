mod cli;

use iconforge::{config, generator, report::ConsoleReporter};
use iconforge_common::Error;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "iconforge=debug".to_string()
        } else {
            "iconforge=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    let mut reporter = ConsoleReporter::stdout(config.manual_steps.clone());
    match generator::generate(&config, &mut reporter) {
        Ok(_) => Ok(()),
        // The reporter has already listed every candidate.
        Err(Error::SourceNotFound { .. }) => std::process::exit(1),
        Err(e) => Err(e.into()),
    }
}

//! Astroplan - astronaut daily schedule organizer
//!
//! Binary entry point: wires logging, configuration, the schedule store
//! and its observers, then hands control to the menu loop.

use std::fs;
use std::path::Path;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use astroplan::cli::Cli;
use astroplan::config::Config;
use astroplan::events::EventLogger;
use astroplan::menu::MenuSession;
use astroplan::schedule::ScheduleStore;

fn setup_logging(verbose: bool, log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    // Write to a log file, not stdout/stderr - the menu owns the console
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("astroplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.verbose, &config.log_dir).context("Failed to setup logging")?;

    info!("astroplan starting");

    // The store is owned here and injected into the session; it lives for
    // exactly one menu session and is gone at process exit
    let mut store = ScheduleStore::new();
    store.register_observer(Box::new(EventLogger::new()));

    let mut session = MenuSession::new(store, &config);
    session.run()
}

// trailfetch-cli/src/main.rs
//
// Entry point for the `trailfetch` binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up console (and optionally file) logging.
// - Running the fetch and mapping fatal errors to exit code 1.

use clap::Parser;
use std::process;
use trailfetch_cli::{Cli, logging, output, run_fetch};

fn main() {
    let cli = Cli::parse();

    let log_file = logging::init(cli.log_dir.as_deref(), logging::level_for(cli.verbose));
    if let Some(path) = &log_file {
        log::info!("Run log: {}", path.display());
    }
    log::debug!("Run started: {}", chrono::Local::now());

    if let Err(e) = run_fetch(cli.fetch) {
        log::debug!("Fatal error: {:?}", e);
        output::print_error(&e);
        process::exit(1);
    }

    log::debug!("Run finished: {}", chrono::Local::now());
}

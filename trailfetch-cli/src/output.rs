//! User-facing stdout output: folder listings and the run summary.
//!
//! Diagnostics go through `log`; everything here is the report the user asked
//! for and is printed regardless of log level.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use trailfetch_core::{FetchSummary, FolderOutcome};

/// Color is used only on a terminal and only when NO_COLOR is unset.
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

fn bold(text: &str) -> String {
    if should_use_color() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Prints the folders that are missing a trailer.
pub fn print_missing_folders(folders: &[PathBuf]) {
    println!(
        "{}",
        bold("The following child folders do not contain a file with 'trailer' in its name:")
    );
    for folder in folders {
        println!("{}", folder.display());
    }
}

pub fn print_all_have_trailers() {
    let message = "All child folders contain a file with 'trailer' in its name.";
    if should_use_color() {
        println!("{}", message.green());
    } else {
        println!("{message}");
    }
}

fn describe(outcome: &FolderOutcome) -> String {
    match outcome {
        FolderOutcome::Done { destination } => format!("saved to {}", destination.display()),
        FolderOutcome::NoMetadataFile => "no .nfo file".to_string(),
        FolderOutcome::Unreadable { reason } => format!("unreadable: {reason}"),
        FolderOutcome::NoIdentifier { metadata_path } => {
            format!("no trailer video ID in {}", metadata_path.display())
        }
        FolderOutcome::DownloadFailed { reason } => format!("download failed: {reason}"),
        FolderOutcome::MoveFailed { reason } => format!("move failed: {reason}"),
    }
}

/// Prints the text summary of a run.
pub fn print_summary(summary: &FetchSummary) {
    let color = should_use_color();

    println!();
    println!("{}", bold("Summary:"));
    println!("Total child folders without trailer files: {}", summary.total);
    if color {
        println!("Successfully downloaded trailers: {}", summary.succeeded.green().bold());
    } else {
        println!("Successfully downloaded trailers: {}", summary.succeeded);
    }
    if color && summary.failed > 0 {
        println!("Failed to download trailers: {}", summary.failed.red().bold());
    } else {
        println!("Failed to download trailers: {}", summary.failed);
    }

    let mut failures = summary.failures().peekable();
    if failures.peek().is_some() {
        println!();
        println!("{}", bold("Child folders still missing trailers:"));
        for report in failures {
            println!("  {} ({})", report.folder.display(), describe(&report.outcome));
        }
    }
}

/// Prints the summary as JSON.
pub fn print_summary_json(summary: &FetchSummary) -> trailfetch_core::CoreResult<()> {
    println!("{}", summary.to_json()?);
    Ok(())
}

/// Prints the folders that are missing a trailer as a JSON object.
pub fn print_missing_folders_json(folders: &[PathBuf]) -> trailfetch_core::CoreResult<()> {
    let listing = serde_json::json!({ "missing": folders });
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

/// Prints a fatal error to stderr.
pub fn print_error(error: &dyn std::fmt::Display) {
    let mut stderr = io::stderr();
    if std::env::var_os("NO_COLOR").is_none() && stderr.is_terminal() {
        let _ = writeln!(stderr, "{} {}", "Error:".red().bold(), error);
    } else {
        let _ = writeln!(stderr, "Error: {error}");
    }
}

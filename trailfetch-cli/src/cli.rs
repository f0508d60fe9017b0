// trailfetch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use crate::config;
use clap::{Args, Parser};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Trailfetch: download missing trailers into a media library",
    long_about = "Scans the child folders of a media library, reads each folder's .nfo \
                  trailer tag, and downloads the trailer with yt-dlp via trailfetch-core."
)]
pub struct Cli {
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Optional: Directory for a run log file (console-only when absent)
    #[arg(long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Library root whose child folders are scanned (prompted for when omitted)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Directory the downloader writes into before files are moved (defaults to the current directory)
    #[arg(short = 'w', long = "work-dir", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Downloader program name or path.
    /// Can also be set via the TRAILFETCH_DOWNLOADER environment variable.
    #[arg(long, value_name = "PROGRAM", env = "TRAILFETCH_DOWNLOADER", default_value = config::DEFAULT_DOWNLOADER)]
    pub downloader: String,

    /// Optional: Override the downloader's format selection string
    #[arg(long = "format", value_name = "SELECTOR")]
    pub format_selector: Option<String>,

    /// Optional: Override the container separate streams are merged into
    #[arg(long, value_name = "FORMAT")]
    pub merge_format: Option<String>,

    /// List folders missing a trailer without downloading anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Process folders in name order instead of directory-listing order
    #[arg(long, default_value_t = false)]
    pub sorted: bool,

    /// Print the run summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

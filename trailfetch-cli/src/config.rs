// trailfetch-cli/src/config.rs
//
// Defines default configuration constants for the `trailfetch-cli` application.

pub use trailfetch_core::config::DEFAULT_DOWNLOADER;

/// Prompt shown when no root folder is given on the command line.
pub const ROOT_PROMPT: &str = "Enter the path to the root folder to scan: ";

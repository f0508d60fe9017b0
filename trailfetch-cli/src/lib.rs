// trailfetch-cli/src/lib.rs
//
// Library portion of the Trailfetch CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, FetchArgs};
pub use commands::fetch::run_fetch;

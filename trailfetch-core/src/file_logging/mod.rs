//! File-backed logging for a trailfetch run.
//!
//! The CLI uses this when a log directory is requested; otherwise it sets up
//! a console-only logger itself.

mod setup;

pub use setup::{LOG_PATTERN, log_file_path, setup_logging};

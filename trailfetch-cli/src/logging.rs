// ============================================================================
// trailfetch-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Logger Initialization for the CLI
//
// The core library only emits records through the `log` facade; this module
// decides where they go. Without a log directory an env_logger console logger
// is installed. With one, the core's log4rs setup writes both to stderr and to
// a timestamped run log.
//
// USAGE:
// - default: info level
// - --verbose: debug level
// - RUST_LOG overrides the console logger's filter (e.g. RUST_LOG=trace)

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Log level selected by the verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Installs the env_logger console logger with colored level tags.
pub fn init_console_logger(level: LevelFilter) {
    let use_color = crate::output::should_use_color();
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            if use_color {
                let level_colored = match record.level() {
                    log::Level::Error => level_str.bright_red().to_string(),
                    log::Level::Warn => level_str.yellow().to_string(),
                    log::Level::Info => level_str.green().to_string(),
                    log::Level::Debug => level_str.blue().to_string(),
                    log::Level::Trace => level_str.magenta().to_string(),
                };
                writeln!(buf, "{} {}", level_colored, record.args())
            } else {
                writeln!(buf, "{} {}", level_str, record.args())
            }
        })
        .init();
}

/// Sets up logging for a run, returning the log file path if one is written.
///
/// Falls back to console-only logging if the file logger cannot be created.
pub fn init(log_dir: Option<&Path>, level: LevelFilter) -> Option<PathBuf> {
    let Some(log_dir) = log_dir else {
        init_console_logger(level);
        return None;
    };

    let log_path = trailfetch_core::file_logging::log_file_path(log_dir, &get_timestamp());
    match trailfetch_core::file_logging::setup_logging(&log_path, level) {
        Ok(()) => {
            log::debug!("Logging to {}", log_path.display());
            Some(log_path)
        }
        Err(e) => {
            init_console_logger(level);
            log::warn!("Failed to set up file logging in {}: {}", log_dir.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_expected_shape() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
    }

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }
}

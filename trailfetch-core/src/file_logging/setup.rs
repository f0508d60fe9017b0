use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::{Path, PathBuf};

/// Pattern shared by the console and file appenders.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Path of the run log inside `log_dir`, e.g. `trailfetch_run_20240601_123045.log`.
pub fn log_file_path(log_dir: &Path, timestamp: &str) -> PathBuf {
    log_dir.join(format!("trailfetch_run_{timestamp}.log"))
}

/// Installs a global logger writing to stderr and to `log_file`.
///
/// Can only succeed once per process.
pub fn setup_logging(log_file: &Path, log_level: LevelFilter) -> Result<()> {
    // Create log directory if it doesn't exist
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let console_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;

    Ok(())
}

// ============================================================================
// trailfetch-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for trailfetch-core
//
// This module defines the error types returned by the core library. Errors
// that abort a run (missing root, missing downloader, bad configuration) and
// errors that only fail a single folder (download, move) share one enum; the
// processing loop decides which ones are swallowed and tallied.
//
// KEY COMPONENTS:
// - CoreError: Main error enum
// - CoreResult: Type alias for Result with CoreError

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the trailfetch core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("The path {} does not exist.", .0.display())]
    RootNotFound(PathBuf),

    #[error("The path {} is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Required external command '{0}' was not found")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Downloader exited with {status} for {url}")]
    DownloadFailed { url: String, status: ExitStatus },

    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for trailfetch-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_not_found_message_names_the_path() {
        let err = CoreError::RootNotFound(PathBuf::from("/no/such/library"));
        assert_eq!(err.to_string(), "The path /no/such/library does not exist.");
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> CoreResult<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?
        }
        assert!(matches!(fails(), Err(CoreError::Io(_))));
    }
}

// ============================================================================
// trailfetch-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type; this module only adds context helpers
// for failures that happen on the CLI side (reading the prompt, writing output).

use trailfetch_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for attaching a description to I/O failures in the CLI.
pub trait CliErrorContext<T> {
    fn cli_context(self, context: &str) -> CliResult<T>;
}

impl<T> CliErrorContext<T> for std::io::Result<T> {
    fn cli_context(self, context: &str) -> CliResult<T> {
        self.map_err(|e| CoreError::Io(std::io::Error::new(e.kind(), format!("{context}: {e}"))))
    }
}

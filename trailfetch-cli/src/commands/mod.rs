//! Command implementations for the CLI.

/// Module containing the implementation of the trailer fetch run.
pub mod fetch;

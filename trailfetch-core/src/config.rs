// ============================================================================
// trailfetch-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines the configuration consumed by the scanner and the batch
// processor. Consumers (like trailfetch-cli) create a CoreConfig with
// CoreConfig::new, override what they need, and call validate() before
// handing it to processing::run.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Downloader executable looked up on PATH.
pub const DEFAULT_DOWNLOADER: &str = "yt-dlp";

/// Case-insensitive filename fragment marking a folder as already having a trailer.
pub const DEFAULT_TRAILER_MARKER: &str = "trailer";

/// Suffix identifying the metadata sidecar file.
pub const DEFAULT_METADATA_EXTENSION: &str = ".nfo";

/// Placeholder replaced by the video identifier in the URL template.
pub const VIDEO_ID_PLACEHOLDER: &str = "{id}";

/// URL the identifier is substituted into.
pub const DEFAULT_URL_TEMPLATE: &str = "https://www.youtube.com/watch?v={id}";

/// Format selection passed to the downloader: best video with m4a audio,
/// then any best video+audio pair, then the best single file.
pub const DEFAULT_FORMAT_SELECTOR: &str = "bestvideo+bestaudio[ext=m4a]/bestvideo+bestaudio/best";

/// Container the downloader merges separate streams into.
pub const DEFAULT_MERGE_FORMAT: &str = "mp4";

/// Appended to the folder's base name to form the trailer filename.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-trailer.mp4";

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for a trailfetch run.
///
/// # Examples
///
/// ```rust
/// use trailfetch_core::CoreConfig;
/// use std::path::PathBuf;
///
/// let mut config = CoreConfig::new(PathBuf::from("/media/movies"), PathBuf::from("."));
/// config.downloader_program = "/usr/local/bin/yt-dlp".to_string();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    // ---- Path Configuration ----

    /// Library root whose immediate children are scanned
    pub root_dir: PathBuf,

    /// Directory the downloader writes into before the file is moved
    pub work_dir: PathBuf,

    // ---- Detection ----

    /// Filename fragment that marks an existing trailer
    pub trailer_marker: String,

    /// Filename suffix of the metadata file (case-sensitive)
    pub metadata_extension: String,

    // ---- Downloader ----

    /// Program name or path of the downloader
    pub downloader_program: String,

    /// URL template containing `{id}`
    pub url_template: String,

    /// Value for the downloader's `--format` option
    pub format_selector: String,

    /// Value for the downloader's `--merge-output-format` option
    pub merge_format: String,

    /// Appended to the folder base name to build the output filename
    pub output_suffix: String,
}

impl CoreConfig {
    /// Creates a configuration with default detection and downloader settings.
    #[must_use]
    pub fn new(root_dir: PathBuf, work_dir: PathBuf) -> Self {
        Self {
            root_dir,
            work_dir,
            trailer_marker: DEFAULT_TRAILER_MARKER.to_string(),
            metadata_extension: DEFAULT_METADATA_EXTENSION.to_string(),
            downloader_program: DEFAULT_DOWNLOADER.to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            format_selector: DEFAULT_FORMAT_SELECTOR.to_string(),
            merge_format: DEFAULT_MERGE_FORMAT.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }

    /// Checks the configuration for values that would make every folder fail.
    pub fn validate(&self) -> CoreResult<()> {
        if self.trailer_marker.trim().is_empty() {
            return Err(CoreError::Config("trailer marker must not be empty".to_string()));
        }
        if self.metadata_extension.is_empty() {
            return Err(CoreError::Config("metadata extension must not be empty".to_string()));
        }
        if !self.url_template.contains(VIDEO_ID_PLACEHOLDER) {
            return Err(CoreError::Config(format!(
                "URL template '{}' does not contain {VIDEO_ID_PLACEHOLDER}",
                self.url_template
            )));
        }
        if self.output_suffix.is_empty() {
            return Err(CoreError::Config("output suffix must not be empty".to_string()));
        }
        if self.downloader_program.trim().is_empty() {
            return Err(CoreError::Config("downloader program must not be empty".to_string()));
        }
        if self.work_dir.exists() && !self.work_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "working directory '{}' is not a directory",
                self.work_dir.display()
            )));
        }
        Ok(())
    }
}

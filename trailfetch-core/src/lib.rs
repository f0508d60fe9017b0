//! Core library for finding and downloading missing trailers in a media library.
//!
//! This crate scans the immediate child folders of a library root, reads each
//! folder's `.nfo` metadata for an embedded video identifier, and drives an
//! external downloader to place a `<folder>-trailer.mp4` next to the media.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use trailfetch_core::{CoreConfig, YtDlpDownloader, run};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/media/movies"), PathBuf::from("."));
//! config.validate().unwrap();
//!
//! let downloader = YtDlpDownloader::from_config(&config);
//! let summary = run(&downloader, &config).unwrap();
//! println!("{} of {} trailers downloaded", summary.succeeded, summary.total);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod metadata;
pub mod processing;

// Re-exports for public API
pub use config::CoreConfig;
pub use discovery::{find_folders_missing_trailer, is_trailer_file_name};
pub use error::{CoreError, CoreResult};
pub use external::{TrailerDownloader, YtDlpDownloader, build_video_url, check_dependency};
pub use metadata::{extract_video_id, read_metadata};
pub use processing::{FetchSummary, FolderOutcome, FolderReport, process_folders, run};

// ============================================================================
// trailfetch-core/src/processing.rs
// ============================================================================
//
// PROCESSING: Per-Folder Trailer Fetch Orchestration
//
// This module drives each folder that is missing a trailer through the fetch
// state machine:
//
//   pending -> no_metadata_file | unreadable
//           -> no_identifier
//           -> download_failed
//           -> move_failed | done
//
// Every per-folder failure is logged and tallied; processing always continues
// with the next folder. Only scanning the root can abort a run.

use crate::config::CoreConfig;
use crate::discovery::find_folders_missing_trailer;
use crate::error::{CoreError, CoreResult};
use crate::external::{TrailerDownloader, build_video_url};
use crate::metadata::{extract_video_id, find_metadata_file, read_metadata};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Terminal state of one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FolderOutcome {
    /// The trailer was downloaded and moved into the folder.
    Done { destination: PathBuf },
    /// No metadata file was found; the downloader was not invoked.
    NoMetadataFile,
    /// The folder or its metadata file could not be read.
    Unreadable { reason: String },
    /// The metadata file had no usable video identifier.
    NoIdentifier { metadata_path: PathBuf },
    /// The downloader failed to start or exited unsuccessfully.
    DownloadFailed { reason: String },
    /// The download succeeded but the file could not be moved into place.
    MoveFailed { reason: String },
}

impl FolderOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, FolderOutcome::Done { .. })
    }
}

/// Outcome of a single folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderReport {
    pub folder: PathBuf,
    pub outcome: FolderOutcome,
}

/// Totals for a run.
///
/// `failed` counts every folder that did not reach `Done`, so
/// `succeeded + failed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub reports: Vec<FolderReport>,
}

impl FetchSummary {
    fn record(&mut self, folder: &Path, outcome: FolderOutcome) {
        self.total += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.reports.push(FolderReport {
            folder: folder.to_path_buf(),
            outcome,
        });
    }

    /// Renders the summary as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reports for folders that still lack a trailer.
    pub fn failures(&self) -> impl Iterator<Item = &FolderReport> {
        self.reports.iter().filter(|r| !r.outcome.is_success())
    }
}

// ============================================================================
// FILE PLACEMENT
// ============================================================================

/// Output filename for `folder`: its base name followed by `suffix`.
pub fn trailer_file_name(folder: &Path, suffix: &str) -> CoreResult<String> {
    let base = folder.file_name().ok_or_else(|| {
        CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("folder {} has no base name", folder.display()),
        ))
    })?;
    Ok(format!("{}{}", base.to_string_lossy(), suffix))
}

/// Moves `from` to `to`, copying and removing when a rename is not possible
/// (for instance across filesystems).
pub fn move_file(from: &Path, to: &Path) -> CoreResult<()> {
    if let Err(rename_err) = fs::rename(from, to) {
        log::debug!(
            "Rename {} -> {} failed ({}), falling back to copy",
            from.display(),
            to.display(),
            rename_err
        );
        let move_failed = |source: std::io::Error| CoreError::MoveFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };
        fs::copy(from, to).map_err(move_failed)?;
        fs::remove_file(from).map_err(move_failed)?;
    }
    Ok(())
}

// ============================================================================
// BATCH PROCESSING
// ============================================================================

/// Fetches a trailer for one folder and returns its terminal state.
pub fn process_folder<D: TrailerDownloader>(
    downloader: &D,
    config: &CoreConfig,
    folder: &Path,
) -> FolderOutcome {
    let metadata_path = match find_metadata_file(folder, &config.metadata_extension) {
        Ok(Some(path)) => path,
        Ok(None) => {
            log::warn!("No {} file found in folder: {}", config.metadata_extension, folder.display());
            return FolderOutcome::NoMetadataFile;
        }
        Err(e) => {
            log::warn!("Error listing folder {}: {}", folder.display(), e);
            return FolderOutcome::Unreadable { reason: e.to_string() };
        }
    };

    let content = match read_metadata(&metadata_path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Error reading metadata file {}: {}", metadata_path.display(), e);
            return FolderOutcome::Unreadable { reason: e.to_string() };
        }
    };

    let Some(video_id) = extract_video_id(&content) else {
        log::warn!(
            "No valid trailer tag or video ID found in metadata file: {}",
            metadata_path.display()
        );
        return FolderOutcome::NoIdentifier { metadata_path };
    };

    let url = build_video_url(&config.url_template, &video_id);
    log::debug!("Video URL: {}", url);

    let file_name = match trailer_file_name(folder, &config.output_suffix) {
        Ok(name) => name,
        Err(e) => return FolderOutcome::Unreadable { reason: e.to_string() },
    };
    let temp_path = config.work_dir.join(&file_name);

    log::info!("Downloading {} to {}", url, temp_path.display());
    if let Err(e) = downloader.download(&url, &temp_path) {
        log::warn!("Error downloading video: {}", e);
        return FolderOutcome::DownloadFailed { reason: e.to_string() };
    }

    let destination = folder.join(&file_name);
    log::info!("Moving file to {}", destination.display());
    match move_file(&temp_path, &destination) {
        Ok(()) => FolderOutcome::Done { destination },
        Err(e) => {
            log::warn!("{}", e);
            FolderOutcome::MoveFailed { reason: e.to_string() }
        }
    }
}

/// Processes each folder in order and tallies the outcomes.
///
/// Never fails: per-folder errors are recorded in the returned summary.
pub fn process_folders<D: TrailerDownloader>(
    downloader: &D,
    config: &CoreConfig,
    folders: &[PathBuf],
) -> FetchSummary {
    let mut summary = FetchSummary::default();
    for (index, folder) in folders.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", index + 1, folders.len(), folder.display());
        let outcome = process_folder(downloader, config, folder);
        if outcome.is_success() {
            log::info!("Trailer saved for {}", folder.display());
        }
        summary.record(folder, outcome);
    }
    summary
}

/// Scans `config.root_dir` and fetches trailers for every folder lacking one.
///
/// # Errors
///
/// Returns an error only if the configuration is invalid, the working
/// directory cannot be created, or the root cannot be scanned.
pub fn run<D: TrailerDownloader>(downloader: &D, config: &CoreConfig) -> CoreResult<FetchSummary> {
    config.validate()?;
    let folders = find_folders_missing_trailer(&config.root_dir, &config.trailer_marker)?;
    if folders.is_empty() {
        return Ok(FetchSummary::default());
    }
    fs::create_dir_all(&config.work_dir)?;
    Ok(process_folders(downloader, config, &folders))
}

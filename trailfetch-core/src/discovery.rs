//! Folder discovery for finding library entries without a trailer.
//!
//! Only the immediate children of the library root are considered, and each
//! child is inspected non-recursively. A child counts as having a trailer when
//! any of its direct entries has the marker text anywhere in its name,
//! compared case-insensitively.

use crate::error::{CoreError, CoreResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Returns true if `file_name` contains `marker`, ignoring case.
#[must_use]
pub fn is_trailer_file_name(file_name: &str, marker: &str) -> bool {
    file_name.to_lowercase().contains(&marker.to_lowercase())
}

/// Finds child folders of `root_dir` that have no entry matching `marker`.
///
/// Folders are returned in directory-listing order, which is not stable across
/// platforms. A child folder that cannot be listed is logged and skipped.
///
/// # Errors
///
/// * `CoreError::RootNotFound` - `root_dir` does not exist
/// * `CoreError::NotADirectory` - `root_dir` is a file
/// * `CoreError::Io` - `root_dir` could not be listed
///
/// # Examples
///
/// ```rust,no_run
/// use trailfetch_core::find_folders_missing_trailer;
/// use std::path::Path;
///
/// let missing = find_folders_missing_trailer(Path::new("/media/movies"), "trailer").unwrap();
/// for folder in missing {
///     println!("{}", folder.display());
/// }
/// ```
pub fn find_folders_missing_trailer(root_dir: &Path, marker: &str) -> CoreResult<Vec<PathBuf>> {
    if !root_dir.exists() {
        return Err(CoreError::RootNotFound(root_dir.to_path_buf()));
    }
    if !root_dir.is_dir() {
        return Err(CoreError::NotADirectory(root_dir.to_path_buf()));
    }

    let mut missing = Vec::new();
    for entry in fs::read_dir(root_dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", root_dir.display(), e);
                continue;
            }
        };
        if !path.is_dir() {
            continue;
        }

        match folder_has_trailer(&path, marker) {
            Ok(true) => log::debug!("Trailer present: {}", path.display()),
            Ok(false) => missing.push(path),
            Err(e) => log::warn!("Skipping folder {}: {}", path.display(), e),
        }
    }

    log::debug!(
        "Scanned {}: {} folder(s) missing a trailer",
        root_dir.display(),
        missing.len()
    );
    Ok(missing)
}

fn folder_has_trailer(folder: &Path, marker: &str) -> CoreResult<bool> {
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if is_trailer_file_name(&entry.file_name().to_string_lossy(), marker) {
            return Ok(true);
        }
    }
    Ok(false)
}

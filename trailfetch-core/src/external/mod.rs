// ============================================================================
// trailfetch-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the External Downloader
//
// This module encapsulates the one external command-line tool trailfetch
// drives. The processor only sees the TrailerDownloader trait, so tests can
// substitute a double that never spawns a process.
//
// KEY COMPONENTS:
// - TrailerDownloader: URL + output path -> success/failure
// - YtDlpDownloader: Concrete implementation spawning yt-dlp
// - Dependency checking
// - URL construction from the configured template

// ---- Internal crate imports ----
use crate::config::{CoreConfig, VIDEO_ID_PLACEHOLDER};
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Test doubles for the downloader
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// DOWNLOADER ABSTRACTION
// ============================================================================

/// Something that can fetch a video URL into a file.
pub trait TrailerDownloader {
    /// Downloads `url` to `output`, blocking until the transfer finishes.
    ///
    /// # Errors
    ///
    /// * `CoreError::CommandStart` - the downloader could not be launched
    /// * `CoreError::DownloadFailed` - the downloader exited unsuccessfully
    fn download(&self, url: &str, output: &Path) -> CoreResult<()>;
}

/// Downloader that shells out to `yt-dlp` (or a compatible program).
#[derive(Debug, Clone)]
pub struct YtDlpDownloader {
    program: String,
    format_selector: String,
    merge_format: String,
}

impl YtDlpDownloader {
    pub fn new(program: impl Into<String>, format_selector: impl Into<String>, merge_format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format_selector: format_selector.into(),
            merge_format: merge_format.into(),
        }
    }

    /// Builds a downloader from the program and format settings in `config`.
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(
            config.downloader_program.clone(),
            config.format_selector.clone(),
            config.merge_format.clone(),
        )
    }

    /// Arguments passed to the downloader for one transfer.
    pub fn build_args(&self, url: &str, output: &Path) -> Vec<OsString> {
        vec![
            "-o".into(),
            output.as_os_str().to_os_string(),
            "--format".into(),
            self.format_selector.clone().into(),
            "--merge-output-format".into(),
            self.merge_format.clone().into(),
            url.into(),
        ]
    }
}

impl TrailerDownloader for YtDlpDownloader {
    fn download(&self, url: &str, output: &Path) -> CoreResult<()> {
        let args = self.build_args(url, output);
        log::debug!("Running: {} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| CoreError::CommandStart(self.program.clone(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(CoreError::DownloadFailed {
                url: url.to_string(),
                status,
            })
        }
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `program` can be launched by running it with `--version`.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the program is not on PATH
/// * `CoreError::CommandStart` - the program exists but failed to start
pub fn check_dependency(program: &str) -> CoreResult<()> {
    let result = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", program);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", program);
            Err(CoreError::DependencyNotFound(program.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", program, e);
            Err(CoreError::CommandStart(program.to_string(), e))
        }
    }
}

// ============================================================================
// URL CONSTRUCTION
// ============================================================================

/// Substitutes `video_id` into every `{id}` placeholder of `template`.
///
/// ```rust
/// use trailfetch_core::external::build_video_url;
///
/// let url = build_video_url("https://www.youtube.com/watch?v={id}", "ABC123");
/// assert_eq!(url, "https://www.youtube.com/watch?v=ABC123");
/// ```
#[must_use]
pub fn build_video_url(template: &str, video_id: &str) -> String {
    template.replace(VIDEO_ID_PLACEHOLDER, video_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_URL_TEMPLATE;
    use std::path::PathBuf;

    #[test]
    fn url_uses_default_template() {
        assert_eq!(
            build_video_url(DEFAULT_URL_TEMPLATE, "dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn args_follow_downloader_convention() {
        let config = CoreConfig::new(PathBuf::from("lib"), PathBuf::from("work"));
        let downloader = YtDlpDownloader::from_config(&config);
        let args = downloader.build_args("https://host/v", Path::new("work/Movie-trailer.mp4"));
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "-o",
                "work/Movie-trailer.mp4",
                "--format",
                "bestvideo+bestaudio[ext=m4a]/bestvideo+bestaudio/best",
                "--merge-output-format",
                "mp4",
                "https://host/v",
            ]
        );
    }

    #[test]
    fn missing_program_is_reported_as_dependency_not_found() {
        let result = check_dependency("trailfetch-surely-not-installed-42");
        assert!(matches!(result, Err(CoreError::DependencyNotFound(_))));
    }

    #[test]
    fn missing_program_fails_to_start() {
        let downloader = YtDlpDownloader::new("trailfetch-surely-not-installed-42", "best", "mp4");
        let result = downloader.download("https://host/v", Path::new("out.mp4"));
        assert!(matches!(result, Err(CoreError::CommandStart(_, _))));
    }
}

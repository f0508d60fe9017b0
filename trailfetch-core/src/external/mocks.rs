// trailfetch-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::TrailerDownloader;
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// How the mock responds to a download request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Write a small file at the output path and succeed.
    CreateOutput,
    /// Succeed without writing anything.
    SucceedWithoutOutput,
    /// Fail as if the process could not be started.
    SpawnError,
    /// Fail as if the process exited with a non-zero status.
    ExitError,
}

/// A call received by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCall {
    pub url: String,
    pub output: PathBuf,
}

/// Downloader double that records calls and never spawns a process.
///
/// Behaviours can be queued per call; once the queue is empty the default
/// behaviour applies.
#[derive(Clone)]
pub struct MockDownloader {
    default_behavior: MockBehavior,
    queued: Rc<RefCell<Vec<MockBehavior>>>,
    received_calls: Rc<RefCell<Vec<DownloadCall>>>,
}

impl Default for MockDownloader {
    fn default() -> Self {
        Self::new(MockBehavior::CreateOutput)
    }
}

impl MockDownloader {
    pub fn new(default_behavior: MockBehavior) -> Self {
        Self {
            default_behavior,
            queued: Rc::new(RefCell::new(Vec::new())),
            received_calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Queues a behaviour for the next unanswered call.
    pub fn push_behavior(&self, behavior: MockBehavior) {
        self.queued.borrow_mut().push(behavior);
    }

    pub fn get_received_calls(&self) -> Vec<DownloadCall> {
        self.received_calls.borrow().clone()
    }

    fn next_behavior(&self) -> MockBehavior {
        let mut queued = self.queued.borrow_mut();
        if queued.is_empty() {
            self.default_behavior
        } else {
            queued.remove(0)
        }
    }
}

#[cfg(unix)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1)
}

impl TrailerDownloader for MockDownloader {
    fn download(&self, url: &str, output: &Path) -> CoreResult<()> {
        self.received_calls.borrow_mut().push(DownloadCall {
            url: url.to_string(),
            output: output.to_path_buf(),
        });

        match self.next_behavior() {
            MockBehavior::CreateOutput => {
                if let Some(parent) = output.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(output, b"mock trailer")?;
                log::info!("MockDownloader created dummy output file: {:?}", output);
                Ok(())
            }
            MockBehavior::SucceedWithoutOutput => Ok(()),
            MockBehavior::SpawnError => Err(CoreError::CommandStart(
                "downloader (mock)".to_string(),
                io::Error::new(io::ErrorKind::PermissionDenied, "Mock spawn permission denied"),
            )),
            MockBehavior::ExitError => Err(CoreError::DownloadFailed {
                url: url.to_string(),
                status: failed_status(),
            }),
        }
    }
}

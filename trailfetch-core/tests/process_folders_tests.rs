// trailfetch-core/tests/process_folders_tests.rs

use trailfetch_core::{CoreConfig, CoreResult, FolderOutcome, TrailerDownloader, run};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Writes the URL it was given into the output file.
#[derive(Default)]
struct EchoDownloader {
    outputs: RefCell<Vec<PathBuf>>,
}

impl TrailerDownloader for EchoDownloader {
    fn download(&self, url: &str, output: &Path) -> CoreResult<()> {
        self.outputs.borrow_mut().push(output.to_path_buf());
        fs::write(output, url)?;
        Ok(())
    }
}

fn nfo(id: &str) -> String {
    format!("<movie><trailer>plugin://plugin.video.youtube/?video_id={id}</trailer></movie>")
}

#[test]
fn test_run_places_trailers_and_tallies() -> Result<(), Box<dyn std::error::Error>> {
    let library = tempdir()?;
    let work = tempdir()?;
    let root = library.path();

    fs::create_dir(root.join("Heat"))?;
    fs::write(root.join("Heat").join("Heat.nfo"), nfo("2GfZl4kuVNI"))?;
    fs::create_dir(root.join("Ran"))?;
    fs::write(root.join("Ran").join("Ran.nfo"), nfo("WStmyQz2kEE"))?;
    fs::create_dir(root.join("Untagged"))?;
    fs::write(root.join("Untagged").join("movie.mkv"), "")?;
    fs::create_dir(root.join("Done"))?;
    fs::write(root.join("Done").join("Done-trailer.mp4"), "")?;

    let config = CoreConfig::new(root.to_path_buf(), work.path().to_path_buf());
    let downloader = EchoDownloader::default();

    let summary = run(&downloader, &config)?;

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded + summary.failed, summary.total);

    let heat = root.join("Heat").join("Heat-trailer.mp4");
    assert_eq!(fs::read_to_string(&heat)?, "https://www.youtube.com/watch?v=2GfZl4kuVNI");
    assert!(!work.path().join("Heat-trailer.mp4").exists());
    assert!(root.join("Ran").join("Ran-trailer.mp4").exists());

    let untagged = summary
        .reports
        .iter()
        .find(|r| r.folder == root.join("Untagged"))
        .expect("untagged folder reported");
    assert_eq!(untagged.outcome, FolderOutcome::NoMetadataFile);

    // Only the two folders with identifiers reached the downloader
    assert_eq!(downloader.outputs.borrow().len(), 2);

    Ok(())
}

#[test]
fn test_run_creates_missing_work_dir() -> Result<(), Box<dyn std::error::Error>> {
    let library = tempdir()?;
    let root = library.path();
    fs::create_dir(root.join("Heat"))?;
    fs::write(root.join("Heat").join("Heat.nfo"), nfo("2GfZl4kuVNI"))?;

    let work = root.join(".work");
    let config = CoreConfig::new(root.to_path_buf(), work.clone());

    let summary = run(&EchoDownloader::default(), &config)?;

    assert_eq!(summary.succeeded, 1);
    assert!(work.is_dir());

    Ok(())
}

// trailfetch-core/tests/metadata_tests.rs

use trailfetch_core::metadata::{extract_video_id, find_metadata_file, read_metadata};
use std::fs;
use tempfile::tempdir;

const KODI_NFO: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<movie>
    <title>Seven Samurai</title>
    <year>1954</year>
    <trailer>plugin://plugin.video.youtube/?video_id=wJ1TOratCTo</trailer>
</movie>
"#;

#[test]
fn test_read_and_extract_from_kodi_nfo() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let nfo = dir.path().join("movie.nfo");
    fs::write(&nfo, KODI_NFO)?;

    let content = read_metadata(&nfo)?;
    assert_eq!(extract_video_id(&content).as_deref(), Some("wJ1TOratCTo"));

    Ok(())
}

#[test]
fn test_read_legacy_encoded_nfo() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let nfo = dir.path().join("movie.nfo");
    // "Léon" in Windows-1252
    fs::write(
        &nfo,
        b"<title>L\xe9on</title><trailer>plugin://x/?video_id=aWzlQ2N6qqg</trailer>",
    )?;

    let content = read_metadata(&nfo)?;
    assert!(content.contains("Léon"));
    assert_eq!(extract_video_id(&content).as_deref(), Some("aWzlQ2N6qqg"));

    Ok(())
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = read_metadata(&dir.path().join("absent.nfo"));
    assert!(matches!(result, Err(trailfetch_core::CoreError::Io(_))));
}

#[test]
fn test_find_metadata_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("movie.mkv"), "")?;
    fs::write(dir.path().join("movie.nfo"), KODI_NFO)?;

    let found = find_metadata_file(dir.path(), ".nfo")?;
    assert_eq!(found, Some(dir.path().join("movie.nfo")));

    Ok(())
}

#[test]
fn test_find_metadata_file_none() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("movie.mkv"), "")?;
    fs::create_dir(dir.path().join("extras.nfo"))?; // Directories are not metadata

    assert_eq!(find_metadata_file(dir.path(), ".nfo")?, None);

    Ok(())
}

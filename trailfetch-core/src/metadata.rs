// ============================================================================
// trailfetch-core/src/metadata.rs
// ============================================================================
//
// METADATA: .nfo Sidecar Reading and Video Identifier Extraction
//
// Media managers write a `<trailer>` element into each folder's .nfo file,
// typically as a plugin URL such as
// `plugin://plugin.video.youtube/?video_id=ABC123</trailer>`. This module
// locates that file, decodes it, and pulls out the identifier.
//
// KEY COMPONENTS:
// - find_metadata_file: First .nfo entry of a folder
// - decode_metadata: Windows-1252 with a lossy UTF-8 fallback
// - extract_video_id: Text between the start and end markers

use crate::error::CoreResult;

use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker preceding the identifier.
pub const VIDEO_ID_START_MARKER: &str = "?video_id=";

/// Marker following the identifier.
pub const VIDEO_ID_END_MARKER: &str = "</trailer>";

/// Byte values with no assigned character in Windows-1252.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

// ============================================================================
// FILE LOOKUP
// ============================================================================

/// Returns the first file directly inside `folder` whose name ends with `extension`.
///
/// The comparison is case-sensitive and the first match in listing order wins.
pub fn find_metadata_file(folder: &Path, extension: &str) -> CoreResult<Option<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(extension) && entry.path().is_file() {
            candidates.push(entry.path());
        }
    }
    log::debug!("Metadata candidates in {}: {:?}", folder.display(), candidates);
    Ok(candidates.into_iter().next())
}

// ============================================================================
// DECODING
// ============================================================================

/// Decodes `bytes` as strict Windows-1252.
///
/// Returns `None` if any byte is undefined in that code page.
#[must_use]
pub fn decode_windows_1252_strict(bytes: &[u8]) -> Option<String> {
    if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
        return None;
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    Some(text.into_owned())
}

/// Decodes metadata bytes, trying Windows-1252 first and falling back to UTF-8.
///
/// The fallback drops invalid sequences instead of failing, so decoding
/// always produces a string.
#[must_use]
pub fn decode_metadata(bytes: &[u8]) -> String {
    if let Some(text) = decode_windows_1252_strict(bytes) {
        return text;
    }
    log::debug!("Windows-1252 decoding failed, retrying as UTF-8");
    utf8_ignoring_invalid(bytes)
}

/// Decodes UTF-8, skipping invalid byte sequences.
fn utf8_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Reads and decodes the metadata file at `path`.
pub fn read_metadata(path: &Path) -> CoreResult<String> {
    let bytes = fs::read(path)?;
    let content = decode_metadata(&bytes);
    log::debug!(
        "Metadata {} starts with: {}...",
        path.display(),
        content.chars().take(100).collect::<String>()
    );
    Ok(content)
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extracts the video identifier from metadata content.
///
/// The identifier is the trimmed text between the first [`VIDEO_ID_START_MARKER`]
/// and the next [`VIDEO_ID_END_MARKER`] after it. Returns `None` when either
/// marker is missing or the identifier is blank.
///
/// # Examples
///
/// ```rust
/// use trailfetch_core::metadata::extract_video_id;
///
/// let nfo = "<trailer>plugin://plugin.video.youtube/?video_id=ABC123</trailer>";
/// assert_eq!(extract_video_id(nfo).as_deref(), Some("ABC123"));
/// assert_eq!(extract_video_id("<trailer></trailer>"), None);
/// ```
#[must_use]
pub fn extract_video_id(content: &str) -> Option<String> {
    let Some(marker_pos) = content.find(VIDEO_ID_START_MARKER) else {
        log::debug!("Start marker not found in metadata");
        return None;
    };
    let start = marker_pos + VIDEO_ID_START_MARKER.len();

    let Some(relative_end) = content[start..].find(VIDEO_ID_END_MARKER) else {
        log::debug!("End marker not found after position {start}");
        return None;
    };
    let end = start + relative_end;
    log::debug!("Identifier bounds: start={start}, end={end}");

    if end <= start {
        log::debug!("Empty identifier span at position {start}");
        return None;
    }

    let video_id = content[start..end].trim();
    if video_id.is_empty() {
        None
    } else {
        Some(video_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_identifier_between_markers() {
        let nfo = "<movie>\n  <trailer>plugin://plugin.video.youtube/?video_id=ABC123</trailer>\n</movie>";
        assert_eq!(extract_video_id(nfo).as_deref(), Some("ABC123"));
    }

    #[test]
    fn trims_whitespace_around_identifier() {
        assert_eq!(extract_video_id("?video_id=  xyz_9 \n</trailer>").as_deref(), Some("xyz_9"));
    }

    #[test]
    fn missing_start_marker_yields_none() {
        assert_eq!(extract_video_id("<trailer>https://example.com/t.mp4</trailer>"), None);
    }

    #[test]
    fn missing_end_marker_yields_none() {
        assert_eq!(extract_video_id("<trailer>plugin://x/?video_id=ABC123"), None);
    }

    #[test]
    fn end_marker_only_before_start_yields_none() {
        assert_eq!(extract_video_id("</trailer> then ?video_id=ABC123"), None);
    }

    #[test]
    fn adjacent_markers_yield_none() {
        assert_eq!(extract_video_id("?video_id=</trailer>"), None);
        assert_eq!(extract_video_id("?video_id=   </trailer>"), None);
    }

    #[test]
    fn first_start_marker_wins() {
        let nfo = "?video_id=first</trailer>?video_id=second</trailer>";
        assert_eq!(extract_video_id(nfo).as_deref(), Some("first"));
    }

    #[test]
    fn windows_1252_bytes_decode() {
        let bytes = b"<title>Am\xe9lie</title>";
        assert_eq!(decode_metadata(bytes), "<title>Amélie</title>");
    }

    #[test]
    fn undefined_byte_falls_back_to_utf8() {
        let mut bytes = "<title>Amélie</title>".as_bytes().to_vec();
        bytes.push(0x81);
        assert_eq!(decode_windows_1252_strict(&bytes), None);
        assert_eq!(decode_metadata(&bytes), "<title>Amélie</title>");
    }

    #[test]
    fn utf8_fallback_keeps_encoded_replacement_characters() {
        let mut bytes = "?video_id=ABC\u{FFFD}</trailer>".as_bytes().to_vec();
        bytes.extend_from_slice(&[0x81, 0xff]);
        assert_eq!(decode_metadata(&bytes), "?video_id=ABC\u{FFFD}</trailer>");
    }
}

//! Directory scanning and the image name filter.
//!
//! One non-recursive `read_dir` pass over the source directory produces a
//! [`Listing`]: the entry names that look like images, and the ones that
//! don't, both in the order the filesystem reported them.
//!
//! ## What Counts as an Image
//!
//! A name matches if it ends with `.jpeg`, `.jpg`, or `.dng`, exact case,
//! as a plain suffix match on the whole name. Nothing else is consulted:
//!
//! - No file content is read, decoded, or validated. A zero-byte
//!   `photo.jpg` is included like any other.
//! - No file-type check. A subdirectory named `x.jpg` is included.
//! - A name that is only the suffix (`.jpg` with no stem) matches.
//! - `.JPG` and `.Jpeg` do not match; there is no case normalization.
//!
//! ## Ordering
//!
//! Entries are kept exactly as `read_dir` yields them. No sorting is
//! applied, and callers must not assume alphabetical or chronological
//! order.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Name suffixes recognized as images, matched case-sensitively.
pub const SUPPORTED_SUFFIXES: &[&str] = &[".jpeg", ".jpg", ".dng"];

/// Result of scanning one source directory.
///
/// Both vectors preserve filesystem listing order. Only `images` feeds the
/// gallery page; `skipped` exists for the `check` report.
#[derive(Debug, Serialize)]
pub struct Listing {
    /// Entry names matching a supported suffix.
    pub images: Vec<String>,
    /// Entry names that did not match.
    pub skipped: Vec<String>,
}

impl Listing {
    /// Total number of directory entries seen.
    pub fn total(&self) -> usize {
        self.images.len() + self.skipped.len()
    }
}

/// Scan `dir` and classify its entries.
///
/// Fails if the directory cannot be read or an entry cannot be retrieved;
/// errors propagate rather than turning into an empty gallery.
/// Non-UTF-8 names are converted lossily, so replacement characters flow
/// into the page like any other character.
pub fn scan(dir: &Path) -> Result<Listing, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images = Vec::new();
    let mut skipped = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_supported_name(&name) {
            images.push(name);
        } else {
            skipped.push(name);
        }
    }

    Ok(Listing { images, skipped })
}

/// True iff `name` ends with one of [`SUPPORTED_SUFFIXES`].
///
/// Suffix-only: a bare `.jpg` matches, and no case folding is done.
pub fn is_supported_name(name: &str) -> bool {
    SUPPORTED_SUFFIXES.iter().any(|s| name.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(is_supported_name("a.jpg"));
        assert!(is_supported_name("a.jpeg"));
        assert!(is_supported_name("a.dng"));
        assert!(!is_supported_name("a.JPG"));
        assert!(!is_supported_name("a.Jpeg"));
        assert!(!is_supported_name("a.DNG"));
    }

    #[test]
    fn non_image_suffixes_rejected() {
        assert!(!is_supported_name("a.png"));
        assert!(!is_supported_name("notes.txt"));
        assert!(!is_supported_name("jpg"));
        assert!(!is_supported_name("a.jpg.bak"));
    }

    #[test]
    fn bare_suffix_name_matches() {
        // A name that is only the suffix still passes; accepted behavior.
        assert!(is_supported_name(".jpg"));
        assert!(is_supported_name(".jpeg"));
        assert!(is_supported_name(".dng"));
    }

    #[test]
    fn scan_splits_matched_and_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.jpg"), "x").unwrap();
        fs::write(tmp.path().join("b.png"), "x").unwrap();
        fs::write(tmp.path().join("c.dng"), "x").unwrap();
        fs::write(tmp.path().join("d.JPG"), "x").unwrap();

        let listing = scan(tmp.path()).unwrap();
        assert_eq!(listing.total(), 4);

        let mut images = listing.images.clone();
        images.sort();
        assert_eq!(images, vec!["a.jpg", "c.dng"]);

        let mut skipped = listing.skipped.clone();
        skipped.sort();
        assert_eq!(skipped, vec!["b.png", "d.JPG"]);
    }

    #[test]
    fn scan_includes_directory_named_like_image() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("album.jpg")).unwrap();

        let listing = scan(tmp.path()).unwrap();
        assert_eq!(listing.images, vec!["album.jpg"]);
    }

    #[test]
    fn scan_does_not_recurse() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.jpg"), "x").unwrap();

        let listing = scan(tmp.path()).unwrap();
        assert!(listing.images.is_empty());
        assert_eq!(listing.skipped, vec!["nested"]);
    }

    #[test]
    fn scan_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let listing = scan(tmp.path()).unwrap();
        assert!(listing.images.is_empty());
        assert!(listing.skipped.is_empty());
    }

    #[test]
    fn scan_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("does-not-exist");
        let err = scan(&gone).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("does-not-exist"), "diagnostic names the path: {msg}");
    }

    #[test]
    fn listing_order_is_stable_between_scans() {
        // Order stability across scans of an unchanged directory is an
        // assumption about the filesystem, not a guarantee of this tool.
        let tmp = TempDir::new().unwrap();
        for name in ["c.jpg", "a.jpg", "b.jpeg", "z.dng"] {
            fs::write(tmp.path().join(name), "x").unwrap();
        }

        let first = scan(tmp.path()).unwrap();
        let second = scan(tmp.path()).unwrap();
        assert_eq!(first.images, second.images);
        assert_eq!(first.skipped, second.skipped);
    }

    #[test]
    fn listing_serializes_to_json() {
        let listing = Listing {
            images: vec!["a.jpg".to_string()],
            skipped: vec!["b.png".to_string()],
        };
        let json = serde_json::to_string(&listing).unwrap();
        assert!(json.contains("\"images\""));
        assert!(json.contains("a.jpg"));
        assert!(json.contains("\"skipped\""));
    }
}

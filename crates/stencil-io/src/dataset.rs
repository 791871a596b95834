//! Dataset listing.
//!
//! Input images are organized in resolution buckets, one directory per
//! resolution under a common root:
//!
//! ```text
//! dataset/grayscale/512/*.png
//! dataset/grayscale/1024/*.png
//! ```

use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use tracing::debug;

use crate::{IoError, IoResult};

/// Lists the PNG files of one resolution bucket, sorted by path.
///
/// The order of the returned paths is irrelevant to correctness; sorting
/// makes batch iteration (and its logs) deterministic across runs.
pub fn list_bucket(root: &Path, resolution: u32) -> IoResult<Vec<PathBuf>> {
    let pattern = root
        .join(resolution.to_string())
        .join("*.png")
        .to_string_lossy()
        .into_owned();

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| IoError::Pattern(e.to_string()))?
        .filter_map(|r| r.ok())
        .collect();
    files.sort();

    debug!(pattern = %pattern, files = files.len(), "list_bucket");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_only_bucket_pngs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let bucket = dir.path().join("512");
        std::fs::create_dir_all(&bucket).unwrap();
        std::fs::create_dir_all(dir.path().join("1024")).unwrap();

        std::fs::write(bucket.join("b.png"), b"x").unwrap();
        std::fs::write(bucket.join("a.png"), b"x").unwrap();
        std::fs::write(bucket.join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("1024").join("c.png"), b"x").unwrap();

        let files = list_bucket(dir.path(), 512).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_empty_bucket_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let files = list_bucket(dir.path(), 512).unwrap();
        assert!(files.is_empty());
    }
}

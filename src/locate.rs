//! Project root discovery.

use crate::error::CheckerError;
use std::path::{Path, PathBuf};

/// Find the project root by walking up from `start`.
///
/// Returns the first directory (`start` included, closest first) that
/// contains the `marker` file. Errors when the filesystem root is reached
/// without a match; unlike a fallback-to-cwd strategy, a missing marker
/// means nothing gets checked.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf, CheckerError> {
    let mut dir = start;
    loop {
        if dir.join(marker).exists() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(p) if p != dir => dir = p,
            _ => break,
        }
    }
    Err(CheckerError::MarkerNotFound {
        marker: marker.to_string(),
        start: start.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_marker_in_start_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("pubspec.yaml"), "name: app\n").unwrap();

        let root = find_project_root(tmp.path(), "pubspec.yaml").unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn finds_marker_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("pubspec.yaml"), "name: app\n").unwrap();
        let nested = tmp.path().join("lib/services");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested, "pubspec.yaml").unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn prefers_closest_marker() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("pubspec.yaml"), "name: outer\n").unwrap();
        let inner = tmp.path().join("packages/app");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join("pubspec.yaml"), "name: inner\n").unwrap();

        let root = find_project_root(&inner, "pubspec.yaml").unwrap();
        assert_eq!(root, inner);
    }

    #[test]
    fn errors_when_marker_absent() {
        let tmp = TempDir::new().unwrap();
        let err = find_project_root(tmp.path(), "no-such-marker-file.yaml").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no-such-marker-file.yaml"));
        assert!(msg.contains("ancestor"));
    }
}

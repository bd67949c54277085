//! Version snapshot discovery and staging.
//!
//! A subdirectory of the versions root qualifies as a published snapshot
//! iff it directly contains a `README.md`. Each qualifying snapshot is
//! staged as `<docs versions dir>/<name>/index.md` and its directory name
//! recorded as a version identifier. Enumeration order is whatever the
//! filesystem yields; ordering is the comparator's job.
//!
//! The collector never prints: a missing root is reported as a
//! [`VersionScan::MissingRoot`] outcome and surfaced by the caller via
//! `output`, keeping the scan core testable like the patch core.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker file that qualifies a subdirectory as a version snapshot.
pub const MARKER_FILE: &str = "README.md";

/// Staged page name within the docs tree.
pub const STAGED_FILE: &str = "index.md";

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to copy {src} to {dst}: {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        source: io::Error,
    },
}

/// Result of scanning the versions root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionScan {
    /// Identifiers discovered and staged, unordered.
    Found(Vec<String>),
    /// The versions root does not exist; nothing was staged.
    MissingRoot,
}

impl VersionScan {
    /// The discovered identifiers; empty when the root was missing.
    pub fn into_versions(self) -> Vec<String> {
        match self {
            VersionScan::Found(versions) => versions,
            VersionScan::MissingRoot => Vec::new(),
        }
    }
}

/// Scan `versions_dir` for snapshots, staging each marker file under
/// `docs_versions_dir`.
///
/// A missing versions root is not fatal: it is reported as a skip outcome
/// with an empty result. Subdirectories without the marker file are
/// silently skipped. I/O failures while reading or staging abort the run.
pub fn collect_versions(
    versions_dir: &Path,
    docs_versions_dir: &Path,
) -> Result<VersionScan, CollectError> {
    if !versions_dir.is_dir() {
        return Ok(VersionScan::MissingRoot);
    }

    let entries = fs::read_dir(versions_dir).map_err(|source| CollectError::ReadDir {
        path: versions_dir.to_path_buf(),
        source,
    })?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CollectError::ReadDir {
            path: versions_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let marker = path.join(MARKER_FILE);
        if !marker.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let out_dir = docs_versions_dir.join(&name);
        fs::create_dir_all(&out_dir).map_err(|source| CollectError::CreateDir {
            path: out_dir.clone(),
            source,
        })?;
        let out_file = out_dir.join(STAGED_FILE);
        fs::copy(&marker, &out_file).map_err(|source| CollectError::Copy {
            src: marker.clone(),
            dst: out_file.clone(),
            source,
        })?;

        versions.push(name);
    }

    Ok(VersionScan::Found(versions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snapshot(root: &Path, name: &str, readme: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MARKER_FILE), readme).unwrap();
    }

    #[test]
    fn collects_directories_with_marker() {
        let tmp = TempDir::new().unwrap();
        let versions = tmp.path().join("versions");
        let docs = tmp.path().join("docs/versions");
        snapshot(&versions, "v1.0.0", "# one");
        snapshot(&versions, "v2.0.0", "# two");

        let mut found = collect_versions(&versions, &docs).unwrap().into_versions();
        found.sort();
        assert_eq!(found, vec!["v1.0.0", "v2.0.0"]);
    }

    #[test]
    fn stages_marker_as_index_md() {
        let tmp = TempDir::new().unwrap();
        let versions = tmp.path().join("versions");
        let docs = tmp.path().join("docs/versions");
        snapshot(&versions, "v1.0.0", "# snapshot content");

        collect_versions(&versions, &docs).unwrap();

        let staged = fs::read_to_string(docs.join("v1.0.0").join(STAGED_FILE)).unwrap();
        assert_eq!(staged, "# snapshot content");
    }

    #[test]
    fn skips_directories_without_marker() {
        let tmp = TempDir::new().unwrap();
        let versions = tmp.path().join("versions");
        let docs = tmp.path().join("docs/versions");
        snapshot(&versions, "v1.0.0", "# one");
        fs::create_dir_all(versions.join("drafts")).unwrap();

        let found = collect_versions(&versions, &docs).unwrap().into_versions();
        assert_eq!(found, vec!["v1.0.0"]);
        assert!(!docs.join("drafts").exists());
    }

    #[test]
    fn skips_loose_files_in_root() {
        let tmp = TempDir::new().unwrap();
        let versions = tmp.path().join("versions");
        let docs = tmp.path().join("docs/versions");
        fs::create_dir_all(&versions).unwrap();
        fs::write(versions.join("notes.txt"), "not a snapshot").unwrap();

        let found = collect_versions(&versions, &docs).unwrap();
        assert_eq!(found, VersionScan::Found(vec![]));
    }

    #[test]
    fn missing_root_is_skip_outcome() {
        let tmp = TempDir::new().unwrap();
        let versions = tmp.path().join("does-not-exist");
        let docs = tmp.path().join("docs/versions");

        let found = collect_versions(&versions, &docs).unwrap();
        assert_eq!(found, VersionScan::MissingRoot);
        assert!(found.into_versions().is_empty());
        assert!(!docs.exists());
    }

    #[test]
    fn restaging_overwrites_previous_copy() {
        let tmp = TempDir::new().unwrap();
        let versions = tmp.path().join("versions");
        let docs = tmp.path().join("docs/versions");
        snapshot(&versions, "v1.0.0", "# old");
        collect_versions(&versions, &docs).unwrap();

        fs::write(versions.join("v1.0.0").join(MARKER_FILE), "# new").unwrap();
        collect_versions(&versions, &docs).unwrap();

        let staged = fs::read_to_string(docs.join("v1.0.0").join(STAGED_FILE)).unwrap();
        assert_eq!(staged, "# new");
    }
}

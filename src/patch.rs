//! Rewriting the nav array inside the VitePress config.
//!
//! The config is read once into an immutable buffer; every range is
//! computed against that snapshot, the edit is applied in one pass, and
//! the file is written back only when the result differs byte-for-byte.
//! A second run over unchanged inputs therefore never touches the file.

use crate::locate::{self, ArraySpan, TextRange};
use crate::nav;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Key token introducing the nav array in the VitePress theme config.
const NAV_KEY: &str = "nav:";

/// Probe for an already-synchronized dropdown entry inside the nav array.
static EXISTING_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"text\s*:\s*['"]{}['"]"#, nav::NAV_LABEL)).expect("static pattern")
});

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Outcome of one nav rewrite attempt. The skip variants are non-fatal;
/// the caller decides how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUpdate {
    /// The config changed and was written back.
    Updated,
    /// The config already matched the rendered entry; nothing written.
    Unchanged,
    /// No config file at the given path.
    MissingConfig,
    /// The config exists but holds no locatable nav array.
    NavArrayNotFound,
}

/// Splice the rendered nav item into the source buffer.
///
/// With an existing range the range is replaced inclusively; otherwise the
/// item is inserted as a new trailing entry just before the array's
/// closing bracket, preceded by a separating comma.
pub fn apply_nav_item(
    original: &str,
    array: &ArraySpan,
    existing: Option<TextRange>,
    item: &str,
) -> String {
    match existing {
        Some(range) => format!(
            "{}{}{}",
            &original[..range.start],
            item,
            &original[range.end + 1..]
        ),
        None => format!(
            "{},\n{}\n{}",
            &original[..array.end],
            item,
            &original[array.end..]
        ),
    }
}

/// Rewrite `config_path` so its nav array carries the dropdown for
/// `versions` (already ordered). Missing file and unlocatable nav array
/// are reported as skip outcomes, not errors.
pub fn update_nav_config(config_path: &Path, versions: &[String]) -> Result<NavUpdate, PatchError> {
    if !config_path.is_file() {
        return Ok(NavUpdate::MissingConfig);
    }

    let original = fs::read_to_string(config_path).map_err(|source| PatchError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    let Some(array) = locate::find_array_literal(&original, NAV_KEY) else {
        return Ok(NavUpdate::NavArrayNotFound);
    };

    let item = nav::build_versions_nav_item(versions);
    let existing = locate::find_object_range(&original, &array, &EXISTING_ENTRY);
    let updated = apply_nav_item(&original, &array, existing, &item);

    if updated == original {
        return Ok(NavUpdate::Unchanged);
    }

    fs::write(config_path, &updated).map_err(|source| PatchError::Write {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(NavUpdate::Updated)
}

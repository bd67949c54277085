//! Console output for the sync run.
//!
//! Format functions are pure and return strings for testability; `print_*`
//! wrappers do the actual writing. The summary goes to stdout, warnings
//! for non-fatal skips go to stderr.

use crate::collect::VersionScan;
use crate::patch::NavUpdate;
use std::path::Path;

/// Final summary line listing the synced identifiers in presentation
/// order, or a `(none)` marker.
pub fn format_sync_summary(versions: &[String]) -> String {
    if versions.is_empty() {
        "Synced versions: (none)".to_string()
    } else {
        format!("Synced versions: {}", versions.join(", "))
    }
}

/// Print the summary line to stdout.
pub fn print_sync_summary(versions: &[String]) {
    println!("{}", format_sync_summary(versions));
}

/// Warning line for a skipped version scan, if the outcome warrants one.
pub fn format_collect_warning(scan: &VersionScan, versions_dir: &Path) -> Option<String> {
    match scan {
        VersionScan::MissingRoot => Some(format!(
            "Warning: skip version sync, missing directory {}",
            versions_dir.display()
        )),
        VersionScan::Found(_) => None,
    }
}

/// Print the collect warning to stderr, when there is one.
pub fn print_collect_warning(scan: &VersionScan, versions_dir: &Path) {
    if let Some(line) = format_collect_warning(scan, versions_dir) {
        eprintln!("{line}");
    }
}

/// Warning line for a skipped nav rewrite, if the outcome warrants one.
pub fn format_nav_warning(update: NavUpdate, config_path: &Path) -> Option<String> {
    match update {
        NavUpdate::MissingConfig => Some(format!(
            "Warning: skip nav update, missing {}",
            config_path.display()
        )),
        NavUpdate::NavArrayNotFound => Some(format!(
            "Warning: skip nav update, could not locate nav array in {}",
            config_path.display()
        )),
        NavUpdate::Updated | NavUpdate::Unchanged => None,
    }
}

/// Print the nav warning to stderr, when there is one.
pub fn print_nav_warning(update: NavUpdate, config_path: &Path) {
    if let Some(line) = format_nav_warning(update, config_path) {
        eprintln!("{line}");
    }
}

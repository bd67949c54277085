//! Version identifier ordering.
//!
//! Version directories are sorted newest-first for the nav dropdown. An
//! identifier that parses as a loose semantic version (`v` prefix optional,
//! exactly three numeric groups, optional `-`/`+` suffix) is compared
//! numerically on (major, minor, patch); non-parsing labels like `beta`
//! or `v1` are compared in reverse lexicographic order and sort after all
//! semantic versions.
//!
//! The two classes are kept separate so the whole relation stays a strict
//! total order. Comparing mixed pairs by raw string instead would be
//! intransitive (`v2.0.0` beats `v10.0.0` as a string but loses
//! numerically, and a label between them closes the cycle), which
//! `sort_by` rejects at runtime on larger inputs.

use std::cmp::Ordering;

/// Numeric triple parsed from a loose semantic version identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Parse a loose semantic version: optional `v` prefix, exactly three
/// dot-separated integers, then optionally a `-` or `+` suffix which is
/// ignored for numeric comparison.
///
/// `v1.2.3`, `1.2.3-rc.1`, `v0.9.0+build.5` parse; `v1`, `1.2`, `1.2.3.4`
/// and arbitrary labels do not.
pub fn parse_semver_loose(id: &str) -> Option<SemVer> {
    let s = id.strip_prefix('v').unwrap_or(id);
    // Everything from the first `-`/`+` on is pre-release/build metadata.
    let base = match s.find(['-', '+']) {
        Some(pos) => &s[..pos],
        None => s,
    };

    let mut groups = base.split('.');
    let major = groups.next()?.parse().ok()?;
    let minor = groups.next()?.parse().ok()?;
    let patch = groups.next()?.parse().ok()?;
    if groups.next().is_some() {
        return None;
    }
    Some(SemVer {
        major,
        minor,
        patch,
    })
}

/// Compare two version identifiers for newest-first presentation.
///
/// The order is derived from one consistent key per identifier: the
/// parsed triple when it exists, then the raw string. Semantic versions
/// compare descending on (major, minor, patch) with equal triples broken
/// by descending string order; non-semantic labels sort after every
/// semantic version and among themselves in descending string order.
pub fn compare_versions_desc(a: &str, b: &str) -> Ordering {
    match (parse_semver_loose(a), parse_semver_loose(b)) {
        (Some(pa), Some(pb)) => pb
            .major
            .cmp(&pa.major)
            .then(pb.minor.cmp(&pa.minor))
            .then(pb.patch.cmp(&pa.patch))
            .then_with(|| b.cmp(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// Sort identifiers newest-first. `sort_by` is stable, so equal-order
/// elements keep their enumeration order.
pub fn sort_versions_desc(versions: &mut [String]) {
    versions.sort_by(|a, b| compare_versions_desc(a, b));
}

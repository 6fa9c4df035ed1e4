// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Helpers for working with lists of Python versions
//!
//! These cover what callers do with the output of a version-listing tool:
//! parse it line by line, sort it, and pick the version matching a
//! partial request such as "3.11".

use tracing::{debug, trace};

use crate::arch::Architecture;
use crate::release::Release;
use crate::version::PythonVersion;

/// Parse version-listing output, one version per line
///
/// Blank lines are ignored. Lines that do not hold a version identifier are
/// skipped and reported at debug level.
///
/// # Examples
/// ```
/// use pyver::listing::parse_listing;
///
/// let versions = parse_listing("3.10.11\n  3.11.4-win32\n\nmingw\n");
/// let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["3.10.11", "3.11.4-win32"]);
/// ```
#[must_use]
pub fn parse_listing(text: &str) -> Vec<PythonVersion> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse::<PythonVersion>() {
            Ok(version) => Some(version),
            Err(e) => {
                debug!(line, error = %e, "skipping unrecognized version line");
                None
            }
        })
        .collect()
}

/// Sort versions by release, oldest first
///
/// The sort is stable: versions with the same release keep their relative
/// order whatever their architecture.
pub fn sort_versions(versions: &mut [PythonVersion]) {
    versions.sort_by(PythonVersion::compare);
}

/// Extract "major.minor" from a version
///
/// # Returns
/// `None` if the release has a single component
///
/// # Examples
/// ```
/// use pyver::{PythonVersion, listing::extract_major_minor};
///
/// let v: PythonVersion = "3.11.4-win32".parse().unwrap();
/// assert_eq!(extract_major_minor(&v), Some("3.11".to_string()));
/// let v: PythonVersion = "3".parse().unwrap();
/// assert_eq!(extract_major_minor(&v), None);
/// ```
#[must_use]
pub fn extract_major_minor(version: &PythonVersion) -> Option<String> {
    match version.release().components() {
        [major, minor, ..] => Some(format!("{major}.{minor}")),
        _ => None,
    }
}

/// Check whether a version falls under a dotted prefix pattern
///
/// Matching is per component: "3.1" matches `3.1.2` but not `3.10.0`. An
/// unparseable pattern matches nothing.
#[must_use]
pub fn matches_version_pattern(version: &PythonVersion, pattern: &str) -> bool {
    pattern
        .trim()
        .parse::<Release>()
        .is_ok_and(|prefix| version.release().starts_with(&prefix))
}

/// Find the best matching version from available versions
///
/// First attempts an exact match, architecture included. If not found,
/// returns the highest release of the requested architecture whose leading
/// components equal the requested release.
///
/// # Examples
/// ```
/// use pyver::{PythonVersion, listing::{find_matching_version, parse_listing}};
///
/// let available = parse_listing("3.11.3\n3.11.4\n3.11.4-win32\n3.12.0\n");
/// let found = find_matching_version("3.11", &available).unwrap();
/// assert_eq!(found.to_string(), "3.11.4");
/// let found = find_matching_version("3.11-win32", &available).unwrap();
/// assert_eq!(found.to_string(), "3.11.4-win32");
/// ```
#[must_use]
pub fn find_matching_version(
    requested: &str,
    available: &[PythonVersion],
) -> Option<PythonVersion> {
    let requested = match requested.parse::<PythonVersion>() {
        Ok(version) => version,
        Err(e) => {
            debug!(requested, error = %e, "cannot match an unparseable version");
            return None;
        }
    };

    if let Some(exact) = available.iter().find(|v| **v == requested) {
        trace!(version = %exact, "exact match");
        return Some(exact.clone());
    }

    let best = available
        .iter()
        .filter(|v| v.arch() == requested.arch())
        .filter(|v| v.release().starts_with(requested.release()))
        .max_by(|a, b| a.compare(b))
        .cloned();
    if let Some(version) = &best {
        trace!(requested = %requested, version = %version, "prefix match");
    }
    best
}

/// Highest release available for one architecture
#[must_use]
pub fn latest(available: &[PythonVersion], arch: Architecture) -> Option<PythonVersion> {
    available
        .iter()
        .filter(|v| v.arch() == arch)
        .max_by(|a, b| a.compare(b))
        .cloned()
}

//! Version output parsing with regex extraction.

use regex::Regex;
use semver::Version;

/// Extract a semantic version from interpreter output.
///
/// Handles the formats interpreters actually print:
///
/// - `Python 3.11.4` -> 3.11.4
/// - `Python 3.13.0rc1` -> 3.13.0
/// - `3.9.18` -> 3.9.18
///
/// Returns `None` when no `major.minor.patch` pattern is present. Absence
/// is not an error; the caller records the runtime as found either way.
pub(crate) fn parse_version(output: &str) -> Option<Version> {
    let re = Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("version regex is valid");

    let caps = re.captures(output)?;
    let version_str = caps.get(0)?.as_str();
    Version::parse(version_str).ok()
}

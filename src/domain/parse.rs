//! Pattern-based version parsing.
//!
//! Two shapes are recognised:
//! - semantic: `v<major>.<minor>.<patch>` with an optional `-<specifier>`
//! - commit: `v<major>.<minor>.<patch>-r<commit>`
//!
//! [`parse_version`] tries them in that order and returns the first success,
//! so `v1.2.3-r5` is a semantic version with specifier `r5`. Use
//! [`CommitVersion::parse`] to read the commit form explicitly.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::domain::version::{CommitVersion, SemanticVersion, Version};
use crate::error::{Result, VersionError};

lazy_static! {
    // Specifier runs to the end of input but may not contain a line terminator
    static ref SEMANTIC_RE: Regex = Regex::new(
        r"^v([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([^\r\n\x{85}\x{2028}\x{2029}]+))?$"
    )
    .unwrap();
    static ref COMMIT_RE: Regex = Regex::new(r"^v([0-9]+)\.([0-9]+)\.([0-9]+)-r([0-9]+)$").unwrap();
}

type Matcher = fn(&str) -> Result<Option<Version>>;

/// Matchers in dispatch order; the first `Ok(Some(_))` wins
const MATCHERS: [(&str, Matcher); 2] = [
    ("semantic", match_semantic),
    ("commit", match_commit),
];

/// Converts a captured digit run, rejecting values outside the signed 32-bit range
fn parse_component(field: &'static str, digits: &str) -> Result<u32> {
    let value = digits
        .parse::<i32>()
        .map_err(|e| VersionError::overflow(field, digits, e))?;
    // Captures hold digits only, so this cannot be negative
    u32::try_from(value).map_err(|_| VersionError::no_match(digits))
}

fn component(captures: &Captures<'_>, index: usize, field: &'static str) -> Result<u32> {
    let digits = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
    parse_component(field, digits)
}

impl SemanticVersion {
    /// Parses the semantic shape only.
    ///
    /// # Returns
    /// * `Ok(Some(_))` - input matched and every field fits
    /// * `Ok(None)` - input does not have the semantic shape
    /// * `Err(VersionError::Overflow)` - shape matched but a field is out of range
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let Some(captures) = SEMANTIC_RE.captures(input) else {
            return Ok(None);
        };

        Ok(Some(SemanticVersion {
            major: component(&captures, 1, "major")?,
            minor: component(&captures, 2, "minor")?,
            patch: component(&captures, 3, "patch")?,
            specifier: captures.get(4).map(|m| m.as_str().to_string()),
        }))
    }
}

impl CommitVersion {
    /// Parses the commit shape only. Same return contract as [`SemanticVersion::parse`].
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let Some(captures) = COMMIT_RE.captures(input) else {
            return Ok(None);
        };

        Ok(Some(CommitVersion {
            major: component(&captures, 1, "major")?,
            minor: component(&captures, 2, "minor")?,
            patch: component(&captures, 3, "patch")?,
            commit_number: component(&captures, 4, "commit number")?,
        }))
    }
}

fn match_semantic(input: &str) -> Result<Option<Version>> {
    Ok(SemanticVersion::parse(input)?.map(Version::from))
}

fn match_commit(input: &str) -> Result<Option<Version>> {
    Ok(CommitVersion::parse(input)?.map(Version::from))
}

/// Parses a version string, logging recovered errors through `log`.
///
/// # Example
/// ```ignore
/// assert_eq!(parse_version("v1.2.3").unwrap().to_string(), "v1.2.3");
/// assert_eq!(parse_version("not-a-version"), None);
/// ```
pub fn parse_version(input: &str) -> Option<Version> {
    parse_version_with(input, &LogDiagnostics)
}

/// Parses a version string, reporting recovered errors to `diagnostics`.
///
/// An out-of-range field fails only the pattern that captured it; the next
/// pattern is still tried.
pub fn parse_version_with(input: &str, diagnostics: &dyn Diagnostics) -> Option<Version> {
    for (name, matcher) in MATCHERS {
        match matcher(input) {
            Ok(Some(version)) => {
                log::trace!("'{}' matched {} pattern", input, name);
                return Some(version);
            }
            Ok(None) => {}
            Err(e) => diagnostics.report(&e),
        }
    }
    None
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s).ok_or_else(|| VersionError::no_match(s))
    }
}

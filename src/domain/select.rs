//! Picking releases out of a set of version strings.

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::domain::parse::parse_version;
use crate::domain::version::{compare, CommitVersion, Version};

/// Which kinds of versions may be offered as the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Semantic versions carrying a specifier (e.g. "v1.0.0-beta")
    pub allow_specifiers: bool,
    /// Commit builds (e.g. "v1.0.0-r12")
    pub allow_commit_builds: bool,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy {
            allow_specifiers: true,
            allow_commit_builds: true,
        }
    }
}

impl SelectionPolicy {
    /// Only plain `vX.Y.Z` releases
    pub fn stable_only() -> Self {
        SelectionPolicy {
            allow_specifiers: false,
            allow_commit_builds: false,
        }
    }

    pub fn allows(&self, version: &Version) -> bool {
        match version {
            Version::Semantic(v) => v.specifier.is_none() || self.allow_specifiers,
            Version::Commit(_) => self.allow_commit_builds,
        }
    }
}

/// Parses a release listing entry, reading `vX.Y.Z-rN` as a commit build.
///
/// Unlike [`parse_version`], the commit shape is tried first so that builds
/// of the same release are ordered by commit number.
pub fn parse_release(input: &str) -> Option<Version> {
    match CommitVersion::parse(input) {
        Ok(Some(build)) => return Some(build.into()),
        Ok(None) => {}
        Err(e) => LogDiagnostics.report(&e),
    }
    parse_version(input)
}

/// Parses every input with [`parse_release`], dropping the ones that are not versions
pub fn parse_all<I, S>(inputs: I) -> Vec<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .filter_map(|input| parse_release(input.as_ref()))
        .collect()
}

/// Sorts ascending by [`compare`]; versions that compare equal keep their order
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by(|a, b| a.cmp_version(b));
}

/// Returns the greatest version the policy allows.
///
/// When several versions compare equal the first one seen is kept.
pub fn latest_version<'a, I>(versions: I, policy: &SelectionPolicy) -> Option<&'a Version>
where
    I: IntoIterator<Item = &'a Version>,
{
    let mut latest: Option<&Version> = None;
    for version in versions.into_iter().filter(|v| policy.allows(v)) {
        match latest {
            Some(current) if compare(version, current) <= 0 => {}
            _ => latest = Some(version),
        }
    }
    latest
}

/// True when `candidate` orders strictly after `installed`
pub fn is_newer(candidate: &Version, installed: &Version) -> bool {
    compare(candidate, installed) > 0
}

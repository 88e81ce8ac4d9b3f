use std::cmp::Ordering;
use std::fmt;

/// Release version with an optional free-form specifier (e.g. "v1.2.3-beta")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub specifier: Option<String>,
}

impl SemanticVersion {
    /// Create a new semantic version
    pub fn new(major: u32, minor: u32, patch: u32, specifier: Option<String>) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            specifier,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(specifier) = &self.specifier {
            write!(f, "-{}", specifier)?;
        }
        Ok(())
    }
}

/// Build version counted in commits since a release (e.g. "v1.2.3-r42")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub commit_number: u32,
}

impl CommitVersion {
    /// Create a new commit version
    pub fn new(major: u32, minor: u32, patch: u32, commit_number: u32) -> Self {
        CommitVersion {
            major,
            minor,
            patch,
            commit_number,
        }
    }
}

impl fmt::Display for CommitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{}.{}.{}-r{}",
            self.major, self.minor, self.patch, self.commit_number
        )
    }
}

/// Any version the installer understands.
///
/// Equality is structural, so two semantic versions differing only in
/// specifier are unequal even though [`compare`] orders them as equal.
/// For that reason there is no `PartialOrd`/`Ord` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Version {
    Semantic(SemanticVersion),
    Commit(CommitVersion),
}

impl Version {
    pub fn major(&self) -> u32 {
        match self {
            Version::Semantic(v) => v.major,
            Version::Commit(v) => v.major,
        }
    }

    pub fn minor(&self) -> u32 {
        match self {
            Version::Semantic(v) => v.minor,
            Version::Commit(v) => v.minor,
        }
    }

    pub fn patch(&self) -> u32 {
        match self {
            Version::Semantic(v) => v.patch,
            Version::Commit(v) => v.patch,
        }
    }

    /// Human-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Version::Semantic(_) => "semantic",
            Version::Commit(_) => "commit",
        }
    }

    /// Ordering view of [`compare`]
    pub fn cmp_version(&self, other: &Version) -> Ordering {
        compare(self, other).cmp(&0)
    }
}

impl From<SemanticVersion> for Version {
    fn from(version: SemanticVersion) -> Self {
        Version::Semantic(version)
    }
}

impl From<CommitVersion> for Version {
    fn from(version: CommitVersion) -> Self {
        Version::Commit(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Semantic(v) => v.fmt(f),
            Version::Commit(v) => v.fmt(f),
        }
    }
}

/// Compares two versions, returning a value whose sign gives the ordering.
///
/// Fields are compared in `major`, `minor`, `patch` order and the first
/// non-zero difference is returned. When all three are equal and both sides
/// are commit versions, the commit numbers break the tie. Specifiers never
/// take part.
///
/// # Example
/// ```ignore
/// let a = Version::from(CommitVersion::new(1, 0, 0, 5));
/// let b = Version::from(CommitVersion::new(1, 0, 0, 7));
/// assert!(compare(&a, &b) < 0);
/// ```
pub fn compare(a: &Version, b: &Version) -> i64 {
    let pairs = [
        (a.major(), b.major()),
        (a.minor(), b.minor()),
        (a.patch(), b.patch()),
    ];
    for (left, right) in pairs {
        let diff = i64::from(left) - i64::from(right);
        if diff != 0 {
            return diff;
        }
    }

    match (a, b) {
        (Version::Commit(left), Version::Commit(right)) => {
            i64::from(left.commit_number) - i64::from(right.commit_number)
        }
        _ => 0,
    }
}

//! Domain logic - version parsing, ordering and selection, free of I/O

pub mod parse;
pub mod select;
pub mod version;

pub use parse::{parse_version, parse_version_with};
pub use select::{
    is_newer, latest_version, parse_all, parse_release, sort_versions, SelectionPolicy,
};
pub use version::{compare, CommitVersion, SemanticVersion, Version};

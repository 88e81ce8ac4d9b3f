pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use domain::{
    compare, parse_version, parse_version_with, CommitVersion, SemanticVersion, Version,
};
pub use error::{Result, VersionError};

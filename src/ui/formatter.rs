//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*` functions
//! print them.

use std::cmp::Ordering;

use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// One-line description of a parsed version, e.g. `v1.2.3-beta (semantic 1.2.3, specifier "beta")`
pub fn format_parsed(version: &Version) -> String {
    let numbers = format!("{}.{}.{}", version.major(), version.minor(), version.patch());
    match version {
        Version::Semantic(v) => match &v.specifier {
            Some(specifier) => format!(
                "{} (semantic {}, specifier \"{}\")",
                version, numbers, specifier
            ),
            None => format!("{} (semantic {})", version, numbers),
        },
        Version::Commit(v) => format!(
            "{} (commit {}, build {})",
            version, numbers, v.commit_number
        ),
    }
}

/// Relation symbol for an ordering
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// `a <op> b` using canonical forms
pub fn format_comparison(a: &Version, b: &Version) -> String {
    format!("{} {} {}", a, ordering_symbol(a.cmp_version(b)), b)
}

/// Display the result of parsing one input.
pub fn display_parsed(input: &str, version: Option<&Version>) {
    match version {
        Some(v) => display_success(&format_parsed(v)),
        None => display_error(&format!("'{}' is not a version", input)),
    }
}

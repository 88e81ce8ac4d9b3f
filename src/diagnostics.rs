//! Diagnostic sink for recoverable parse failures.
//!
//! The parser never surfaces overflow errors to its caller; it hands them to a
//! [`Diagnostics`] implementation and treats the input as a non-match.

use crate::error::VersionError;

/// Receives errors the parser recovered from
pub trait Diagnostics {
    fn report(&self, error: &VersionError);
}

/// Default sink, forwards to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, error: &VersionError) {
        log::info!(target: "installer_version::parse", "{}", error);
    }
}


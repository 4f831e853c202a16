//! Error types surfaced by the strict loaders and the template adapter surface.
//!
//! Resolution itself never fails: misses degrade to guessed paths. These errors only show
//! up where a caller explicitly asks for a strict answer.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse a build manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file from disk.
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// The manifest is not a JSON object of entry records.
    #[error("failed to parse manifest {}: {source}", path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
    /// None of the candidate locations held a usable manifest.
    #[error("no manifest found in {}", candidates.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "))]
    NotFound {
        /// Every location that was tried, in lookup order.
        candidates: Vec<PathBuf>,
    },
}

/// Failure to read a resolver configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

/// Misuse of a template function by a template author.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateCallError {
    /// No function is registered under the requested name.
    #[error("unknown template function '{0}'")]
    UnknownFunction(String),
    /// The function was called with an unsupported number of arguments.
    #[error("'{function}' expects {expected} argument(s), got {given}")]
    Arity {
        /// Canonical name of the operation.
        function: &'static str,
        /// Human readable description of the accepted argument counts.
        expected: &'static str,
        /// Number of arguments actually supplied.
        given: usize,
    },
}

//! Error types for version check operations.
//!
//! This module defines [`CheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions (bad arguments, fetch failures, an unreadable scan root)
//!   surface as a `CheckError` and end the run with [`CheckError::exit_code`]
//! - Problems with a single installation are logged and recovered locally
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for unexpected failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for a missing argument or invalid option.
pub const EXIT_USAGE: u8 = 2;
/// Exit code when the latest version could not be fetched.
pub const EXIT_FETCH: u8 = 3;
/// Exit code when the scan root cannot be traversed.
pub const EXIT_FILESYSTEM: u8 = 4;
/// Exit code for `--strict` runs that found outdated installations.
pub const EXIT_OUTDATED: u8 = 10;

/// Core error type for version check operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// No folder argument was supplied.
    #[error("Usage: {program} /path/to/folder")]
    Usage { program: String },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The version-check endpoint was unreachable or answered with an error status.
    #[error("Failed to fetch latest version from {url}: {message}. Try again later.")]
    Network { url: String, message: String },

    /// The version-check response did not contain a usable version.
    #[error("Failed to fetch latest version: unexpected response from {url}: {message}. Try again later.")]
    Parse { url: String, message: String },

    /// The scan root is missing, unreadable or not a directory.
    #[error("Cannot scan {path}: {message}")]
    Filesystem { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } | Self::InvalidConfig { .. } => EXIT_USAGE,
            Self::Network { .. } | Self::Parse { .. } => EXIT_FETCH,
            Self::Filesystem { .. } => EXIT_FILESYSTEM,
            Self::Io(_) | Self::Other(_) => EXIT_FAILURE,
        }
    }

    /// Whether this error means the latest version is unknown.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Parse { .. })
    }
}

/// Result type alias for version check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_displays_program() {
        let err = CheckError::Usage {
            program: "wp-version-check".into(),
        };
        assert_eq!(err.to_string(), "Usage: wp-version-check /path/to/folder");
    }

    #[test]
    fn network_and_parse_both_read_as_fetch_failures() {
        let network = CheckError::Network {
            url: "http://localhost/".into(),
            message: "connection refused".into(),
        };
        let parse = CheckError::Parse {
            url: "http://localhost/".into(),
            message: "missing offers".into(),
        };

        for err in [&network, &parse] {
            assert!(err.is_fetch_failure());
            assert!(err.to_string().starts_with("Failed to fetch latest version"));
            assert_eq!(err.exit_code(), EXIT_FETCH);
        }
        assert!(network.to_string().contains("connection refused"));
        assert!(parse.to_string().contains("missing offers"));
    }

    #[test]
    fn filesystem_error_displays_path() {
        let err = CheckError::Filesystem {
            path: PathBuf::from("/srv/www"),
            message: "No such file or directory".into(),
        };
        assert!(err.to_string().contains("/srv/www"));
        assert_eq!(err.exit_code(), EXIT_FILESYSTEM);
        assert!(!err.is_fetch_failure());
    }

    #[test]
    fn usage_and_config_errors_share_exit_code() {
        let usage = CheckError::Usage {
            program: "x".into(),
        };
        let config = CheckError::InvalidConfig {
            message: "timeout must be positive".into(),
        };
        assert_eq!(usage.exit_code(), EXIT_USAGE);
        assert_eq!(config.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CheckError = io_err.into();
        assert!(matches!(err, CheckError::Io(_)));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn anyhow_error_converts() {
        let err: CheckError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}

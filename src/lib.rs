//! wp-version-check - Find WordPress installations and check them against the latest release.
//!
//! The tool walks a folder for `wp-includes/version.php` marker files, reads
//! the installed version from each one, fetches the latest version from the
//! WordPress.org version-check API, and prints an OK/NOK line per
//! installation followed by aggregate stats. It never modifies anything.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the check run
//! - [`config`] - Endpoint, marker file and timeout settings
//! - [`error`] - Error types, exit codes and result aliases
//! - [`remote`] - Latest version lookup over HTTP
//! - [`report`] - Comparison, counters and output formats
//! - [`scan`] - Marker file search and installed version extraction
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use wp_version_check::scan::VersionReader;
//!
//! let reader = VersionReader::new("wp_version").unwrap();
//! let version = reader.extract("<?php\n$wp_version = '6.4.2';\n");
//! assert_eq!(version.as_deref(), Some("6.4.2"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod remote;
pub mod report;
pub mod scan;
pub mod ui;

pub use error::{CheckError, Result};

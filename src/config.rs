//! Run configuration.
//!
//! [`CheckConfig`] carries everything that ties the tool to one platform:
//! the version-check endpoint, the marker file location inside an
//! installation, and the variable that holds the version. Swapping these
//! adapts the scanner to other marker-based version-reporting systems.

use std::time::Duration;

use crate::error::{CheckError, Result};

/// Human-readable name of the platform being checked.
pub const DEFAULT_PLATFORM: &str = "WordPress";

/// Public version-check API of WordPress.org (PHP-serialized flavour).
pub const DEFAULT_ENDPOINT: &str = "http://api.wordpress.org/core/version-check/1.6/";

/// Marker file location relative to an installation root.
pub const DEFAULT_MARKER_SUFFIX: &str = "/wp-includes/version.php";

/// Variable assigned the version string inside the marker file.
pub const DEFAULT_VERSION_VARIABLE: &str = "wp_version";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for a single check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Platform name used in output.
    pub platform: String,
    /// URL of the version-check API.
    pub endpoint: String,
    /// Marker file path relative to an installation root.
    pub marker_suffix: String,
    /// Name of the variable holding the version in the marker file.
    pub version_variable: String,
    /// Timeout for the version-check request.
    pub timeout: Duration,
    /// Follow symbolic links while scanning.
    pub follow_links: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            marker_suffix: DEFAULT_MARKER_SUFFIX.to_string(),
            version_variable: DEFAULT_VERSION_VARIABLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            follow_links: false,
        }
    }
}

impl CheckConfig {
    /// Use a different version-check endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a different request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that every setting is usable before the run starts.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(invalid("endpoint must not be empty"));
        }
        if !self.marker_suffix.split('/').any(|s| !s.is_empty()) {
            return Err(invalid("marker suffix must contain at least one path segment"));
        }
        if self.version_variable.trim().is_empty() {
            return Err(invalid("version variable must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(invalid("timeout must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> CheckError {
    CheckError::InvalidConfig {
        message: message.to_string(),
    }
}

//! Latest release lookup.
//!
//! The [`VersionSource`] trait is the seam between the check run and the
//! network; [`HttpVersionSource`] is the production implementation backed by
//! the version-check API.

pub mod http;

pub use http::HttpVersionSource;

use crate::error::Result;

/// A source of the latest published version.
pub trait VersionSource {
    /// Where the version comes from, for log and error messages.
    fn location(&self) -> &str;

    /// Fetch the latest published version.
    ///
    /// Returns a non-empty version string, or a [`Network`] or [`Parse`]
    /// error.
    ///
    /// [`Network`]: crate::error::CheckError::Network
    /// [`Parse`]: crate::error::CheckError::Parse
    fn latest_version(&self) -> Result<String>;
}

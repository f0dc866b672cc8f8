//! Local installation discovery.
//!
//! - [`locator`] - Recursive search for marker files under a root folder
//! - [`reader`] - Extraction of the installed version from a marker file

pub mod locator;
pub mod reader;

pub use locator::{find_marker_files, MarkerPattern};
pub use reader::VersionReader;

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    CheckConfig, DEFAULT_ENDPOINT, DEFAULT_MARKER_SUFFIX, DEFAULT_PLATFORM, DEFAULT_TIMEOUT_SECS,
    DEFAULT_VERSION_VARIABLE,
};
use crate::report::OutputFormat;
use crate::ui::OutputMode;

/// Check WordPress installations under a folder against the latest release.
#[derive(Debug, Parser)]
#[command(name = "wp-version-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to scan for installations
    pub path: Option<PathBuf>,

    /// Version-check API URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Marker file location inside an installation
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_MARKER_SUFFIX)]
    pub marker: String,

    /// Variable holding the version in the marker file
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VERSION_VARIABLE)]
    pub variable: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Exit with a non-zero code when any installation is outdated
    #[arg(long)]
    pub strict: bool,

    /// Only show outdated installations and the stats
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the run configuration from the flags.
    pub fn check_config(&self) -> CheckConfig {
        CheckConfig {
            platform: DEFAULT_PLATFORM.to_string(),
            endpoint: self.endpoint.clone(),
            marker_suffix: self.marker.clone(),
            version_variable: self.variable.clone(),
            timeout: Duration::from_secs(self.timeout),
            follow_links: self.follow_links,
        }
    }

    /// Output verbosity selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

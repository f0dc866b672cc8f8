//! Comparison results.
//!
//! A [`VersionReport`] collects every [`Installation`] found in a scan,
//! compares each installed version with the latest release, and keeps the
//! OK/NOK counters used for the stats line.
//!
//! - [`human`] - Line-oriented terminal output
//! - [`json`] - Machine-readable output

pub mod human;
pub mod json;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::scan::MarkerPattern;
use crate::ui::UserInterface;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `OK : <root> (<version>)` lines followed by a stats line.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// Trait for emitting a finished report.
pub trait ReportFormatter {
    /// Write the report through the given UI.
    fn emit(&self, report: &VersionReport, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Whether an installation runs the latest version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Nok,
}

impl Status {
    /// Compare an installed version with the latest one.
    ///
    /// Exact, case-sensitive string equality; an unknown (empty) installed
    /// version is never OK.
    pub fn compare(installed: &str, latest: &str) -> Self {
        if !installed.is_empty() && installed == latest {
            Self::Ok
        } else {
            Self::Nok
        }
    }

    /// Label used in report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Nok => "NOK",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    marker_file: PathBuf,
    suffix_depth: usize,
    installed_version: String,
}

impl Installation {
    /// Create an installation from its marker file and installed version.
    pub fn new(marker_file: PathBuf, pattern: &MarkerPattern, installed_version: String) -> Self {
        Self {
            marker_file,
            suffix_depth: pattern.depth(),
            installed_version,
        }
    }

    /// Path of the marker file.
    pub fn marker_file(&self) -> &Path {
        &self.marker_file
    }

    /// Installation root: the marker file path with the marker suffix stripped.
    pub fn root(&self) -> &Path {
        self.marker_file
            .ancestors()
            .nth(self.suffix_depth)
            .unwrap_or(self.marker_file.as_path())
    }

    /// Installed version, empty when it could not be read.
    pub fn installed_version(&self) -> &str {
        &self.installed_version
    }
}

/// All installations of one run, compared against the latest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    latest_version: String,
    installations: Vec<Installation>,
    ok_count: usize,
    not_ok_count: usize,
}

impl VersionReport {
    /// Create an empty report for the given latest version.
    pub fn new(latest_version: impl Into<String>) -> Self {
        Self {
            latest_version: latest_version.into(),
            installations: Vec::new(),
            ok_count: 0,
            not_ok_count: 0,
        }
    }

    /// Add an installation and count its status.
    pub fn add(&mut self, installation: Installation) -> Status {
        let status = self.status_of(&installation);
        match status {
            Status::Ok => self.ok_count += 1,
            Status::Nok => self.not_ok_count += 1,
        }
        self.installations.push(installation);
        status
    }

    /// Status of an installation against this report's latest version.
    pub fn status_of(&self, installation: &Installation) -> Status {
        Status::compare(installation.installed_version(), &self.latest_version)
    }

    /// Latest published version.
    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    /// Installations paired with their status.
    pub fn entries(&self) -> impl Iterator<Item = (&Installation, Status)> {
        self.installations
            .iter()
            .map(move |i| (i, self.status_of(i)))
    }

    /// Number of installations on the latest version.
    pub fn ok_count(&self) -> usize {
        self.ok_count
    }

    /// Number of outdated or unreadable installations.
    pub fn not_ok_count(&self) -> usize {
        self.not_ok_count
    }

    /// Number of installations checked.
    pub fn total(&self) -> usize {
        self.installations.len()
    }

    /// Check if no installations were added.
    pub fn is_empty(&self) -> bool {
        self.installations.is_empty()
    }

    /// Check if any installation is not OK.
    pub fn has_outdated(&self) -> bool {
        self.not_ok_count > 0
    }

    /// Percentage of OK installations, rounded down.
    ///
    /// `None` when nothing was checked.
    pub fn health(&self) -> Option<usize> {
        match self.total() {
            0 => None,
            total => Some(self.ok_count * 100 / total),
        }
    }

    /// Report line for one installation: `<STATUS> : <root> (<version>)`.
    pub fn status_line(installation: &Installation, status: Status) -> String {
        format!(
            "{} : {} ({})",
            status,
            installation.root().display(),
            installation.installed_version()
        )
    }

    /// Aggregate stats line.
    pub fn stats_line(&self) -> String {
        let mut line = format!(
            "Stats: checked a total of {} installations. {} are OK.{} are not OK.",
            self.total(),
            self.ok_count,
            self.not_ok_count
        );
        if let Some(health) = self.health() {
            line.push_str(&format!("Health: {}%", health));
        }
        line
    }
}

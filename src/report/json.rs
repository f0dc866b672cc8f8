//! JSON report output.
//!
//! Formats the report as machine-readable JSON for tooling integration.

use serde::Serialize;

use super::{ReportFormatter, Status, VersionReport};
use crate::error::{CheckError, Result};
use crate::ui::UserInterface;

/// Formats the report as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    latest_version: &'a str,
    installations: Vec<JsonInstallation>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonInstallation {
    root: String,
    marker_file: String,
    installed_version: String,
    status: Status,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    ok: usize,
    not_ok: usize,
    health: Option<usize>,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render the report as a pretty-printed JSON document.
    pub fn render(&self, report: &VersionReport) -> serde_json::Result<String> {
        let output = JsonOutput {
            latest_version: report.latest_version(),
            installations: report
                .entries()
                .map(|(installation, status)| JsonInstallation {
                    root: installation.root().display().to_string(),
                    marker_file: installation.marker_file().display().to_string(),
                    installed_version: installation.installed_version().to_string(),
                    status,
                })
                .collect(),
            summary: JsonSummary {
                total: report.total(),
                ok: report.ok_count(),
                not_ok: report.not_ok_count(),
                health: report.health(),
            },
        };

        serde_json::to_string_pretty(&output)
    }
}

impl ReportFormatter for JsonFormatter {
    fn emit(&self, report: &VersionReport, ui: &mut dyn UserInterface) -> Result<()> {
        let json = self.render(report).map_err(encode_error)?;
        ui.message(&json);
        Ok(())
    }
}

fn encode_error(err: serde_json::Error) -> CheckError {
    CheckError::Other(anyhow::Error::new(err).context("cannot encode report as JSON"))
}

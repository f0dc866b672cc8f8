//! Human-readable report output.

use super::{ReportFormatter, Status, VersionReport};
use crate::error::Result;
use crate::ui::UserInterface;

/// Prints one line per installation followed by the stats line.
///
/// OK lines are skipped when the UI runs in quiet mode.
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for HumanFormatter {
    fn emit(&self, report: &VersionReport, ui: &mut dyn UserInterface) -> Result<()> {
        let show_ok = ui.output_mode().shows_passing();

        for (installation, status) in report.entries() {
            let line = VersionReport::status_line(installation, status);
            match status {
                Status::Ok if show_ok => ui.success(&line),
                Status::Ok => {}
                Status::Nok => ui.warning(&line),
            }
        }

        ui.message(&report.stats_line());
        Ok(())
    }
}

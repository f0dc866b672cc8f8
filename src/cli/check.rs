//! Check command implementation.
//!
//! Runs the whole pipeline: fetch the latest version, find marker files,
//! read each installed version, and report. A failed fetch stops the run
//! before the filesystem is touched.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::error::{CheckError, Result, EXIT_OUTDATED};
use crate::remote::{HttpVersionSource, VersionSource};
use crate::report::{
    HumanFormatter, Installation, JsonFormatter, OutputFormat, ReportFormatter, VersionReport,
};
use crate::scan::{find_marker_files, MarkerPattern, VersionReader};
use crate::ui::UserInterface;

use super::args::Cli;
use super::command::{Command, CommandResult};

/// Program name shown in the usage line.
const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// The check command implementation.
pub struct CheckCommand {
    root: Option<PathBuf>,
    config: CheckConfig,
    format: OutputFormat,
    strict: bool,
    source: Box<dyn VersionSource>,
}

impl CheckCommand {
    /// Create a check of `root` against the given version source.
    pub fn new(root: Option<PathBuf>, config: CheckConfig, source: Box<dyn VersionSource>) -> Self {
        Self {
            root,
            config,
            format: OutputFormat::default(),
            strict: false,
            source,
        }
    }

    /// Create the check described by the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = cli.check_config();
        let source = HttpVersionSource::from_config(&config)?;
        Ok(Self::new(cli.path.clone(), config, Box::new(source))
            .with_format(cli.format)
            .strict(cli.strict))
    }

    /// Use a different report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Fail the run when any installation is outdated.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn root(&self) -> Result<&Path> {
        self.root
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| CheckError::Usage {
                program: PROGRAM.to_string(),
            })
    }

    fn fetch_latest(&self, ui: &mut dyn UserInterface) -> Result<String> {
        let mut spinner = ui.start_spinner(&format!(
            "Fetching latest {} version...",
            self.config.platform
        ));
        let latest = self.source.latest_version();
        spinner.finish_and_clear();

        let latest = latest?;
        info!("Latest version from {} is {}", self.source.location(), latest);
        Ok(latest)
    }

    fn formatter(&self) -> Box<dyn ReportFormatter> {
        match self.format {
            OutputFormat::Human => Box::new(HumanFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.root()?;
        self.config.validate()?;
        let pattern = MarkerPattern::new(&self.config.marker_suffix);
        let reader = VersionReader::new(&self.config.version_variable)?;
        let human = self.format == OutputFormat::Human;

        let latest = self.fetch_latest(ui)?;
        if human && ui.output_mode().shows_passing() {
            ui.message(&format!(
                "Latest {} version: {}",
                self.config.platform, latest
            ));
        }

        let files = find_marker_files(root, &pattern, self.config.follow_links)?;
        debug!("Found {} marker files under {}", files.len(), root.display());

        let mut report = VersionReport::new(latest);
        if files.is_empty() {
            if human {
                ui.message(&format!(
                    "Did not find any {} version files in {}",
                    self.config.platform,
                    root.display()
                ));
            } else {
                self.formatter().emit(&report, ui)?;
            }
            return Ok(CommandResult::success());
        }

        for file in files {
            let installed = reader.read_version(&file);
            report.add(Installation::new(file, &pattern, installed));
        }

        self.formatter().emit(&report, ui)?;

        if self.strict && report.has_outdated() {
            return Ok(CommandResult::failure(EXIT_OUTDATED));
        }
        Ok(CommandResult::success())
    }
}

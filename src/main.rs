//! wp-version-check CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wp_version_check::cli::{CheckCommand, Cli, Command};
use wp_version_check::ui::create_ui;
use wp_version_check::CheckError;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("wp_version_check=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wp_version_check=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("wp-version-check starting with args: {:?}", cli);

    let mut ui = create_ui(cli.output_mode(), cli.no_color);

    match CheckCommand::from_cli(&cli).and_then(|cmd| cmd.execute(ui.as_mut())) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e @ CheckError::Usage { .. }) => {
            ui.message(&e.to_string());
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}

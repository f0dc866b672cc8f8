//! Command-line interface.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the check run itself.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The `Command` trait and its result type
//! - [`check`] - The scan, compare and report run

pub mod args;
pub mod check;
pub mod command;

pub use args::Cli;
pub use check::CheckCommand;
pub use command::{Command, CommandResult};

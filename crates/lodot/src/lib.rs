//! # lodot
//!
//! **CLI Binary**
//!
//! Entry point for the `lodot` command-line application. It wires input
//! loading and configuration to the analysis and formatting crates.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load `lodot.toml` and resolve profiles
//! * Dispatch commands to their handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod glossary;
mod input;
mod logging;
mod progress;

use anyhow::Result;
use clap::Parser;
use lodot_config::Cli;

/// Entry point used by the `lodot` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    commands::dispatch(cli)
}

/// Render an error chain followed by actionable hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

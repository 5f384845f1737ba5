//! `flights` - CLI for managing flight records
//!
//! This binary parses the command line, loads configuration, and hands the
//! command to the dispatcher.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;

use flights::cli::{Cli, Command};
use flights::{dispatch, init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Execute the command
    let mut stdout = io::stdout().lock();
    dispatch::run(&cli.command, &config, &mut stdout)
        .with_context(|| format!("{} failed", command_name(&cli.command)))
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Add(_) => "add",
        Command::Display(_) => "display",
        Command::Select(_) => "select",
    }
}

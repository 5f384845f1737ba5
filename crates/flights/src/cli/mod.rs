//! Command-line interface for flights.
//!
//! This module provides the CLI structure for the `flights` binary.

mod commands;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, DisplayCommand, SelectCommand};

/// Single-dash multi-letter flags and the long flags they stand for.
///
/// clap only accepts single-character short flags, so these are rewritten
/// before parsing.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-dd", "--departure_date"),
    ("-at", "--aircraft_type"),
];

/// flights - Manage flight records stored in a JSON or XML file
///
/// The data file is resolved relative to your home directory, and its
/// extension (`.json` or `.xml`) selects the storage format.
#[derive(Debug, Parser)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new flight
    Add(AddCommand),

    /// Display all flights
    Display(DisplayCommand),

    /// Select flights by departure date
    Select(SelectCommand),
}

impl Command {
    /// The data file name the command operates on.
    #[must_use]
    pub fn filename(&self) -> &Path {
        match self {
            Self::Add(cmd) => &cmd.filename,
            Self::Display(cmd) => &cmd.filename,
            Self::Select(cmd) => &cmd.filename,
        }
    }

    /// Check if the command only reads the store.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        !matches!(self, Self::Add(_))
    }
}

impl Cli {
    /// Parse the process arguments, accepting the `-dd` and `-at` flags.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Fallible variant of [`Cli::parse_args`] over explicit arguments.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid or missing arguments.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Rewrite `-dd` / `-at` (and their `=VALUE` forms) to long flags.
///
/// Any other argument, including non-UTF-8 ones, passes through unchanged.
#[must_use]
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (short, long) in LEGACY_FLAGS {
                if text == *short {
                    return OsString::from(*long);
                }
                if let Some(value) = text
                    .strip_prefix(short)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return OsString::from(format!("{long}={value}"));
                }
            }
            arg
        })
        .collect()
}

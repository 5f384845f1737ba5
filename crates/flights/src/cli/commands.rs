//! CLI command definitions.
//!
//! This module defines the arguments of each subcommand.

use std::path::PathBuf;

use clap::Args;

/// Add command arguments.
#[derive(Debug, Clone, Args)]
pub struct AddCommand {
    /// The data file name, relative to the home directory
    pub filename: PathBuf,

    /// Destination of the flight
    #[arg(short = 'd', long = "destination")]
    pub destination: String,

    /// Departure date of the flight (integer, e.g. 20240601)
    #[arg(
        long = "departure_date",
        visible_alias = "departure-date",
        value_name = "DATE",
        allow_negative_numbers = true
    )]
    pub departure_date: i64,

    /// Aircraft type of the flight
    #[arg(long = "aircraft_type", visible_alias = "aircraft-type", value_name = "TYPE")]
    pub aircraft_type: String,
}

/// Display command arguments.
#[derive(Debug, Clone, Args)]
pub struct DisplayCommand {
    /// The data file name, relative to the home directory
    pub filename: PathBuf,
}

/// Select command arguments.
#[derive(Debug, Clone, Args)]
pub struct SelectCommand {
    /// The data file name, relative to the home directory
    pub filename: PathBuf,

    /// Departure date to select flights by
    #[arg(short = 'D', long = "date", allow_negative_numbers = true)]
    pub date: i64,
}

//! `flights` - A command-line record manager for flight entries
//!
//! This library provides the flight store, its JSON and XML file formats,
//! and the command dispatch used by the `flights` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod flight;
pub mod logging;
pub mod storage;
pub mod table;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::Flight;
pub use logging::init_logging;
pub use storage::{FlightStore, SaveOutcome, StorageFormat};

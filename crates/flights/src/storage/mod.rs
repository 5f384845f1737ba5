//! Storage layer for flights.
//!
//! This module provides the in-memory flight store and its file persistence.
//! The whole sequence is read on load and rewritten on every save; there is
//! no locking, so concurrent writers to the same file are last-writer-wins.

pub mod format;
pub mod json;
pub mod xml;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::flight::Flight;

pub use format::StorageFormat;

/// Result of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was written in the given format.
    Written(StorageFormat),
    /// The extension is unsupported and nothing was written.
    Skipped,
}

/// Ordered, in-memory collection of flights bound to a data file.
///
/// The in-memory sequence and the file agree only right after a save.
#[derive(Debug)]
pub struct FlightStore {
    /// Path to the data file.
    path: PathBuf,
    /// Records in insertion order.
    flights: Vec<Flight>,
    /// Fail instead of skipping when the extension is unsupported.
    strict_format: bool,
}

impl FlightStore {
    /// Create an empty store bound to `path`. Nothing is read.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            flights: Vec::new(),
            strict_format: false,
        }
    }

    /// Open the store at `path`, loading it if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>, strict_format: bool) -> Result<Self> {
        let mut store = Self::new(path).with_strict_format(strict_format);
        let path = store.path.clone();
        store.load(&path)?;
        Ok(store)
    }

    /// Reject unsupported extensions with [`Error::UnsupportedFormat`]
    /// instead of silently skipping them.
    #[must_use]
    pub fn with_strict_format(mut self, strict: bool) -> Self {
        self.strict_format = strict;
        self
    }

    /// Get the path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check if the store holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Append a flight to the end of the sequence.
    pub fn add(
        &mut self,
        destination: impl Into<String>,
        departure_date: i64,
        aircraft_type: impl Into<String>,
    ) {
        let flight = Flight::new(destination, departure_date, aircraft_type);
        debug!(
            "Adding flight to {} departing {}",
            flight.destination, flight.departure_date
        );
        self.flights.push(flight);
    }

    /// All flights, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[Flight] {
        &self.flights
    }

    /// Flights departing on `date`, in their original relative order.
    #[must_use]
    pub fn select(&self, date: i64) -> Vec<&Flight> {
        self.flights.iter().filter(|f| f.departs_on(date)).collect()
    }

    /// Replace the in-memory sequence with the contents of `path`.
    ///
    /// A missing file leaves the store empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if strict format checking is on and the extension is unsupported.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.flights.clear();

        if !path.exists() {
            debug!("No data file at {}, starting empty", path.display());
            return Ok(());
        }

        let Some(format) = self.format_for(path)? else {
            return Ok(());
        };

        let bytes = std::fs::read(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.flights = format.decode(&bytes, path)?;

        debug!(
            "Loaded {} flights from {} ({format})",
            self.flights.len(),
            path.display()
        );
        Ok(())
    }

    /// Write the whole sequence to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails, or if strict
    /// format checking is on and the extension is unsupported.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<SaveOutcome> {
        let path = path.as_ref();
        let Some(format) = self.format_for(path)? else {
            return Ok(SaveOutcome::Skipped);
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let bytes = format.encode(&self.flights)?;
        std::fs::write(path, bytes).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "Saved {} flights to {} ({format})",
            self.flights.len(),
            path.display()
        );
        Ok(SaveOutcome::Written(format))
    }

    /// Save to the store's own path.
    ///
    /// # Errors
    ///
    /// See [`FlightStore::save`].
    pub fn persist(&self) -> Result<SaveOutcome> {
        self.save(&self.path)
    }

    /// Resolve the format for `path`, applying the strictness policy when
    /// the extension is unknown.
    fn format_for(&self, path: &Path) -> Result<Option<StorageFormat>> {
        match StorageFormat::from_path(path) {
            Some(format) => Ok(Some(format)),
            None if self.strict_format => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
            None => {
                warn!(
                    "Unsupported file format for {}, data is not persisted",
                    path.display()
                );
                Ok(None)
            }
        }
    }
}

//! The flight record.

use serde::{Deserialize, Serialize};

/// A single flight entry.
///
/// Records carry no identity of their own; their position in the store is
/// the only ordering, and display numbers are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    /// Where the flight is headed.
    pub destination: String,

    /// Departure date as an integer, conventionally `YYYYMMDD` but unvalidated.
    pub departure_date: i64,

    /// Aircraft type, e.g. `A320`.
    pub aircraft_type: String,
}

impl Flight {
    /// Create a new flight record.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        departure_date: i64,
        aircraft_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            departure_date,
            aircraft_type: aircraft_type.into(),
        }
    }

    /// Check if this flight departs on the given date.
    #[must_use]
    pub fn departs_on(&self, date: i64) -> bool {
        self.departure_date == date
    }
}

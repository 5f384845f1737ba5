//! Storage format detection and dispatch.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::flight::Flight;

use super::{json, xml};

/// On-disk layout of a flight data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageFormat {
    /// Pretty-printed JSON array of flight objects.
    Json,
    /// `<flights>` document with one `<flight>` element per record.
    Xml,
}

impl StorageFormat {
    /// Detect the format from a file's extension.
    ///
    /// Only the exact suffixes `.json` and `.xml` are recognized. Anything
    /// else, including a missing extension, yields `None`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("json") => Some(Self::Json),
            Some("xml") => Some(Self::Xml),
            _ => None,
        }
    }

    /// The file extension for this format, without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Serialize the full sequence of flights.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(self, flights: &[Flight]) -> Result<Vec<u8>> {
        match self {
            Self::Json => json::encode(flights),
            Self::Xml => xml::encode(flights),
        }
    }

    /// Parse the contents of a data file. `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed input and a structural error when
    /// a record is missing a field or holds a mistyped value.
    pub fn decode(self, bytes: &[u8], path: &Path) -> Result<Vec<Flight>> {
        match self {
            Self::Json => json::decode(bytes, path),
            Self::Xml => xml::decode(bytes, path),
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Xml => write!(f, "XML"),
        }
    }
}

//! Error types for flights.
//!
//! Every failure carries the file it concerns where one exists, so the
//! diagnostic printed by the binary points at the offending data file.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flights operations.
#[derive(Error, Debug)]
pub enum Error {
    // === File Errors ===
    /// Failed to read a data file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension maps to no known storage format.
    #[error("unsupported file format: {path} (expected a .json or .xml file)")]
    UnsupportedFormat {
        /// Path of the data file.
        path: PathBuf,
    },

    /// The home directory could not be determined.
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    // === Format Errors ===
    /// The data file is not well-formed JSON.
    #[error("malformed JSON in {path}: {source}")]
    JsonParse {
        /// Path of the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The data file is not well-formed XML.
    #[error("malformed XML in {path}: {message}")]
    XmlParse {
        /// Path of the data file.
        path: PathBuf,
        /// Description of the syntax problem.
        message: String,
    },

    /// The data file parsed, but a record is missing a field or holds a value
    /// of the wrong type.
    #[error("invalid flight record in {path}: {message}")]
    Structure {
        /// Path of the data file.
        path: PathBuf,
        /// Description of the structural problem.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization failed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::SeError),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Any other I/O failure, such as writing command output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for flights operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a structural error for the given file.
    #[must_use]
    pub fn structure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Structure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an XML syntax error for the given file.
    #[must_use]
    pub fn xml_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::XmlParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error reports a missing field or mistyped value.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structure { .. })
    }

    /// Check if this error was raised for an unknown file extension.
    #[must_use]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}

//! JSON codec.
//!
//! The file is a top-level array of flight objects, indented with four
//! spaces. `serde_json` writes non-ASCII characters as-is.

use std::path::Path;

use serde::Serialize;
use serde_json::error::Category;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::flight::Flight;

const INDENT: &[u8] = b"    ";

/// Serialize flights as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(flights: &[Flight]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    flights.serialize(&mut serializer)?;
    Ok(buf)
}

/// Parse a JSON array of flights.
///
/// # Errors
///
/// Syntax errors become [`Error::JsonParse`]; well-formed JSON with the wrong
/// shape becomes [`Error::Structure`].
pub fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Flight>> {
    serde_json::from_slice(bytes).map_err(|source| match source.classify() {
        Category::Data => Error::structure(path, source.to_string()),
        _ => Error::JsonParse {
            path: path.to_path_buf(),
            source,
        },
    })
}

//! # Reading and writing of matrices
//!
//! Matrices and vectors are exchanged as JSON. A matrix is written as the row and column mappings
//! of its storage together with the shape and offset of the view:
//!
//! ```json
//! {"rowValues": {"0": {"0": 1}}, "colValues": {"0": {"0": 1}}, "rows": 1, "rowStart": 0, "cols": 1, "colStart": 0}
//! ```
//!
//! A vector is written as `{"mat": <matrix>}`.
//!
//! The mappings of the complete storage are written, also when the matrix is a slice of a larger
//! one. Reading such a record yields a matrix with its own storage that views the same region.
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Write a matrix or vector as a JSON string.
///
/// # Errors
///
/// When the element type fails to serialize, which doesn't happen for the integer types of this
/// crate.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    debug!(bytes = json.len(), "wrote json");

    Ok(json)
}

/// Read a matrix or vector from a JSON string.
///
/// The mappings are taken as they are. They are not checked to mirror each other, nor to lie
/// inside the shape that is read.
///
/// # Errors
///
/// If the input is not valid JSON, or doesn't have the fields of the requested type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    debug!(bytes = json.len(), "reading json");

    serde_json::from_str(json)
}

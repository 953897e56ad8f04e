//! JSON snapshot codec for the persisted contact sequence.
//!
//! # Invariants
//! - A snapshot is a JSON array of contact objects, stored in sequence order.
//! - Any element that fails to decode rejects the whole snapshot.

use crate::model::contact::Contact;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure while reading or writing a snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    Storage(StorageError),
    /// Stored text is not valid JSON or an element is not a contact.
    Malformed(serde_json::Error),
    /// Stored JSON is valid but its top level is not an array.
    NotAnArray { found: &'static str },
    Encode(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed contact snapshot: {err}"),
            Self::NotAnArray { found } => {
                write!(f, "contact snapshot must be an array, found {found}")
            }
            Self::Encode(err) => write!(f, "failed to encode contact snapshot: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed(err) | Self::Encode(err) => Some(err),
            Self::NotAnArray { .. } => None,
        }
    }
}

impl From<StorageError> for SnapshotError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Serializes the full sequence.
pub fn encode_snapshot(contacts: &[Contact]) -> Result<String, SnapshotError> {
    serde_json::to_string(contacts).map_err(SnapshotError::Encode)
}

/// Parses a stored snapshot, rejecting non-array payloads.
pub fn decode_snapshot(raw: &str) -> Result<Vec<Contact>, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(SnapshotError::Malformed)?;
    if !value.is_array() {
        return Err(SnapshotError::NotAnArray {
            found: json_kind(&value),
        });
    }
    serde_json::from_value(value).map_err(SnapshotError::Malformed)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

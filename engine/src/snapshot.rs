//! Snapshot serialization and the default seed quotes.
//!
//! Snapshots are plain ordered lists of quotes, serialized as a JSON array.
//! The same format is used for the persisted quote list, file export, and
//! file import, so a document produced by one host round-trips through all
//! three paths.

use crate::error::{Error, Result};
use crate::{Quote, Snapshot};

/// The snapshot a store falls back to when nothing usable has been persisted.
pub fn default_quotes() -> Snapshot {
    vec![
        Quote::new("Be the change you wish to see in the world.", "inspiration"),
        Quote::new(
            "The only way to do great work is to love what you do.",
            "work",
        ),
    ]
}

/// Serialize a snapshot as a JSON array.
pub fn to_json(quotes: &[Quote]) -> Result<String> {
    serde_json::to_string(quotes).map_err(|e| Error::Decode(e.to_string()))
}

/// Serialize a snapshot as a pretty-printed JSON array, for file export.
pub fn to_json_pretty(quotes: &[Quote]) -> Result<String> {
    serde_json::to_string_pretty(quotes).map_err(|e| Error::Decode(e.to_string()))
}

/// Parse a JSON array into a snapshot.
///
/// Malformed documents are rejected wholesale; callers leave their state
/// untouched on error.
pub fn from_json(json: &str) -> Result<Snapshot> {
    serde_json::from_str(json).map_err(|e| Error::Decode(e.to_string()))
}

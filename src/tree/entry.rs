//! Input model: flat tree listing entries as produced by tree-listing APIs.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};

/// Entry type tag from the listing. Anything that is neither `blob` nor
/// `tree` decodes as `Other` and is dropped by the builder at its final
/// path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    #[serde(other)]
    Other,
}

/// One flat listing record: a slash-delimited path plus its type tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// The decoded `--json` payload: an object with a `tree` array of entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeListing {
    pub tree: Vec<Entry>,
}

/// Decode a raw JSON payload into a tree listing.
///
/// Decoding is two-step so callers can tell malformed JSON apart from a
/// well-formed payload of the wrong shape (no `tree` array of entries).
pub fn decode_listing(json: &str) -> Result<TreeListing, ConvertError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(ConvertError::MalformedJson)?;
    serde_json::from_value(value).map_err(ConvertError::WrongShape)
}

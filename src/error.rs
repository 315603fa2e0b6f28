//! Error types for the tree listing converter.

use thiserror::Error;

/// Conversion errors. Every variant is fatal; the CLI maps them to stderr
/// and exits non-zero without producing partial output.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("json not provided")]
    MissingJson,

    #[error("failed to parse json: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("payload has no usable `tree` field: {0}")]
    WrongShape(#[source] serde_json::Error),

    #[error("path collision: segment {segment:?} of {path:?} is already a file")]
    PathCollision { path: String, segment: String },

    #[error("configuration error: {0}")]
    Config(String),
}

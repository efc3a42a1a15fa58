//! Error types for lexical-resource loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while resolving the resources a computation needs.
///
/// Degenerate input (zero sentences, zero surviving words) is not an error;
/// the aggregator returns a defined sentinel record instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// None of the configured encodings could decode a lexicon or stopword file
    #[error("unable to decode {path} with configured encodings {encodings:?}")]
    ResourceDecode { path: PathBuf, encodings: Vec<String> },

    /// A lexicon file, stopword file, or stopword-folder entry could not be read
    #[error("failed to read resource {path}: {source}")]
    ResourceAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured encoding label names no known encoding
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// Configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed as YAML
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

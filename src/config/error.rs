//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::data::DatasetError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Max sequence length must leave room for at least one token.
    #[error("invalid max sequence length '{value}': must be greater than 0")]
    InvalidMaxSeqLen { value: String },

    /// Max sequence length string could not be parsed as a number.
    #[error("failed to parse max sequence length '{value}': {source}")]
    MaxSeqLenParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid split '{value}': {source}")]
    InvalidSplit {
        value: String,
        #[source]
        source: DatasetError,
    },

    /// The label list resolved to zero entries.
    #[error("label list is empty")]
    EmptyLabels,

    #[error("label '{label}' appears more than once in the label list")]
    DuplicateLabel { label: String },

    /// No tokenizer path was configured.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Resolved tokenizer path exists but is not a regular file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

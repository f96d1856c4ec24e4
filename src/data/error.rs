use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading examples or label vocabularies from disk.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("{path}:{line}: {reason}")]
    InvalidFormat {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("unknown split '{value}': expected one of train, dev, test")]
    UnknownSplit { value: String },

    #[error("duplicate label '{label}' in vocabulary {path}")]
    DuplicateLabel { path: PathBuf, label: String },

    #[error("label vocabulary {path} is empty")]
    EmptyVocabulary { path: PathBuf },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("tokenizer not found at path: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to load tokenizer: {reason}")]
    LoadFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    EncodingFailed { reason: String },

    #[error("max_length {max_length} cannot hold the {special_tokens} special tokens of a pair")]
    MaxLengthTooSmall {
        max_length: usize,
        special_tokens: usize,
    },

    #[error("invalid tokenizer configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

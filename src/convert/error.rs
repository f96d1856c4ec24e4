use thiserror::Error;

use crate::tokenizer::TokenizerError;

/// Errors that abort a conversion call. No partial output is returned with any of them.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The example's label is missing or not in the label vocabulary.
    #[error("invalid label {label:?} for example '{example_id}': not in label vocabulary")]
    InvalidLabel {
        example_id: String,
        label: Option<String>,
    },

    #[error("label vocabulary is empty")]
    EmptyLabelVocabulary,

    #[error("duplicate label '{label}' in label vocabulary")]
    DuplicateLabel { label: String },

    #[error("max_length must be greater than zero")]
    InvalidMaxLength,

    /// The tokenizer failed; its error is kept unchanged as the source.
    #[error("tokenizer failed on example '{example_id}', choice {choice}: {source}")]
    Tokenizer {
        example_id: String,
        choice: usize,
        #[source]
        source: TokenizerError,
    },

    /// The encoder advertised a field in its capabilities but did not return it.
    #[error("encoder did not return {field} for example '{example_id}', choice {choice}")]
    MissingEncoderField {
        example_id: String,
        choice: usize,
        field: &'static str,
    },

    /// The encoder returned a sequence whose length differs from `max_length`.
    #[error(
        "encoder returned {actual} tokens for example '{example_id}', choice {choice}; expected {expected}"
    )]
    SequenceLength {
        example_id: String,
        choice: usize,
        expected: usize,
        actual: usize,
    },
}

pub type ConversionResult<T> = Result<T, ConversionError>;

use thiserror::Error;

use crate::select::FeatureField;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot build a batch from zero feature records")]
    Empty,

    #[error("example '{example_id}' has {actual} choices, batch expects {expected}")]
    RaggedChoices {
        example_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("example '{example_id}' has a {field} row of length {actual}, batch expects {expected}")]
    RaggedSequence {
        example_id: String,
        field: FeatureField,
        expected: usize,
        actual: usize,
    },

    #[error("{field} is present on some records and absent on others")]
    MixedPresence { field: FeatureField },

    #[error("label {label} of example '{example_id}' does not fit in a u32 tensor")]
    LabelOutOfRange { example_id: String, label: usize },

    #[error("tensor construction failed: {0}")]
    Tensor(#[from] candle_core::Error),
}

pub type BatchResult<T> = Result<T, BatchError>;

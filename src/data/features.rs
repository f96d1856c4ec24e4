use serde::{Deserialize, Serialize};

/// Tokenized, fixed-length representation of one example.
///
/// Each matrix has one row per processed choice and `max_length` columns. Field names match
/// the model input names so downstream code can project them by name
/// (see [`select_field`](crate::select::select_field)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputFeatures {
    example_id: String,
    input_ids: Vec<Vec<u32>>,
    attention_mask: Option<Vec<Vec<u32>>>,
    token_type_ids: Option<Vec<Vec<u32>>>,
    label: Option<usize>,
}

impl InputFeatures {
    pub fn new(
        example_id: impl Into<String>,
        input_ids: Vec<Vec<u32>>,
        attention_mask: Option<Vec<Vec<u32>>>,
        token_type_ids: Option<Vec<Vec<u32>>>,
        label: Option<usize>,
    ) -> Self {
        Self {
            example_id: example_id.into(),
            input_ids,
            attention_mask,
            token_type_ids,
            label,
        }
    }

    pub fn example_id(&self) -> &str {
        &self.example_id
    }

    pub fn input_ids(&self) -> &[Vec<u32>] {
        &self.input_ids
    }

    pub fn attention_mask(&self) -> Option<&[Vec<u32>]> {
        self.attention_mask.as_deref()
    }

    pub fn token_type_ids(&self) -> Option<&[Vec<u32>]> {
        self.token_type_ids.as_deref()
    }

    pub fn label(&self) -> Option<usize> {
        self.label
    }

    /// Number of choices (rows) in this record.
    pub fn num_choices(&self) -> usize {
        self.input_ids.len()
    }

    /// Sequence length of the first choice, or `None` for a record with no choices.
    pub fn seq_len(&self) -> Option<usize> {
        self.input_ids.first().map(Vec::len)
    }
}

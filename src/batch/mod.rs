//! Tensor batches for the training loop.
//!
//! Stacks feature records into `[batch, choices, seq_len]` tensors, one per projected field.
//! All records in a batch must agree on choice count, sequence length, and which optional
//! fields are present.

/// Compute device selection (CPU / Metal / CUDA).
pub mod device;
mod error;


pub use device::select_device;
pub use error::{BatchError, BatchResult};

use candle_core::{Device, Tensor};
use tracing::debug;

use crate::data::InputFeatures;
use crate::select::{FeatureField, FieldValue};

/// Column-oriented tensors for one batch of feature records.
#[derive(Debug, Clone)]
pub struct FeatureBatch {
    /// `[batch, choices, seq_len]`, `u32`.
    pub input_ids: Tensor,
    /// Same shape as `input_ids` when the records carry attention masks.
    pub attention_mask: Option<Tensor>,
    /// Same shape as `input_ids` when the records carry token type ids.
    pub token_type_ids: Option<Tensor>,
    /// `[batch]`, `u32`, when every record has a label.
    pub labels: Option<Tensor>,
    /// Example ids, in batch order.
    pub example_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
struct BatchShape {
    batch: usize,
    choices: usize,
    seq_len: usize,
}

impl FeatureBatch {
    pub fn from_features(features: &[InputFeatures], device: &Device) -> BatchResult<Self> {
        let first = features.first().ok_or(BatchError::Empty)?;
        let shape = BatchShape {
            batch: features.len(),
            choices: first.num_choices(),
            seq_len: first.seq_len().unwrap_or(0),
        };

        let input_ids = stack_matrix(features, FeatureField::InputIds, shape, device)?
            .ok_or(BatchError::MixedPresence {
                field: FeatureField::InputIds,
            })?;
        let attention_mask = stack_matrix(features, FeatureField::AttentionMask, shape, device)?;
        let token_type_ids = stack_matrix(features, FeatureField::TokenTypeIds, shape, device)?;
        let labels = stack_labels(features, device)?;

        let example_ids = FeatureField::ExampleId
            .project(features)
            .iter()
            .filter_map(FieldValue::as_example_id)
            .map(str::to_string)
            .collect();

        debug!(
            batch = shape.batch,
            choices = shape.choices,
            seq_len = shape.seq_len,
            has_attention_mask = attention_mask.is_some(),
            has_token_type_ids = token_type_ids.is_some(),
            has_labels = labels.is_some(),
            "Built feature batch"
        );

        Ok(Self {
            input_ids,
            attention_mask,
            token_type_ids,
            labels,
            example_ids,
        })
    }

    /// Splits `features` into consecutive batches of at most `batch_size` records.
    pub fn batches<'a>(
        features: &'a [InputFeatures],
        batch_size: usize,
        device: &'a Device,
    ) -> impl Iterator<Item = BatchResult<FeatureBatch>> + 'a {
        features
            .chunks(batch_size.max(1))
            .map(move |chunk| Self::from_features(chunk, device))
    }

    pub fn batch_size(&self) -> usize {
        self.example_ids.len()
    }

    pub fn num_choices(&self) -> usize {
        self.input_ids.dims().get(1).copied().unwrap_or(0)
    }

    pub fn seq_len(&self) -> usize {
        self.input_ids.dims().get(2).copied().unwrap_or(0)
    }
}

/// Flattens one matrix field into a `[batch, choices, seq_len]` tensor.
///
/// Returns `Ok(None)` when no record carries the field.
fn stack_matrix(
    features: &[InputFeatures],
    field: FeatureField,
    shape: BatchShape,
    device: &Device,
) -> BatchResult<Option<Tensor>> {
    let values = field.project(features);
    let present = values.iter().filter(|v| v.as_matrix().is_some()).count();
    if present == 0 {
        return Ok(None);
    }
    if present != values.len() {
        return Err(BatchError::MixedPresence { field });
    }

    let mut flat = Vec::with_capacity(shape.batch * shape.choices * shape.seq_len);
    for (feature, value) in features.iter().zip(&values) {
        let rows = value.as_matrix().unwrap_or_default();
        if rows.len() != shape.choices {
            return Err(BatchError::RaggedChoices {
                example_id: feature.example_id().to_string(),
                expected: shape.choices,
                actual: rows.len(),
            });
        }
        for row in rows {
            if row.len() != shape.seq_len {
                return Err(BatchError::RaggedSequence {
                    example_id: feature.example_id().to_string(),
                    field,
                    expected: shape.seq_len,
                    actual: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
    }

    let tensor = Tensor::from_vec(flat, (shape.batch, shape.choices, shape.seq_len), device)?;
    Ok(Some(tensor))
}

/// Builds the `[batch]` label tensor. Returns `Ok(None)` when no record is labeled.
fn stack_labels(features: &[InputFeatures], device: &Device) -> BatchResult<Option<Tensor>> {
    let labels: Vec<Option<usize>> = FeatureField::Label
        .project(features)
        .iter()
        .map(FieldValue::as_label)
        .collect();

    let present = labels.iter().filter(|l| l.is_some()).count();
    if present == 0 {
        return Ok(None);
    }
    if present != labels.len() {
        return Err(BatchError::MixedPresence {
            field: FeatureField::Label,
        });
    }

    let mut values = Vec::with_capacity(labels.len());
    for (feature, label) in features.iter().zip(labels.into_iter().flatten()) {
        let value = u32::try_from(label).map_err(|_| BatchError::LabelOutOfRange {
            example_id: feature.example_id().to_string(),
            label,
        })?;
        values.push(value);
    }

    let len = values.len();
    Ok(Some(Tensor::from_vec(values, len, device)?))
}

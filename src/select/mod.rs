//! Column projection over feature records.
//!
//! Downstream batching code asks for one field across many records ("every `input_ids`").
//! Field names are resolved through [`FeatureField`], an explicit name → accessor table,
//! so an unknown name fails at call time instead of silently yielding nothing.


use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::data::InputFeatures;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("unknown feature field '{name}': expected one of {}", FeatureField::NAMES.join(", "))]
    UnknownField { name: String },
}

/// A named attribute of [`InputFeatures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
    ExampleId,
    InputIds,
    AttentionMask,
    TokenTypeIds,
    Label,
}

impl FeatureField {
    pub const ALL: [FeatureField; 5] = [
        FeatureField::ExampleId,
        FeatureField::InputIds,
        FeatureField::AttentionMask,
        FeatureField::TokenTypeIds,
        FeatureField::Label,
    ];

    pub const NAMES: [&'static str; 5] = [
        "example_id",
        "input_ids",
        "attention_mask",
        "token_type_ids",
        "label",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FeatureField::ExampleId => "example_id",
            FeatureField::InputIds => "input_ids",
            FeatureField::AttentionMask => "attention_mask",
            FeatureField::TokenTypeIds => "token_type_ids",
            FeatureField::Label => "label",
        }
    }

    /// Reads this field from one record.
    pub fn get<'a>(&self, feature: &'a InputFeatures) -> FieldValue<'a> {
        match self {
            FeatureField::ExampleId => FieldValue::ExampleId(feature.example_id()),
            FeatureField::InputIds => FieldValue::TokenMatrix(Some(feature.input_ids())),
            FeatureField::AttentionMask => FieldValue::TokenMatrix(feature.attention_mask()),
            FeatureField::TokenTypeIds => FieldValue::TokenMatrix(feature.token_type_ids()),
            FeatureField::Label => FieldValue::Label(feature.label()),
        }
    }

    /// Reads this field from every record, preserving order.
    pub fn project<'a>(&self, features: &'a [InputFeatures]) -> Vec<FieldValue<'a>> {
        features.iter().map(|f| self.get(f)).collect()
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureField {
    type Err = SelectError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FeatureField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| SelectError::UnknownField {
                name: name.to_string(),
            })
    }
}

/// Value of one field of one record, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    ExampleId(&'a str),
    /// Per-choice rows; `None` when the optional field is absent.
    TokenMatrix(Option<&'a [Vec<u32>]>),
    Label(Option<usize>),
}

impl<'a> FieldValue<'a> {
    pub fn as_example_id(&self) -> Option<&'a str> {
        match self {
            FieldValue::ExampleId(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&'a [Vec<u32>]> {
        match self {
            FieldValue::TokenMatrix(matrix) => *matrix,
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<usize> {
        match self {
            FieldValue::Label(label) => *label,
            _ => None,
        }
    }
}

/// Projects the field called `field` across `features`, same length and order.
///
/// Fails with [`SelectError::UnknownField`] when `field` is not an [`InputFeatures`]
/// attribute name.
pub fn select_field<'a>(
    features: &'a [InputFeatures],
    field: &str,
) -> Result<Vec<FieldValue<'a>>, SelectError> {
    let field: FeatureField = field.parse()?;
    Ok(field.project(features))
}

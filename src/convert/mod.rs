//! Example-to-feature conversion.
//!
//! For every example and every `(context, ending)` choice the engine builds a text pair
//! (see [`PairingMode`]), encodes it to exactly `max_length` tokens through a
//! [`PairEncoder`], and stacks the per-choice arrays into one [`InputFeatures`] record.
//!
//! # Choice alignment
//!
//! `contexts` and `endings` are zipped, so when their lengths differ only the shorter prefix
//! is converted. Whether a mismatch should instead be a hard error is unresolved; the engine
//! keeps the permissive behavior and reports each occurrence through
//! [`ConversionObserver::on_choice_mismatch`]. Callers that need strictness can check
//! [`InputExample::has_mismatched_choices`] before converting.

mod error;
/// Conversion progress and diagnostics.
pub mod observer;
/// Question/ending text-pair construction.
pub mod pairing;


pub use error::{ConversionError, ConversionResult};
pub use observer::{ConversionObserver, SilentObserver, TracingObserver};
pub use pairing::{PairingMode, build_second_segment};

use std::collections::HashMap;

use tracing::debug;

use crate::constants::{PROGRESS_INTERVAL, SAMPLE_DUMP_COUNT};
use crate::data::{InputExample, InputFeatures};
use crate::tokenizer::{EncoderCapabilities, PairEncoder, PairEncoding};

/// Maps label identifiers to their zero-based position in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelIndex {
    positions: HashMap<String, usize>,
}

impl LabelIndex {
    /// Builds the index, rejecting an empty vocabulary or a repeated identifier.
    pub fn new<S: AsRef<str>>(label_list: &[S]) -> ConversionResult<Self> {
        if label_list.is_empty() {
            return Err(ConversionError::EmptyLabelVocabulary);
        }

        let mut positions = HashMap::with_capacity(label_list.len());
        for (position, label) in label_list.iter().enumerate() {
            let label = label.as_ref();
            if positions.insert(label.to_string(), position).is_some() {
                return Err(ConversionError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
        }

        Ok(Self { positions })
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn resolve(&self, example: &InputExample) -> ConversionResult<usize> {
        example
            .label()
            .and_then(|label| self.get(label))
            .ok_or_else(|| ConversionError::InvalidLabel {
                example_id: example.example_id().to_string(),
                label: example.label().map(str::to_string),
            })
    }
}

/// Reusable converter bound to one label vocabulary, target length, and encoder.
///
/// Holds no per-example state, so it can convert a large corpus in bounded slices.
pub struct FeatureConverter<'a, E: PairEncoder + ?Sized> {
    encoder: &'a E,
    labels: LabelIndex,
    max_length: usize,
    capabilities: EncoderCapabilities,
}

impl<'a, E: PairEncoder + ?Sized> FeatureConverter<'a, E> {
    pub fn new<S: AsRef<str>>(
        label_list: &[S],
        max_length: usize,
        encoder: &'a E,
    ) -> ConversionResult<Self> {
        if max_length == 0 {
            return Err(ConversionError::InvalidMaxLength);
        }

        Ok(Self {
            encoder,
            labels: LabelIndex::new(label_list)?,
            max_length,
            capabilities: encoder.capabilities(),
        })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    pub fn capabilities(&self) -> EncoderCapabilities {
        self.capabilities
    }

    /// Converts `examples` in order. The first error aborts the call.
    pub fn convert<O: ConversionObserver + ?Sized>(
        &self,
        examples: &[InputExample],
        observer: &mut O,
    ) -> ConversionResult<Vec<InputFeatures>> {
        let total = examples.len();
        let mut features = Vec::with_capacity(total);

        for (index, example) in examples.iter().enumerate() {
            if index % PROGRESS_INTERVAL == 0 {
                observer.on_progress(index, total);
            }
            features.push(self.convert_example(example, observer)?);
        }

        for feature in features.iter().take(SAMPLE_DUMP_COUNT) {
            observer.on_sample(feature);
        }

        debug!(
            count = features.len(),
            max_length = self.max_length,
            "Converted examples to features"
        );

        Ok(features)
    }

    /// Converts a single example.
    pub fn convert_example<O: ConversionObserver + ?Sized>(
        &self,
        example: &InputExample,
        observer: &mut O,
    ) -> ConversionResult<InputFeatures> {
        if example.has_mismatched_choices() {
            observer.on_choice_mismatch(example);
        }

        let mode = PairingMode::for_question(example.question());
        let mut encodings = Vec::with_capacity(example.choice_count());

        for (choice, (context, ending)) in example.choices().enumerate() {
            let segment = mode.build(example.question(), ending);
            let encoding = self
                .encoder
                .encode_pair(context, &segment, self.max_length)
                .map_err(|source| ConversionError::Tokenizer {
                    example_id: example.example_id().to_string(),
                    choice,
                    source,
                })?;

            if encoding.was_truncated() {
                observer.on_truncation(example.example_id(), choice, encoding.num_truncated_tokens);
            }

            encodings.push(encoding);
        }

        let label = self.labels.resolve(example)?;
        self.assemble(example.example_id(), encodings, label)
    }

    fn assemble(
        &self,
        example_id: &str,
        encodings: Vec<PairEncoding>,
        label: usize,
    ) -> ConversionResult<InputFeatures> {
        let mut input_ids = Vec::with_capacity(encodings.len());
        let mut attention_mask = self
            .capabilities
            .attention_mask
            .then(|| Vec::with_capacity(encodings.len()));
        let mut token_type_ids = self
            .capabilities
            .token_type_ids
            .then(|| Vec::with_capacity(encodings.len()));

        for (choice, encoding) in encodings.into_iter().enumerate() {
            self.check_length(example_id, choice, encoding.input_ids.len())?;
            input_ids.push(encoding.input_ids);

            if let Some(rows) = attention_mask.as_mut() {
                let row = self.require(example_id, choice, "attention_mask", encoding.attention_mask)?;
                rows.push(row);
            }
            if let Some(rows) = token_type_ids.as_mut() {
                let row = self.require(example_id, choice, "token_type_ids", encoding.token_type_ids)?;
                rows.push(row);
            }
        }

        Ok(InputFeatures::new(
            example_id,
            input_ids,
            attention_mask,
            token_type_ids,
            Some(label),
        ))
    }

    fn require(
        &self,
        example_id: &str,
        choice: usize,
        field: &'static str,
        row: Option<Vec<u32>>,
    ) -> ConversionResult<Vec<u32>> {
        let row = row.ok_or_else(|| ConversionError::MissingEncoderField {
            example_id: example_id.to_string(),
            choice,
            field,
        })?;
        self.check_length(example_id, choice, row.len())?;
        Ok(row)
    }

    fn check_length(&self, example_id: &str, choice: usize, actual: usize) -> ConversionResult<()> {
        if actual != self.max_length {
            return Err(ConversionError::SequenceLength {
                example_id: example_id.to_string(),
                choice,
                expected: self.max_length,
                actual,
            });
        }
        Ok(())
    }
}

/// Converts `examples` into one [`InputFeatures`] record each, in input order.
///
/// Builds the label index, then for every choice encodes `(context, segment)` to exactly
/// `max_length` tokens. Attention masks and token type ids are included only when the
/// encoder's [`capabilities`](PairEncoder::capabilities) report them. Truncation is an
/// observation, not an error; an unknown label or a tokenizer failure aborts the call.
pub fn convert_examples_to_features<S, E, O>(
    examples: &[InputExample],
    label_list: &[S],
    max_length: usize,
    encoder: &E,
    observer: &mut O,
) -> ConversionResult<Vec<InputFeatures>>
where
    S: AsRef<str>,
    E: PairEncoder + ?Sized,
    O: ConversionObserver + ?Sized,
{
    FeatureConverter::new(label_list, max_length, encoder)?.convert(examples, observer)
}

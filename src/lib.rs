//! Multiple-choice question answering feature preparation (used by the converter binary and
//! integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`InputExample`], [`InputFeatures`], [`Split`] - Data model
//! - [`convert_examples_to_features`], [`FeatureConverter`] - Conversion engine
//! - [`select_field`], [`FeatureField`] - Column projection over feature records
//!
//! ## Tokenization
//! - [`PairEncoder`], [`HfPairEncoder`] - Fixed-length text-pair encoding
//!
//! ## Ingestion & Batching
//! - [`JsonlExampleSource`], [`read_label_vocabulary`] - Split files on disk
//! - [`FeatureBatch`], [`select_device`] - Candle tensors for the training loop
//!
//! ## Utilities
//! - [`Config`], [`ConfigError`] - Environment configuration
//! - [`fingerprint_features`], [`fingerprint_hex`] - Reproducibility checks
//!
//! ## Test/Mock Support
//! `StubPairEncoder` is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod batch;
pub mod config;
pub mod constants;
pub mod convert;
pub mod data;
pub mod hashing;
pub mod select;
pub mod tokenizer;

pub use batch::{BatchError, BatchResult, FeatureBatch, select_device};
pub use config::{Config, ConfigError};
pub use convert::{
    ConversionError, ConversionObserver, ConversionResult, FeatureConverter, LabelIndex,
    PairingMode, SilentObserver, TracingObserver, build_second_segment,
    convert_examples_to_features,
};
pub use data::{
    DatasetError, DatasetResult, ExampleSource, InputExample, InputFeatures, JsonlExampleSource,
    Split, read_label_vocabulary,
};
pub use hashing::{fingerprint_features, fingerprint_hex, hash_to_u64};
pub use select::{FeatureField, FieldValue, SelectError, select_field};
#[cfg(any(test, feature = "mock"))]
pub use tokenizer::StubPairEncoder;
pub use tokenizer::{
    EncoderCapabilities, HfPairEncoder, PairEncoder, PairEncoding, TokenizerError,
    TokenizerResult, longest_first_lengths,
};

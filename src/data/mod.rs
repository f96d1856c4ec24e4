//! Data model and ingestion.
//!
//! - [`InputExample`] is the raw record handed to the conversion engine.
//! - [`InputFeatures`] is the tokenized record it produces.
//! - [`Split`] tags which partition a set of examples came from.
//! - [`JsonlExampleSource`] is a thin reader for `<split>.jsonl` files.

mod error;
/// Raw example record.
pub mod example;
/// Tokenized feature record.
pub mod features;
/// JSONL ingestion.
pub mod loader;
/// Dataset partition tag.
pub mod split;


pub use error::{DatasetError, DatasetResult};
pub use example::InputExample;
pub use features::InputFeatures;
pub use loader::{ExampleSource, JsonlExampleSource, read_label_vocabulary};
pub use split::Split;

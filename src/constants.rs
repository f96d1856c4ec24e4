//! Cross-cutting, shared constants.
//!
//! The conversion engine, tokenizer binding, and configuration all read their defaults from
//! here so a change to, say, the progress cadence only happens in one place.

/// Marker character that turns a question into a cloze question.
///
/// Every occurrence is replaced by the candidate ending instead of appending it.
pub const CLOZE_MARKER: char = '_';

/// Separator placed between the question and the ending in append mode.
pub const APPEND_SEPARATOR: &str = " ";

/// Default per-choice sequence length when `MCQA_MAX_SEQ_LEN` is unset.
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;

/// A progress observation is emitted every this many examples (starting at index 0).
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Number of leading feature records reported as samples after a conversion.
pub const SAMPLE_DUMP_COUNT: usize = 2;

/// Default label vocabulary (four-way multiple choice, labels `"0"`..`"3"`).
pub const DEFAULT_LABELS: [&str; 4] = ["0", "1", "2", "3"];

/// Pad token used when the tokenizer does not define one.
pub const DEFAULT_PAD_TOKEN: &str = "[PAD]";

/// File name looked up inside a model directory.
pub const TOKENIZER_FILE_NAME: &str = "tokenizer.json";

/// Extension of per-split example files (`train.jsonl`, `dev.jsonl`, `test.jsonl`).
pub const EXAMPLE_FILE_EXTENSION: &str = "jsonl";

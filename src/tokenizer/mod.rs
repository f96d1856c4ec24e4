//! Text-pair encoding capability consumed by the conversion engine.
//!
//! - [`PairEncoder`] is the seam: anything that can turn `(first, second)` into a fixed-length
//!   encoding.
//! - [`HfPairEncoder`] binds it to a HuggingFace `tokenizer.json`.
//! - `StubPairEncoder` (tests / `mock` feature) is a deterministic whitespace encoder.

mod error;
/// HuggingFace `tokenizers` binding.
pub mod hf;
#[cfg(any(test, feature = "mock"))]
pub mod stub;
/// Tokenizer file loading helpers.
pub mod utils;


pub use error::{TokenizerError, TokenizerResult};
pub use hf::HfPairEncoder;
#[cfg(any(test, feature = "mock"))]
pub use stub::StubPairEncoder;

/// Which optional per-token fields an encoder produces.
///
/// The conversion engine reads this once per call and only assembles the fields that are
/// flagged, so every record from one call has the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderCapabilities {
    pub attention_mask: bool,
    pub token_type_ids: bool,
}

impl Default for EncoderCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl EncoderCapabilities {
    /// Attention mask and token type ids (BERT-style models).
    pub const fn all() -> Self {
        Self {
            attention_mask: true,
            token_type_ids: true,
        }
    }

    /// Attention mask only (RoBERTa-style models have no segment embeddings).
    pub const fn attention_mask_only() -> Self {
        Self {
            attention_mask: true,
            token_type_ids: false,
        }
    }

    /// Token ids only.
    pub const fn ids_only() -> Self {
        Self {
            attention_mask: false,
            token_type_ids: false,
        }
    }
}

/// Result of encoding one text pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairEncoding {
    /// Exactly `max_length` token ids (special tokens included, right padded).
    pub input_ids: Vec<u32>,
    /// `1` for real tokens, `0` for padding. Present when the encoder reports it.
    pub attention_mask: Option<Vec<u32>>,
    /// Segment id per token. Present when the encoder reports it.
    pub token_type_ids: Option<Vec<u32>>,
    /// Tokens removed from the pair to fit `max_length`.
    pub num_truncated_tokens: usize,
}

impl PairEncoding {
    pub fn was_truncated(&self) -> bool {
        self.num_truncated_tokens > 0
    }
}

/// Encodes a text pair with special tokens, truncated and padded to an exact length.
pub trait PairEncoder {
    /// Optional fields this encoder fills in.
    fn capabilities(&self) -> EncoderCapabilities;

    /// Encodes `(first, second)` into exactly `max_length` tokens.
    fn encode_pair(
        &self,
        first: &str,
        second: &str,
        max_length: usize,
    ) -> TokenizerResult<PairEncoding>;
}

/// Splits `budget` tokens between two segments by trimming the longer one first.
///
/// Returns the kept lengths `(first, second)`, using the same split as the `LongestFirst`
/// strategy in `tokenizers`: only the longer side shrinks while the shorter one fits in
/// half the budget, otherwise both get half (the longer side takes the odd token).
pub fn longest_first_lengths(first: usize, second: usize, budget: usize) -> (usize, usize) {
    if first + second <= budget {
        return (first, second);
    }

    let swap = first > second;
    let (mut short, mut long) = if swap {
        (second, first)
    } else {
        (first, second)
    };

    long = if short > budget {
        short
    } else {
        short.max(budget - short)
    };
    if short + long > budget {
        short = budget / 2;
        long = short + budget % 2;
    }

    if swap { (long, short) } else { (short, long) }
}

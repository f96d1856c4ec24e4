use tracing::debug;

use super::error::{TokenizerError, TokenizerResult};
use super::{EncoderCapabilities, PairEncoder, PairEncoding, longest_first_lengths};
use crate::hashing::hash_to_u64;

/// Deterministic whitespace encoder with a BERT-style `[CLS] a [SEP] b [SEP]` layout.
///
/// Word ids are hashed into `[FIRST_WORD_ID, FIRST_WORD_ID + vocab_size)`, so the same word
/// always maps to the same id and no model files are needed.
#[derive(Debug, Clone)]
pub struct StubPairEncoder {
    capabilities: EncoderCapabilities,
    vocab_size: u64,
}

impl Default for StubPairEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StubPairEncoder {
    pub const PAD_ID: u32 = 0;
    pub const CLS_ID: u32 = 101;
    pub const SEP_ID: u32 = 102;
    pub const FIRST_WORD_ID: u32 = 1000;
    /// `[CLS]`, `[SEP]`, `[SEP]`.
    pub const SPECIAL_TOKENS: usize = 3;

    pub fn new() -> Self {
        Self {
            capabilities: EncoderCapabilities::all(),
            vocab_size: 30_000,
        }
    }

    pub fn with_capabilities(mut self, capabilities: EncoderCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Id the stub assigns to a single whitespace-delimited word.
    pub fn word_id(&self, word: &str) -> u32 {
        Self::FIRST_WORD_ID + (hash_to_u64(word.as_bytes()) % self.vocab_size) as u32
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}

impl PairEncoder for StubPairEncoder {
    fn capabilities(&self) -> EncoderCapabilities {
        self.capabilities
    }

    fn encode_pair(
        &self,
        first: &str,
        second: &str,
        max_length: usize,
    ) -> TokenizerResult<PairEncoding> {
        if max_length < Self::SPECIAL_TOKENS {
            return Err(TokenizerError::MaxLengthTooSmall {
                max_length,
                special_tokens: Self::SPECIAL_TOKENS,
            });
        }

        let first = self.words(first);
        let second = self.words(second);
        let budget = max_length - Self::SPECIAL_TOKENS;
        let num_truncated_tokens = (first.len() + second.len()).saturating_sub(budget);
        let (keep_first, keep_second) = longest_first_lengths(first.len(), second.len(), budget);

        let mut input_ids = Vec::with_capacity(max_length);
        let mut token_type_ids = Vec::with_capacity(max_length);

        input_ids.push(Self::CLS_ID);
        input_ids.extend(first[..keep_first].iter().map(|w| self.word_id(w)));
        input_ids.push(Self::SEP_ID);
        token_type_ids.resize(input_ids.len(), 0);

        input_ids.extend(second[..keep_second].iter().map(|w| self.word_id(w)));
        input_ids.push(Self::SEP_ID);
        token_type_ids.resize(input_ids.len(), 1);

        let real_tokens = input_ids.len();
        let mut attention_mask = vec![1; real_tokens];

        input_ids.resize(max_length, Self::PAD_ID);
        token_type_ids.resize(max_length, 0);
        attention_mask.resize(max_length, 0);

        debug!(real_tokens, num_truncated_tokens, max_length, "Encoded text pair (stub)");

        Ok(PairEncoding {
            input_ids,
            attention_mask: self.capabilities.attention_mask.then_some(attention_mask),
            token_type_ids: self.capabilities.token_type_ids.then_some(token_type_ids),
            num_truncated_tokens,
        })
    }
}

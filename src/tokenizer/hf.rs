use std::path::Path;

use tokenizers::tokenizer::{
    Encoding, PaddingDirection, PaddingParams, PaddingStrategy, PostProcessor, Tokenizer,
    TruncationDirection, TruncationParams, TruncationStrategy, pad_encodings, truncate_encodings,
};
use tracing::{debug, info};

use super::error::{TokenizerError, TokenizerResult};
use super::utils::{load_tokenizer, resolve_tokenizer_path};
use super::{EncoderCapabilities, PairEncoder, PairEncoding};
use crate::constants::DEFAULT_PAD_TOKEN;

/// [`PairEncoder`] backed by a HuggingFace `tokenizer.json`.
///
/// The tokenizer's own truncation and padding settings are cleared on construction; each call
/// truncates (longest first) and right-pads to the `max_length` it is given.
pub struct HfPairEncoder {
    tokenizer: Tokenizer,
    capabilities: EncoderCapabilities,
    pad_id: u32,
    pad_type_id: u32,
    pad_token: String,
}

impl std::fmt::Debug for HfPairEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfPairEncoder")
            .field("vocab_size", &self.tokenizer.get_vocab_size(true))
            .field("capabilities", &self.capabilities)
            .field("pad_token", &self.pad_token)
            .field("pad_id", &self.pad_id)
            .finish()
    }
}

impl HfPairEncoder {
    /// Loads `tokenizer.json` from a file path or a model directory.
    pub fn load(path: &Path) -> TokenizerResult<Self> {
        let resolved = resolve_tokenizer_path(path);
        if !resolved.exists() {
            return Err(TokenizerError::NotFound { path: resolved });
        }

        let tokenizer = load_tokenizer(path).map_err(|e| TokenizerError::LoadFailed {
            reason: format!("Failed to load tokenizer from {}: {}", resolved.display(), e),
        })?;

        let encoder = Self::from_tokenizer(tokenizer)?;

        info!(
            path = %resolved.display(),
            vocab_size = encoder.tokenizer.get_vocab_size(true),
            pad_token = %encoder.pad_token,
            "Tokenizer loaded"
        );

        Ok(encoder)
    }

    /// Wraps an already constructed tokenizer.
    ///
    /// Pad settings are taken from the tokenizer's padding config when present, otherwise
    /// from the `[PAD]` token in its vocabulary, otherwise id `0`. The tokenizer's own
    /// truncation and padding are then disabled.
    pub fn from_tokenizer(mut tokenizer: Tokenizer) -> TokenizerResult<Self> {
        let (pad_id, pad_type_id, pad_token) = match tokenizer.get_padding() {
            Some(params) => (params.pad_id, params.pad_type_id, params.pad_token.clone()),
            None => (
                tokenizer.token_to_id(DEFAULT_PAD_TOKEN).unwrap_or(0),
                0,
                DEFAULT_PAD_TOKEN.to_string(),
            ),
        };

        tokenizer.with_padding(None);
        tokenizer
            .with_truncation(None)
            .map_err(|e| TokenizerError::InvalidConfig {
                reason: format!("Failed to disable truncation: {}", e),
            })?;

        Ok(Self {
            tokenizer,
            capabilities: EncoderCapabilities::all(),
            pad_id,
            pad_type_id,
            pad_token,
        })
    }

    /// Restricts which optional fields are reported (e.g. no token type ids for RoBERTa).
    pub fn with_capabilities(mut self, capabilities: EncoderCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn pad_id(&self) -> u32 {
        self.pad_id
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Special tokens the post-processor adds around a pair (e.g. 3 for BERT).
    pub fn special_tokens_for_pair(&self) -> usize {
        self.tokenizer
            .get_post_processor()
            .map_or(0, |processor| processor.added_tokens(true))
    }

    fn encode_segment(&self, text: &str) -> TokenizerResult<Encoding> {
        self.tokenizer
            .encode(text, false)
            .map_err(|e| TokenizerError::EncodingFailed {
                reason: e.to_string(),
            })
    }
}

impl PairEncoder for HfPairEncoder {
    fn capabilities(&self) -> EncoderCapabilities {
        self.capabilities
    }

    fn encode_pair(
        &self,
        first: &str,
        second: &str,
        max_length: usize,
    ) -> TokenizerResult<PairEncoding> {
        let special_tokens = self.special_tokens_for_pair();
        if max_length < special_tokens {
            return Err(TokenizerError::MaxLengthTooSmall {
                max_length,
                special_tokens,
            });
        }

        let first = self.encode_segment(first)?;
        let second = self.encode_segment(second)?;

        let budget = max_length - special_tokens;
        let total = first.len() + second.len();
        let num_truncated_tokens = total.saturating_sub(budget);

        let (first, second) = if num_truncated_tokens > 0 {
            let params = TruncationParams {
                max_length: budget,
                stride: 0,
                strategy: TruncationStrategy::LongestFirst,
                direction: TruncationDirection::Right,
            };
            let (first, second) = truncate_encodings(first, Some(second), &params).map_err(
                |e| TokenizerError::EncodingFailed {
                    reason: format!("Truncation failed: {}", e),
                },
            )?;
            (first, second)
        } else {
            (first, Some(second))
        };

        let mut encoding = self
            .tokenizer
            .post_process(first, second, true)
            .map_err(|e| TokenizerError::EncodingFailed {
                reason: format!("Post-processing failed: {}", e),
            })?;

        let padding = PaddingParams {
            strategy: PaddingStrategy::Fixed(max_length),
            direction: PaddingDirection::Right,
            pad_to_multiple_of: None,
            pad_id: self.pad_id,
            pad_type_id: self.pad_type_id,
            pad_token: self.pad_token.clone(),
        };
        pad_encodings(std::slice::from_mut(&mut encoding), &padding).map_err(|e| {
            TokenizerError::EncodingFailed {
                reason: format!("Padding failed: {}", e),
            }
        })?;

        if encoding.len() != max_length {
            return Err(TokenizerError::EncodingFailed {
                reason: format!(
                    "encoded pair has {} tokens, expected {}",
                    encoding.len(),
                    max_length
                ),
            });
        }

        debug!(
            total_tokens = total + special_tokens,
            num_truncated_tokens, max_length, "Encoded text pair"
        );

        Ok(PairEncoding {
            input_ids: encoding.get_ids().to_vec(),
            attention_mask: self
                .capabilities
                .attention_mask
                .then(|| encoding.get_attention_mask().to_vec()),
            token_type_ids: self
                .capabilities
                .token_type_ids
                .then(|| encoding.get_type_ids().to_vec()),
            num_truncated_tokens,
        })
    }
}

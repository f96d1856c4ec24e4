//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `MCQA_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_LABELS, DEFAULT_MAX_SEQ_LEN};
use crate::data::Split;
use crate::tokenizer::utils::resolve_tokenizer_path;

/// Conversion run configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `MCQA_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed token length of every encoded choice. Default: `128`.
    pub max_seq_len: usize,

    /// Path to a `tokenizer.json` or a model directory containing one.
    pub tokenizer_path: Option<PathBuf>,

    /// Directory holding `<split>.jsonl` files. Default: `./data`.
    pub data_dir: PathBuf,

    /// Where converted features are written as JSON lines. `None` means stdout.
    pub output_path: Option<PathBuf>,

    /// Ordered label vocabulary. Default: `0,1,2,3`.
    pub labels: Vec<String>,

    /// Partition to convert. Default: `train`.
    pub split: Split,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            tokenizer_path: None,
            data_dir: PathBuf::from("./data"),
            output_path: None,
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
            split: Split::Train,
        }
    }
}

impl Config {
    const ENV_MAX_SEQ_LEN: &'static str = "MCQA_MAX_SEQ_LEN";
    const ENV_TOKENIZER_PATH: &'static str = "MCQA_TOKENIZER_PATH";
    const ENV_DATA_DIR: &'static str = "MCQA_DATA_DIR";
    const ENV_OUTPUT_PATH: &'static str = "MCQA_OUTPUT_PATH";
    const ENV_LABELS: &'static str = "MCQA_LABELS";
    const ENV_SPLIT: &'static str = "MCQA_SPLIT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_seq_len = Self::parse_max_seq_len_from_env(defaults.max_seq_len)?;
        let tokenizer_path = Self::parse_optional_path_from_env(Self::ENV_TOKENIZER_PATH);
        let data_dir = Self::parse_path_from_env(Self::ENV_DATA_DIR, defaults.data_dir);
        let output_path = Self::parse_optional_path_from_env(Self::ENV_OUTPUT_PATH);
        let labels = Self::parse_labels_from_env(defaults.labels);
        let split = Self::parse_split_from_env(defaults.split)?;

        Ok(Self {
            max_seq_len,
            tokenizer_path,
            data_dir,
            output_path,
            labels,
            split,
        })
    }

    /// Validates paths and the label list (does not create directories).
    ///
    /// A tokenizer directory must contain a `tokenizer.json` file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.tokenizer_path {
            let tokenizer_file = resolve_tokenizer_path(path);
            if !tokenizer_file.exists() {
                return Err(ConfigError::PathNotFound {
                    path: tokenizer_file,
                });
            }
            if !tokenizer_file.is_file() {
                return Err(ConfigError::NotAFile {
                    path: tokenizer_file,
                });
            }
        }

        if !self.data_dir.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.data_dir.clone(),
            });
        }
        if !self.data_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.data_dir.clone(),
            });
        }

        if self.labels.is_empty() {
            return Err(ConfigError::EmptyLabels);
        }

        let mut seen = HashSet::with_capacity(self.labels.len());
        for label in &self.labels {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns the configured tokenizer path, or an error naming the variable to set.
    pub fn require_tokenizer_path(&self) -> Result<&Path, ConfigError> {
        self.tokenizer_path
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_TOKENIZER_PATH,
            })
    }

    fn parse_max_seq_len_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_SEQ_LEN) {
            Ok(value) => {
                let max_seq_len: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::MaxSeqLenParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if max_seq_len == 0 {
                    return Err(ConfigError::InvalidMaxSeqLen { value });
                }

                Ok(max_seq_len)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_split_from_env(default: Split) -> Result<Split, ConfigError> {
        match env::var(Self::ENV_SPLIT) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidSplit { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    /// Comma separated; surrounding whitespace and empty entries are dropped.
    fn parse_labels_from_env(default: Vec<String>) -> Vec<String> {
        match env::var(Self::ENV_LABELS) {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => default,
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DatasetError;
use crate::constants::EXAMPLE_FILE_EXTENSION;

/// Dataset partition an example set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// All partitions, in canonical order.
    pub const ALL: [Split; 3] = [Split::Train, Split::Dev, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }

    /// File name the JSONL loader reads for this partition, e.g. `dev.jsonl`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.as_str(), EXAMPLE_FILE_EXTENSION)
    }

    /// Train and dev examples carry a ground-truth label; test examples usually do not.
    pub fn expects_labels(&self) -> bool {
        match self {
            Split::Train | Split::Dev => true,
            Split::Test => false,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "dev" => Ok(Split::Dev),
            "test" => Ok(Split::Test),
            _ => Err(DatasetError::UnknownSplit {
                value: s.to_string(),
            }),
        }
    }
}

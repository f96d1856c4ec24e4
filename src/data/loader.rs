use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{DatasetError, DatasetResult};
use super::example::InputExample;
use super::split::Split;

/// Anything that can hand the conversion engine a partition of examples.
pub trait ExampleSource {
    fn load(&self, split: Split) -> DatasetResult<Vec<InputExample>>;
}

/// Reads `<data_dir>/<split>.jsonl`, one [`InputExample`] JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonlExampleSource {
    data_dir: PathBuf,
}

impl JsonlExampleSource {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `split`.
    pub fn path_for(&self, split: Split) -> PathBuf {
        self.data_dir.join(split.file_name())
    }
}

impl ExampleSource for JsonlExampleSource {
    fn load(&self, split: Split) -> DatasetResult<Vec<InputExample>> {
        let path = self.path_for(split);
        if !path.exists() {
            return Err(DatasetError::MissingFile { path });
        }

        let examples: Vec<InputExample> = load_jsonl(&path)?;

        if split.expects_labels() {
            let unlabeled = examples.iter().filter(|e| e.label().is_none()).count();
            if unlabeled > 0 {
                warn!(
                    split = %split,
                    unlabeled,
                    "Labeled split contains examples without a label"
                );
            }
        }

        info!(
            split = %split,
            path = %path.display(),
            count = examples.len(),
            "Loaded examples"
        );

        Ok(examples)
    }
}

fn load_jsonl<T: for<'de> serde::Deserialize<'de>>(path: &Path) -> DatasetResult<Vec<T>> {
    let reader = BufReader::new(File::open(path)?);
    let mut items = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|e| DatasetError::InvalidFormat {
            path: path.to_path_buf(),
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        items.push(item);
    }

    Ok(items)
}

/// Reads a label vocabulary: one identifier per line, order preserved, blank lines skipped.
pub fn read_label_vocabulary(path: &Path) -> DatasetResult<Vec<String>> {
    if !path.exists() {
        return Err(DatasetError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let mut seen = HashSet::new();
    let mut labels = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if label.is_empty() {
            continue;
        }
        if !seen.insert(label.to_string()) {
            return Err(DatasetError::DuplicateLabel {
                path: path.to_path_buf(),
                label: label.to_string(),
            });
        }
        labels.push(label.to_string());
    }

    if labels.is_empty() {
        return Err(DatasetError::EmptyVocabulary {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), count = labels.len(), "Loaded label vocabulary");
    Ok(labels)
}

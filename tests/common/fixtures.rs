//! Test fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mcqa::data::{InputExample, Split};

pub const DEFAULT_QUESTION: &str = "the _ sat on the mat";

pub const DEFAULT_LABELS: [&str; 4] = ["0", "1", "2", "3"];

pub const SMALL_MAX_LENGTH: usize = 16;

/// Words the fixture tokenizer knows, mapped to ids `200..`.
pub const FIXTURE_VOCAB: [&str; 10] = [
    "the", "cat", "sat", "on", "mat", "what", "color", "is", "sky", "blue",
];

pub struct ExampleBuilder {
    example_id: String,
    question: String,
    contexts: Vec<String>,
    endings: Vec<String>,
    label: Option<String>,
}

impl Default for ExampleBuilder {
    fn default() -> Self {
        Self {
            example_id: "ex-0".to_string(),
            question: DEFAULT_QUESTION.to_string(),
            contexts: Vec::new(),
            endings: Vec::new(),
            label: Some("0".to_string()),
        }
    }
}

impl ExampleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn example_id(mut self, id: impl Into<String>) -> Self {
        self.example_id = id.into();
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn choice(mut self, context: impl Into<String>, ending: impl Into<String>) -> Self {
        self.contexts.push(context.into());
        self.endings.push(ending.into());
        self
    }

    pub fn with_four_choices(self) -> Self {
        self.choice("what color is the sky", "cat")
            .choice("what color is the sky", "sky")
            .choice("what color is the sky", "mat")
            .choice("what color is the sky", "blue")
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn unlabeled(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn build(self) -> InputExample {
        InputExample::new(
            self.example_id,
            self.question,
            self.contexts,
            self.endings,
            self.label,
        )
    }
}

/// `count` four-choice examples with labels cycling through `"0"..="3"`.
pub fn create_batch_examples(count: usize) -> Vec<InputExample> {
    (0..count)
        .map(|i| {
            ExampleBuilder::new()
                .example_id(format!("ex-{i}"))
                .with_four_choices()
                .label(DEFAULT_LABELS[i % DEFAULT_LABELS.len()])
                .build()
        })
        .collect()
}

/// Writes `examples` as `<dir>/<split>.jsonl`.
pub fn write_split(dir: &Path, split: Split, examples: &[InputExample]) -> PathBuf {
    let path = dir.join(split.file_name());
    let lines: Vec<String> = examples
        .iter()
        .map(|e| serde_json::to_string(e).expect("example serializes"))
        .collect();
    std::fs::write(&path, lines.join("\n")).expect("write split file");
    path
}

/// Writes a WordLevel BERT-style `tokenizer.json` into `dir` and returns its path.
///
/// Special ids: `[PAD]` 0, `[UNK]` 1, `[CLS]` 101, `[SEP]` 102.
pub fn write_fixture_tokenizer(dir: &Path) -> PathBuf {
    let mut vocab = serde_json::json!({
        "[PAD]": 0,
        "[UNK]": 1,
        "[CLS]": 101,
        "[SEP]": 102,
    });
    for (i, word) in FIXTURE_VOCAB.iter().enumerate() {
        vocab[*word] = serde_json::json!(200 + i);
    }

    let special = |id: u32, content: &str| {
        serde_json::json!({
            "id": id, "content": content, "single_word": false, "lstrip": false,
            "rstrip": false, "normalized": false, "special": true
        })
    };

    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            special(0, "[PAD]"),
            special(1, "[UNK]"),
            special(101, "[CLS]"),
            special(102, "[SEP]"),
        ],
        "normalizer": {"type": "Lowercase"},
        "pre_tokenizer": {"type": "Whitespace"},
        "post_processor": {
            "type": "BertProcessing",
            "sep": ["[SEP]", 102],
            "cls": ["[CLS]", 101]
        },
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    });

    let path = dir.join("tokenizer.json");
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&tokenizer_json).expect("tokenizer json"),
    )
    .expect("write tokenizer file");
    path
}

/// Id of a fixture vocabulary word.
pub fn fixture_id(word: &str) -> u32 {
    let index = FIXTURE_VOCAB
        .iter()
        .position(|w| *w == word)
        .expect("word in fixture vocabulary");
    200 + index as u32
}

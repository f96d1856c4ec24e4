use crate::constants::{APPEND_SEPARATOR, CLOZE_MARKER};

/// How a question and a candidate ending are combined into the second text segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingMode {
    /// Every cloze marker in the question is replaced by the ending.
    Cloze,
    /// The ending is appended after the question, separated by a space.
    Append,
}

impl PairingMode {
    /// Picks the mode from the question text alone: any `_` makes it a cloze question.
    pub fn for_question(question: &str) -> Self {
        if question.contains(CLOZE_MARKER) {
            PairingMode::Cloze
        } else {
            PairingMode::Append
        }
    }

    pub fn build(&self, question: &str, ending: &str) -> String {
        match self {
            PairingMode::Cloze => question.replace(CLOZE_MARKER, ending),
            PairingMode::Append => {
                let mut segment =
                    String::with_capacity(question.len() + APPEND_SEPARATOR.len() + ending.len());
                segment.push_str(question);
                segment.push_str(APPEND_SEPARATOR);
                segment.push_str(ending);
                segment
            }
        }
    }
}

/// Builds the second segment of a choice's text pair.
pub fn build_second_segment(question: &str, ending: &str) -> String {
    PairingMode::for_question(question).build(question, ending)
}

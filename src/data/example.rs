use serde::{Deserialize, Serialize};

/// One raw multiple-choice instance, as produced by ingestion.
///
/// `contexts` and `endings` are parallel: choice `i` pairs `contexts[i]` with `endings[i]`.
/// Fields are private so a constructed example cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputExample {
    example_id: String,
    question: String,
    contexts: Vec<String>,
    endings: Vec<String>,
    #[serde(default)]
    label: Option<String>,
}

impl InputExample {
    pub fn new<I, Q, C, E, L>(
        example_id: I,
        question: Q,
        contexts: C,
        endings: E,
        label: Option<L>,
    ) -> Self
    where
        I: Into<String>,
        Q: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
        L: Into<String>,
    {
        Self {
            example_id: example_id.into(),
            question: question.into(),
            contexts: contexts.into_iter().map(Into::into).collect(),
            endings: endings.into_iter().map(Into::into).collect(),
            label: label.map(Into::into),
        }
    }

    pub fn example_id(&self) -> &str {
        &self.example_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    pub fn endings(&self) -> &[String] {
        &self.endings
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of choices the conversion engine will actually process.
    pub fn choice_count(&self) -> usize {
        self.contexts.len().min(self.endings.len())
    }

    /// `true` when `contexts` and `endings` differ in length (extra entries are dropped).
    pub fn has_mismatched_choices(&self) -> bool {
        self.contexts.len() != self.endings.len()
    }

    /// Iterates the `(context, ending)` pairs, stopping at the shorter list.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contexts
            .iter()
            .zip(self.endings.iter())
            .map(|(c, e)| (c.as_str(), e.as_str()))
    }
}

use tracing::{info, warn};

use crate::data::{InputExample, InputFeatures};

/// Receives progress and diagnostic notifications from a conversion call.
///
/// Every method has a no-op default. Observers see the data but cannot change the output.
pub trait ConversionObserver {
    /// Called for example `index` whenever `index` is a multiple of the progress interval.
    fn on_progress(&mut self, _index: usize, _total: usize) {}

    /// `contexts` and `endings` differ in length; only the shorter prefix is converted.
    fn on_choice_mismatch(&mut self, _example: &InputExample) {}

    /// A choice's text pair was cut to fit `max_length`.
    fn on_truncation(&mut self, _example_id: &str, _choice: usize, _num_truncated_tokens: usize) {}

    /// One of the leading records of a finished conversion, for inspection.
    fn on_sample(&mut self, _feature: &InputFeatures) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ConversionObserver for SilentObserver {}

/// Forwards notifications to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn on_progress(&mut self, index: usize, total: usize) {
        info!(index, total, "Writing example {} of {}", index, total);
    }

    fn on_choice_mismatch(&mut self, example: &InputExample) {
        warn!(
            example_id = example.example_id(),
            contexts = example.contexts().len(),
            endings = example.endings().len(),
            "contexts and endings differ in length; extra entries are ignored"
        );
    }

    fn on_truncation(&mut self, example_id: &str, choice: usize, num_truncated_tokens: usize) {
        warn!(
            example_id,
            choice,
            num_truncated_tokens,
            "Cropping tokens to fit max_length; fine for short-context tasks, \
             but consider a longer max_length when questions and options are long"
        );
    }

    fn on_sample(&mut self, feature: &InputFeatures) {
        info!(
            example_id = feature.example_id(),
            num_choices = feature.num_choices(),
            label = ?feature.label(),
            "*** Example *** {:?}",
            feature
        );
    }
}

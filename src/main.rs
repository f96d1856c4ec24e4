//! MCQA feature converter entrypoint.
//!
//! Reads `<MCQA_DATA_DIR>/<MCQA_SPLIT>.jsonl`, converts every example with the configured
//! tokenizer, and writes one feature record per line to `MCQA_OUTPUT_PATH` (or stdout).

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;

use mcqa::config::Config;
use mcqa::convert::{TracingObserver, convert_examples_to_features};
use mcqa::data::{ExampleSource, InputFeatures, JsonlExampleSource};
use mcqa::hashing::fingerprint_hex;
use mcqa::tokenizer::HfPairEncoder;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let tokenizer_path = config.require_tokenizer_path()?;

    tracing::info!(
        split = %config.split,
        data_dir = %config.data_dir.display(),
        max_seq_len = config.max_seq_len,
        num_labels = config.labels.len(),
        "MCQA conversion starting"
    );

    let encoder = HfPairEncoder::load(tokenizer_path)
        .with_context(|| format!("loading tokenizer from {}", tokenizer_path.display()))?;

    let source = JsonlExampleSource::new(&config.data_dir);
    let examples = source.load(config.split)?;

    let mut observer = TracingObserver;
    let features = convert_examples_to_features(
        &examples,
        &config.labels,
        config.max_seq_len,
        &encoder,
        &mut observer,
    )?;

    match &config.output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            write_features(BufWriter::new(file), &features)?;
            tracing::info!(path = %path.display(), "Features written");
        }
        None => write_features(BufWriter::new(io::stdout().lock()), &features)?,
    }

    tracing::info!(
        count = features.len(),
        fingerprint = %fingerprint_hex(&features),
        "MCQA conversion complete"
    );
    Ok(())
}

fn write_features<W: Write>(mut writer: W, features: &[InputFeatures]) -> anyhow::Result<()> {
    for feature in features {
        serde_json::to_writer(&mut writer, feature)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

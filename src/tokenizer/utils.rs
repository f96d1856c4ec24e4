use std::io;
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

use crate::constants::TOKENIZER_FILE_NAME;

/// Resolves a model directory or explicit `tokenizer.json` path to the tokenizer file.
pub fn resolve_tokenizer_path(path: &Path) -> PathBuf {
    if path
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new(TOKENIZER_FILE_NAME))
    {
        path.to_path_buf()
    } else if path.is_dir() {
        path.join(TOKENIZER_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Loads a tokenizer with truncation and padding disabled.
///
/// Pair encoding applies both per call, because the target length is a call argument rather
/// than a property of the tokenizer file.
pub fn load_tokenizer(path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = resolve_tokenizer_path(path);
    let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)?;

    tokenizer
        .with_truncation(None)
        .map_err(|e| io::Error::other(format!("Failed to disable truncation: {}", e)))?;

    Ok(tokenizer)
}

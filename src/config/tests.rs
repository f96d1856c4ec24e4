use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_mcqa_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("MCQA_MAX_SEQ_LEN");
        env::remove_var("MCQA_TOKENIZER_PATH");
        env::remove_var("MCQA_DATA_DIR");
        env::remove_var("MCQA_OUTPUT_PATH");
        env::remove_var("MCQA_LABELS");
        env::remove_var("MCQA_SPLIT");
    }
}

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        data_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.max_seq_len, 128);
    assert!(config.tokenizer_path.is_none());
    assert_eq!(config.data_dir, PathBuf::from("./data"));
    assert!(config.output_path.is_none());
    assert_eq!(config.labels, vec!["0", "1", "2", "3"]);
    assert_eq!(config.split, Split::Train);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_mcqa_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_custom_max_seq_len() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_MAX_SEQ_LEN", "256")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.max_seq_len, 256);
    });
}

#[test]
#[serial]
fn test_invalid_max_seq_len_zero() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_MAX_SEQ_LEN", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxSeqLen { .. }));
        assert!(err.to_string().contains("greater than 0"));
    });
}

#[test]
#[serial]
fn test_invalid_max_seq_len_not_number() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_MAX_SEQ_LEN", "long")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MaxSeqLenParseError { .. }));
        assert!(err.to_string().contains("failed to parse max sequence length"));
    });
}

#[test]
#[serial]
fn test_from_env_custom_paths() {
    clear_mcqa_env();

    with_env_vars(
        &[
            ("MCQA_TOKENIZER_PATH", "/models/bert-base-uncased"),
            ("MCQA_DATA_DIR", "/datasets/swag"),
            ("MCQA_OUTPUT_PATH", "/tmp/features.jsonl"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(
                config.tokenizer_path,
                Some(PathBuf::from("/models/bert-base-uncased"))
            );
            assert_eq!(config.data_dir, PathBuf::from("/datasets/swag"));
            assert_eq!(
                config.output_path,
                Some(PathBuf::from("/tmp/features.jsonl"))
            );
        },
    );
}

#[test]
#[serial]
fn test_blank_optional_path_is_none() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_OUTPUT_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.output_path.is_none());
    });
}

#[test]
#[serial]
fn test_from_env_labels() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_LABELS", " A, B ,,C ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.labels, vec!["A", "B", "C"]);
    });
}

#[test]
#[serial]
fn test_from_env_split() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_SPLIT", "Dev")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.split, Split::Dev);
    });
}

#[test]
#[serial]
fn test_invalid_split() {
    clear_mcqa_env();

    with_env_vars(&[("MCQA_SPLIT", "validation")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSplit { .. }));
        assert!(err.to_string().contains("validation"));
    });
}

#[test]
fn test_validate_success() {
    let dir = tempfile::tempdir().unwrap();
    let tokenizer = dir.path().join("tokenizer.json");
    std::fs::write(&tokenizer, "{}").unwrap();

    let config = Config {
        tokenizer_path: Some(tokenizer),
        ..config_in(dir.path())
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_nonexistent_data_dir() {
    let config = Config {
        data_dir: PathBuf::from("/nonexistent/mcqa/data"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_data_dir_is_file() {
    let config = Config {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_nonexistent_tokenizer_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        tokenizer_path: Some(dir.path().join("missing.json")),
        ..config_in(dir.path())
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_tokenizer_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tokenizer.json"), "{}").unwrap();

    let config = Config {
        tokenizer_path: Some(dir.path().to_path_buf()),
        ..config_in(dir.path())
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_tokenizer_directory_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        tokenizer_path: Some(dir.path().to_path_buf()),
        ..config_in(dir.path())
    };

    match config.validate().unwrap_err() {
        ConfigError::PathNotFound { path } => {
            assert_eq!(path, dir.path().join("tokenizer.json"));
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn test_validate_tokenizer_path_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_file = dir.path().join("tokenizer.json");
    std::fs::create_dir(&not_a_file).unwrap();

    let config = Config {
        tokenizer_path: Some(not_a_file),
        ..config_in(dir.path())
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
    assert!(err.to_string().contains("not a file"));
}

#[test]
fn test_validate_empty_labels() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        labels: Vec::new(),
        ..config_in(dir.path())
    };

    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::EmptyLabels
    ));
}

#[test]
fn test_validate_duplicate_labels() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        labels: vec!["A".into(), "B".into(), "A".into()],
        ..config_in(dir.path())
    };

    match config.validate().unwrap_err() {
        ConfigError::DuplicateLabel { label } => assert_eq!(label, "A"),
        other => panic!("expected DuplicateLabel, got {other:?}"),
    }
}

#[test]
fn test_require_tokenizer_path() {
    let config = Config::default();
    let err = config.require_tokenizer_path().unwrap_err();
    assert!(err.to_string().contains("MCQA_TOKENIZER_PATH"));

    let config = Config {
        tokenizer_path: Some(PathBuf::from("/models/bert")),
        ..Default::default()
    };
    assert_eq!(
        config.require_tokenizer_path().unwrap(),
        PathBuf::from("/models/bert").as_path()
    );
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidMaxSeqLen {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("invalid max sequence length"));
    assert!(err.to_string().contains("0"));

    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));

    let err = ConfigError::MissingEnvVar {
        name: "MCQA_TOKENIZER_PATH",
    };
    assert!(err.to_string().contains("MCQA_TOKENIZER_PATH"));
}

use gadget_codec::{CodecConfig, ConfigError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults() {
    let config = CodecConfig::default();
    assert_eq!(config.max_depth, 64);
    assert!(!config.strict_scalars);
}

#[test]
fn missing_keys_keep_defaults() {
    let config = CodecConfig::from_toml_str("strict_scalars = true\n").unwrap();
    assert_eq!(
        config,
        CodecConfig {
            max_depth: 64,
            strict_scalars: true,
        }
    );
}

#[test]
fn load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codec.toml");
    fs::write(&path, "max_depth = 8\nstrict_scalars = false\n").unwrap();

    let config = CodecConfig::load_from(&path).unwrap();

    assert_eq!(config.max_depth, 8);
}

#[test]
fn missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = CodecConfig::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, CodecConfig::default());
}

#[test]
fn load_requires_the_file() {
    let dir = TempDir::new().unwrap();

    let err = CodecConfig::load(&dir.path().join("typo.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codec.toml");
    fs::write(&path, "max_depth = \"deep\"\n").unwrap();

    let err = CodecConfig::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn serializes_back_to_toml() {
    let config = CodecConfig {
        max_depth: 3,
        strict_scalars: true,
    };
    let text = toml::to_string(&config).unwrap();

    assert_eq!(CodecConfig::from_toml_str(&text).unwrap(), config);
}

use std::io::Write;

use paragraph_extractor::{ConfigError, ExtractError, ExtractorConfig, ParagraphExtractor};
use tempfile::{Builder, NamedTempFile};

fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_json_file() {
    let file = config_file(".json", r#"{"min_chars": 2, "separator": "\n"}"#);
    let config = ExtractorConfig::from_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.min_chars, 2);
    assert_eq!(config.separator, "\n");
    assert_eq!(config.selector, "p");
}

#[test]
fn extractor_uses_file_config() {
    let file = config_file(".json", r#"{"min_chars": 1}"#);
    let extractor = ParagraphExtractor::builder()
        .with_config(file.path().to_str().unwrap())
        .build()
        .unwrap();
    assert_eq!(extractor.extract("<p>Hi</p><p>Yo</p>"), "Hi\n\nYo");
}

#[test]
fn unknown_extension_is_rejected() {
    let file = config_file(".yaml", "min_chars: 1");
    let err = ExtractorConfig::from_config(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat));
}

#[cfg(not(feature = "toml_config"))]
#[test]
fn toml_file_needs_feature() {
    let file = config_file(".toml", "min_chars = 1");
    let err = ParagraphExtractor::builder()
        .with_config(file.path().to_str().unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, ExtractError::Config(ConfigError::TomlNotEnabled)));
}

#[cfg(feature = "toml_config")]
#[test]
fn loads_toml_file() {
    let file = config_file(".toml", "min_chars = 1\nseparator = \" / \"");
    let extractor = ParagraphExtractor::builder()
        .with_config(file.path().to_str().unwrap())
        .build()
        .unwrap();
    assert_eq!(extractor.extract("<p>Hi</p><p>Yo</p>"), "Hi / Yo");
}

#[test]
fn malformed_json_file_is_a_parse_error() {
    let file = config_file(".json", "{ \"min_chars\": ");
    let err = ExtractorConfig::from_config(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::JsonParse(_)));
}

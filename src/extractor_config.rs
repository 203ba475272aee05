use serde::{Deserialize, Serialize};
use std::{fmt::Display, fs, path::Path};

use crate::ConfigError;

/// Paragraphs whose trimmed text is this many characters or fewer are dropped.
pub const DEFAULT_MIN_CHARS: usize = 10;
pub const DEFAULT_SELECTOR: &str = "p";
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Extraction policy.
///
/// Every field has a default, so a config source only needs to name the
/// fields it overrides:
///
/// ```
/// use paragraph_extractor::ExtractorConfig;
///
/// let config = ExtractorConfig::from_config(r#"{ "min_chars": 40 }"#).unwrap();
/// assert_eq!(config.min_chars, 40);
/// assert_eq!(config.selector, "p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Exclusive lower bound on a kept paragraph's length, in chars.
    pub min_chars: usize,
    pub selector: String,
    pub separator: String,
}

impl ExtractorConfig {
    pub fn new(min_chars: usize) -> Self {
        ExtractorConfig {
            min_chars,
            ..Default::default()
        }
    }

    /// Loads a config from a `.json`/`.toml` file path, or from inline
    /// JSON (then inline TOML, when `toml_config` is enabled).
    pub fn from_config(config: &str) -> Result<ExtractorConfig, ConfigError> {
        if Path::new(config).exists() {
            let config_content = fs::read_to_string(config)?;
            if config.ends_with(".json") {
                Ok(serde_json::from_str(&config_content)?)
            } else if config.ends_with(".toml") {
                #[cfg(feature = "toml_config")]
                {
                    Ok(toml::from_str(&config_content)?)
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(ConfigError::TomlNotEnabled)
                }
            } else {
                Err(ConfigError::UnsupportedFormat)
            }
        } else {
            serde_json::from_str(config).or_else(|json_err| {
                #[cfg(feature = "toml_config")]
                {
                    if config.trim_start().starts_with('{') {
                        return Err(json_err.into());
                    }
                    toml::from_str(config).map_err(|e| e.into())
                }
                #[cfg(not(feature = "toml_config"))]
                {
                    Err(json_err.into())
                }
            })
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            min_chars: DEFAULT_MIN_CHARS,
            selector: DEFAULT_SELECTOR.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Display for ExtractorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}

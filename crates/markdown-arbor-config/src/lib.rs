use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the default config file location.
pub const CONFIG_PATH_ENV: &str = "MARKDOWN_ARBOR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Options that shape a single markdown conversion.
///
/// Every field has a default, so a config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deepest allowed nesting of inline emphasis and blockquotes.
    pub max_nesting_depth: usize,
    /// Merge short fragment paragraphs into their successor.
    pub merge_fragments: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nesting_depth: 32,
            merge_fragments: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        Ok(Some(config))
    }

    /// Loads from `$MARKDOWN_ARBOR_CONFIG` if set, else the default path.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = match std::env::var(CONFIG_PATH_ENV) {
            Ok(raw) => {
                let raw = PathBuf::from(raw);
                Self::expand_path(&raw).unwrap_or(raw)
            }
            Err(_) => Self::config_path(),
        };
        Self::load_from_path(&config_path)
    }

    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: PathBuf::from("<inline>"),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_nesting_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-arbor");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

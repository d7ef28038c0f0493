use crate::error::{QualifierError, Result};
use crate::transform::STUTTER_MARGIN;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_MAX_QUOTE_LENGTH: usize = 50;

/// Configuration for qualifier, read from `config.json` in the config dir.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QualifierConfig {
    /// Maximum number of characters in a quote, before and after transforms
    #[serde(default = "default_max_quote_length")]
    pub max_quote_length: usize,
}

fn default_max_quote_length() -> usize {
    DEFAULT_MAX_QUOTE_LENGTH
}

impl Default for QualifierConfig {
    fn default() -> Self {
        Self {
            max_quote_length: DEFAULT_MAX_QUOTE_LENGTH,
        }
    }
}

impl QualifierConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QualifierError::Io)?;
        let config: QualifierConfig =
            serde_json::from_str(&content).map_err(QualifierError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_quote_length < STUTTER_MARGIN {
            return Err(QualifierError::Config(format!(
                "max_quote_length must be at least {}, got {}",
                STUTTER_MARGIN, self.max_quote_length
            )));
        }
        Ok(())
    }
}

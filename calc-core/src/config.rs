use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to open config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Admission limits applied before an expression is parsed.
///
/// Both limits bound how deep the recursive grammar can go, so arbitrarily
/// long or nested input is rejected instead of exhausting the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Maximum length in characters, counted after trimming.
    #[serde(default = "default_max_expression_length")]
    pub max_expression_length: usize,

    /// Maximum number of simultaneously open parentheses.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_expression_length: default_max_expression_length(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

impl EvaluatorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        from_file(path)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        from_str(s)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_expression_length == 0 {
            return Err(ConfigError::Invalid(
                "max_expression_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> ConfigResult<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> ConfigResult<T> {
    let config = serde_json::from_str(s)?;
    Ok(config)
}

fn default_max_expression_length() -> usize {
    4096
}

fn default_max_nesting_depth() -> usize {
    64
}

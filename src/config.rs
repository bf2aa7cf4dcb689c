use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Consecutive charged-move executions simulated when nothing else is asked for
pub const DEFAULT_REPETITIONS: usize = 3;

/// Upper bound accepted from configuration files
pub const MAX_REPETITIONS: usize = 64;

/// Where the move tables live and how many cycles to simulate.
///
/// Stored as RON; every field is optional in the file:
///
/// ```ron
/// (
///     data_path: "data",
///     repetitions: 4,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub data_path: PathBuf,
    pub fast_moves_file: String,
    pub charged_moves_file: String,
    pub repetitions: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            fast_moves_file: "fast_moves.json".to_string(),
            charged_moves_file: "charged_moves.json".to_string(),
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl CalculatorConfig {
    /// Load and validate a RON config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Like `load`, but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse RON config text; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        let config: CalculatorConfig = ron::from_str(content).map_err(|source| ConfigError::Ron {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        validate_repetitions(self.repetitions).map(|_| ())
    }
}

/// Check a repetition count against `1..=MAX_REPETITIONS`
pub fn validate_repetitions(repetitions: usize) -> ConfigResult<usize> {
    if (1..=MAX_REPETITIONS).contains(&repetitions) {
        Ok(repetitions)
    } else {
        Err(ConfigError::InvalidRepetitions(repetitions))
    }
}

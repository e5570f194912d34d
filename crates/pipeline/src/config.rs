//! Pipeline configuration, read from TOML

use checkers_core::Side;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::eval::MaterialEvaluator;

/// Smallest slot that fits a worker header, a rendered board and the score line.
pub const MIN_SLOT_BYTES: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How each worker's starting board is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RootMode {
    /// Every worker starts from the opening position
    Standard,
    /// Each worker gets its own random position derived from the seed
    Seeded,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Side", rename_all = "lowercase")]
pub(crate) enum SideDef {
    Red,
    Black,
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of independent workers (one root board each)
    pub workers: usize,
    /// Plies to expand from each root
    pub depth: u8,
    /// Side to move at the root
    #[serde(with = "SideDef")]
    pub first_to_move: Side,
    pub roots: RootMode,
    /// Base seed for `RootMode::Seeded`; worker `n` uses `seed + n`
    pub seed: u64,
    /// Fixed size of each worker's region in the output file
    pub slot_bytes: usize,
    /// Output file holding one slot per worker
    pub output: PathBuf,
    /// Optional JSON run summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PathBuf>,
    pub evaluator: MaterialEvaluator,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            depth: 6,
            first_to_move: Side::Red,
            roots: RootMode::Standard,
            seed: 0,
            slot_bytes: 512,
            output: PathBuf::from("leaves.out"),
            summary: None,
            evaluator: MaterialEvaluator::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        if self.slot_bytes < MIN_SLOT_BYTES {
            return Err(ConfigError::Invalid(format!(
                "slot_bytes must be at least {MIN_SLOT_BYTES}, got {}",
                self.slot_bytes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! Settings file for the board application

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chess_board.toml";

const MIN_SQUARE_SIZE: f32 = 16.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Engine executable
    pub engine_path: PathBuf,
    /// Extra command-line arguments for the engine
    pub engine_args: Vec<String>,
    /// Engine thinking time per move in milliseconds
    pub think_time_ms: u64,
    /// Directory holding the twelve piece sprites
    pub assets_dir: PathBuf,
    /// Pixels per board square
    pub square_size: f32,
    /// UCI options sent with `setoption` after the handshake
    pub engine_options: BTreeMap<String, toml::Value>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine_path: PathBuf::from("/usr/games/stockfish"),
            engine_args: Vec::new(),
            think_time_ms: 500,
            assets_dir: PathBuf::from("pieces"),
            square_size: 100.0,
            engine_options: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Config from an explicit path, else the default file if it exists,
    /// else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.think_time_ms == 0 {
            return Err(ConfigError::Invalid(
                "think_time_ms must be greater than zero".to_string(),
            ));
        }
        if !(self.square_size >= MIN_SQUARE_SIZE) {
            return Err(ConfigError::Invalid(format!(
                "square_size must be at least {MIN_SQUARE_SIZE}"
            )));
        }
        Ok(())
    }

    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }

    /// Side length of the whole board in pixels.
    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    /// Engine options as `setoption` name/value strings.
    pub fn uci_options(&self) -> Vec<(String, String)> {
        self.engine_options
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

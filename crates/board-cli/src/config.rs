//! Configuration file loading for the command-line front end.
//!
//! Settings come from a TOML file (`board.toml` in the working directory by
//! default) and may be overridden by command-line flags.

use board_core::{Color, PlacementError, STARTING_PLACEMENT};
use rules_engine::Board;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or interpreting configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The side to move is not a color name.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    /// The starting board is not valid placement notation.
    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] PlacementError),
    /// The log level is not one of trace, debug, info, warn, or error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Front-end settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Board to start from, in placement notation.
    /// Defaults to the standard starting position.
    #[serde(default = "default_start_board")]
    pub start_board: String,
    /// Side that moves first: "white" or "black". Defaults to "white".
    #[serde(default = "default_first_to_move")]
    pub first_to_move: String,
    /// Maximum log level. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_start_board() -> String {
    STARTING_PLACEMENT.to_string()
}

fn default_first_to_move() -> String {
    "white".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            start_board: default_start_board(),
            first_to_move: default_first_to_move(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from the given path, falling back to the
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("board.toml")
    }

    /// Replaces settings with any values given on the command line.
    pub fn apply_overrides(
        &mut self,
        board: Option<&str>,
        first_to_move: Option<&str>,
        log_level: Option<&str>,
    ) {
        if let Some(board) = board {
            self.start_board = board.to_string();
        }
        if let Some(color) = first_to_move {
            self.first_to_move = color.to_string();
        }
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
    }

    /// Parses the starting board.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::from_placement(&self.start_board)?)
    }

    /// Parses the side that moves first.
    pub fn first_to_move(&self) -> Result<Color, ConfigError> {
        Color::from_name(&self.first_to_move)
            .ok_or_else(|| ConfigError::InvalidColor(self.first_to_move.clone()))
    }

    /// Parses the log level.
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

//! Rule configuration for checkers games.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rule set and board geometry for a game.
///
/// Every field has a default, so an empty TOML file yields standard
/// 8×8 checkers with mandatory capture.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct CheckersConfig {
    /// Side length of the square board.
    #[serde(default = "default_board_size")]
    board_size: i32,

    /// Rows filled with men at each end of the board.
    #[serde(default = "default_home_rows")]
    home_rows: i32,

    /// Reject simple moves while a capture is available.
    #[serde(default = "default_true")]
    mandatory_capture: bool,

    /// Crown men that reach the far row.
    #[serde(default = "default_true")]
    promote_kings: bool,

    /// Keep the turn after a capture while the same piece can capture again.
    #[serde(default)]
    chain_captures: bool,

    /// Plies without a capture before the game is drawn (0 disables).
    #[serde(default = "default_quiet_move_limit")]
    quiet_move_limit: u32,
}

#[instrument]
fn default_board_size() -> i32 {
    8
}

#[instrument]
fn default_home_rows() -> i32 {
    3
}

#[instrument]
fn default_true() -> bool {
    true
}

#[instrument]
fn default_quiet_move_limit() -> u32 {
    80
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            home_rows: default_home_rows(),
            mandatory_capture: true,
            promote_kings: true,
            chain_captures: false,
            quiet_move_limit: default_quiet_move_limit(),
        }
    }
}

impl CheckersConfig {
    /// Largest accepted `board_size`.
    pub const MAX_BOARD_SIZE: i32 = 26;

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the board can hold the opening layout.
    #[instrument(skip(self), fields(board_size = self.board_size, home_rows = self.home_rows))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 4 {
            return Err(ConfigError::new(format!(
                "board_size must be at least 4, got {}",
                self.board_size
            )));
        }
        if self.board_size > Self::MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at most {}, got {}",
                Self::MAX_BOARD_SIZE,
                self.board_size
            )));
        }
        if self.board_size % 2 != 0 {
            return Err(ConfigError::new(format!(
                "board_size must be even, got {}",
                self.board_size
            )));
        }
        if self.home_rows < 1 {
            return Err(ConfigError::new(format!(
                "home_rows must be at least 1, got {}",
                self.home_rows
            )));
        }
        if self.home_rows >= self.board_size / 2 {
            return Err(ConfigError::new(format!(
                "home_rows {} leaves no neutral rows on a board of size {}",
                self.home_rows, self.board_size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

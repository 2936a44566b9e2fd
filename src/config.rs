//! Application configuration.

use crate::display::BoardGeometry;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the display and logging. Every field has a default, so an
/// empty file (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How often the display checks for pending redraws, in milliseconds.
    poll_interval_ms: u64,

    /// Key that restarts a finished game.
    restart_key: char,

    /// Key that leaves the program.
    quit_key: char,

    /// Where the board sits on screen and how large its tiles are.
    board: BoardGeometry,

    /// File receiving tracing output.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 20,
            restart_key: 'r',
            quit_key: 'q',
            board: BoardGeometry::default(),
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the log file when one was given on the command line.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Redraw poll period.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::new("poll_interval_ms must be positive"));
        }
        if self.restart_key.eq_ignore_ascii_case(&self.quit_key) {
            return Err(ConfigError::new(format!(
                "restart_key and quit_key are both '{}'",
                self.restart_key
            )));
        }
        if self.board.tile_width < 2 || self.board.tile_height < 2 {
            return Err(ConfigError::new(
                "board tiles must be at least 2 cells wide and high",
            ));
        }
        if self.board.far_corner().is_none() {
            return Err(ConfigError::new(format!(
                "board does not fit on screen: {:?}",
                self.board
            )));
        }
        Ok(())
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

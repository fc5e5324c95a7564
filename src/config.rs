//! Program configuration from an optional TOML file and the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default log destination.
pub const DEFAULT_LOG_FILE: &str = "console_tictactoe.log";

const DEFAULT_THINK_DELAY_MS: u64 = 1000;

/// Settings for one program run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Pause before each computer move, in milliseconds.
    think_delay_ms: u64,

    /// Clear the terminal before showing the board.
    clear_screen: bool,

    /// Log file path.
    log_file: PathBuf,

    /// Seed for the random source; `None` uses the thread generator.
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            clear_screen: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            seed: None,
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Applies command-line flags on top of the file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(ms) = cli.think_delay_ms {
            self.think_delay_ms = ms;
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }

    /// Returns the computer's think delay.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.think_delay(), Duration::from_secs(1));
        assert!(*config.clear_screen());
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed(), &Some(7));
        assert_eq!(*config.think_delay_ms(), 1000);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<AppConfig>("board_size = 4").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: AppConfig = toml::from_str("think_delay_ms = 250\nseed = 1").unwrap();
        let cli = Cli::parse_from(["console_tictactoe", "--seed", "9", "--no-clear"]);
        let config = file.with_overrides(&cli);
        assert_eq!(config.seed(), &Some(9));
        assert_eq!(*config.think_delay_ms(), 250);
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}

//! Configuration for the command-line front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{FirstAvailableStrategy, GameStrategy, MinimaxStrategy, Player};

/// Which strategy the engine plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Exhaustive minimax.
    #[default]
    Minimax,
    /// Lowest empty square.
    FirstAvailable,
}

impl StrategyKind {
    /// Builds the strategy.
    pub fn build(self) -> Box<dyn GameStrategy> {
        match self {
            StrategyKind::Minimax => Box::new(MinimaxStrategy),
            StrategyKind::FirstAvailable => Box::new(FirstAvailableStrategy),
        }
    }
}

/// Engine configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side played by the human in interactive games.
    #[serde(default = "default_human_player")]
    human_player: Player,

    /// Strategy used by the engine.
    #[serde(default)]
    strategy: StrategyKind,

    /// Print immediate-win warnings and suggestions during play.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_player() -> Player {
    Player::X
}

fn default_show_hints() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            human_player: default_human_player(),
            strategy: StrategyKind::default(),
            show_hints: default_show_hints(),
            log_filter: default_log_filter(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(strategy = ?config.strategy, human = %config.human_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the human side replaced.
    pub fn with_human_player(mut self, player: Player) -> Self {
        self.human_player = player;
        self
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

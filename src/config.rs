// Configuration module for reading Snake.toml
// Identity, strategy thresholds and taunts live here; SNAKE_ID overrides the configured id

use log::warn;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable carrying the id the game server assigned to us
pub const SNAKE_ID_VAR: &str = "SNAKE_ID";

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeConfig,
    pub strategy: StrategyConfig,
    pub taunts: TauntConfig,
}

/// Who we are and how we look
#[derive(Debug, Deserialize, Clone)]
pub struct SnakeConfig {
    pub id: String,
    pub color: String,
    pub head_url: String,
}

/// Strategy selection constants
#[derive(Debug, Deserialize, Clone)]
pub struct StrategyConfig {
    /// Health at or below this goes food hunting
    pub health_threshold: i32,
    /// Healthy snakes shorter than this look for a corner
    pub corner_length_threshold: usize,
    /// Fixed seed for reproducible games; entropy when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

/// Messages sent at game start and game end
#[derive(Debug, Deserialize, Clone)]
pub struct TauntConfig {
    pub start: String,
    pub end: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            snake: SnakeConfig {
                id: "chick".to_string(),
                color: "#FFFFFF".to_string(),
                head_url: "/static/chick.svg".to_string(),
            },
            strategy: StrategyConfig {
                health_threshold: 40,
                corner_length_threshold: 4,
                rng_seed: None,
            },
            taunts: TauntConfig {
                start: "cluck cluck cluck".to_string(),
                end: "squaaaaaaawk!".to_string(),
            },
        }
    }

    /// Replaces the configured snake id when `SNAKE_ID` is set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(id) = env::var(SNAKE_ID_VAR) {
            self.snake.id = id;
        }
        self
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default()
            .unwrap_or_else(|e| {
                warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
                Self::default_hardcoded()
            })
            .with_env_overrides()
    }
}

use std::path::PathBuf;
use std::time::Duration;

use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::{LEVELS_DIR, TICK_MILLIS, TURN_TIME};
use crate::error::ConfigError;

/// Prefix shared by every environment variable the game reads.
pub const ENV_PREFIX: &str = "RUNAWAY_";

/// The rules knobs the turn controller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seconds an actor has to move before losing the level.
    pub turn_time: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { turn_time: TURN_TIME }
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Seconds per turn
    #[serde(default = "default_turn_time")]
    pub turn_time: u32,
    /// Length of one countdown tick in milliseconds
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Directory scanned for level files
    #[serde(default = "default_levels_dir")]
    pub levels_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            turn_time: default_turn_time(),
            tick_millis: default_tick_millis(),
            levels_dir: default_levels_dir(),
        }
    }
}

impl Config {
    pub fn game(&self) -> GameConfig {
        GameConfig {
            turn_time: self.turn_time,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.turn_time == 0 {
            return Err(ConfigError::Invalid {
                key: "RUNAWAY_TURN_TIME",
                reason: "a turn must last at least one second".to_string(),
            });
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::Invalid {
                key: "RUNAWAY_TICK_MILLIS",
                reason: "the tick length must be positive".to_string(),
            });
        }
        Ok(self)
    }
}

fn default_turn_time() -> u32 {
    TURN_TIME
}

fn default_tick_millis() -> u64 {
    TICK_MILLIS
}

fn default_levels_dir() -> PathBuf {
    PathBuf::from(LEVELS_DIR)
}

/// Extracts and validates the configuration from a prepared figment.
pub fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment.extract::<Config>().map_err(Box::new)?.validate()
}

/// Loads the configuration from `RUNAWAY_*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    extract(Figment::new().merge(Env::prefixed(ENV_PREFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;

    #[test]
    fn test_defaults() {
        let config = extract(Figment::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.game(), GameConfig::default());
        assert_eq!(config.tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_turn_time_is_rejected() {
        let figment = Figment::new().merge(Serialized::default("turn_time", 0));
        assert!(matches!(
            extract(figment),
            Err(ConfigError::Invalid {
                key: "RUNAWAY_TURN_TIME",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let figment = Figment::new().merge(Serialized::default("tick_millis", 0));
        assert!(matches!(extract(figment), Err(ConfigError::Invalid { .. })));
    }
}

//! Runtime game configuration
//!
//! Every value defaults to the matching constant in [`crate::consts`]. A JSON
//! document may override any subset; missing keys keep their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Bounds;
use crate::consts::*;

/// Error raised while loading a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// The document was not valid JSON or had mistyped fields
    Parse(serde_json::Error),
    /// A value parsed but is outside its usable range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Tunable gameplay values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f64,
    pub height: f64,

    // === Walker ===
    pub walker_radius: f64,
    pub walker_max_speed: f64,
    pub walker_max_force: f64,

    // === Bullets ===
    pub bullet_radius: f64,
    pub bullet_speed: f64,

    // === Enemies ===
    pub enemy_radius: f64,
    pub enemy_speed: f64,
    pub enemy_health: i32,

    // === Spawning ===
    pub spawn_interval_ns: i64,
    pub spawn_edge_offset: f64,
    /// Seed for the spawner RNG
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            walker_radius: WALKER_RADIUS,
            walker_max_speed: WALKER_MAX_SPEED,
            walker_max_force: WALKER_MAX_FORCE,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_health: ENEMY_HEALTH,

            spawn_interval_ns: SPAWN_INTERVAL_NS,
            spawn_edge_offset: SPAWN_EDGE_OFFSET,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `json` if given, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded config ({}x{})", config.width, config.height);
                config
            }
            Err(e) => {
                log::warn!("{}; using default config", e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("walker_radius", self.walker_radius)?;
        positive("walker_max_speed", self.walker_max_speed)?;
        positive("walker_max_force", self.walker_max_force)?;
        positive("bullet_radius", self.bullet_radius)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("enemy_radius", self.enemy_radius)?;
        positive("enemy_speed", self.enemy_speed)?;

        if !self.spawn_edge_offset.is_finite() || self.spawn_edge_offset < 0.0 {
            return Err(ConfigError::Invalid {
                field: "spawn_edge_offset",
                reason: "must be zero or positive",
            });
        }
        if self.enemy_health <= 0 {
            return Err(ConfigError::Invalid {
                field: "enemy_health",
                reason: "must be at least 1",
            });
        }
        if self.spawn_interval_ns <= 0 {
            return Err(ConfigError::Invalid {
                field: "spawn_interval_ns",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Playfield bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.bullet_radius, 5.0);
        assert_eq!(config.bullet_speed, 8.0);
        assert_eq!(config.enemy_speed, 1.0);
        assert_eq!(config.enemy_health, 3);
        assert_eq!(config.enemy_radius, 15.0);
        assert_eq!(config.spawn_interval_ns, 3_000_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_json(r#"{ "width": 1024.0, "enemy_health": 5 }"#).unwrap();
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.enemy_health, 5);
        assert_eq!(config.height, PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json(r#"{ "enemy_health": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "enemy_health", .. }));

        let err = GameConfig::from_json(r#"{ "width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "width", .. }));
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(GameConfig::load_or_default(Some("{ not json")), GameConfig::default());
        assert_eq!(GameConfig::load_or_default(None), GameConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig {
            seed: 7,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}

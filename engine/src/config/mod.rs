//! Config Module
//!
//! Centralized configuration for the walk controller. `Default` returns the
//! tuned values (eye height 0.5, speed 3.0, sensitivity 0.1 deg/px, seed 42);
//! any subset can be overridden from a JSON file, missing fields falling back
//! to those defaults.
//!
//! ```json
//! {
//!   "movement": { "speed": 4.5, "normalize_diagonal": true },
//!   "jump": { "enabled": false },
//!   "scenery": { "seed": 7 }
//! }
//! ```

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

pub use crate::physics::CollisionConfig;
pub use crate::player::{JumpConfig, MovementConfig};
pub use crate::world::SceneryConfig;

/// Mouse-look parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Degrees of rotation per pixel of cursor travel.
    pub sensitivity: f32,
    /// Pitch clamp in degrees, applied symmetrically.
    pub pitch_limit: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            pitch_limit: 89.0,
        }
    }
}

/// Where the player starts. The spawn height is always the eye height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub x: f32,
    pub z: f32,
    /// Initial yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Initial pitch in degrees
    pub pitch: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            z: 5.0,
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}

/// Complete configuration for one walk session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub look: LookConfig,
    pub movement: MovementConfig,
    pub jump: JumpConfig,
    pub collision: CollisionConfig,
    pub scenery: SceneryConfig,
    pub spawn: SpawnConfig,
}

impl WalkConfig {
    /// Plain walk-through with no jump and no collision.
    pub fn free_walk() -> Self {
        Self {
            jump: JumpConfig {
                enabled: false,
                ..JumpConfig::default()
            },
            collision: CollisionConfig {
                enabled: false,
                ..CollisionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WalkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded walk config");
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("look.sensitivity", self.look.sensitivity)?;
        if !(self.look.pitch_limit > 0.0 && self.look.pitch_limit < 90.0) {
            return Err(ConfigError::invalid(
                "look.pitch_limit",
                format!("must be in (0, 90), got {}", self.look.pitch_limit),
            ));
        }

        positive("movement.speed", self.movement.speed)?;
        non_negative("movement.eye_height", self.movement.eye_height)?;
        non_negative("movement.max_delta_time", self.movement.max_delta_time)?;

        positive("jump.launch_speed", self.jump.launch_speed)?;
        positive("jump.gravity", self.jump.gravity)?;

        non_negative("collision.player_radius", self.collision.player_radius)?;
        for (field, half) in [
            ("collision.tree_half_extents", self.collision.tree_half_extents),
            ("collision.fence_half_extents", self.collision.fence_half_extents),
        ] {
            if !half.is_finite() || half.min_element() < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("components must be finite and non-negative, got {half}"),
                ));
            }
        }

        non_negative("scenery.tree_spread", self.scenery.tree_spread)?;
        non_negative("scenery.rock_spread", self.scenery.rock_spread)?;
        non_negative("scenery.road_half_width", self.scenery.road_half_width)?;
        non_negative("scenery.road_half_length", self.scenery.road_half_length)?;
        finite("scenery.fence_spacing", self.scenery.fence_spacing)?;
        finite("scenery.fence_offset", self.scenery.fence_offset)?;

        finite("spawn.x", self.spawn.x)?;
        finite("spawn.z", self.spawn.z)?;
        finite("spawn.yaw", self.spawn.yaw)?;
        finite("spawn.pitch", self.spawn.pitch)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be non-negative, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = WalkConfig::default();
        assert_eq!(config.look.sensitivity, 0.1);
        assert_eq!(config.look.pitch_limit, 89.0);
        assert_eq!(config.movement.speed, 3.0);
        assert_eq!(config.movement.eye_height, 0.5);
        assert!(!config.movement.normalize_diagonal);
        assert_eq!(config.collision.player_radius, 0.3);
        assert_eq!(config.scenery.seed, 42);
        assert_eq!(config.spawn.yaw, -90.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_free_walk_disables_physics() {
        let config = WalkConfig::free_walk();
        assert!(!config.jump.enabled);
        assert!(!config.collision.enabled);
        assert_eq!(config.movement, MovementConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WalkConfig::from_json_str(
            r#"{ "movement": { "speed": 4.5, "normalize_diagonal": true }, "scenery": { "seed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(config.movement.speed, 4.5);
        assert!(config.movement.normalize_diagonal);
        assert_eq!(config.movement.eye_height, 0.5);
        assert_eq!(config.scenery.seed, 7);
        assert_eq!(config.look, LookConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = WalkConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WalkConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = WalkConfig::free_walk();
        let json = config.to_json_string().unwrap();
        assert_eq!(WalkConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = WalkConfig::from_json_str("{ movement: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_invalid_pitch_limit_rejected() {
        let err = WalkConfig::from_json_str(r#"{ "look": { "pitch_limit": 90.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "look.pitch_limit"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_speed_rejected() {
        let mut config = WalkConfig::default();
        config.movement.speed = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("movement.speed"));
    }

    #[test]
    fn test_negative_half_extents_rejected() {
        let mut config = WalkConfig::default();
        config.collision.tree_half_extents.y = -0.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("collision.tree_half_extents"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WalkConfig::load(Path::new("/nonexistent/forest_walk.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

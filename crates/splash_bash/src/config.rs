//! Game configuration
//!
//! Every section falls back to its defaults field by field, so a config file
//! only needs to name what it changes.

use crate::components::PlayerId;
use serde::{Deserialize, Serialize};
use splash_engine::config::{Config, ConfigError};
use splash_engine::input::KeyCode;
use std::path::Path;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Animation settings
    pub animation: AnimationConfig,

    /// Controls settings
    pub controls: ControlsConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Walking speed (units per second)
    pub move_speed: f32,

    /// Turning speed (degrees per second)
    pub turn_speed: f32,

    /// Projectile speed (units per second)
    pub projectile_speed: f32,

    /// Seconds a collected crate stays hidden
    pub crate_respawn_secs: f32,

    /// Splashes needed to win
    pub hits_to_win: u32,

    /// Upper bound on a frame's delta time (seconds)
    pub max_frame_dt: f32,
}

/// Animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds each mesh-swap frame stays on screen
    pub frame_duration: f32,

    /// Roundabout spin (degrees per second)
    pub roundabout_spin: f32,

    /// Fraction of the blue balloon's path covered per second
    pub blue_balloon_rate: f32,

    /// Fraction of the purple balloon's path covered per second
    pub purple_balloon_rate: f32,
}

/// Key bindings for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBindings {
    /// Walk forward
    pub forward: KeyCode,

    /// Walk backward
    pub back: KeyCode,

    /// Turn left
    pub left: KeyCode,

    /// Turn right
    pub right: KeyCode,

    /// Fire the water gun
    pub fire: KeyCode,
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Leave the title screen
    pub start: KeyCode,

    /// Pause a running match
    pub pause: KeyCode,

    /// Resume a paused match
    pub resume: KeyCode,

    /// Dismiss the win screen
    pub confirm: KeyCode,

    /// Player 1 keys
    pub player_one: PlayerBindings,

    /// Player 2 keys
    pub player_two: PlayerBindings,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            move_speed: 18.0,
            turn_speed: 225.0,
            projectile_speed: 28.0,
            crate_respawn_secs: 5.0,
            hits_to_win: 3,
            max_frame_dt: 1.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_duration: 0.2,
            roundabout_spin: 100.0,
            blue_balloon_rate: 0.5,
            purple_balloon_rate: 0.25,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            start: KeyCode::Space,
            pause: KeyCode::Escape,
            resume: KeyCode::Enter,
            confirm: KeyCode::Enter,
            player_one: PlayerBindings {
                forward: KeyCode::W,
                back: KeyCode::S,
                left: KeyCode::A,
                right: KeyCode::D,
                fire: KeyCode::E,
            },
            player_two: PlayerBindings {
                forward: KeyCode::I,
                back: KeyCode::K,
                left: KeyCode::J,
                right: KeyCode::L,
                fire: KeyCode::O,
            },
        }
    }
}

impl ControlsConfig {
    /// Bindings for one player
    pub fn player(&self, id: PlayerId) -> &PlayerBindings {
        match id {
            PlayerId::One => &self.player_one,
            PlayerId::Two => &self.player_two,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path` when given, otherwise use defaults; validates either way
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                log::info!("Loading game config from {}", path.display());
                Self::load_from_file(path)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gameplay = &self.gameplay;
        let positive = [
            ("gameplay.move_speed", gameplay.move_speed),
            ("gameplay.turn_speed", gameplay.turn_speed),
            ("gameplay.projectile_speed", gameplay.projectile_speed),
            ("gameplay.crate_respawn_secs", gameplay.crate_respawn_secs),
            ("gameplay.max_frame_dt", gameplay.max_frame_dt),
            ("animation.frame_duration", self.animation.frame_duration),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Validation(format!("{name} must be positive, got {value}")));
            }
        }

        if gameplay.hits_to_win == 0 {
            return Err(ConfigError::Validation("gameplay.hits_to_win must be at least 1".to_string()));
        }

        let rates = [
            ("animation.blue_balloon_rate", self.animation.blue_balloon_rate),
            ("animation.purple_balloon_rate", self.animation.purple_balloon_rate),
        ];
        for (name, value) in rates {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Validation(format!("{name} must not be negative, got {value}")));
            }
        }

        Ok(())
    }
}

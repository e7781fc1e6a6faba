//! Game settings and round tuning
//!
//! Loaded from an optional JSON file. Every field has a default so partial
//! files work; anything unusable falls back to defaults with a warning.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How enemies pick their downward speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemySpeed {
    /// Every enemy uses the same speed
    Constant(f32),
    /// Each enemy draws a speed uniformly from `[min, max)`
    Random { min: f32, max: f32 },
    /// Enemy `i` moves `i + 1` units per tick
    ByIndex,
}

impl Default for EnemySpeed {
    fn default() -> Self {
        EnemySpeed::Random {
            min: ENEMY_SPEED_MIN,
            max: ENEMY_SPEED_MAX,
        }
    }
}

impl EnemySpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemySpeed::Constant(_) => "constant",
            EnemySpeed::Random { .. } => "random",
            EnemySpeed::ByIndex => "by_index",
        }
    }

    fn is_valid(&self) -> bool {
        match *self {
            EnemySpeed::Constant(speed) => speed.is_finite() && speed > 0.0,
            EnemySpeed::Random { min, max } => {
                min.is_finite() && max.is_finite() && min > 0.0 && min < max
            }
            EnemySpeed::ByIndex => true,
        }
    }
}

/// Everything a `GameRound` needs to set itself up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettings {
    pub width: f32,
    pub height: f32,
    pub starting_lives: u32,
    pub enemy_count: usize,
    pub power_up_count: usize,
    /// Units the player moves per tick
    pub player_step: f32,
    pub enemy_speed: EnemySpeed,
    /// Initial power-up velocity (units per second)
    pub power_up_velocity: Vec2,
    /// Restitution against the playfield edges (1.0 = elastic)
    pub power_up_bounce: f32,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            starting_lives: STARTING_LIVES,
            enemy_count: ENEMY_COUNT,
            power_up_count: POWER_UP_COUNT,
            player_step: PLAYER_STEP,
            enemy_speed: EnemySpeed::default(),
            power_up_velocity: Vec2::splat(POWER_UP_VELOCITY),
            power_up_bounce: POWER_UP_BOUNCE,
        }
    }
}

impl RoundSettings {
    /// Check the values a round cannot be built from
    pub fn is_valid(&self) -> bool {
        // Oversized JSON numbers come through as infinity
        let finite = self.width.is_finite()
            && self.height.is_finite()
            && self.player_step.is_finite()
            && self.power_up_bounce.is_finite()
            && self.power_up_velocity.is_finite();

        finite
            && self.width > 0.0
            && self.height > 0.0
            && self.starting_lives > 0
            && self.player_step > 0.0
            && self.power_up_bounce >= 0.0
            && self.enemy_speed.is_valid()
    }
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub round: RoundSettings,
    /// Run seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Stop the headless run after this many frames even if the round is alive
    pub max_frames: u64,
    /// Let the autopilot steer
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round: RoundSettings::default(),
            seed: None,
            max_frames: 60 * 60 * 5,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, rejecting values a round can't use
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) if settings.round.is_valid() => Some(settings),
            Ok(_) => {
                log::warn!("Settings rejected: invalid round values");
                None
            }
            Err(e) => {
                log::warn!("Settings parse error: {}", e);
                None
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

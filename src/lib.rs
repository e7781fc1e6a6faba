//! Hawk Dodge - a tiny arcade dodger
//!
//! Core modules:
//! - `sim`: Gameplay rules (movement, collision response, lives, round end)
//! - `platform`: Headless host supplying physics, overlap detection and hooks
//! - `settings`: Data-driven round configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{EnemySpeed, RoundSettings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 256.0;
    pub const PLAYFIELD_HEIGHT: f32 = 272.0;

    /// Round defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const ENEMY_COUNT: usize = 3;
    pub const POWER_UP_COUNT: usize = 5;

    /// Player moves this many units per tick while a key is held
    pub const PLAYER_STEP: f32 = 2.0;
    /// Player spawns this far left of the horizontal centre
    pub const PLAYER_START_OFFSET_X: f32 = 50.0;

    /// Enemy downward speed range (units per tick), upper bound exclusive
    pub const ENEMY_SPEED_MIN: f32 = 1.0;
    pub const ENEMY_SPEED_MAX: f32 = 4.0;

    /// Power-up velocity (units per second) and restitution
    pub const POWER_UP_VELOCITY: f32 = 100.0;
    pub const POWER_UP_BOUNCE: f32 = 1.0;

    /// Sprite hitbox sizes
    pub const PLAYER_SIZE: f32 = 32.0;
    pub const ENEMY_SIZE: f32 = 32.0;
    pub const POWER_UP_SIZE: f32 = 16.0;

    /// Explosion animation: 8 frames at 16 fps
    pub const EXPLOSION_FRAMES: u32 = 8;
    pub const EXPLOSION_FPS: f32 = 16.0;

    /// Host frame timestep (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Centre of a `width` x `height` rectangle anchored at the origin
#[inline]
pub fn rect_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}

//! Round state and core simulation types
//!
//! Everything a round needs lives here and is serializable, so a host can
//! snapshot a round mid-play.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{EnemySpeed, RoundSettings};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ticking, accepting input and collisions
    Active,
    /// Lives exhausted; terminal
    Ended,
}

/// Fixed playfield rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        crate::rect_center(self.width, self.height)
    }

    /// Uniform random point in `[0, width) x [0, height)`
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

/// The player's ship. Moved directly by input, no velocity of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    /// Spawn position: left of centre, vertically centred
    pub fn spawn(bounds: &Bounds) -> Self {
        Self {
            pos: Vec2::new(bounds.width / 2.0 - PLAYER_START_OFFSET_X, bounds.height / 2.0),
        }
    }
}

/// An enemy ship falling down the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Downward speed in units per tick
    pub speed: f32,
}

impl Enemy {
    /// Move back to the top edge at a random column
    pub fn reset_position(&mut self, bounds: &Bounds, rng: &mut impl Rng) {
        self.pos.y = 0.0;
        self.pos.x = rng.random_range(0.0..bounds.width);
    }
}

/// A bouncing power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    /// Units per second, integrated by host physics
    pub vel: Vec2,
    /// Restitution against the playfield edges
    pub bounce: f32,
    /// Cleared once collected; the slot stays but never renders or collides again
    pub active: bool,
}

/// Complete state of one playthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRound {
    pub bounds: Bounds,
    pub lives: u32,
    pub phase: RoundPhase,
    /// Units per tick for player movement
    pub player_step: f32,
    pub player: Player,
    /// Fixed-size, ordered
    pub enemies: Vec<Enemy>,
    /// Fixed-size, ordered; collected power-ups keep their slot
    pub power_ups: Vec<PowerUp>,
    /// Simulation tick counter
    pub ticks: u64,
    pub enemies_hit: u32,
    pub power_ups_collected: u32,
}

impl GameRound {
    /// Spawn everything for a fresh round
    pub fn new(settings: &RoundSettings, rng: &mut impl Rng) -> Self {
        let bounds = Bounds::new(settings.width, settings.height);

        let mut round = Self {
            bounds,
            lives: settings.starting_lives,
            phase: RoundPhase::Active,
            player_step: settings.player_step,
            player: Player::spawn(&bounds),
            enemies: Vec::with_capacity(settings.enemy_count),
            power_ups: Vec::with_capacity(settings.power_up_count),
            ticks: 0,
            enemies_hit: 0,
            power_ups_collected: 0,
        };

        round.spawn_enemies(settings.enemy_count, settings.enemy_speed, rng);
        round.spawn_power_ups(settings, rng);

        log::info!(
            "Round started: {} lives, {} enemies ({} speed), {} power-ups",
            round.lives,
            round.enemies.len(),
            settings.enemy_speed.as_str(),
            round.power_ups.len()
        );

        round
    }

    fn spawn_enemies(&mut self, count: usize, speed: EnemySpeed, rng: &mut impl Rng) {
        for i in 0..count {
            let speed = match speed {
                EnemySpeed::Constant(speed) => speed,
                EnemySpeed::Random { min, max } => rng.random_range(min..max),
                EnemySpeed::ByIndex => (i + 1) as f32,
            };
            let mut enemy = Enemy {
                pos: self.bounds.center(),
                speed,
            };
            enemy.reset_position(&self.bounds, rng);
            self.enemies.push(enemy);
        }
    }

    fn spawn_power_ups(&mut self, settings: &RoundSettings, rng: &mut impl Rng) {
        for _ in 0..settings.power_up_count {
            self.power_ups.push(PowerUp {
                pos: self.bounds.random_point(rng),
                vel: settings.power_up_velocity,
                bounce: settings.power_up_bounce,
                active: true,
            });
        }
    }

    /// Send enemy `index` back to the top at a random column
    ///
    /// Panics if `index` is out of range.
    pub fn reset_enemy_position(&mut self, index: usize, rng: &mut impl Rng) {
        let bounds = self.bounds;
        self.enemies[index].reset_position(&bounds, rng);
        log::debug!("Enemy {} reset to x={:.1}", index, self.enemies[index].pos.x);
    }

    pub fn is_ended(&self) -> bool {
        self.phase == RoundPhase::Ended
    }

    /// Number of power-ups still in play
    pub fn active_power_ups(&self) -> usize {
        self.power_ups.iter().filter(|p| p.active).count()
    }

    /// HUD text for the current lives count
    pub fn lives_text(&self) -> String {
        lives_text(self.lives)
    }
}

/// HUD text for a lives count
pub fn lives_text(lives: u32) -> String {
    format!("Lives: {}", lives)
}

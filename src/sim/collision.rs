//! Collision shapes and collision response
//!
//! Detection is the host's job: it tests hitboxes with `Aabb::overlaps` and
//! calls the `on_player_*` responses below for every pair that touches.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::events::{ExplosionSource, RoundHost};
use super::state::{Enemy, GameRound, Player, PowerUp, RoundPhase};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` centred on `center` (sprites are drawn from their centre)
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge don't count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

impl Player {
    pub fn hitbox(&self) -> Aabb {
        Aabb::centered(self.pos, Vec2::splat(PLAYER_SIZE))
    }
}

impl Enemy {
    pub fn hitbox(&self) -> Aabb {
        Aabb::centered(self.pos, Vec2::splat(ENEMY_SIZE))
    }
}

impl PowerUp {
    pub fn hitbox(&self) -> Aabb {
        Aabb::centered(self.pos, Vec2::splat(POWER_UP_SIZE))
    }
}

impl GameRound {
    /// The player ran into enemy `index`
    ///
    /// Blows up the enemy, sends it back to the top and costs a life. Losing
    /// the last life blows up the player too and ends the round.
    /// Ignored once the round has ended; panics if `index` is out of range.
    pub fn on_player_enemy_collision(
        &mut self,
        index: usize,
        rng: &mut impl Rng,
        host: &mut impl RoundHost,
    ) {
        if self.phase == RoundPhase::Ended {
            log::debug!("Ignoring enemy collision after round end");
            return;
        }

        host.play_explosion(self.enemies[index].pos, ExplosionSource::Enemy);
        self.reset_enemy_position(index, rng);

        self.lives = self.lives.saturating_sub(1);
        self.enemies_hit += 1;
        host.update_lives_text(&self.lives_text());
        log::debug!("Hit by enemy {}, {} lives left", index, self.lives);

        if self.lives == 0 {
            host.play_explosion(self.player.pos, ExplosionSource::Player);
            self.phase = RoundPhase::Ended;
            host.end_round();
            log::info!(
                "Round over after {} ticks ({} hits, {} power-ups)",
                self.ticks,
                self.enemies_hit,
                self.power_ups_collected
            );
        }
    }

    /// The player picked up power-up `index`
    ///
    /// Grants a life and retires the power-up for good. Touching a retired
    /// power-up does nothing. Panics if `index` is out of range.
    pub fn on_player_power_up_collide(&mut self, index: usize, host: &mut impl RoundHost) {
        if self.phase == RoundPhase::Ended || !self.power_ups[index].active {
            return;
        }

        self.power_ups[index].active = false;
        self.lives += 1;
        self.power_ups_collected += 1;
        host.update_lives_text(&self.lives_text());
        log::debug!("Collected power-up {}, {} lives", index, self.lives);
    }
}

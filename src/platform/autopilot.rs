//! Demo-mode steering
//!
//! Dodges the closest enemy falling toward the ship; when nothing is
//! threatening, heads for the nearest power-up.

use glam::Vec2;

use crate::consts::{ENEMY_SIZE, PLAYER_SIZE};
use crate::sim::{GameRound, TickInput};

/// How far above the ship an enemy starts to matter
const LOOKAHEAD: f32 = 96.0;
/// Horizontal gap that counts as a near miss
const CLEARANCE: f32 = (PLAYER_SIZE + ENEMY_SIZE) / 2.0 + 4.0;
/// Close enough to a target to stop chasing it
const ARRIVE: f32 = 2.0;

/// Pick the key state for the next tick
pub fn steer(round: &GameRound) -> TickInput {
    let player = round.player.pos;

    let threat = round
        .enemies
        .iter()
        .filter(|e| {
            let above = player.y - e.pos.y;
            (-ENEMY_SIZE..LOOKAHEAD).contains(&above) && (e.pos.x - player.x).abs() < CLEARANCE
        })
        .min_by(|a, b| {
            (player.y - a.pos.y)
                .abs()
                .partial_cmp(&(player.y - b.pos.y).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(enemy) = threat {
        // Slide away from the enemy, unless the wall is in the way
        let go_left = if enemy.pos.x > player.x {
            player.x > CLEARANCE
        } else {
            player.x >= round.bounds.width - CLEARANCE
        };
        return TickInput {
            left: go_left,
            right: !go_left,
            up: false,
            down: player.y < round.bounds.height - PLAYER_SIZE,
        };
    }

    let target = round
        .power_ups
        .iter()
        .filter(|p| p.active)
        .map(|p| p.pos)
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or_else(|| round.bounds.center());

    toward(player, target)
}

fn toward(from: Vec2, to: Vec2) -> TickInput {
    let delta = to - from;
    TickInput {
        left: delta.x < -ARRIVE,
        right: delta.x > ARRIVE,
        up: delta.y < -ARRIVE,
        down: delta.y > ARRIVE,
    }
}

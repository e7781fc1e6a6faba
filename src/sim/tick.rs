//! Per-frame simulation tick
//!
//! Moves the player from the frame's key state and drops the enemies.
//! Power-up flight is host physics and is not touched here.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameRound, RoundPhase};

/// Directional key state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the round by one tick
pub fn tick(round: &mut GameRound, input: &TickInput, rng: &mut impl Rng) {
    // Don't tick once the round is over
    if round.phase == RoundPhase::Ended {
        return;
    }

    round.ticks += 1;

    move_player(round, input);
    advance_enemies(round, rng);

    log::trace!(
        "tick {}: player=({:.0}, {:.0})",
        round.ticks,
        round.player.pos.x,
        round.player.pos.y
    );
}

/// Step the player. Bounds are checked before moving, so the ship can end
/// up one step past an edge before it stops.
fn move_player(round: &mut GameRound, input: &TickInput) {
    let step = round.player_step;
    let bounds = round.bounds;
    let pos = &mut round.player.pos;

    if input.left && pos.x > 0.0 {
        pos.x -= step;
    } else if input.right && pos.x < bounds.width {
        pos.x += step;
    }

    if input.up && pos.y > 0.0 {
        pos.y -= step;
    } else if input.down && pos.y < bounds.height {
        pos.y += step;
    }
}

/// Drop every enemy by its speed; anything past the bottom goes back to the top
fn advance_enemies(round: &mut GameRound, rng: &mut impl Rng) {
    for i in 0..round.enemies.len() {
        let enemy = &mut round.enemies[i];
        enemy.pos.y += enemy.speed;

        if enemy.pos.y > round.bounds.height {
            round.reset_enemy_position(i, rng);
        }
    }
}

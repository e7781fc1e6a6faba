//! Arcade physics for power-ups
//!
//! Constant velocity, reflected off the playfield edges with the body's
//! restitution. Collected power-ups are disabled and stay where they are.

use glam::Vec2;

use crate::consts::POWER_UP_SIZE;
use crate::sim::{Bounds, GameRound, PowerUp};

/// Integrate every active power-up by `dt` seconds
pub fn step_power_ups(round: &mut GameRound, dt: f32) {
    let bounds = round.bounds;
    for power_up in round.power_ups.iter_mut().filter(|p| p.active) {
        step_body(power_up, &bounds, dt);
    }
}

fn step_body(power_up: &mut PowerUp, bounds: &Bounds, dt: f32) {
    let half = Vec2::splat(POWER_UP_SIZE / 2.0);
    let min = half;
    let max = Vec2::new(bounds.width, bounds.height) - half;

    power_up.pos += power_up.vel * dt;

    if power_up.pos.x < min.x {
        power_up.pos.x = min.x;
        power_up.vel.x = power_up.vel.x.abs() * power_up.bounce;
    } else if power_up.pos.x > max.x {
        power_up.pos.x = max.x;
        power_up.vel.x = -power_up.vel.x.abs() * power_up.bounce;
    }

    if power_up.pos.y < min.y {
        power_up.pos.y = min.y;
        power_up.vel.y = power_up.vel.y.abs() * power_up.bounce;
    } else if power_up.pos.y > max.y {
        power_up.pos.y = max.y;
        power_up.vel.y = -power_up.vel.y.abs() * power_up.bounce;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::settings::RoundSettings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_round() -> GameRound {
        let mut rng = Pcg32::seed_from_u64(30);
        GameRound::new(&RoundSettings::default(), &mut rng)
    }

    #[test]
    fn test_constant_velocity() {
        let mut round = new_round();
        round.power_ups[0].pos = Vec2::new(100.0, 100.0);

        step_power_ups(&mut round, 0.5);

        assert_eq!(round.power_ups[0].pos, Vec2::new(150.0, 150.0));
        assert_eq!(round.power_ups[0].vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_bounces_off_corner() {
        let mut round = new_round();
        round.power_ups[0].pos = Vec2::new(245.0, 261.0);

        step_power_ups(&mut round, 0.1);

        let p = &round.power_ups[0];
        assert_eq!(p.pos, Vec2::new(248.0, 264.0));
        assert_eq!(p.vel, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn test_stays_inside_for_a_long_flight() {
        let mut round = new_round();
        for _ in 0..10_000 {
            step_power_ups(&mut round, FRAME_DT);
            for p in &round.power_ups {
                assert!(p.pos.x >= 8.0 && p.pos.x <= 248.0, "x {}", p.pos.x);
                assert!(p.pos.y >= 8.0 && p.pos.y <= 264.0, "y {}", p.pos.y);
                assert_eq!(p.vel.length(), Vec2::splat(100.0).length());
            }
        }
    }

    #[test]
    fn test_collected_power_up_stays_put() {
        let mut round = new_round();
        round.power_ups[1].active = false;
        let pos = round.power_ups[1].pos;

        step_power_ups(&mut round, 1.0);

        assert_eq!(round.power_ups[1].pos, pos);
    }
}

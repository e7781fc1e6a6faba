use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use hawk_dodge::RoundSettings;
use hawk_dodge::platform::{Scene, Session};
use hawk_dodge::sim::{EventQueue, GameRound, RoundEvent, RoundPhase, TickInput, tick};

fn arb_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down)| TickInput {
            left,
            right,
            up,
            down,
        },
    )
}

/// Something the host can do to a round in one step
#[derive(Debug, Clone)]
enum Step {
    Tick(TickInput),
    EnemyHit(usize),
    PowerUp(usize),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => arb_input().prop_map(Step::Tick),
        1 => (0usize..3).prop_map(Step::EnemyHit),
        1 => (0usize..5).prop_map(Step::PowerUp),
    ]
}

proptest! {
    #[test]
    fn player_stays_near_the_playfield(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arb_input(), 0..400),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut round = GameRound::new(&RoundSettings::default(), &mut rng);

        for input in &inputs {
            tick(&mut round, input, &mut rng);
            let pos = round.player.pos;
            prop_assert!((-1.0..=257.0).contains(&pos.x), "x = {}", pos.x);
            prop_assert!((-1.0..=273.0).contains(&pos.y), "y = {}", pos.y);
        }
    }

    #[test]
    fn enemies_stay_in_their_lane(
        seed in any::<u64>(),
        ticks in 1usize..600,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut round = GameRound::new(&RoundSettings::default(), &mut rng);

        for _ in 0..ticks {
            tick(&mut round, &TickInput::default(), &mut rng);
            for enemy in &round.enemies {
                prop_assert!((0.0..256.0).contains(&enemy.pos.x));
                prop_assert!((0.0..=272.0).contains(&enemy.pos.y));
            }
        }
    }

    #[test]
    fn lives_move_only_through_collisions(
        seed in any::<u64>(),
        steps in prop::collection::vec(arb_step(), 0..200),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut round = GameRound::new(&RoundSettings::default(), &mut rng);
        let mut host = EventQueue::new();

        for step in &steps {
            let before = round.lives;
            let was_ended = round.is_ended();
            match step {
                Step::Tick(input) => {
                    tick(&mut round, input, &mut rng);
                    prop_assert_eq!(round.lives, before);
                }
                Step::EnemyHit(i) => {
                    round.on_player_enemy_collision(*i, &mut rng, &mut host);
                    let expected = if was_ended { before } else { before - 1 };
                    prop_assert_eq!(round.lives, expected);
                }
                Step::PowerUp(i) => {
                    let active = round.power_ups[*i].active;
                    round.on_player_power_up_collide(*i, &mut host);
                    let expected = if was_ended || !active { before } else { before + 1 };
                    prop_assert_eq!(round.lives, expected);
                }
            }

            // Ended exactly when the lives run out, and never comes back
            prop_assert_eq!(round.phase == RoundPhase::Ended, round.lives == 0);
            if was_ended {
                prop_assert!(round.is_ended());
            }
        }

        let ends = host.events().iter().filter(|e| **e == RoundEvent::RoundEnded).count();
        prop_assert_eq!(ends, usize::from(round.is_ended()));
    }
}

#[test]
fn three_hits_then_game_over() {
    let mut rng = Pcg32::seed_from_u64(2024);
    let mut round = GameRound::new(&RoundSettings::default(), &mut rng);
    let mut host = EventQueue::new();

    for (hit, lives) in [(0, 2), (1, 1)] {
        round.on_player_enemy_collision(hit, &mut rng, &mut host);
        assert_eq!(round.lives, lives);
        assert_eq!(round.phase, RoundPhase::Active);
    }
    round.on_player_enemy_collision(0, &mut rng, &mut host);
    assert_eq!(round.phase, RoundPhase::Ended);

    let events: Vec<RoundEvent> = host.drain().collect();
    let texts: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            RoundEvent::LivesChanged { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["Lives: 2", "Lives: 1", "Lives: 0"]);
    assert_eq!(events.last(), Some(&RoundEvent::RoundEnded));
}

#[test]
fn unattended_session_eventually_ends() {
    // Nobody steering: enemies keep raining down on a parked ship
    let settings = RoundSettings {
        power_up_count: 0,
        ..Default::default()
    };
    let mut session = Session::new(&settings, 7);
    session.round.player.pos = Vec2::new(128.0, 200.0);

    let mut frames = 0;
    while session.scene == Scene::Playing && frames < 1_000_000 {
        session.frame(&TickInput::default(), hawk_dodge::consts::FRAME_DT);
        frames += 1;
    }

    assert_eq!(session.scene, Scene::EndGame);
    assert_eq!(session.round.lives, 0);
    assert_eq!(session.round.enemies_hit, 3);
    assert_eq!(session.hud_text, "Lives: 0");
}

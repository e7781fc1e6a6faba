//! Hawk Dodge entry point
//!
//! Plays one round headlessly and prints how it went.
//!
//! Usage: `hawk-dodge [SETTINGS_JSON]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use hawk_dodge::Settings;
use hawk_dodge::consts::FRAME_DT;
use hawk_dodge::platform::{Scene, Session, autopilot};
use hawk_dodge::sim::TickInput;

fn main() {
    env_logger::init();
    log::info!("Hawk Dodge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut session = Session::new(&settings.round, seed);

    while session.scene == Scene::Playing && session.frames < settings.max_frames {
        let input = if settings.autopilot {
            autopilot::steer(&session.round)
        } else {
            TickInput::default()
        };
        session.frame(&input, FRAME_DT);
    }

    if session.scene == Scene::Playing {
        log::info!("Stopped after {} frames with the round still going", session.frames);
    }

    let round = &session.round;
    println!("Seed:      {}", session.seed);
    println!("Survived:  {} ticks ({:.1}s)", round.ticks, round.ticks as f32 * FRAME_DT);
    println!("Hits:      {}", round.enemies_hit);
    println!("Power-ups: {}/{}", round.power_ups_collected, round.power_ups.len());
    println!("{}", session.hud_text);
    if round.is_ended() {
        println!("GAME OVER");
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

//! Headless platform host
//!
//! Plays the engine's part around a `GameRound`:
//! - Power-up physics (`physics`)
//! - Overlap detection and collision dispatch
//! - Explosion effects, HUD text and the switch to the end screen
//! - Demo-mode input (`autopilot`)

pub mod autopilot;
pub mod physics;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::RoundSettings;
use crate::sim::{EventQueue, ExplosionSource, GameRound, RoundEvent, TickInput, tick};

/// Which screen the host is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Playing,
    EndGame,
}

/// A running explosion animation
#[derive(Debug, Clone)]
pub struct ExplosionFx {
    pub pos: Vec2,
    pub source: ExplosionSource,
    /// Seconds since the animation started
    pub elapsed: f32,
}

impl ExplosionFx {
    /// Current animation frame (0-based)
    pub fn frame(&self) -> u32 {
        (self.elapsed * EXPLOSION_FPS) as u32
    }

    /// Hidden once the last frame has played
    pub fn finished(&self) -> bool {
        self.frame() >= EXPLOSION_FRAMES
    }
}

/// One playthrough plus everything the host keeps around it
pub struct Session {
    pub seed: u64,
    pub round: GameRound,
    pub scene: Scene,
    /// Lives counter as displayed
    pub hud_text: String,
    pub explosions: Vec<ExplosionFx>,
    /// Frames run so far, including frames after the round ended
    pub frames: u64,
    rng: Pcg32,
    events: EventQueue,
}

impl Session {
    pub fn new(settings: &RoundSettings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = GameRound::new(settings, &mut rng);
        let hud_text = round.lives_text();
        log::info!("Session started with seed {}", seed);

        Self {
            seed,
            round,
            scene: Scene::Playing,
            hud_text,
            explosions: Vec::new(),
            frames: 0,
            rng,
            events: EventQueue::new(),
        }
    }

    /// Run one host frame: tick, physics, overlaps, then hook effects
    pub fn frame(&mut self, input: &TickInput, dt: f32) {
        self.frames += 1;

        if self.scene == Scene::Playing {
            tick(&mut self.round, input, &mut self.rng);
            physics::step_power_ups(&mut self.round, dt);
            self.dispatch_overlaps();
            self.apply_events();
        }

        for fx in &mut self.explosions {
            fx.elapsed += dt;
        }
        self.explosions.retain(|fx| !fx.finished());
    }

    fn dispatch_overlaps(&mut self) {
        for i in 0..self.round.enemies.len() {
            if self.round.is_ended() {
                return;
            }
            if self.round.player.hitbox().overlaps(&self.round.enemies[i].hitbox()) {
                self.round
                    .on_player_enemy_collision(i, &mut self.rng, &mut self.events);
            }
        }

        for i in 0..self.round.power_ups.len() {
            let power_up = &self.round.power_ups[i];
            if power_up.active && self.round.player.hitbox().overlaps(&power_up.hitbox()) {
                self.round.on_player_power_up_collide(i, &mut self.events);
            }
        }
    }

    fn apply_events(&mut self) {
        for event in self.events.drain() {
            match event {
                RoundEvent::Explosion { pos, source } => {
                    log::debug!("Explosion ({:?}) at ({:.0}, {:.0})", source, pos.x, pos.y);
                    self.explosions.push(ExplosionFx {
                        pos,
                        source,
                        elapsed: 0.0,
                    });
                }
                RoundEvent::LivesChanged { text } => {
                    self.hud_text = text;
                }
                RoundEvent::RoundEnded => {
                    log::info!("Switching to end screen");
                    self.scene = Scene::EndGame;
                }
            }
        }
    }
}

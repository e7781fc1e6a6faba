//! Hooks the simulation calls back into its host
//!
//! The core never draws, animates or switches screens. It reports what
//! happened through `RoundHost` and the host decides how to show it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which ship an explosion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSource {
    Enemy,
    Player,
}

/// Side effects a round asks its host to perform
pub trait RoundHost {
    /// Play an explosion animation centred on `pos`
    fn play_explosion(&mut self, pos: Vec2, source: ExplosionSource);
    /// Replace the lives counter shown on screen
    fn update_lives_text(&mut self, text: &str);
    /// Leave the game scene for the end screen
    fn end_round(&mut self);
}

/// A hook call recorded for later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    Explosion { pos: Vec2, source: ExplosionSource },
    LivesChanged { text: String },
    RoundEnded,
}

/// Buffers hook calls so the host can drain them once per frame
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<RoundEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events queued so far, oldest first
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = RoundEvent> + '_ {
        self.events.drain(..)
    }
}

impl RoundHost for EventQueue {
    fn play_explosion(&mut self, pos: Vec2, source: ExplosionSource) {
        self.events.push(RoundEvent::Explosion { pos, source });
    }

    fn update_lives_text(&mut self, text: &str) {
        self.events.push(RoundEvent::LivesChanged {
            text: text.to_string(),
        });
    }

    fn end_round(&mut self) {
        self.events.push(RoundEvent::RoundEnded);
    }
}

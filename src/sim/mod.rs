//! Gameplay simulation module
//!
//! All gameplay rules live here. This module stays free of rendering and
//! platform code:
//! - Randomness is injected by the caller
//! - Side effects go through `RoundHost`
//! - Stable iteration order (by slot index)

pub mod collision;
pub mod events;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use events::{EventQueue, ExplosionSource, RoundEvent, RoundHost};
pub use state::{Bounds, Enemy, GameRound, Player, PowerUp, RoundPhase, lives_text};
pub use tick::{TickInput, tick};

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, integer tick counts
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The host drives it with `tick(&mut GameState, &TickInput)` and drains
//! `GameEvent`s afterwards.

pub mod collision;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use spawn::{SpawnProfile, min_gap};
pub use state::{
    Chaser, Coin, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Particle, PowerUp,
    PowerUpKind, Rect, Runner, StatsSnapshot,
};
pub use tick::{TickInput, tick};

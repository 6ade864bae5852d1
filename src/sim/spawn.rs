//! Procedural obstacle and collectible spawning
//!
//! Runs once per tick during play. A distance gate keeps consecutive
//! obstacles at least a speed-scaled gap apart; a low per-tick probability
//! on top of the gate gives the gaps natural variance. Category selection
//! is a single uniform draw against a cumulative-weight table so the odds
//! are tunable and testable in one place.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Coin, GameState, Obstacle, ObstacleKind, PowerUp, PowerUpKind, Rect};
use crate::consts::*;

/// Fixed size/placement profile for an obstacle category
#[derive(Debug, Clone, Copy)]
pub struct SpawnProfile {
    pub w: f32,
    pub h: f32,
}

impl ObstacleKind {
    /// Per-category footprint, looked up once at spawn time
    pub fn profile(&self) -> SpawnProfile {
        match self {
            ObstacleKind::Haystack => SpawnProfile { w: 100.0, h: 100.0 },
            ObstacleKind::WaterDitch => SpawnProfile { w: 70.0, h: 20.0 },
            ObstacleKind::Buffalo => SpawnProfile { w: 120.0, h: 80.0 },
            ObstacleKind::Tricycle => SpawnProfile { w: 120.0, h: 100.0 },
            ObstacleKind::Bird => SpawnProfile { w: 50.0, h: 40.0 },
            ObstacleKind::ElectricPole => SpawnProfile { w: 100.0, h: 160.0 },
        }
    }
}

/// Cumulative spawn odds over the obstacle categories
const OBSTACLE_TABLE: [(ObstacleKind, f32); 6] = [
    (ObstacleKind::Haystack, 0.25),
    (ObstacleKind::WaterDitch, 0.15),
    (ObstacleKind::Buffalo, 0.15),
    (ObstacleKind::Tricycle, 0.15),
    (ObstacleKind::Bird, 0.15),
    (ObstacleKind::ElectricPole, 0.15),
];

/// Power-up sub-category odds
const POWERUP_TABLE: [(PowerUpKind, f32); 3] = [
    (PowerUpKind::Shield, 0.4),
    (PowerUpKind::Magnet, 0.3),
    (PowerUpKind::Fever, 0.3),
];

/// Minimum spawn gap for the current scroll speed
pub fn min_gap(speed: f32) -> f32 {
    SPAWN_BASE_GAP + speed * SPAWN_GAP_SPEED_FACTOR
}

/// Walk a cumulative-weight table with a single uniform draw
fn pick_weighted<T: Copy>(table: &[(T, f32)], roll: f32) -> T {
    let mut acc = 0.0;
    for &(item, weight) in table {
        acc += weight;
        if roll < acc {
            return item;
        }
    }
    // Float accumulation can leave the final entry a hair short of 1.0
    table[table.len() - 1].0
}

pub fn pick_obstacle_kind(rng: &mut Pcg32) -> ObstacleKind {
    pick_weighted(&OBSTACLE_TABLE, rng.random::<f32>())
}

pub fn pick_power_up_kind(rng: &mut Pcg32) -> PowerUpKind {
    pick_weighted(&POWERUP_TABLE, rng.random::<f32>())
}

/// Maybe introduce one obstacle (and at most one collectible) this tick.
///
/// With no prior obstacle the gate is always open; degenerate by design,
/// not an error.
pub fn maybe_spawn(state: &mut GameState, effective_speed: f32) {
    let gate_open = match state.obstacles.last() {
        None => true,
        Some(last) => VIEW_WIDTH - last.rect.x > min_gap(effective_speed),
    };
    if !gate_open || state.rng.random::<f32>() >= SPAWN_CHANCE {
        return;
    }

    let kind = pick_obstacle_kind(&mut state.rng);
    let profile = kind.profile();
    let x = VIEW_WIDTH + SPAWN_LEAD_IN;
    let y = match kind {
        // The ditch sits below the ground line
        ObstacleKind::WaterDitch => GROUND_Y + 10.0,
        // Birds fly at a jittered height
        ObstacleKind::Bird => GROUND_Y - 100.0 - state.rng.random_range(0.0..50.0),
        _ => GROUND_Y - profile.h,
    };
    state.obstacles.push(Obstacle {
        rect: Rect::new(x, y, profile.w, profile.h),
        kind,
        frame: 0,
        anim_timer: 0,
    });
    log::debug!("spawned {:?} at x={:.0} y={:.0}", kind, x, y);

    // Independent collectible roll, placed beyond the obstacle
    let item_roll = state.rng.random::<f32>();
    if item_roll > POWERUP_ROLL_THRESHOLD {
        let pu_kind = pick_power_up_kind(&mut state.rng);
        let pu_y = GROUND_Y - 50.0 - state.rng.random_range(0.0..80.0);
        let wobble = state.rng.random_range(0.0..std::f32::consts::PI);
        state.power_ups.push(PowerUp {
            rect: Rect::new(x + profile.w + 100.0, pu_y, 30.0, 30.0),
            kind: pu_kind,
            wobble,
        });
    } else if item_roll > COIN_ROLL_THRESHOLD {
        let coin_x = x + profile.w + 50.0 + state.rng.random_range(0.0..100.0);
        let coin_y = GROUND_Y - 40.0 - state.rng.random_range(0.0..100.0);
        let wobble = state.rng.random_range(0.0..std::f32::consts::TAU);
        state.coins.push(Coin {
            rect: Rect::new(coin_x, coin_y, 20.0, 20.0),
            wobble,
        });
    }
}

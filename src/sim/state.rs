//! Game state and core simulation types
//!
//! The entity registry: everything the simulation mutates lives here, owned
//! by a single `GameState` that the host passes into `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, simulation frozen
    Menu,
    /// Active run
    Playing,
    /// Run ended by chaser contact, simulation frozen
    GameOver,
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// X of the trailing (right) edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// The player-controlled runner
#[derive(Debug, Clone)]
pub struct Runner {
    pub rect: Rect,
    /// Vertical velocity (positive = downward)
    pub vy: f32,
    /// Lane position the runner eases back toward after a knockback
    pub target_x: f32,
    pub grounded: bool,
    pub jumping: bool,
    /// 0 on ground, 1 after first jump, 2 after double jump
    pub jump_count: u8,
    pub double_jump_available: bool,
    /// Derived each tick from fever/grace timers
    pub invincible: bool,
    /// Grace invincibility countdown (ticks)
    pub invincible_timer: u32,
    pub has_shield: bool,
    pub magnet_timer: u32,
    pub fever_timer: u32,
    // Animation (read by the renderer, never feeds back into physics)
    pub run_frame: u32,
    pub jump_frame: u32,
    pub anim_timer: u32,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                RUNNER_DEFAULT_X,
                GROUND_Y - RUNNER_SIZE,
                RUNNER_SIZE,
                RUNNER_SIZE,
            ),
            vy: 0.0,
            target_x: RUNNER_DEFAULT_X,
            grounded: true,
            jumping: false,
            jump_count: 0,
            double_jump_available: true,
            invincible: false,
            invincible_timer: 0,
            has_shield: false,
            magnet_timer: 0,
            fever_timer: 0,
            run_frame: 0,
            jump_frame: 0,
            anim_timer: 0,
        }
    }

    /// Fever forces invincibility regardless of the grace timer
    pub fn fever_active(&self) -> bool {
        self.fever_timer > 0
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

/// The pursuing chaser. Fixed lane, no physics of its own; its only gameplay
/// role is the fatal contact check against the runner.
#[derive(Debug, Clone)]
pub struct Chaser {
    pub rect: Rect,
    pub frame: u32,
    pub anim_timer: u32,
}

impl Chaser {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(CHASER_X, GROUND_Y - CHASER_SIZE, CHASER_SIZE, CHASER_SIZE),
            frame: 0,
            anim_timer: 0,
        }
    }
}

impl Default for Chaser {
    fn default() -> Self {
        Self::new()
    }
}

/// Obstacle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Haystack,
    /// Sits below ground level rather than on it
    WaterDitch,
    Buffalo,
    Tricycle,
    Bird,
    ElectricPole,
}

impl ObstacleKind {
    /// Whether this category cycles animation frames
    pub fn animated(&self) -> bool {
        matches!(self, ObstacleKind::Bird | ObstacleKind::Buffalo)
    }
}

/// An obstacle scrolling toward the runner
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    pub frame: u32,
    pub anim_timer: u32,
}

/// A collectible coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub rect: Rect,
    /// Fixed phase offset for the vertical bob, set once at spawn
    pub wobble: f32,
}

/// Power-up categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Shield,
    Magnet,
    Fever,
}

/// A timed-buff pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub wobble: f32,
}

/// A cosmetic particle. Never participates in collision.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 0xRRGGBB tint for the renderer
    pub color: u32,
    /// 0-1, decreases over time
    pub life: f32,
}

/// Per-tick stats published to the UI collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub score: u64,
    pub coins: u32,
    pub distance: u64,
}

/// Outbound notifications, drained by the host after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Published every tick while playing
    Stats(StatsSnapshot),
    /// Fired exactly once per fatal chaser contact
    GameOver,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub runner: Runner,
    pub chaser: Chaser,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    /// Visual only, not gameplay-affecting
    pub particles: Vec<Particle>,
    /// Monotonic scroll speed, ramps toward `MAX_SPEED`
    pub base_speed: f32,
    pub distance: f32,
    pub coins_collected: u32,
    pub frame: u64,
    /// Background parallax offset, wraps modulo viewport width
    pub bg_offset: f32,
    /// Impact feedback intensity, decays each tick; renderers may read it
    pub screen_shake: f32,
    /// Pending notifications for the host
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in the menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            runner: Runner::new(),
            chaser: Chaser::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            base_speed: INITIAL_SPEED,
            distance: 0.0,
            coins_collected: 0,
            frame: 0,
            bg_offset: 0.0,
            screen_shake: 0.0,
            events: Vec::new(),
        }
    }

    /// Rebuild the registry for a fresh run. Every entity set and aggregate
    /// goes back to its initial value; nothing leaks between runs.
    pub fn reset_run(&mut self) {
        self.runner = Runner::new();
        self.chaser = Chaser::new();
        self.obstacles.clear();
        self.coins.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.base_speed = INITIAL_SPEED;
        self.distance = 0.0;
        self.coins_collected = 0;
        self.frame = 0;
        self.bg_offset = 0.0;
        self.screen_shake = 0.0;
        self.events.clear();
    }

    /// Return to the menu with a full registry reset. Idempotent.
    pub fn enter_menu(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Menu;
    }

    /// Score = floor(distance + coins * 50)
    pub fn score(&self) -> u64 {
        (self.distance + self.coins_collected as f32 * COIN_SCORE).floor() as u64
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.score(),
            coins: self.coins_collected,
            distance: self.distance.floor() as u64,
        }
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

//! Paddy Run - a side-scrolling chase-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `commentary`: End-of-run title/comment generator
//! - `settings`: Host preferences
//!
//! Rendering, input capture, and UI live in the host around the simulation:
//! the host injects `TickInput`, calls `sim::tick`, and reads entity state
//! plus the drained event queue afterwards.

pub mod commentary;
pub mod settings;
pub mod sim;

pub use commentary::RunSummary;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical viewport
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 450.0;
    /// Y of the ground line entities stand on
    pub const GROUND_Y: f32 = 380.0;

    /// Vertical physics (per-tick units)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_IMPULSE: f32 = -14.0;
    /// Second jump gets a fraction of the full impulse
    pub const DOUBLE_JUMP_SCALE: f32 = 0.8;

    /// Runner defaults
    pub const RUNNER_SIZE: f32 = 80.0;
    pub const RUNNER_DEFAULT_X: f32 = 150.0;
    /// Lane recovery easing step per tick after a knockback
    pub const LANE_RECOVERY_STEP: f32 = 0.5;
    /// Horizontal shove toward the chaser on an unprotected hit
    pub const KNOCKBACK_OFFSET: f32 = 60.0;
    /// Upward nudge applied on knockback and shield absorb
    pub const HIT_NUDGE_VY: f32 = -5.0;
    /// Grace invincibility after a knockback (ticks)
    pub const KNOCKBACK_GRACE_TICKS: u32 = 40;
    /// Grace invincibility after a shield absorb (ticks)
    pub const SHIELD_GRACE_TICKS: u32 = 60;

    /// Chaser defaults
    pub const CHASER_SIZE: f32 = 75.0;
    pub const CHASER_X: f32 = 10.0;

    /// World scroll speed (per-tick pixels)
    pub const INITIAL_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 20.0;
    pub const SPEED_INCREMENT: f32 = 0.001;
    /// Distance accumulated per tick per unit of speed
    pub const DISTANCE_SCALE: f32 = 0.1;
    /// Score contribution per collected coin
    pub const COIN_SCORE: f32 = 50.0;
    /// Background parallax scroll factor
    pub const PARALLAX_FACTOR: f32 = 0.2;

    /// Buff durations (ticks)
    pub const MAGNET_DURATION_TICKS: u32 = 600;
    pub const FEVER_DURATION_TICKS: u32 = 300;
    /// Speed multiplier while fever is active
    pub const FEVER_SPEED_SCALE: f32 = 1.5;
    /// Coins collected per pickup while fever is active
    pub const FEVER_COIN_VALUE: u32 = 2;

    /// Magnet attraction
    pub const MAGNET_RADIUS: f32 = 300.0;
    pub const MAGNET_PULL_SPEED: f32 = 15.0;

    /// Collision hitbox shrink margin (forgiving hitboxes for padded sprites)
    pub const HITBOX_MARGIN: f32 = 10.0;

    /// Spawner gating
    pub const SPAWN_BASE_GAP: f32 = 250.0;
    pub const SPAWN_GAP_SPEED_FACTOR: f32 = 10.0;
    /// Per-tick spawn probability on eligible ticks
    pub const SPAWN_CHANCE: f32 = 0.03;
    /// Obstacles enter just past the right edge
    pub const SPAWN_LEAD_IN: f32 = 50.0;
    /// Collectible rolls: top 5% power-up, next 45% coin, rest nothing
    pub const POWERUP_ROLL_THRESHOLD: f32 = 0.95;
    pub const COIN_ROLL_THRESHOLD: f32 = 0.5;

    /// Off-screen cull overshoot for collectibles
    pub const CULL_MARGIN: f32 = 50.0;

    /// Particles
    pub const PARTICLE_LIFE_DECAY: f32 = 0.05;
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const MAX_PARTICLES: usize = 256;

    /// Animation cadence: advance one frame every N ticks, cycling 4 frames
    pub const ANIM_TICKS_PER_FRAME: u32 = 8;
    pub const ANIM_FRAME_COUNT: u32 = 4;

    /// Palette (0xRRGGBB), read by the renderer and used for particle tints
    pub const COLOR_GROUND: u32 = 0x8D6E63;
    pub const COLOR_RUNNER: u32 = 0xFF5722;
    pub const COLOR_WHITE: u32 = 0xFFFFFF;
    pub const COLOR_WATER: u32 = 0x4FC3F7;
    pub const COLOR_COIN: u32 = 0xFFD700;
    pub const COLOR_BUFF_SHIELD: u32 = 0x29B6F6;
    pub const COLOR_BUFF_MAGNET: u32 = 0xF44336;
    pub const COLOR_BUFF_FEVER: u32 = 0xE040FB;
}

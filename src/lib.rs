//! Space Defender - a planet defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, session state)
//! - `game`: Host-facing wrapper (intent queue, settings, best score)
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key-value storage and best-score record
//! - `autopilot`: Demo AI that plays the game
//! - `web`: wasm-bindgen exports for the browser build

pub mod autopilot;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default play-field size used before the host reports its viewport
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Ship dimensions; the ship sits SHIP_BOTTOM_OFFSET above the field bottom
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 60.0;
    pub const SHIP_BOTTOM_OFFSET: f32 = 100.0;
    /// Ticks the muzzle flash lasts after a shot
    pub const SHIP_SHOOT_COOLDOWN_TICKS: u32 = 12;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Minimum wall-clock gap between shots (ms)
    pub const SHOOT_COOLDOWN_MS: f64 = 300.0;

    /// Planet centre sits PLANET_BOTTOM_OFFSET above the field bottom
    pub const PLANET_BOTTOM_OFFSET: f32 = 50.0;
    pub const PLANET_MAX_RADIUS: f32 = 80.0;
    /// Planet radius is at most field width / PLANET_WIDTH_DIVISOR
    pub const PLANET_WIDTH_DIVISOR: f32 = 8.0;

    /// Asteroid attribute ranges
    pub const ASTEROID_MIN_SIZE: f32 = 20.0;
    pub const ASTEROID_MAX_SIZE: f32 = 50.0;
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    pub const ASTEROID_SPEED_PER_LEVEL: f32 = 0.3;
    pub const ASTEROID_MAX_ROTATION_SPEED: f32 = 0.025;
    pub const ASTEROID_MIN_VERTICES: u32 = 6;
    pub const ASTEROID_MAX_VERTICES: u32 = 8;
    pub const ASTEROID_MIN_HUE: f32 = 20.0;
    pub const ASTEROID_MAX_HUE: f32 = 50.0;

    /// Particle attribute ranges
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_MAX_SIZE: f32 = 6.0;
    pub const PARTICLE_MIN_DECAY: f32 = 0.02;
    pub const PARTICLE_MAX_DECAY: f32 = 0.07;

    /// Burst sizes per collision kind
    pub const ASTEROID_BURST: usize = 15;
    pub const SHIP_HIT_BURST: usize = 20;
    pub const PLANET_HIT_BURST: usize = 15;

    /// Session defaults
    pub const INITIAL_LIVES: u32 = 3;
    pub const INITIAL_SPAWN_INTERVAL_MS: u32 = 1500;
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 300;
    pub const SPAWN_INTERVAL_STEP_MS: u32 = 100;
    pub const POINTS_PER_LEVEL: u64 = 1000;
    /// An asteroid of size s is worth floor(ASTEROID_BASE_POINTS - s)
    pub const ASTEROID_BASE_POINTS: f32 = 100.0;
}


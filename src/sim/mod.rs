//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as a host timestamp, never read from the platform
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod progression;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{asteroid_hits_planet, asteroid_hits_ship, bullet_hits_asteroid};
pub use progression::{asteroid_points, award_score, spawn_interval_for_level};
pub use spawn::{create_asteroid, create_bullet, create_particle_burst};
pub use state::{
    Asteroid, Bullet, Color, Field, GameEvent, GamePhase, GameState, LifeLossCause, Particle,
    Planet, Session, Severity, Ship, Snapshot,
};
pub use tick::{Intent, TickInput, tick};

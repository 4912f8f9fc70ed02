//! Collision detection and resolution
//!
//! Shapes are approximated: asteroids and bullets as circles for shots,
//! bounding boxes for ship contact, circles again for the planet.
//! Passes walk their collections from the back so `Vec::remove` never
//! shifts an index that is still to be visited.

use glam::Vec2;

use super::progression::{asteroid_points, award_score};
use super::session::lose_life;
use super::spawn::create_particle_burst;
use super::state::{Asteroid, Bullet, Color, GameState, LifeLossCause, Planet, Ship, haptics};
use crate::consts::*;

/// Strict circle overlap (touching circles don't collide)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Strict axis-aligned box overlap; boxes given by top-left and size
#[inline]
pub fn boxes_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x + a_size.x > b_pos.x
        && a_pos.x < b_pos.x + b_size.x
        && a_pos.y + a_size.y > b_pos.y
        && a_pos.y < b_pos.y + b_size.y
}

pub fn bullet_hits_asteroid(bullet: &Bullet, asteroid: &Asteroid) -> bool {
    circles_overlap(
        bullet.center(),
        bullet.width / 2.0,
        asteroid.center(),
        asteroid.size / 2.0,
    )
}

pub fn asteroid_hits_ship(asteroid: &Asteroid, ship: &Ship) -> bool {
    boxes_overlap(
        asteroid.pos,
        Vec2::splat(asteroid.size),
        ship.pos,
        ship.size(),
    )
}

/// Only asteroids whose bottom edge has dropped into the planet band are tested
pub fn asteroid_hits_planet(asteroid: &Asteroid, planet: &Planet, field_height: f32) -> bool {
    asteroid.pos.y + asteroid.size > field_height - planet.radius
        && circles_overlap(
            asteroid.center(),
            asteroid.size / 2.0,
            planet.center,
            planet.radius,
        )
}

/// Run all three passes against the already-moved entities
pub fn resolve_collisions(state: &mut GameState) {
    resolve_bullet_hits(state);
    resolve_ship_hits(state);
    resolve_planet_hits(state);
}

/// Each bullet consumes at most one asteroid: the first hit found scanning
/// asteroids from newest to oldest.
pub fn resolve_bullet_hits(state: &mut GameState) {
    for i in (0..state.bullets.len()).rev() {
        if !state.session.is_running() {
            return;
        }
        let bullet = &state.bullets[i];
        let Some(j) = state
            .asteroids
            .iter()
            .rposition(|asteroid| bullet_hits_asteroid(bullet, asteroid))
        else {
            continue;
        };

        state.bullets.remove(i);
        let asteroid = state.asteroids.remove(j);
        let burst =
            create_particle_burst(&mut state.rng, asteroid.center(), ASTEROID_BURST, asteroid.color);
        state.particles.extend(burst);
        state.haptic(haptics::ASTEROID_DESTROYED);
        log::trace!("Asteroid of size {:.1} destroyed", asteroid.size);
        award_score(state, asteroid_points(asteroid.size));
    }
}

pub fn resolve_ship_hits(state: &mut GameState) {
    for i in (0..state.asteroids.len()).rev() {
        if !state.session.is_running() {
            return;
        }
        if !asteroid_hits_ship(&state.asteroids[i], &state.ship) {
            continue;
        }
        let asteroid = state.asteroids.remove(i);
        let burst =
            create_particle_burst(&mut state.rng, asteroid.center(), SHIP_HIT_BURST, Color::SHIP_HIT);
        state.particles.extend(burst);
        lose_life(state, LifeLossCause::Ship);
    }
}

pub fn resolve_planet_hits(state: &mut GameState) {
    for i in (0..state.asteroids.len()).rev() {
        if !state.session.is_running() {
            return;
        }
        if !asteroid_hits_planet(&state.asteroids[i], &state.planet, state.field.height) {
            continue;
        }
        let asteroid = state.asteroids.remove(i);
        let burst = create_particle_burst(
            &mut state.rng,
            asteroid.center(),
            PLANET_HIT_BURST,
            Color::PLANET_HIT,
        );
        state.particles.extend(burst);
        lose_life(state, LifeLossCause::Planet);
    }
}

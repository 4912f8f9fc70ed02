//! Per-tick integration and culling
//!
//! Culling uses `retain`, which keeps survivors in their original order so
//! the collision passes see a stable sequence.

use super::state::{Asteroid, Bullet, Particle};

/// Fall, spin, and drop asteroids that left through the bottom
pub fn advance_asteroids(asteroids: &mut Vec<Asteroid>, field_height: f32) {
    for asteroid in asteroids.iter_mut() {
        asteroid.pos.y += asteroid.speed;
        asteroid.rotation += asteroid.rotation_speed;
    }
    asteroids.retain(|a| a.pos.y <= field_height + a.size);
}

/// Rise, and drop bullets that left through the top
pub fn advance_bullets(bullets: &mut Vec<Bullet>) {
    for bullet in bullets.iter_mut() {
        bullet.pos.y -= bullet.speed;
    }
    bullets.retain(|b| b.pos.y >= -b.height);
}

/// Drift and fade; expired particles are removed
pub fn advance_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= particle.decay;
    }
    particles.retain(|p| p.life > 0.0);
}

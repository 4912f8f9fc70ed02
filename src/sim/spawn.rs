//! Entity construction with randomized attributes
//!
//! All randomness comes from the caller's RNG so a seeded source yields
//! reproducible waves.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Bullet, Color, Particle, Ship};
use crate::consts::*;

/// Build an asteroid just above the top edge of a field `field_width` wide
pub fn create_asteroid<R: Rng>(rng: &mut R, level: u32, field_width: f32) -> Asteroid {
    let size = rng.random_range(ASTEROID_MIN_SIZE..ASTEROID_MAX_SIZE);
    let max_x = field_width - size;
    let x = if max_x > 0.0 {
        rng.random_range(0.0..max_x)
    } else {
        0.0
    };
    let speed = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED)
        + level as f32 * ASTEROID_SPEED_PER_LEVEL;
    let hue = rng.random_range(ASTEROID_MIN_HUE..ASTEROID_MAX_HUE);

    Asteroid {
        pos: Vec2::new(x, -size),
        size,
        speed,
        rotation: rng.random_range(0.0..TAU),
        rotation_speed: rng
            .random_range(-ASTEROID_MAX_ROTATION_SPEED..ASTEROID_MAX_ROTATION_SPEED),
        color: Color::asteroid(hue),
        vertices: rng.random_range(ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES),
    }
}

/// Build `count` particles flying out of `origin` in random directions
pub fn create_particle_burst<R: Rng>(
    rng: &mut R,
    origin: Vec2,
    count: usize,
    color: Color,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            pos: origin,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            ),
            size: rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            color,
            life: 1.0,
            decay: rng.random_range(PARTICLE_MIN_DECAY..PARTICLE_MAX_DECAY),
        })
        .collect()
}

/// Bullet leaving the nose of the ship
pub fn create_bullet(ship: &Ship) -> Bullet {
    Bullet {
        pos: Vec2::new(ship.pos.x + ship.width / 2.0 - BULLET_WIDTH / 2.0, ship.pos.y),
        width: BULLET_WIDTH,
        height: BULLET_HEIGHT,
        speed: BULLET_SPEED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Field;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_asteroid_starts_above_field() {
        let mut rng = Pcg32::seed_from_u64(7);
        let asteroid = create_asteroid(&mut rng, 1, 800.0);
        assert_eq!(asteroid.pos.y, -asteroid.size);
    }

    #[test]
    fn test_asteroid_in_narrow_field_pinned_left() {
        let mut rng = Pcg32::seed_from_u64(7);
        let asteroid = create_asteroid(&mut rng, 1, 10.0);
        assert_eq!(asteroid.pos.x, 0.0);
    }

    #[test]
    fn test_burst_particles_start_at_origin() {
        let mut rng = Pcg32::seed_from_u64(3);
        let origin = Vec2::new(120.0, 40.0);
        let burst = create_particle_burst(&mut rng, origin, 15, Color::PLANET_HIT);
        assert_eq!(burst.len(), 15);
        for p in &burst {
            assert_eq!(p.pos, origin);
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color, Color::PLANET_HIT);
        }
    }

    #[test]
    fn test_bullet_centered_on_ship() {
        let ship = Ship::new(Field::default());
        let bullet = create_bullet(&ship);
        assert!((bullet.center().x - ship.center().x).abs() < 0.001);
        assert_eq!(bullet.pos.y, ship.pos.y);
    }

    #[test]
    fn test_same_seed_same_asteroid() {
        let a = create_asteroid(&mut Pcg32::seed_from_u64(42), 3, 640.0);
        let b = create_asteroid(&mut Pcg32::seed_from_u64(42), 3, 640.0);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn asteroid_attributes_in_range(seed in any::<u64>(), level in 1u32..50, width in 60.0f32..2000.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let a = create_asteroid(&mut rng, level, width);
            prop_assert!(a.size >= ASTEROID_MIN_SIZE && a.size < ASTEROID_MAX_SIZE);
            prop_assert!(a.pos.x >= 0.0 && a.pos.x <= width - a.size);
            let base = a.speed - level as f32 * ASTEROID_SPEED_PER_LEVEL;
            prop_assert!(base >= ASTEROID_MIN_SPEED - 1e-3 && base < ASTEROID_MAX_SPEED + 1e-3);
            prop_assert!(a.rotation_speed.abs() <= ASTEROID_MAX_ROTATION_SPEED);
            prop_assert!((6..=8).contains(&a.vertices));
        }

        #[test]
        fn particle_attributes_in_range(seed in any::<u64>(), count in 0usize..40) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let burst = create_particle_burst(&mut rng, Vec2::ZERO, count, Color::SHIP_HIT);
            prop_assert_eq!(burst.len(), count);
            for p in burst {
                prop_assert!(p.vel.x.abs() <= PARTICLE_MAX_SPEED && p.vel.y.abs() <= PARTICLE_MAX_SPEED);
                prop_assert!(p.decay >= PARTICLE_MIN_DECAY && p.decay < PARTICLE_MAX_DECAY);
            }
        }
    }
}

//! Particle bursts for gameplay feedback
//!
//! Purely cosmetic: spawned by jumps, pickups, and hits, integrated with a
//! gravity drift, and culled once their life runs out.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Particle;
use crate::consts::{MAX_PARTICLES, PARTICLE_GRAVITY, PARTICLE_LIFE_DECAY};

/// Append `count` particles bursting outward from `(x, y)`.
///
/// The pool is capped; the oldest particles are evicted to make room.
pub fn emit(particles: &mut Vec<Particle>, rng: &mut Pcg32, x: f32, y: f32, color: u32, count: u32) {
    for _ in 0..count {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        particles.push(Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(rng.random_range(-2.5..2.5), rng.random_range(-2.5..2.5)),
            size: rng.random_range(2.0..6.0),
            color,
            life: 1.0,
        });
    }
}

/// Integrate all particles by one tick and drop the dead ones.
pub fn step(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.vel.y += PARTICLE_GRAVITY;
        p.pos += p.vel;
        p.life -= PARTICLE_LIFE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}

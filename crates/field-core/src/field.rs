//! Particle field simulation state and per-tick physics.
//!
//! The field is an explicit context object: the host feeds it the latest
//! pointer position and viewport size, then drives it one `step` per
//! animation frame. Nothing here touches a platform API, so the whole
//! module runs natively under `cargo test`.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// A simulated point entity. Radius is fixed at creation; color is not
/// stored because the foreground is a per-frame theme lookup.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Tunable parameters, defaulting to the production values.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub link_radius: f32,
    pub link_alpha_max: f32,
    pub friction: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            link_radius: LINK_RADIUS,
            link_alpha_max: LINK_ALPHA_MAX,
            friction: FRICTION,
        }
    }
}

pub struct ParticleField {
    pub params: FieldParams,
    pub particles: Vec<Particle>,
    viewport: Vec2,
    pointer: Vec2,
}

impl ParticleField {
    /// Spawn the whole population once: positions uniform over the viewport,
    /// velocity components uniform in [-1, 1), radii in [0.5, 2.5). The
    /// collection length never changes afterwards.
    pub fn new(params: FieldParams, viewport: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.particle_count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.gen::<f32>() * viewport.x,
                    rng.gen::<f32>() * viewport.y,
                ),
                vel: Vec2::new(
                    rng.gen::<f32>() * 2.0 * SPAWN_SPEED_MAX - SPAWN_SPEED_MAX,
                    rng.gen::<f32>() * 2.0 * SPAWN_SPEED_MAX - SPAWN_SPEED_MAX,
                ),
                radius: rng.gen::<f32>() * RADIUS_SPAN + RADIUS_MIN,
            })
            .collect::<Vec<_>>();
        log::info!(
            "particle field spawned: {} particles over {}x{}",
            particles.len(),
            viewport.x,
            viewport.y
        );
        Self {
            params,
            particles,
            viewport,
            // Until the first pointer event arrives, repel from the center.
            pointer: viewport * 0.5,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Latest pointer sample in viewport coordinates. Last writer wins;
    /// missed samples are never interpolated.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// New viewport extent. Particles left out of range are not corrected
    /// here; reflection pulls them back over the following steps.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Advance the simulation one tick. Per particle: pointer repulsion,
    /// friction, integration, boundary reflection, in that order.
    pub fn step(&mut self) {
        let pointer = self.pointer;
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.vel += repulsion_impulse(p.pos, pointer, &self.params);
            p.vel *= self.params.friction;
            p.pos += p.vel;
            // Reflect velocity only; the overshoot position self-corrects
            // next step once the particle is no longer moving outwards.
            if p.pos.x < 0.0 || p.pos.x > viewport.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > viewport.y {
                p.vel.y = -p.vel.y;
            }
        }
    }
}

/// Velocity impulse pushing a particle away from the pointer.
///
/// Zero outside `repulsion_radius` and exactly at distance zero (the
/// direction is undefined there), otherwise scaled by
/// `(radius - d) / radius * strength` along the unit vector away from the
/// pointer.
#[inline]
pub fn repulsion_impulse(pos: Vec2, pointer: Vec2, params: &FieldParams) -> Vec2 {
    let to_pointer = pointer - pos;
    let distance = to_pointer.length();
    if distance <= 0.0 || distance >= params.repulsion_radius {
        return Vec2::ZERO;
    }
    let force = (params.repulsion_radius - distance) / params.repulsion_radius;
    -(to_pointer / distance) * force * params.repulsion_strength
}

/// Link line opacity for a pair at the given distance, or `None` when the
/// pair is at or beyond `link_radius` (the threshold is strict).
#[inline]
pub fn link_alpha(distance: f32, params: &FieldParams) -> Option<f32> {
    if distance >= params.link_radius {
        return None;
    }
    Some((params.link_radius - distance) / params.link_radius * params.link_alpha_max)
}

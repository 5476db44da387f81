//! Frame composition over an injected drawing capability.
//!
//! The core never talks to a canvas directly. The host hands in a [`Painter`]
//! (Canvas 2D on the web, a recording stub in tests) and the per-frame pass
//! runs against it: clear, link lines over pre-step positions, physics step,
//! particle discs.

use crate::field::{link_alpha, ParticleField};
use crate::theme::Rgb;
use glam::Vec2;

/// Minimal drawing surface contract: solid fill and alpha-stroked lines.
pub trait Painter {
    /// Clear the surface and set the foreground for the coming frame.
    fn begin_frame(&mut self, viewport: Vec2, foreground: Rgb);
    /// Stroke a link line at the given opacity, in the frame foreground.
    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32);
    /// Fill a particle disc in the frame foreground.
    fn disc(&mut self, center: Vec2, radius: f32);
}

/// Run one full frame: clear, links, step, discs.
///
/// The foreground is resolved by the caller from the active theme each frame
/// and passed down once; painters get a scalar alpha per link, never a fresh
/// color, keeping the O(N²) pass allocation-free.
pub fn render_frame(field: &mut ParticleField, painter: &mut impl Painter, foreground: Rgb) {
    painter.begin_frame(field.viewport(), foreground);
    draw_links(field, painter);
    field.step();
    for p in &field.particles {
        painter.disc(p.pos, p.radius);
    }
}

/// O(N²) pass over unordered particle pairs; ~4,950 distance checks at the
/// default population of 100.
pub fn draw_links(field: &ParticleField, painter: &mut impl Painter) {
    let particles = &field.particles;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].pos.distance(particles[j].pos);
            if let Some(alpha) = link_alpha(distance, &field.params) {
                painter.line(particles[i].pos, particles[j].pos, alpha);
            }
        }
    }
}

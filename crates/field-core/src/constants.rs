// Simulation tuning constants shared between the core and the web frontend.

// Population
pub const DEFAULT_PARTICLE_COUNT: usize = 100;

// Interaction radii (viewport units)
pub const REPULSION_RADIUS: f32 = 150.0; // pointer influence cutoff
pub const LINK_RADIUS: f32 = 150.0; // pair line cutoff, strict

// Motion
pub const REPULSION_STRENGTH: f32 = 0.2; // impulse scale at zero distance
pub const FRICTION: f32 = 0.95; // per-frame velocity multiplier
pub const SPAWN_SPEED_MAX: f32 = 1.0; // initial velocity components in [-1, 1)

// Particle sizing: radius uniform in [RADIUS_MIN, RADIUS_MIN + RADIUS_SPAN)
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_SPAN: f32 = 2.0;

// Link rendering
pub const LINK_ALPHA_MAX: f32 = 0.3; // alpha at zero pair distance
pub const LINK_WIDTH: f32 = 0.5;

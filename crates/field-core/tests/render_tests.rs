// Host-side tests for the frame pass, driven through a recording painter
// instead of a live canvas.

use field_core::*;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    BeginFrame { viewport: Vec2, foreground: Rgb },
    Line { from: Vec2, to: Vec2, alpha: f32 },
    Disc { center: Vec2, radius: f32 },
}

#[derive(Default)]
struct RecordingPainter {
    ops: Vec<Op>,
}

impl Painter for RecordingPainter {
    fn begin_frame(&mut self, viewport: Vec2, foreground: Rgb) {
        self.ops.push(Op::BeginFrame {
            viewport,
            foreground,
        });
    }
    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ops.push(Op::Line { from, to, alpha });
    }
    fn disc(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Disc { center, radius });
    }
}

impl RecordingPainter {
    fn lines(&self) -> Vec<(Vec2, Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, alpha } => Some((*from, *to, *alpha)),
                _ => None,
            })
            .collect()
    }
    fn discs(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Disc { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }
}

/// Field with hand-placed particles; the seeded spawn is overwritten.
fn field_with(positions: &[Vec2], viewport: Vec2) -> ParticleField {
    let params = FieldParams {
        particle_count: positions.len(),
        ..FieldParams::default()
    };
    let mut field = ParticleField::new(params, viewport, 7);
    for (p, pos) in field.particles.iter_mut().zip(positions) {
        p.pos = *pos;
        p.vel = Vec2::ZERO;
    }
    field
}

#[test]
fn three_particle_scenario_links_only_the_near_pair() {
    // Particles at (0,0), (10,0), (1000,1000) with the pointer at (5,0):
    // the first two are 10 apart and must be linked, the third is linked to
    // nothing and sits far outside pointer influence.
    let viewport = Vec2::new(2000.0, 2000.0);
    let mut field = field_with(
        &[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(1000.0, 1000.0),
        ],
        viewport,
    );
    field.set_pointer(Vec2::new(5.0, 0.0));

    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Dark.foreground());

    let lines = painter.lines();
    assert_eq!(lines.len(), 1, "expected exactly one link, got {lines:?}");
    assert_eq!(lines[0].0, Vec2::new(0.0, 0.0));
    assert_eq!(lines[0].1, Vec2::new(10.0, 0.0));

    // Far particle got no impulse; zero velocity times friction stays zero.
    let far = field.particles[2];
    assert_eq!(far.vel, Vec2::ZERO);
    assert_eq!(far.pos, Vec2::new(1000.0, 1000.0));

    // Near particles were pushed apart along x.
    assert!(field.particles[0].vel.x < 0.0);
    assert!(field.particles[1].vel.x > 0.0);
}

#[test]
fn no_link_at_exactly_the_threshold_distance() {
    let viewport = Vec2::new(1000.0, 1000.0);
    let mut field = field_with(
        &[Vec2::new(100.0, 100.0), Vec2::new(250.0, 100.0)],
        viewport,
    );
    field.set_pointer(Vec2::new(900.0, 900.0));

    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Dark.foreground());
    assert!(
        painter.lines().is_empty(),
        "pair at exactly 150 must not be linked"
    );
}

#[test]
fn link_alpha_decreases_with_pair_distance() {
    let viewport = Vec2::new(1000.0, 1000.0);
    let mut field = field_with(
        &[
            Vec2::new(100.0, 100.0),
            Vec2::new(120.0, 100.0), // 20 from the first
            Vec2::new(240.0, 100.0), // 120 from the second, 140 from the first
        ],
        viewport,
    );
    field.set_pointer(Vec2::new(900.0, 900.0));

    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Dark.foreground());

    let lines = painter.lines();
    assert_eq!(lines.len(), 3);
    for (_, _, alpha) in &lines {
        assert!(*alpha > 0.0 && *alpha <= LINK_ALPHA_MAX);
    }
    // Pair order is (0,1), (0,2), (1,2); closer pairs are more opaque.
    assert!(lines[0].2 > lines[2].2);
    assert!(lines[2].2 > lines[1].2);
}

#[test]
fn frame_pass_order_is_clear_links_then_discs() {
    let viewport = Vec2::new(500.0, 500.0);
    let mut field = field_with(&[Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0)], viewport);
    field.set_pointer(Vec2::new(400.0, 400.0));

    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Light.foreground());

    assert!(matches!(painter.ops[0], Op::BeginFrame { .. }));
    let first_disc = painter
        .ops
        .iter()
        .position(|op| matches!(op, Op::Disc { .. }))
        .expect("discs drawn");
    let last_line = painter
        .ops
        .iter()
        .rposition(|op| matches!(op, Op::Line { .. }))
        .expect("links drawn");
    assert!(last_line < first_disc, "links must precede discs");
}

#[test]
fn begin_frame_carries_viewport_and_theme_foreground() {
    let viewport = Vec2::new(321.0, 123.0);
    let mut field = field_with(&[Vec2::new(5.0, 5.0)], viewport);
    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Light.foreground());
    assert_eq!(
        painter.ops[0],
        Op::BeginFrame {
            viewport,
            foreground: Rgb(0, 0, 0),
        }
    );
}

#[test]
fn one_disc_per_particle_with_its_own_radius() {
    let viewport = Vec2::new(500.0, 500.0);
    let mut field = field_with(
        &[Vec2::new(10.0, 10.0), Vec2::new(480.0, 480.0)],
        viewport,
    );
    field.set_pointer(Vec2::new(250.0, 250.0));
    let radii: Vec<f32> = field.particles.iter().map(|p| p.radius).collect();

    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Dark.foreground());

    let discs = painter.discs();
    assert_eq!(discs.len(), 2);
    for ((_, drawn_radius), expected) in discs.iter().zip(&radii) {
        assert_eq!(drawn_radius, expected);
    }
}

#[test]
fn links_are_computed_over_pre_step_positions() {
    // Two particles exactly at the threshold minus a hair, with velocities
    // that will separate them during the step: the link for this frame must
    // still be drawn from the old positions.
    let viewport = Vec2::new(1000.0, 1000.0);
    let mut field = field_with(
        &[Vec2::new(100.0, 100.0), Vec2::new(249.0, 100.0)],
        viewport,
    );
    field.particles[1].vel = Vec2::new(50.0, 0.0);
    field.set_pointer(Vec2::new(900.0, 900.0));

    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Dark.foreground());

    let lines = painter.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].1, Vec2::new(249.0, 100.0));
    // After the step the pair is beyond the threshold.
    assert!(field.particles[0].pos.distance(field.particles[1].pos) > LINK_RADIUS);
}

#[test]
fn empty_field_renders_only_the_clear() {
    let mut field = field_with(&[], Vec2::new(300.0, 200.0));
    let mut painter = RecordingPainter::default();
    render_frame(&mut field, &mut painter, Theme::Dark.foreground());
    assert_eq!(painter.ops.len(), 1);
    assert!(matches!(painter.ops[0], Op::BeginFrame { .. }));
}

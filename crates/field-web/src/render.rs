use field_core::{Painter, Rgb, LINK_WIDTH};
use glam::Vec2;
use web_sys as web;

/// Canvas 2D implementation of the core's drawing contract.
///
/// The CSS color string is cached and only rebuilt when the foreground
/// actually changes (i.e. on a theme switch), so the per-pair link pass
/// touches nothing but `globalAlpha`.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    foreground: Option<Rgb>,
    css_color: String,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            foreground: None,
            css_color: String::new(),
        }
    }
}

impl Painter for CanvasPainter {
    fn begin_frame(&mut self, viewport: Vec2, foreground: Rgb) {
        if self.foreground != Some(foreground) {
            self.foreground = Some(foreground);
            self.css_color = foreground.to_string();
        }
        self.ctx
            .clear_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);
        self.ctx.set_fill_style_str(&self.css_color);
        self.ctx.set_stroke_style_str(&self.css_color);
        self.ctx.set_line_width(LINK_WIDTH as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn disc(&mut self, center: Vec2, radius: f32) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }
}

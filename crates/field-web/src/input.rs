use glam::Vec2;
use web_sys as web;

/// Latest pointer sample in viewport coordinates. Written by the mouse and
/// touch listeners, read once per frame; only the newest sample matters.
#[derive(Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Before any input arrives the pointer sits at the viewport center.
    pub fn centered(viewport: Vec2) -> Self {
        Self {
            x: viewport.x * 0.5,
            y: viewport.y * 0.5,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
pub fn mouse_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First touch wins; an empty touch list leaves the previous sample alone.
#[inline]
pub fn first_touch_position(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

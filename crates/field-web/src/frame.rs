use crate::input;
use crate::render;
use crate::theme;
use field_core::{render_frame, ParticleField};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Coarse interval for the frame pacing log so it stays quiet in steady state.
const FPS_LOG_INTERVAL_SEC: f32 = 30.0;

pub struct FrameContext {
    pub field: ParticleField,
    pub painter: render::CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub pointer: Rc<RefCell<input::PointerState>>,

    pub last_instant: Instant,
    pub frame_accum_sec: f32,
    pub frame_count: u32,
}

impl FrameContext {
    /// One animation frame: sync the collaborator inputs, then run the full
    /// simulate-and-paint pass. The resize listener has already sized the
    /// canvas, so its dimensions are the viewport of record.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.field.set_viewport(Vec2::new(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        ));
        self.field.set_pointer(self.pointer.borrow().position());

        let foreground = theme::current(&self.document).foreground();
        render_frame(&mut self.field, &mut self.painter, foreground);

        self.frame_accum_sec += dt.as_secs_f32();
        self.frame_count += 1;
        if self.frame_accum_sec >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "{:.1} fps over the last {:.0}s",
                self.frame_count as f32 / self.frame_accum_sec,
                self.frame_accum_sec
            );
            self.frame_accum_sec = 0.0;
            self.frame_count = 0;
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop; runs until the page is
/// torn down.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

#![cfg(target_arch = "wasm32")]
use field_core::{FieldParams, ParticleField};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod intro;
mod render;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Restore the persisted theme before the first frame paints.
    theme::apply_saved_preference(&window, &document);
    theme::wire_toggle(&document);

    intro::run_typing_intro(&window, &document);

    let canvas_el = document
        .get_element_by_id("background-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #background-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size the backing store to the viewport before anything renders.
    dom::sync_canvas_to_viewport(&window, &canvas);
    let viewport = Vec2::new(canvas.width() as f32, canvas.height() as f32);

    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(FieldParams::default(), viewport, seed);

    let pointer = Rc::new(RefCell::new(input::PointerState::centered(viewport)));
    events::register(&window, &canvas, &pointer)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        painter: render::CanvasPainter::new(ctx),
        canvas,
        document,
        pointer,
        last_instant: Instant::now(),
        frame_accum_sec: 0.0,
        frame_count: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

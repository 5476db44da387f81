use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level listeners feeding the frame loop: resize keeps the canvas
/// backing store current, mouse and touch moves update the shared pointer
/// sample. Everything runs on the one browser thread, so plain RefCell
/// writes are enough.
pub fn register(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<input::PointerState>>,
) -> anyhow::Result<()> {
    {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                dom::sync_canvas_to_viewport(&w, &canvas);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        closure.forget();
    }

    {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let pos = input::mouse_position(&ev);
            let mut p = pointer.borrow_mut();
            p.x = pos.x;
            p.y = pos.y;
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        closure.forget();
    }

    {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(pos) = input::first_touch_position(&ev) {
                let mut p = pointer.borrow_mut();
                p.x = pos.x;
                p.y = pos.y;
            }
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        closure.forget();
    }

    Ok(())
}

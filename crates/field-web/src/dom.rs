use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Match the canvas backing store to the window inner size. Called once at
/// startup and again from the resize listener, so the frame loop always
/// renders against current dimensions.
pub fn sync_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width((width as u32).max(1));
    canvas.set_height((height as u32).max(1));
}

#[inline]
pub fn storage_get(window: &web::Window, key: &str) -> Option<String> {
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

#[inline]
pub fn storage_set(window: &web::Window, key: &str, value: &str) {
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(key, value);
    }
}

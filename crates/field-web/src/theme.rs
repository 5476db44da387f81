//! Theme provider: body class switching, toggle-button wiring, and the
//! persisted preference under the `theme` localStorage key.

use crate::dom;
use field_core::Theme;
use web_sys as web;

const THEME_KEY: &str = "theme";

/// Active theme as the frame loop sees it, derived from the body class list.
/// Queried fresh each frame so a switch lands within one frame.
#[inline]
pub fn current(document: &web::Document) -> Theme {
    match document.body() {
        Some(body) if body.class_list().contains("light-theme") => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Apply the stored preference at startup. Missing or unparseable values
/// fall back to the default dark theme.
pub fn apply_saved_preference(window: &web::Window, document: &web::Document) {
    let saved = dom::storage_get(window, THEME_KEY)
        .and_then(|v| v.parse::<Theme>().ok())
        .unwrap_or_default();
    apply(document, saved);
}

pub fn apply(document: &web::Document, theme: Theme) {
    let Some(body) = document.body() else { return };
    let classes = body.class_list();
    match theme {
        Theme::Light => {
            let _ = classes.remove_1("dark-theme");
            let _ = classes.add_1("light-theme");
        }
        Theme::Dark => {
            let _ = classes.remove_1("light-theme");
            let _ = classes.add_1("dark-theme");
        }
    }
    swap_toggle_icon(document, theme);
}

/// Flip theme on `#theme-toggle` clicks and persist the choice. The particle
/// colors need no extra hook: the frame loop re-reads the body class.
pub fn wire_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "theme-toggle", move || {
        let next = current(&doc).toggled();
        apply(&doc, next);
        if let Some(w) = web::window() {
            dom::storage_set(&w, THEME_KEY, next.as_str());
        }
        log::info!("theme switched to {}", next.as_str());
    });
}

// The toggle shows the icon of the theme a click would switch to.
fn swap_toggle_icon(document: &web::Document, theme: Theme) {
    if let Ok(Some(icon)) = document.query_selector("#theme-toggle i") {
        let classes = icon.class_list();
        match theme {
            Theme::Light => {
                let _ = classes.remove_1("fa-sun");
                let _ = classes.add_1("fa-moon");
            }
            Theme::Dark => {
                let _ = classes.remove_1("fa-moon");
                let _ = classes.add_1("fa-sun");
            }
        }
    }
}

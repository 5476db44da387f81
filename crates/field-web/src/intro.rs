//! First-visit typewriter intro on the hero heading, gated by a
//! `hasVisited` localStorage flag. Repeat visitors get the full text at
//! once instead of the character-by-character reveal.

use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const INTRO_TEXT: &str = "Hi, everyone!\nI'm Dulara Abhiranda.";
const VISITED_KEY: &str = "hasVisited";
const TYPE_DELAY_MS: i32 = 100;
const START_DELAY_MS: i32 = 500;

pub fn run_typing_intro(window: &web::Window, document: &web::Document) {
    let Some(el) = document.get_element_by_id("typing-text") else {
        return;
    };
    if dom::storage_get(window, VISITED_KEY).is_some() {
        el.set_inner_html(&INTRO_TEXT.replace('\n', "<br>"));
        return;
    }
    dom::storage_set(window, VISITED_KEY, "true");

    let chars: Vec<char> = INTRO_TEXT.chars().collect();
    let mut index = 0usize;
    // Self-rescheduling setTimeout chain, one character per tick.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let i = index;
        let Some(&c) = chars.get(i) else {
            return;
        };
        let mut html = el.inner_html();
        if c == '\n' {
            html.push_str("<br>");
        } else {
            html.push(c);
        }
        el.set_inner_html(&html);
        index = i + 1;
        if i + 1 < chars.len() {
            if let Some(w) = web::window() {
                let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                    TYPE_DELAY_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>));
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        START_DELAY_MS,
    );
}

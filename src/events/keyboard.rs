use crate::core::{intent_for_key, Intent};
use crate::frame::WebSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Rc<RefCell<WebSession>>) {
    let key = ev.key();
    let Some(intent) = intent_for_key(&key) else {
        return;
    };
    log::info!("[keys] {:?}", intent);
    session
        .borrow_mut()
        .apply_intent(intent, js_sys::Date::now());
    if matches!(intent, Intent::Rotate(_) | Intent::StopRotation) {
        ev.prevent_default();
    }
}

// Wire an 'H' key handler to toggle the help overlay
pub fn wire_overlay_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "h" || key == "H" {
                    crate::overlay::toggle(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_global_keydown(session: Rc<RefCell<WebSession>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

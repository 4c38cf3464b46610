use crate::core::BUTTON_INTENTS;
use crate::dom;
use crate::frame::WebSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const UPLOAD_ID: &str = "photo-upload";

/// Overlay buttons map 1:1 onto session intents.
pub fn wire_controls(document: &web::Document, session: &Rc<RefCell<WebSession>>) {
    for &(id, intent) in BUTTON_INTENTS {
        let session = session.clone();
        dom::add_click_listener(document, id, move || {
            session
                .borrow_mut()
                .apply_intent(intent, js_sys::Date::now());
        });
    }
}

/// Hangs every selected image on the tree. Files that cannot be turned into
/// an object URL are skipped; evicted photos release their URLs.
pub fn wire_photo_upload(document: &web::Document, session: &Rc<RefCell<WebSession>>) {
    let Some(input) = document
        .get_element_by_id(UPLOAD_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing #{}", UPLOAD_ID);
        return;
    };
    let session = session.clone();
    let input_for_cb = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(files) = input_for_cb.files() else {
            return;
        };
        let urls: Vec<String> = (0..files.length())
            .filter_map(|i| files.get(i))
            .filter_map(|file| match web::Url::create_object_url_with_blob(&file) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("[photos] skipped {}: {:?}", file.name(), e);
                    None
                }
            })
            .collect();
        if urls.is_empty() {
            return;
        }
        let evicted = session.borrow_mut().add_photos(urls);
        for p in evicted {
            _ = web::Url::revoke_object_url(&p.url);
        }
        // Allow re-selecting the same files.
        input_for_cb.set_value("");
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

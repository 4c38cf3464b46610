use crate::core::{PhotoData, SceneFrame};
use wasm_bindgen::JsCast;
use web_sys as web;

const HELP_ID: &str = "help-overlay";
const ZOOM_ID: &str = "photo-zoom";
const ZOOM_IMG_ID: &str = "photo-zoom-img";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HELP_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Show the zoomed photo, or hide the zoom layer when `photo` is None.
pub fn show_zoom(document: &web::Document, photo: Option<&PhotoData>) {
    let Some(layer) = document.get_element_by_id(ZOOM_ID) else {
        return;
    };
    match photo {
        Some(p) => {
            if let Some(img) = document
                .get_element_by_id(ZOOM_IMG_ID)
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
            {
                if img.src() != p.url {
                    img.set_src(&p.url);
                }
            }
            _ = layer.class_list().remove_1("hidden");
        }
        None => {
            _ = layer.class_list().add_1("hidden");
        }
    }
}

/// Reflect toggle states on the control buttons.
pub fn sync_controls(document: &web::Document, scene: &SceneFrame) {
    crate::dom::set_class(document, "btn-photos", "active", scene.show_photos);
    crate::dom::set_class(document, "btn-camera", "active", scene.camera_enabled);
    crate::dom::set_class(document, "btn-formed", "active", scene.progress <= 0.0);
    crate::dom::set_class(document, "btn-chaos", "active", scene.progress >= 1.0);
}

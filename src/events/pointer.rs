use crate::camera::{screen_to_world_ray, Camera, TreeOrientation};
use crate::constants::PICK_PHOTO_RADIUS;
use crate::frame::WebSession;
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<WebSession>>,
    pub orientation: Rc<RefCell<TreeOrientation>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointerleave");
    wire_pointerup(&w, "pointercancel");
    wire_touch(&w);
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    name: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        w2.session.borrow_mut().pointer_down(input::pointer_sample(&ev));
        if ev.is_primary() {
            _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        }
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        w2.session.borrow_mut().pointer_move(input::pointer_sample(&ev));
    });
}

fn wire_pointerup(w: &InputWiring, event_name: &str) {
    let w2 = w.clone();
    listen(&w.canvas, event_name, move |ev: web::PointerEvent| {
        let tap = w2.session.borrow_mut().pointer_up(input::pointer_sample(&ev));
        if let Some(pos) = tap {
            zoom_photo_under(&w2, pos);
        }
    });
}

/// A tap over a visible photo ornament also opens it.
fn zoom_photo_under(w: &InputWiring, client_pos: Vec2) {
    let px = input::client_to_canvas_px(client_pos.x, client_pos.y, &w.canvas);
    let width = w.canvas.width() as f32;
    let height = w.canvas.height() as f32;
    let camera = Camera::scene(width / height.max(1.0));
    let (ro, rd) = screen_to_world_ray(&camera, width, height, px.x, px.y);
    let model = w.orientation.borrow().model_matrix();

    let hit_id = {
        let session = w.session.borrow();
        if !session.show_photos() {
            return;
        }
        let photos = session.photos().to_vec();
        input::pick_photo(ro, rd, model, &photos, PICK_PHOTO_RADIUS).map(|i| photos[i].id.clone())
    };
    if let Some(id) = hit_id {
        log::info!("[tap] zoom photo {}", id);
        w.session.borrow_mut().zoom_photo(&id);
    }
}

fn wire_touch(w: &InputWiring) {
    let w_start = w.clone();
    listen(&w.canvas, "touchstart", move |ev: web::TouchEvent| {
        let touches = input::touch_points(&ev);
        w_start.session.borrow_mut().touch_start(&touches);
        if touches.len() >= 2 {
            ev.prevent_default();
        }
    });

    let w_move = w.clone();
    listen(&w.canvas, "touchmove", move |ev: web::TouchEvent| {
        let touches = input::touch_points(&ev);
        w_move.session.borrow_mut().touch_move(&touches);
        ev.prevent_default();
    });

    for name in ["touchend", "touchcancel"] {
        let w_end = w.clone();
        listen(&w.canvas, name, move |_ev: web::TouchEvent| {
            w_end.session.borrow_mut().touch_end();
        });
    }
}

use crate::camera::TreeOrientation;
use crate::constants::MORPH_TAU_SEC;
use crate::core::sampler::MorphParticle;
use crate::core::{FrameScheduler, RenderSink, SceneFrame, TreeSession};
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Render sink that keeps the most recently published scene for the frame loop.
#[derive(Default)]
pub struct SceneSlot {
    latest: SceneFrame,
    revision: u64,
}

impl SceneSlot {
    pub fn latest(&self) -> &SceneFrame {
        &self.latest
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl RenderSink for SceneSlot {
    fn publish(&mut self, frame: &SceneFrame) {
        self.latest = frame.clone();
        self.revision += 1;
    }
}

pub type WebSession = TreeSession<FrameScheduler, SceneSlot>;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<WebSession>>,
    pub orientation: Rc<RefCell<TreeOrientation>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub last_revision: u64,
    /// Displayed blend toward the tree; eases toward `1 - progress`.
    pub formed: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        // Decay ticks run at display cadence.
        self.session.borrow_mut().on_frame();

        let session = self.session.borrow();
        let slot = session.sink();
        let scene = slot.latest();

        if slot.revision() != self.last_revision {
            self.last_revision = slot.revision();
            overlay::show_zoom(&self.document, scene.zoomed.as_ref());
            overlay::sync_controls(&self.document, scene);
        }

        self.formed = ease_toward(self.formed, 1.0 - scene.progress, dt_sec);
        let model = {
            let mut o = self.orientation.borrow_mut();
            o.advance(scene.velocity, scene.progress, scene.is_dragging, dt_sec);
            o.model_matrix()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, js_sys::Date::now(), self.formed, model, scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

#[inline]
fn ease_toward(current: f32, target: f32, dt_sec: f32) -> f32 {
    let alpha = 1.0 - (-dt_sec / MORPH_TAU_SEC).exp();
    current + (target - current) * alpha
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    tree: &[MorphParticle],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, tree).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

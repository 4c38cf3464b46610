//! Interactive particle Christmas tree.
//!
//! `core` holds the platform-independent interaction logic (morph state,
//! gestures, rotation physics, sampling). The remaining modules are the
//! browser shell and only build for `wasm32`.

pub mod camera;
pub mod constants;
pub mod core;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use app::start;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::camera::TreeOrientation;
    use crate::core::sampler::tree_cloud;
    use crate::core::{FrameScheduler, TreeConfig, TreeSession, FOLIAGE_COUNT, ORNAMENT_COUNT};
    use crate::{dom, events, frame};
    use instant::Instant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window.add_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            );
        }
        resize_closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("tree-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id("app-canvas")
            .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        wire_canvas_resize(&canvas);

        let config = TreeConfig::default();
        let seed: u64 = rand::random();
        let cloud = {
            let mut rng = StdRng::seed_from_u64(seed);
            tree_cloud(
                &mut rng,
                FOLIAGE_COUNT,
                ORNAMENT_COUNT,
                config.tree_height,
                config.tree_radius,
                config.chaos_radius,
            )
        };
        log::info!("[tree] particles={} seed={}", cloud.len(), seed);

        let session = Rc::new(RefCell::new(TreeSession::new(
            config,
            FrameScheduler::new(),
            frame::SceneSlot::default(),
            seed.wrapping_add(1),
        )));
        let orientation = Rc::new(RefCell::new(TreeOrientation::default()));

        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            session: session.clone(),
            orientation: orientation.clone(),
        });
        events::wire_global_keydown(session.clone());
        events::wire_overlay_toggle_h(&document);
        events::wire_controls(&document, &session);
        events::wire_photo_upload(&document, &session);

        let gpu = frame::init_gpu(&canvas, &cloud).await;
        drop(cloud);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            session,
            orientation,
            canvas,
            document,
            gpu,
            last_instant: Instant::now(),
            last_revision: u64::MAX,
            formed: 1.0,
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}

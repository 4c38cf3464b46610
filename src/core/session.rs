//! Top-level interaction state for one page session.
//!
//! `TreeSession` owns the morph state, rotation physics, gesture controller,
//! photos and fireworks. Every mutating entry point publishes exactly one
//! [`SceneFrame`] to the [`RenderSink`] once it has settled.

use super::config::TreeConfig;
use super::fireworks::Fireworks;
use super::gesture::{Actions, GestureAction, GestureController, PointerSample};
use super::intent::Intent;
use super::morph::{MorphState, MorphTarget};
use super::photos::{PhotoAlbum, PhotoData};
use super::physics::RotationPhysics;
use super::scheduler::{FrameScheduler, TickHandle, TickScheduler};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything the render layer needs to draw one state of the scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
    /// `step / 5`; 0.0 is the formed tree, 1.0 full chaos.
    pub progress: f32,
    pub velocity: Vec2,
    pub is_dragging: bool,
    pub photos: Vec<PhotoData>,
    pub show_photos: bool,
    /// Firework launch timestamps in milliseconds, oldest first.
    pub fireworks: Vec<f64>,
    pub zoomed: Option<PhotoData>,
    pub camera_enabled: bool,
}

pub trait RenderSink {
    fn publish(&mut self, frame: &SceneFrame);
}

impl<F: FnMut(&SceneFrame)> RenderSink for F {
    fn publish(&mut self, frame: &SceneFrame) {
        self(frame)
    }
}

pub struct TreeSession<S: TickScheduler, R: RenderSink> {
    config: TreeConfig,
    morph: MorphState,
    gesture: GestureController,
    physics: RotationPhysics,
    album: PhotoAlbum,
    fireworks: Fireworks,
    show_photos: bool,
    camera_enabled: bool,
    zoomed: Option<String>,
    scheduler: S,
    sink: R,
    rng: StdRng,
}

impl<S: TickScheduler, R: RenderSink> TreeSession<S, R> {
    /// Builds the session and publishes its initial frame, so the sink never
    /// holds a scene the session does not.
    pub fn new(config: TreeConfig, scheduler: S, sink: R, seed: u64) -> Self {
        let mut session = Self {
            gesture: GestureController::new(&config),
            physics: RotationPhysics::new(config.velocity_decay, config.velocity_epsilon),
            album: PhotoAlbum::new(config.max_photos),
            config,
            morph: MorphState::new(),
            fireworks: Fireworks::new(),
            show_photos: true,
            camera_enabled: false,
            zoomed: None,
            scheduler,
            sink,
            rng: StdRng::seed_from_u64(seed),
        };
        session.publish();
        session
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn morph(&self) -> &MorphState {
        &self.morph
    }

    pub fn velocity(&self) -> Vec2 {
        self.physics.velocity()
    }

    pub fn is_dragging(&self) -> bool {
        self.physics.is_dragging()
    }

    pub fn is_decaying(&self) -> bool {
        self.physics.is_decaying()
    }

    pub fn is_pinching(&self) -> bool {
        self.gesture.is_pinching()
    }

    pub fn photos(&self) -> &PhotoAlbum {
        &self.album
    }

    pub fn show_photos(&self) -> bool {
        self.show_photos
    }

    pub fn camera_enabled(&self) -> bool {
        self.camera_enabled
    }

    pub fn zoomed_photo(&self) -> Option<&PhotoData> {
        self.zoomed.as_deref().and_then(|id| self.album.get(id))
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn frame(&self) -> SceneFrame {
        SceneFrame {
            progress: self.morph.progress(),
            velocity: self.physics.velocity(),
            is_dragging: self.physics.is_dragging(),
            photos: self.album.to_vec(),
            show_photos: self.show_photos,
            fireworks: self.fireworks.triggers().to_vec(),
            zoomed: self.zoomed_photo().cloned(),
            camera_enabled: self.camera_enabled,
        }
    }

    fn publish(&mut self) {
        let frame = self.frame();
        self.sink.publish(&frame);
    }

    // ---------------- Pointer / touch input ----------------

    pub fn pointer_down(&mut self, s: PointerSample) {
        let actions = self.gesture.pointer_down(s);
        self.apply(actions);
    }

    pub fn pointer_move(&mut self, s: PointerSample) {
        if let Some(action) = self.gesture.pointer_move(s) {
            self.apply(Actions::from_elem(action, 1));
        }
    }

    /// Pointer-up or pointer-leave. Returns the tap position when the press
    /// was classified as a tap.
    pub fn pointer_up(&mut self, s: PointerSample) -> Option<Vec2> {
        let actions = self.gesture.pointer_up(s);
        self.apply(actions)
    }

    pub fn touch_start(&mut self, touches: &[Vec2]) {
        let actions = self.gesture.touch_start(touches);
        self.apply(actions);
    }

    pub fn touch_move(&mut self, touches: &[Vec2]) {
        if let Some(action) = self.gesture.touch_move(touches, &self.morph) {
            self.apply(Actions::from_elem(action, 1));
        }
    }

    pub fn touch_end(&mut self) {
        self.gesture.touch_end();
    }

    fn apply(&mut self, actions: Actions) -> Option<Vec2> {
        if actions.is_empty() {
            return None;
        }
        let mut tap = None;
        for action in actions {
            match action {
                GestureAction::DragStarted => self.physics.begin_drag(&mut self.scheduler),
                GestureAction::SetVelocity(v) => self.physics.set_from_drag(v),
                GestureAction::DragEnded => self.physics.end_drag(&mut self.scheduler),
                GestureAction::Tap { position } => {
                    self.morph.advance();
                    log::info!(
                        "[tap] step={} expanding={}",
                        self.morph.step(),
                        self.morph.is_expanding()
                    );
                    tap = Some(position);
                }
                GestureAction::Jump(target) => {
                    self.morph.jump_to(target);
                    log::info!("[pinch] jump to {:?}", target);
                }
            }
        }
        self.publish();
        tap
    }

    // ---------------- Decay loop ----------------

    /// Delivers one scheduled decay tick. Stale handles are ignored.
    pub fn on_tick(&mut self, handle: TickHandle) {
        if self.physics.on_tick(handle, &mut self.scheduler) {
            self.publish();
        }
    }

    // ---------------- Overlay intents ----------------

    pub fn apply_intent(&mut self, intent: Intent, now_ms: f64) {
        match intent {
            Intent::SetState(target) => self.set_direct_state(target),
            Intent::Firework => self.trigger_firework(now_ms),
            Intent::TogglePhotos => self.toggle_photos(),
            Intent::ToggleCamera => self.toggle_camera(),
            Intent::CloseZoom => self.close_zoom(),
            Intent::Rotate(x) => self.inject_rotation(x),
            Intent::StopRotation => self.stop_rotation(),
        }
    }

    pub fn set_direct_state(&mut self, target: MorphTarget) {
        self.morph.jump_to(target);
        self.publish();
    }

    pub fn inject_rotation(&mut self, x: f32) {
        self.physics.inject_x(x, &mut self.scheduler);
        self.publish();
    }

    pub fn stop_rotation(&mut self) {
        self.physics.stop(&mut self.scheduler);
        self.publish();
    }

    pub fn trigger_firework(&mut self, now_ms: f64) {
        self.fireworks.trigger(now_ms);
        self.publish();
    }

    /// Hangs the uploaded photos and shows them. Returns evicted entries so the
    /// caller can release their URLs.
    pub fn add_photos<I: IntoIterator<Item = String>>(&mut self, urls: I) -> Vec<PhotoData> {
        let radius = self.config.tree_radius * self.config.photo_radius_scale;
        let evicted = self
            .album
            .add_batch(&mut self.rng, urls, self.config.tree_height, radius);
        if let Some(id) = &self.zoomed {
            if evicted.iter().any(|p| &p.id == id) {
                self.zoomed = None;
            }
        }
        self.show_photos = true;
        log::info!("[photos] count={} evicted={}", self.album.len(), evicted.len());
        self.publish();
        evicted
    }

    pub fn toggle_photos(&mut self) {
        self.show_photos = !self.show_photos;
        self.publish();
    }

    pub fn toggle_camera(&mut self) {
        self.camera_enabled = !self.camera_enabled;
        self.publish();
    }

    /// Zooms the photo with `id`. Returns false if no such photo is hung.
    pub fn zoom_photo(&mut self, id: &str) -> bool {
        if self.album.get(id).is_none() {
            return false;
        }
        self.zoomed = Some(id.to_owned());
        self.publish();
        true
    }

    pub fn close_zoom(&mut self) {
        if self.zoomed.take().is_some() {
            self.publish();
        }
    }
}

impl<R: RenderSink> TreeSession<FrameScheduler, R> {
    /// Delivers every decay tick due this frame. Returns how many ran.
    pub fn on_frame(&mut self) -> usize {
        let due = self.scheduler.take_due();
        let n = due.len();
        for handle in due {
            self.on_tick(handle);
        }
        n
    }
}

// Host-side tests for the session: gesture routing, intents, photos and the
// frames it publishes.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use tree_web::core::{
    FrameScheduler, Intent, MorphTarget, PointerSample, SceneFrame, TreeConfig, TreeSession,
};

type Frames = Rc<RefCell<Vec<SceneFrame>>>;

fn session() -> (TreeSession<FrameScheduler, impl FnMut(&SceneFrame)>, Frames) {
    let frames: Frames = Rc::default();
    let sink = {
        let frames = frames.clone();
        move |f: &SceneFrame| frames.borrow_mut().push(f.clone())
    };
    let s = TreeSession::new(TreeConfig::default(), FrameScheduler::new(), sink, 42);
    (s, frames)
}

fn tap<S, R>(s: &mut TreeSession<S, R>, t: f64) -> Option<Vec2>
where
    S: tree_web::core::TickScheduler,
    R: tree_web::core::RenderSink,
{
    s.pointer_down(PointerSample::primary(200.0, 200.0, t));
    s.pointer_up(PointerSample::primary(202.0, 201.0, t + 80.0))
}

fn pinch(d: f32) -> [Vec2; 2] {
    [Vec2::new(0.0, 0.0), Vec2::new(d, 0.0)]
}

#[test]
fn starts_formed_and_idle() {
    let (s, frames) = session();
    assert_eq!(s.morph().step(), 0);
    assert_eq!(s.velocity(), Vec2::ZERO);
    assert!(s.show_photos());
    assert!(!s.camera_enabled());
    assert!(s.scheduler().is_idle());
    assert_eq!(frames.borrow().len(), 1);
}

#[test]
fn sink_starts_in_sync_with_session() {
    let (s, frames) = session();
    let first = frames.borrow()[0].clone();
    assert_eq!(first, s.frame());
    assert!(first.show_photos);
    assert_ne!(first, SceneFrame::default());
}

#[test]
fn tap_advances_morph_and_reports_position() {
    let (mut s, frames) = session();
    let pos = tap(&mut s, 0.0);
    assert_eq!(pos, Some(Vec2::new(202.0, 201.0)));
    assert_eq!(s.morph().step(), 1);
    // Initial frame, then one for the press and one for the release.
    assert_eq!(frames.borrow().len(), 3);
    let last = frames.borrow().last().cloned().unwrap();
    assert!((last.progress - 0.2).abs() < 1e-6);
    assert!(!last.is_dragging);
}

#[test]
fn five_taps_reach_chaos_and_the_sixth_bounces() {
    let (mut s, _) = session();
    for i in 0..5 {
        tap(&mut s, i as f64 * 1000.0);
    }
    assert_eq!(s.morph().step(), 5);
    tap(&mut s, 9000.0);
    assert_eq!(s.morph().step(), 4);
    assert!(!s.morph().is_expanding());
}

#[test]
fn drag_sets_velocity_but_not_morph() {
    let (mut s, frames) = session();
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    s.pointer_move(PointerSample::primary(50.0, 0.0, 16.0));
    assert!(s.is_dragging());
    assert!((s.velocity().x - 50.0 * 0.0054).abs() < 1e-6);
    assert!(s.scheduler().is_idle(), "no decay while dragging");

    assert_eq!(s.pointer_up(PointerSample::primary(50.0, 0.0, 500.0)), None);
    assert_eq!(s.morph().step(), 0);
    assert!(s.is_decaying());
    assert!(frames.borrow().iter().all(|f| f.progress == 0.0));
}

#[test]
fn decay_ticks_publish_shrinking_velocity() {
    let (mut s, frames) = session();
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    s.pointer_move(PointerSample::primary(20.0, 0.0, 16.0));
    s.pointer_up(PointerSample::primary(20.0, 0.0, 400.0));
    let before = frames.borrow().len();

    assert_eq!(s.on_frame(), 1);
    assert_eq!(s.on_frame(), 1);
    let frames = frames.borrow();
    assert_eq!(frames.len(), before + 2);
    let v1 = frames[before].velocity.x;
    let v2 = frames[before + 1].velocity.x;
    assert!(v2 < v1 && v1 < 20.0 * 0.0054);
}

#[test]
fn new_drag_cancels_decay() {
    let (mut s, _) = session();
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    s.pointer_move(PointerSample::primary(30.0, 0.0, 16.0));
    s.pointer_up(PointerSample::primary(30.0, 0.0, 400.0));
    s.on_frame();
    let v = s.velocity();

    s.pointer_down(PointerSample::primary(30.0, 0.0, 600.0));
    assert!(!s.is_decaying());
    assert_eq!(s.on_frame(), 0);
    assert_eq!(s.velocity(), v, "velocity is held while the pointer is down");
}

#[test]
fn pinch_jumps_without_touching_velocity() {
    let (mut s, frames) = session();
    s.inject_rotation(0.05);
    let v = s.velocity();

    s.touch_start(&pinch(100.0));
    s.touch_move(&pinch(160.0));
    assert_eq!(s.morph().step(), 5);
    assert_eq!(s.velocity(), v);
    assert!((frames.borrow().last().unwrap().progress - 1.0).abs() < 1e-6);

    // Same gesture keeps going: baseline is 160, so squeeze back below 120.
    s.touch_move(&pinch(110.0));
    assert_eq!(s.morph().step(), 0);
    assert!(s.morph().is_expanding());
    s.touch_end();
    assert!(!s.is_pinching());
}

#[test]
fn second_finger_turns_drag_into_pinch() {
    let (mut s, _) = session();
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    s.touch_start(&pinch(120.0));
    assert!(!s.is_dragging());
    assert!(s.is_pinching());
    assert!(s.is_decaying(), "cancelled drag releases into decay");
    assert_eq!(s.pointer_up(PointerSample::primary(0.0, 0.0, 40.0)), None);
    assert_eq!(s.morph().step(), 0);
}

#[test]
fn keyboard_intents() {
    let (mut s, frames) = session();
    s.apply_intent(Intent::SetState(MorphTarget::Chaos), 0.0);
    assert_eq!(s.morph().step(), 5);

    s.apply_intent(Intent::Rotate(0.03), 0.0);
    assert_eq!(s.velocity().x, 0.03);
    assert!(s.is_decaying());

    s.apply_intent(Intent::StopRotation, 0.0);
    assert_eq!(s.velocity(), Vec2::ZERO);
    assert!(s.scheduler().is_idle());

    s.apply_intent(Intent::Firework, 1234.0);
    s.apply_intent(Intent::Firework, 1500.0);
    assert_eq!(frames.borrow().last().unwrap().fireworks, vec![1234.0, 1500.0]);

    s.apply_intent(Intent::TogglePhotos, 0.0);
    assert!(!s.show_photos());
    s.apply_intent(Intent::ToggleCamera, 0.0);
    assert!(s.camera_enabled());
    assert_eq!(frames.borrow().len(), 8);
}

#[test]
fn rotate_while_dragging_does_not_start_decay() {
    let (mut s, _) = session();
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    s.inject_rotation(-0.03);
    assert_eq!(s.velocity().x, -0.03);
    assert!(!s.is_decaying());
}

#[test]
fn uploads_show_photos_and_cap_at_sixteen() {
    let (mut s, frames) = session();
    s.toggle_photos();
    assert!(!s.show_photos());

    let evicted = s.add_photos((0..20).map(|i| format!("blob:{i}")));
    assert_eq!(evicted.len(), 4);
    assert_eq!(s.photos().len(), 16);
    assert!(s.show_photos());
    let last = frames.borrow().last().cloned().unwrap();
    assert_eq!(last.photos.len(), 16);
    assert_eq!(last.photos[0].url, "blob:4");
}

#[test]
fn zoom_follows_album_membership() {
    let (mut s, frames) = session();
    s.add_photos(["a".to_string()]);
    let id = s.photos().iter().next().unwrap().id.clone();

    assert!(!s.zoom_photo("missing"));
    assert!(s.zoom_photo(&id));
    assert_eq!(s.zoomed_photo().map(|p| p.url.as_str()), Some("a"));
    assert_eq!(
        frames.borrow().last().unwrap().zoomed.as_ref().map(|p| p.id.clone()),
        Some(id.clone())
    );

    // Evicting the zoomed photo closes the zoom.
    s.add_photos((0..16).map(|i| format!("n{i}")));
    assert!(s.zoomed_photo().is_none());
    assert!(frames.borrow().last().unwrap().zoomed.is_none());

    let n = frames.borrow().len();
    s.close_zoom();
    assert_eq!(frames.borrow().len(), n, "nothing to close, nothing published");
}

#[test]
fn escape_closes_zoom() {
    let (mut s, _) = session();
    s.add_photos(["a".to_string()]);
    let id = s.photos().iter().next().unwrap().id.clone();
    s.zoom_photo(&id);
    s.apply_intent(Intent::CloseZoom, 0.0);
    assert!(s.zoomed_photo().is_none());
}

#[test]
fn config_overrides_reach_the_gesture_layer() {
    let frames: Frames = Rc::default();
    let sink = {
        let frames = frames.clone();
        move |f: &SceneFrame| frames.borrow_mut().push(f.clone())
    };
    let config = TreeConfig {
        tap_max_duration_ms: 1000.0,
        max_photos: 2,
        ..TreeConfig::default()
    };
    let mut s = TreeSession::new(config, FrameScheduler::new(), sink, 1);
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    assert!(s.pointer_up(PointerSample::primary(0.0, 0.0, 800.0)).is_some());

    s.add_photos(["a", "b", "c"].map(String::from));
    assert_eq!(s.photos().len(), 2);
}

#[test]
fn stale_tick_handles_are_ignored() {
    let (mut s, frames) = session();
    s.pointer_down(PointerSample::primary(0.0, 0.0, 0.0));
    s.pointer_move(PointerSample::primary(20.0, 0.0, 16.0));
    s.pointer_up(PointerSample::primary(20.0, 0.0, 400.0));
    let stale = s.scheduler_mut().take_due()[0];

    // A new press and release supersedes the handle taken above.
    s.pointer_down(PointerSample::primary(20.0, 0.0, 500.0));
    s.pointer_up(PointerSample::primary(20.0, 0.0, 900.0));
    let v = s.velocity();
    let n = frames.borrow().len();

    s.on_tick(stale);
    assert_eq!(s.velocity(), v);
    assert_eq!(frames.borrow().len(), n, "stale tick publishes nothing");
    assert!(s.is_decaying());
    assert_eq!(s.on_frame(), 1);
    assert!(s.velocity().x < v.x);
}

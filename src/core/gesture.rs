//! Pointer and touch interpretation.
//!
//! The controller only classifies input. It turns raw samples into
//! [`GestureAction`]s and leaves applying them to the session, so the drag
//! channel (velocity) and the pinch channel (morph jumps) never touch each
//! other's state.

use super::config::TreeConfig;
use super::constants::MAX_MORPH_STEP;
use super::morph::{MorphState, MorphTarget};
use glam::Vec2;
use smallvec::SmallVec;

/// One pointer event reduced to what the controller needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
    pub is_primary: bool,
}

impl PointerSample {
    pub fn primary(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            time_ms,
            is_primary: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAction {
    DragStarted,
    /// New angular velocity from the latest drag delta.
    SetVelocity(Vec2),
    DragEnded,
    Tap { position: Vec2 },
    Jump(MorphTarget),
}

pub type Actions = SmallVec<[GestureAction; 2]>;

#[derive(Clone, Copy, Debug)]
struct DragSession {
    last: Vec2,
    start: Vec2,
    start_ms: f64,
}

#[derive(Clone, Copy, Debug)]
struct PinchSession {
    baseline: f32,
}

#[derive(Clone, Debug)]
pub struct GestureController {
    sensitivity: Vec2,
    tap_max_distance: f32,
    tap_max_duration_ms: f64,
    pinch_threshold: f32,
    drag: Option<DragSession>,
    pinch: Option<PinchSession>,
}

impl GestureController {
    pub fn new(config: &TreeConfig) -> Self {
        Self {
            sensitivity: config.drag_sensitivity,
            tap_max_distance: config.tap_max_distance,
            tap_max_duration_ms: config.tap_max_duration_ms,
            pinch_threshold: config.pinch_threshold,
            drag: None,
            pinch: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn pointer_down(&mut self, s: PointerSample) -> Actions {
        let mut out = Actions::new();
        if !s.is_primary {
            return out;
        }
        self.drag = Some(DragSession {
            last: s.position,
            start: s.position,
            start_ms: s.time_ms,
        });
        out.push(GestureAction::DragStarted);
        out
    }

    pub fn pointer_move(&mut self, s: PointerSample) -> Option<GestureAction> {
        if !s.is_primary {
            return None;
        }
        let drag = self.drag.as_mut()?;
        let delta = s.position - drag.last;
        drag.last = s.position;
        Some(GestureAction::SetVelocity(delta * self.sensitivity))
    }

    /// Pointer-up and pointer-leave. Closes the drag whichever pointer ended
    /// it and reports a tap for short, nearly stationary presses.
    pub fn pointer_up(&mut self, s: PointerSample) -> Actions {
        let mut out = Actions::new();
        let Some(drag) = self.drag.take() else {
            return out;
        };
        out.push(GestureAction::DragEnded);
        let dist = s.position.distance(drag.start);
        let elapsed = s.time_ms - drag.start_ms;
        if dist < self.tap_max_distance && elapsed < self.tap_max_duration_ms {
            out.push(GestureAction::Tap {
                position: s.position,
            });
        }
        out
    }

    /// Touch contacts changed upward. Two or more contacts cancel a drag
    /// without classifying it; exactly two open a pinch, anything else clears it.
    pub fn touch_start(&mut self, touches: &[Vec2]) -> Actions {
        let mut out = Actions::new();
        if touches.len() >= 2 && self.drag.take().is_some() {
            out.push(GestureAction::DragEnded);
        }
        self.pinch = match touches {
            [a, b] => Some(PinchSession {
                baseline: a.distance(*b),
            }),
            _ => None,
        };
        out
    }

    pub fn touch_move(&mut self, touches: &[Vec2], morph: &MorphState) -> Option<GestureAction> {
        let [a, b] = touches else {
            return None;
        };
        let pinch = self.pinch.as_mut()?;
        let current = a.distance(*b);
        let delta = current - pinch.baseline;
        if delta > self.pinch_threshold {
            pinch.baseline = current;
            (morph.step() < MAX_MORPH_STEP).then_some(GestureAction::Jump(MorphTarget::Chaos))
        } else if delta < -self.pinch_threshold {
            pinch.baseline = current;
            (morph.step() > 0).then_some(GestureAction::Jump(MorphTarget::Formed))
        } else {
            None
        }
    }

    /// Any lifted contact ends the pinch, even if two fingers remain down.
    pub fn touch_end(&mut self) {
        self.pinch = None;
    }
}

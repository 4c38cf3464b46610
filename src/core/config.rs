//! Tuning knobs for the interaction core, grouped in one place.
//!
//! `TreeConfig::default()` mirrors the constants in `core::constants`; tests
//! and embedders can override individual fields with struct update syntax.

use super::constants::*;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct TreeConfig {
    /// Radians of angular velocity per pixel of pointer movement, per axis.
    /// `x` maps horizontal drag to yaw, `y` maps vertical drag to pitch.
    pub drag_sensitivity: Vec2,
    /// Maximum pointer displacement (pixels) for a press to count as a tap.
    pub tap_max_distance: f32,
    /// Maximum press duration (milliseconds) for a press to count as a tap.
    pub tap_max_duration_ms: f64,
    /// Inter-finger distance change (pixels) that triggers a pinch jump.
    pub pinch_threshold: f32,
    /// Per-tick multiplier applied to the velocity once dragging stops.
    pub velocity_decay: f32,
    /// The decay loop stops once both velocity components are at or below this.
    pub velocity_epsilon: f32,
    /// Number of photos kept; older uploads are evicted first.
    pub max_photos: usize,
    pub tree_height: f32,
    pub tree_radius: f32,
    /// Radius of the dispersed sphere the particles scatter into.
    pub chaos_radius: f32,
    /// Photo ornaments are placed on a cone this much wider than the foliage.
    pub photo_radius_scale: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: Vec2::new(DRAG_SENSITIVITY_X, DRAG_SENSITIVITY_Y),
            tap_max_distance: TAP_MAX_DISTANCE,
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            pinch_threshold: PINCH_THRESHOLD,
            velocity_decay: VELOCITY_DECAY,
            velocity_epsilon: VELOCITY_EPSILON,
            max_photos: MAX_PHOTOS,
            tree_height: TREE_HEIGHT,
            tree_radius: TREE_RADIUS,
            chaos_radius: CHAOS_RADIUS,
            photo_radius_scale: PHOTO_RADIUS_SCALE,
        }
    }
}

//! User intents coming from the overlay controls and the keyboard.

use super::constants::ROTATION_INJECT_STEP;
use super::morph::MorphTarget;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    SetState(MorphTarget),
    Firework,
    TogglePhotos,
    ToggleCamera,
    CloseZoom,
    /// Overwrite the horizontal angular velocity.
    Rotate(f32),
    StopRotation,
}

#[inline]
pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "1" => Some(Intent::SetState(MorphTarget::Formed)),
        "2" => Some(Intent::SetState(MorphTarget::Chaos)),
        "f" | "F" => Some(Intent::Firework),
        "p" | "P" => Some(Intent::TogglePhotos),
        "c" | "C" => Some(Intent::ToggleCamera),
        "Escape" => Some(Intent::CloseZoom),
        "ArrowLeft" => Some(Intent::Rotate(-ROTATION_INJECT_STEP)),
        "ArrowRight" => Some(Intent::Rotate(ROTATION_INJECT_STEP)),
        " " => Some(Intent::StopRotation),
        _ => None,
    }
}

/// Element id of each overlay button and the intent it sends.
pub const BUTTON_INTENTS: &[(&str, Intent)] = &[
    ("btn-formed", Intent::SetState(MorphTarget::Formed)),
    ("btn-chaos", Intent::SetState(MorphTarget::Chaos)),
    ("btn-firework", Intent::Firework),
    ("btn-photos", Intent::TogglePhotos),
    ("btn-camera", Intent::ToggleCamera),
    ("photo-zoom-close", Intent::CloseZoom),
];

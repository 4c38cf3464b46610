pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::{wire_controls, wire_photo_upload};
pub use keyboard::{wire_global_keydown, wire_overlay_toggle_h};
pub use pointer::{wire_input_handlers, InputWiring};

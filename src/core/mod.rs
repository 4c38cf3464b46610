pub mod config;
pub mod constants;
pub mod fireworks;
pub mod gesture;
pub mod intent;
pub mod morph;
pub mod photos;
pub mod physics;
pub mod sampler;
pub mod scheduler;
pub mod session;

pub use config::TreeConfig;
pub use constants::*;
pub use gesture::{GestureAction, GestureController, PointerSample};
pub use intent::{intent_for_key, Intent, BUTTON_INTENTS};
pub use morph::{MorphState, MorphTarget};
pub use photos::{PhotoAlbum, PhotoData};
pub use physics::RotationPhysics;
pub use scheduler::{FrameScheduler, TickHandle, TickScheduler};
pub use session::{RenderSink, SceneFrame, TreeSession};

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");

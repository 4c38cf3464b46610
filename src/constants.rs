// Visual tuning constants used by the web frontend.

// Camera
pub const CAMERA_Z: f32 = 24.0; // eye distance along +Z
pub const CAMERA_Y: f32 = 1.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;

// Point sizing (world units before perspective)
pub const PHOTO_MARKER_SIZE: f32 = 0.9;
pub const FIREWORK_SIZE: f32 = 0.18;

// Interaction
pub const PICK_PHOTO_RADIUS: f32 = 0.8; // ray-sphere radius for photo picking
pub const PITCH_LIMIT: f32 = 1.2; // radians either way

// Morph smoothing
pub const MORPH_TAU_SEC: f32 = 0.6; // displayed progress eases toward the target

// Idle spin added on top of user velocity while formed
pub const IDLE_SPIN_PER_SEC: f32 = 0.08;

pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

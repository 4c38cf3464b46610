// Shared tree geometry and interaction tuning constants.

// Tree layout (world units)
pub const TREE_HEIGHT: f32 = 14.0;
pub const TREE_RADIUS: f32 = 5.5;
pub const CHAOS_RADIUS: f32 = 15.0; // dispersed cloud radius
pub const PHOTO_RADIUS_SCALE: f32 = 1.1; // photos sit just outside the foliage shell
pub const ORNAMENT_RADIUS_SCALE: f32 = 1.03;

// Particle counts
pub const FOLIAGE_COUNT: usize = 35_000;
pub const ORNAMENT_COUNT: usize = 150;

// Point sizing (world units before perspective)
pub const FOLIAGE_SIZE_MIN: f32 = 0.05;
pub const FOLIAGE_SIZE_MAX: f32 = 0.14;
pub const ORNAMENT_SIZE: f32 = 0.32;

// Palette (linear-ish RGB)
pub const GOLD_MAIN: [f32; 3] = [1.0, 0.84, 0.0];
pub const GOLD_LIGHT: [f32; 3] = [1.0, 0.98, 0.8];
pub const ORANGE_GLOW: [f32; 3] = [1.0, 0.65, 0.0];
pub const RED_RUBY: [f32; 3] = [0.78, 0.0, 0.22];
pub const WARM_WHITE: [f32; 3] = [1.0, 1.0, 0.94];

// Morph
pub const MAX_MORPH_STEP: u8 = 5;

// Drag sensitivity (radians per pixel); horizontal is 25% livelier than vertical
pub const DRAG_SENSITIVITY_X: f32 = 0.0054;
pub const DRAG_SENSITIVITY_Y: f32 = 0.00432;

// Tap classification
pub const TAP_MAX_DISTANCE: f32 = 10.0; // pixels
pub const TAP_MAX_DURATION_MS: f64 = 300.0;

// Pinch jump threshold (pixels of inter-finger distance change)
pub const PINCH_THRESHOLD: f32 = 40.0;

// Rotation decay
pub const VELOCITY_DECAY: f32 = 0.965; // per tick
pub const VELOCITY_EPSILON: f32 = 0.0005; // loop stops once both components are below this
pub const ROTATION_INJECT_STEP: f32 = 0.03; // keyboard spin, radians per frame

// Photos
pub const MAX_PHOTOS: usize = 16;
pub const PHOTO_TILT_RANGE: f32 = 0.2; // roll in [-range, range]
pub const PHOTO_ID_LEN: usize = 9;

// Fireworks
pub const FIREWORK_LIFETIME_MS: f64 = 2400.0;
pub const FIREWORK_PARTICLES: usize = 160;
pub const FIREWORK_SPEED: f32 = 4.5; // world units per second
pub const FIREWORK_GRAVITY: f32 = 2.2;

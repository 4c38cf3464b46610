use crate::constants::{CAMERA_FOVY_DEG, CAMERA_Y, CAMERA_Z, IDLE_SPIN_PER_SEC, PITCH_LIMIT};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed viewpoint the scene is drawn from.
    pub fn scene(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, CAMERA_Y, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 200.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[inline]
/// Compute a world-space ray from canvas pixel coordinates.
///
/// - `width`, `height`: canvas backing store size in pixels
/// - `sx`, `sy`: pixel coordinates in the same space
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    camera: &Camera,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Accumulated yaw/pitch of the tree group.
///
/// The published velocity is applied once per frame, so a drag that stops
/// moving keeps spinning at its last delta until released.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TreeOrientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl TreeOrientation {
    pub fn advance(&mut self, velocity: Vec2, progress: f32, is_dragging: bool, dt_sec: f32) {
        self.yaw += velocity.x;
        self.pitch = (self.pitch + velocity.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if !is_dragging {
            // Formed trees turn slowly on their own.
            self.yaw += IDLE_SPIN_PER_SEC * dt_sec * (1.0 - progress);
        }
        self.yaw = self.yaw.rem_euclid(std::f32::consts::TAU);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }
}

//! Random point generators for the tree (cone surface) and chaos (sphere volume)
//! arrangements, plus the particle clouds built from them.

use super::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Random point on the lateral surface of a cone centred on the origin.
///
/// `y` is uniform in `[-height/2, height/2]`; the radius shrinks linearly from
/// `radius` at the base to zero at the apex.
pub fn cone_point<R: Rng + ?Sized>(rng: &mut R, height: f32, radius: f32) -> Vec3 {
    let half = height * 0.5;
    let y = rng.gen_range(-half..=half);
    let r = cone_radius_at(y, height, radius);
    let theta = rng.gen_range(0.0..TAU);
    Vec3::new(r * theta.cos(), y, r * theta.sin())
}

/// Cone radius at height `y` (base at `-height/2`).
#[inline]
pub fn cone_radius_at(y: f32, height: f32, radius: f32) -> f32 {
    radius * (1.0 - (y + height * 0.5) / height)
}

/// Random point uniformly distributed by volume inside a sphere.
pub fn sphere_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let w: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let r = w.cbrt() * radius;
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Position and orientation for a new photo ornament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Places a photo on a cone slightly wider than the foliage, facing outward
/// with a small random roll.
pub fn photo_placement<R: Rng + ?Sized>(rng: &mut R, height: f32, radius: f32) -> Placement {
    let position = cone_point(rng, height, radius);
    let yaw = position.x.atan2(position.z);
    let roll = rng.gen_range(-PHOTO_TILT_RANGE..PHOTO_TILT_RANGE);
    Placement {
        position,
        rotation: Vec3::new(0.0, yaw, roll),
    }
}

/// One morphing particle: where it sits in chaos, where it sits on the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphParticle {
    pub chaos_pos: Vec3,
    pub target_pos: Vec3,
    pub color: [f32; 3],
    pub size: f32,
}

/// Builds the foliage and ornament particles for a tree of the given shape.
///
/// Foliage sits on the cone in the gold palette; ornaments ride a slightly
/// wider cone, larger and mostly ruby.
pub fn tree_cloud<R: Rng + ?Sized>(
    rng: &mut R,
    foliage_count: usize,
    ornament_count: usize,
    height: f32,
    radius: f32,
    chaos_radius: f32,
) -> Vec<MorphParticle> {
    const FOLIAGE_PALETTE: [[f32; 3]; 3] = [GOLD_MAIN, GOLD_LIGHT, ORANGE_GLOW];
    const ORNAMENT_PALETTE: [[f32; 3]; 3] = [RED_RUBY, RED_RUBY, WARM_WHITE];

    let mut out = Vec::with_capacity(foliage_count + ornament_count);
    for _ in 0..foliage_count {
        out.push(MorphParticle {
            chaos_pos: sphere_point(rng, chaos_radius),
            target_pos: cone_point(rng, height, radius),
            color: FOLIAGE_PALETTE[rng.gen_range(0..FOLIAGE_PALETTE.len())],
            size: rng.gen_range(FOLIAGE_SIZE_MIN..FOLIAGE_SIZE_MAX),
        });
    }
    for _ in 0..ornament_count {
        out.push(MorphParticle {
            chaos_pos: sphere_point(rng, chaos_radius),
            target_pos: cone_point(rng, height, radius * ORNAMENT_RADIUS_SCALE),
            color: ORNAMENT_PALETTE[rng.gen_range(0..ORNAMENT_PALETTE.len())],
            size: ORNAMENT_SIZE,
        });
    }
    out
}

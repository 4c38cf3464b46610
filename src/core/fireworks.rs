//! Firework triggers and the burst particles drawn for each one.
//!
//! A trigger is just a timestamp. Each burst is reproducible from its
//! timestamp alone, so the renderer can rebuild it every frame without
//! keeping per-particle state.

use super::constants::*;
use super::sampler::sphere_point;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug, Default)]
pub struct Fireworks {
    triggers: Vec<f64>,
}

impl Fireworks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, now_ms: f64) {
        self.triggers.push(now_ms);
    }

    pub fn triggers(&self) -> &[f64] {
        &self.triggers
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParticle {
    pub position: Vec3,
    pub color: [f32; 3],
    /// 1.0 at launch, 0.0 at the end of the lifetime.
    pub alpha: f32,
}

#[inline]
pub fn is_alive(trigger_ms: f64, now_ms: f64) -> bool {
    let age = now_ms - trigger_ms;
    (0.0..FIREWORK_LIFETIME_MS).contains(&age)
}

/// Particles of the burst launched at `trigger_ms`, as seen at `now_ms`.
/// Empty before launch and after the lifetime.
pub fn burst_particles(trigger_ms: f64, now_ms: f64) -> Vec<BurstParticle> {
    if !is_alive(trigger_ms, now_ms) {
        return Vec::new();
    }
    let age_sec = ((now_ms - trigger_ms) / 1000.0) as f32;
    let life = (1.0 - (now_ms - trigger_ms) / FIREWORK_LIFETIME_MS) as f32;

    let mut rng = StdRng::seed_from_u64(trigger_ms.to_bits());
    let origin = Vec3::new(
        rng.gen_range(-4.0..4.0),
        TREE_HEIGHT * 0.5 + rng.gen_range(1.0..4.0),
        rng.gen_range(-2.0..2.0),
    );
    let palette = [GOLD_MAIN, RED_RUBY, WARM_WHITE, ORANGE_GLOW];
    let color = palette[rng.gen_range(0..palette.len())];

    (0..FIREWORK_PARTICLES)
        .map(|_| {
            let dir = sphere_point(&mut rng, 1.0);
            let drop = Vec3::new(0.0, -0.5 * FIREWORK_GRAVITY * age_sec * age_sec, 0.0);
            BurstParticle {
                position: origin + dir * FIREWORK_SPEED * age_sec + drop,
                color,
                alpha: life * life,
            }
        })
        .collect()
}

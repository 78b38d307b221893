// points.rs - Particle field
//
// Flat xyz buffer, filled once and never touched again. Only the rotation
// moves: spun every frame and overwritten by pointer movement.

use glam::{EulerRot, Mat4, Vec3};

use super::material::{Blending, PointsMaterial, Rgb};
use crate::rng::Rng;

pub const POINT_COUNT: usize = 1000;
pub const EXTENT: f32 = 5.0;

const SPIN_X: f32 = 0.0005;
const SPIN_Y: f32 = 0.001;
const AIM_FACTOR: f32 = 0.1;

pub const MATERIAL: PointsMaterial = PointsMaterial {
    size: 0.02,
    color: Rgb::from_hex(0x6366f1),
    opacity: 0.8,
    blending: Blending::Additive,
};

#[derive(Debug, Clone)]
pub struct PointCloud {
    positions: Vec<f32>,
    pub rotation: Vec3,
    pub material: PointsMaterial,
}

impl PointCloud {
    pub fn new(rng: &mut Rng) -> Self {
        Self::with_count(POINT_COUNT, rng)
    }

    pub fn with_count(count: usize, rng: &mut Rng) -> Self {
        let positions = (0..count * 3).map(|_| rng.range(-EXTENT, EXTENT)).collect();
        Self { positions, rotation: Vec3::ZERO, material: MATERIAL }
    }

    pub fn positions(&self) -> &[f32] { &self.positions }

    pub fn len(&self) -> usize { self.positions.len() / 3 }

    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2]))
    }

    /// Per-frame drift, not time normalized.
    pub fn spin(&mut self) {
        self.rotation.x += SPIN_X;
        self.rotation.y += SPIN_Y;
    }

    /// Overwrites rotation from a normalized pointer position.
    pub fn aim(&mut self, x: f32, y: f32) {
        self.rotation.x = y * AIM_FACTOR;
        self.rotation.y = x * AIM_FACTOR;
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

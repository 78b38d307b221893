// torus.rs - Wireframe ring floating left of centre
//
// Vertex grid laid out like a GL torus: (TUBULAR + 1) columns per ring row,
// RADIAL + 1 rows, seam vertices duplicated. Edges are the unique triangle
// edges of that grid.

use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Vec3};

use super::material::{Rgb, WireframeMaterial};

pub const RADIUS: f32 = 1.0;
pub const TUBE: f32 = 0.3;
pub const RADIAL_SEGMENTS: usize = 16;
pub const TUBULAR_SEGMENTS: usize = 100;
pub const POSITION: Vec3 = Vec3::new(-3.0, 0.0, -2.0);

const SPIN_X: f32 = 0.01;
const SPIN_Y: f32 = 0.005;

pub const MATERIAL: WireframeMaterial = WireframeMaterial { color: Rgb::from_hex(0x8b5cf6) };

#[derive(Debug, Clone)]
pub struct Torus {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    edges: Vec<(u32, u32)>,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: WireframeMaterial,
}

impl Torus {
    pub fn new() -> Self {
        let cols = TUBULAR_SEGMENTS + 1;
        let mut vertices = Vec::with_capacity(cols * (RADIAL_SEGMENTS + 1));
        let mut normals = Vec::with_capacity(vertices.capacity());

        for j in 0..=RADIAL_SEGMENTS {
            let v = j as f32 / RADIAL_SEGMENTS as f32 * TAU;
            for i in 0..=TUBULAR_SEGMENTS {
                let u = i as f32 / TUBULAR_SEGMENTS as f32 * TAU;
                let ring = RADIUS + TUBE * v.cos();
                let p = Vec3::new(ring * u.cos(), ring * u.sin(), TUBE * v.sin());
                let centre = Vec3::new(RADIUS * u.cos(), RADIUS * u.sin(), 0.0);
                vertices.push(p);
                normals.push((p - centre).normalize());
            }
        }

        let at = |j: usize, i: usize| (j * cols + i) as u32;
        let mut edges = Vec::new();
        for j in 1..=RADIAL_SEGMENTS {
            for i in 1..=TUBULAR_SEGMENTS {
                let a = at(j, i - 1);
                let b = at(j - 1, i - 1);
                let c = at(j - 1, i);
                let d = at(j, i);
                edges.push((b, c));
                edges.push((c, d));
                edges.push((b, d));
                if i == 1 { edges.push((a, b)); }
                if j == RADIAL_SEGMENTS { edges.push((d, a)); }
            }
        }

        Self {
            vertices,
            normals,
            edges,
            position: POSITION,
            rotation: Vec3::ZERO,
            material: MATERIAL,
        }
    }

    pub fn vertices(&self) -> &[Vec3] { &self.vertices }

    pub fn normals(&self) -> &[Vec3] { &self.normals }

    pub fn edges(&self) -> &[(u32, u32)] { &self.edges }

    pub fn spin(&mut self) {
        self.rotation.x += SPIN_X;
        self.rotation.y += SPIN_Y;
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

impl Default for Torus {
    fn default() -> Self { Self::new() }
}

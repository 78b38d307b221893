// camera.rs - Perspective camera looking down -Z
//
// Projection follows the GL convention: clip w is the view-space distance,
// NDC x/y/z in [-1, 1].

use glam::{Mat4, Vec3};

pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;
pub const DISTANCE: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Normalized device x, -1 = left edge
    pub x: f32,
    /// Normalized device y, -1 = bottom edge
    pub y: f32,
    /// Distance in front of the camera
    pub depth: f32,
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let mut cam = Self {
            fov: FOV_DEGREES,
            near: NEAR,
            far: FAR,
            aspect: 1.0,
            position: Vec3::new(0.0, 0.0, DISTANCE),
            projection: Mat4::IDENTITY,
        };
        cam.set_aspect(width, height);
        cam.update_projection();
        cam
    }

    /// Degenerate viewports keep the previous aspect.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection(&self) -> Mat4 { self.projection }

    pub fn view(&self) -> Mat4 { Mat4::from_translation(-self.position) }

    pub fn view_projection(&self) -> Mat4 { self.projection * self.view() }

    /// Project a world-space point. `None` when outside the clip volume.
    pub fn project(&self, world: Vec3) -> Option<Projected> {
        project_with(&self.view_projection(), world)
    }
}

/// Project through a precomputed view-projection (or MVP with a local point).
#[inline]
pub fn project_with(matrix: &Mat4, point: Vec3) -> Option<Projected> {
    let clip = *matrix * point.extend(1.0);
    if clip.w <= 0.0 { return None; }
    let ndc = clip.truncate() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.z) { return None; }
    Some(Projected { x: ndc.x, y: ndc.y, depth: clip.w })
}

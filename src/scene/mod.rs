// scene/ - Background scene graph
//
// One particle field, one wireframe torus, two lights, one camera.
// Built once when the canvas mounts; rotations advance every frame.

mod camera;
mod light;
mod material;
mod points;
mod torus;

pub use camera::{project_with, Camera, Projected};
pub use light::{illuminance, AmbientLight, PointLight};
pub use material::{Blending, PointsMaterial, Rgb, WireframeMaterial};
pub use points::{PointCloud, EXTENT, POINT_COUNT};
pub use torus::Torus;

use crate::rng::Rng;

#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub points: PointCloud,
    pub torus: Torus,
    pub point_light: PointLight,
    pub ambient: AmbientLight,
}

impl Scene {
    pub fn new(width: f32, height: f32, rng: &mut Rng) -> Self {
        Self {
            camera: Camera::new(width, height),
            points: PointCloud::new(rng),
            torus: Torus::new(),
            point_light: PointLight::default(),
            ambient: AmbientLight::default(),
        }
    }

    /// One display-refresh step
    pub fn tick(&mut self) {
        self.points.spin();
        self.torus.spin();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
        self.camera.update_projection();
    }

    /// Pointer position in [-1, 1], y up
    pub fn aim(&mut self, x: f32, y: f32) {
        self.points.aim(x, y);
    }
}

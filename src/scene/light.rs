// light.rs - Ambient + point light, evaluated per wireframe vertex

use glam::Vec3;

use super::material::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self { color: Rgb::WHITE, intensity: 1.0, position: Vec3::new(5.0, 5.0, 5.0) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self { color: Rgb::WHITE, intensity: 0.3 }
    }
}

/// Light arriving at a world-space surface point with the given normal.
pub fn illuminance(ambient: &AmbientLight, light: &PointLight, at: Vec3, normal: Vec3) -> Rgb {
    let to_light = (light.position - at).normalize_or_zero();
    let lambert = normal.dot(to_light).max(0.0) * light.intensity;
    let a = ambient.color.scale(ambient.intensity);
    let d = light.color.scale(lambert);
    Rgb { r: a.r + d.r, g: a.g + d.g, b: a.b + d.b }.clamp()
}

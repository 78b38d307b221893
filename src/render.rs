// render.rs - Encode the scene into a display list
//
// Output is in CSS pixels with the origin top-left. The canvas painter
// (dom/canvas.rs) scales by the device pixel ratio and does the drawing.
//
//   Point  = additive sprite from the particle field
//   Line   = one shaded torus edge

use glam::{Mat3, Vec3};

use crate::scene::{illuminance, project_with, Blending, Projected, Rgb, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self { css_width: css_width.max(0.0), css_height: css_height.max(0.0), pixel_ratio }
    }

    /// Backing store size in device pixels
    pub fn drawing_buffer(&self) -> (u32, u32) {
        (
            (self.css_width * self.pixel_ratio).round() as u32,
            (self.css_height * self.pixel_ratio).round() as u32,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Point { x: f32, y: f32, size: f32, color: Rgb, alpha: f32, blending: Blending },
    Line { from: (f32, f32), to: (f32, f32), color: Rgb, alpha: f32 },
}

pub struct Encoder {
    ops: Vec<DrawOp>,
    // Scratch per torus vertex, reused across frames
    screen: Vec<Option<(f32, f32)>>,
    shade: Vec<Rgb>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { ops: Vec::new(), screen: Vec::new(), shade: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    pub fn len(&self) -> usize { self.ops.len() }

    pub fn is_empty(&self) -> bool { self.ops.is_empty() }

    pub fn encode(&mut self, scene: &Scene, viewport: &Viewport) {
        self.clear();
        let (w, h) = (viewport.css_width as f32, viewport.css_height as f32);
        if w <= 0.0 || h <= 0.0 { return; }
        self.encode_points(scene, w, h);
        self.encode_torus(scene, w, h);
    }

    /// Sprite size shrinks with distance: size * (h / 2) / depth
    fn encode_points(&mut self, scene: &Scene, w: f32, h: f32) {
        let mvp = scene.camera.view_projection() * scene.points.model();
        let mat = scene.points.material;

        for p in scene.points.iter() {
            let Some(pr) = project_with(&mvp, p) else { continue };
            if pr.x.abs() > 1.0 || pr.y.abs() > 1.0 { continue; }
            let (x, y) = to_screen(&pr, w, h);
            self.ops.push(DrawOp::Point {
                x,
                y,
                size: mat.size * h * 0.5 / pr.depth,
                color: mat.color,
                alpha: mat.opacity,
                blending: mat.blending,
            });
        }
    }

    fn encode_torus(&mut self, scene: &Scene, w: f32, h: f32) {
        let torus = &scene.torus;
        let model = torus.model();
        let normal_mat = Mat3::from_mat4(model);
        let mvp = scene.camera.view_projection() * model;
        let base = torus.material.color;

        self.screen.clear();
        self.shade.clear();
        for (v, n) in torus.vertices().iter().zip(torus.normals()) {
            self.screen.push(project_with(&mvp, *v).map(|pr| to_screen(&pr, w, h)));
            let world = model.transform_point3(*v);
            let normal: Vec3 = (normal_mat * *n).normalize_or_zero();
            self.shade.push(base.modulate(illuminance(&scene.ambient, &scene.point_light, world, normal)));
        }

        for &(a, b) in torus.edges() {
            let (a, b) = (a as usize, b as usize);
            let (Some(from), Some(to)) = (self.screen[a], self.screen[b]) else { continue };
            let (ca, cb) = (self.shade[a], self.shade[b]);
            self.ops.push(DrawOp::Line {
                from,
                to,
                color: Rgb { r: (ca.r + cb.r) * 0.5, g: (ca.g + cb.g) * 0.5, b: (ca.b + cb.b) * 0.5 },
                alpha: 1.0,
            });
        }
    }
}

impl Default for Encoder {
    fn default() -> Self { Self::new() }
}

#[inline]
fn to_screen(pr: &Projected, w: f32, h: f32) -> (f32, f32) {
    ((pr.x + 1.0) * 0.5 * w, (1.0 - pr.y) * 0.5 * h)
}

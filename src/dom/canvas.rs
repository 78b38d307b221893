// canvas.rs - Paint a display list on a 2D canvas
//
// The context transform carries the device pixel ratio so draw ops stay in
// CSS pixels. Points use "lighter" compositing (additive); consecutive torus
// edges with the same colour share one path.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, SiteError};
use crate::render::{DrawOp, Viewport};
use crate::scene::{Blending, Rgb};

const EDGE_WIDTH: f64 = 0.6;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, viewport: Viewport) -> Result<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(SiteError::js)?
            .ok_or(SiteError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::NoContext)?;

        let mut surface = Self { canvas, context, viewport };
        surface.set_size(viewport);
        Ok(surface)
    }

    pub fn viewport(&self) -> &Viewport { &self.viewport }

    pub fn canvas(&self) -> &HtmlCanvasElement { &self.canvas }

    /// Resize backing store to css × ratio and the element to css pixels.
    pub fn set_size(&mut self, viewport: Viewport) {
        let (bw, bh) = viewport.drawing_buffer();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.css_width));
        let _ = style.set_property("height", &format!("{}px", viewport.css_height));
        self.viewport = viewport;
    }

    pub fn paint(&self, ops: &[DrawOp]) {
        let ctx = &self.context;
        let r = self.viewport.pixel_ratio;
        let _ = ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, self.viewport.css_width, self.viewport.css_height);

        // Torus first so particles glow over it
        self.paint_lines(ops);
        self.paint_points(ops);

        let _ = ctx.set_global_composite_operation("source-over");
        ctx.set_global_alpha(1.0);
    }

    fn paint_lines(&self, ops: &[DrawOp]) {
        let ctx = &self.context;
        let _ = ctx.set_global_composite_operation("source-over");
        ctx.set_line_width(EDGE_WIDTH);

        let mut current: Option<(Rgb, f32)> = None;
        for op in ops {
            let DrawOp::Line { from, to, color, alpha } = op else { continue };
            if current != Some((*color, *alpha)) {
                if current.is_some() { ctx.stroke(); }
                ctx.set_stroke_style_str(&color.css(*alpha));
                ctx.begin_path();
                current = Some((*color, *alpha));
            }
            ctx.move_to(from.0 as f64, from.1 as f64);
            ctx.line_to(to.0 as f64, to.1 as f64);
        }
        if current.is_some() { ctx.stroke(); }
    }

    fn paint_points(&self, ops: &[DrawOp]) {
        let ctx = &self.context;
        let mut style: Option<(Rgb, Blending)> = None;
        for op in ops {
            let DrawOp::Point { x, y, size, color, alpha, blending } = op else { continue };
            if style != Some((*color, *blending)) {
                let mode = match blending {
                    Blending::Additive => "lighter",
                    Blending::Normal => "source-over",
                };
                let _ = ctx.set_global_composite_operation(mode);
                ctx.set_fill_style_str(&color.css(1.0));
                style = Some((*color, *blending));
            }
            ctx.set_global_alpha(*alpha as f64);
            let s = *size as f64;
            ctx.fill_rect(*x as f64 - s * 0.5, *y as f64 - s * 0.5, s, s);
        }
    }
}

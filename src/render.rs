use crate::core::{Rgba, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Canvas 2D surface =====================

/// [`Surface`] backed by a canvas' 2D rendering context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext('2d') failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_gradient_line(&mut self, from: DVec2, to: DVec2, start: Rgba, end: Rgba, width: f64) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        let gradient = ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
        _ = gradient.add_color_stop(0.0, &start.css());
        _ = gradient.add_color_stop(1.0, &end.css());
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(width);
        ctx.stroke();
    }

    fn fill_disc(&mut self, center: DVec2, radius: f64, color: Rgba) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU).is_err() {
            return;
        }
        ctx.set_fill_style_str(&color.css());
        ctx.fill();
    }
}

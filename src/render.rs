use pagefx_core::{Particle, ParticleSink};
use std::f64::consts::TAU;
use web_sys as web;

/// Draws particles as glowing filled circles on a 2D canvas context.
pub struct CanvasSink<'a> {
    pub ctx: &'a web::CanvasRenderingContext2d,
}

impl ParticleSink for CanvasSink<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw(&mut self, particle: &Particle, glow_blur: f64) {
        let color = particle.css_color();
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color);
        self.ctx.set_shadow_blur(glow_blur);
        self.ctx.set_shadow_color(&color);
        if self
            .ctx
            .arc(particle.pos.x, particle.pos.y, particle.radius, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.fill();
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {e:?}"))
}

use crate::constants::PARALLAX_SELECTOR;
use crate::{dom, frame};
use pagefx_core::{parallax_offset, translate_y_css, ParallaxLayer, ParallaxParams};
use wasm_bindgen::JsCast;
use web_sys as web;

struct Target {
    el: web::HtmlElement,
    speed: f64,
}

/// Offsets the parallax sections every frame. Targets are resolved once.
pub struct ParallaxContext {
    targets: Vec<Target>,
}

impl ParallaxContext {
    pub fn resolve(document: &web::Document, params: &ParallaxParams) -> anyhow::Result<Self> {
        let targets = dom::query_all(document, PARALLAX_SELECTOR)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| {
                let classes = el.class_name();
                let layer = ParallaxLayer::from_classes(classes.split_whitespace());
                Target {
                    el,
                    speed: layer.speed(params),
                }
            })
            .collect();
        Ok(Self { targets })
    }

    pub fn frame(&self, viewport_height: f64) {
        for t in &self.targets {
            let rect = t.el.get_bounding_client_rect();
            let offset = parallax_offset(rect.top(), rect.height(), viewport_height, t.speed);
            _ = t
                .el
                .style()
                .set_property("transform", &translate_y_css(offset));
        }
    }
}

pub fn start(document: &web::Document, params: &ParallaxParams) -> anyhow::Result<()> {
    let ctx = ParallaxContext::resolve(document, params)?;
    log::info!("[parallax] {} targets", ctx.targets.len());
    frame::start_loop(move || {
        if let Some(window) = web::window() {
            let (_, viewport_height) = dom::viewport_size(&window);
            ctx.frame(viewport_height);
        }
    });
    Ok(())
}

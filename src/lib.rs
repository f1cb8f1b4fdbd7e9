#![cfg(target_arch = "wasm32")]
use pagefx_core::{install_motion_effects, FieldParams, MotionHost, ParallaxParams, RevealParams};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod anchors;
mod constants;
mod dom;
mod frame;
mod motion;
mod parallax;
mod particles;
mod render;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pagefx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// Each effect is installed independently; one failing leaves the rest running.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let field_params = FieldParams::default();
    let parallax_params = ParallaxParams::default();
    let reveal_params = RevealParams::default();
    field_params.validate()?;
    parallax_params.validate()?;
    reveal_params.validate()?;

    if let Err(e) = reveal::init(&document, &reveal_params) {
        log::error!("[reveal] {:?}", e);
    }

    let motion = motion::init(&window);
    log::info!("[motion] {:?}", motion);

    let mut page = PageEffects {
        document: &document,
        field_params: Some(field_params),
        parallax_params,
    };
    install_motion_effects(motion, &mut page);

    if let Err(e) = anchors::init(&document) {
        log::error!("[anchors] {:?}", e);
    }
    Ok(())
}

/// Motion-gated effects installed on the live document.
struct PageEffects<'a> {
    document: &'a web::Document,
    field_params: Option<FieldParams>,
    parallax_params: ParallaxParams,
}

impl MotionHost for PageEffects<'_> {
    fn remove_canvas(&mut self) {
        particles::remove_canvas(self.document);
    }

    fn start_particles(&mut self) {
        let Some(params) = self.field_params.take() else {
            return;
        };
        if let Err(e) = particles::start(self.document, params) {
            log::warn!("[particles] {:?}", e);
        }
    }

    fn start_parallax(&mut self) {
        if let Err(e) = parallax::start(self.document, &self.parallax_params) {
            log::error!("[parallax] {:?}", e);
        }
    }
}

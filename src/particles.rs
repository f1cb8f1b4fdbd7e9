use crate::constants::PARTICLE_CANVAS_ID;
use crate::{dom, frame, render};
use pagefx_core::{FieldInput, FieldParams, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Remove `#particle-canvas` from the page when motion is reduced.
pub fn remove_canvas(document: &web::Document) {
    if let Some(canvas_el) = document.get_element_by_id(PARTICLE_CANVAS_ID) {
        canvas_el.remove();
        log::info!("[particles] reduced motion, canvas removed");
    }
}

/// Install the particle field on `#particle-canvas` and start its frame loop.
pub fn start(document: &web::Document, params: FieldParams) -> anyhow::Result<()> {
    let canvas_el = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PARTICLE_CANVAS_ID}"))?;

    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{PARTICLE_CANVAS_ID} is not a canvas: {e:?}"))?;
    let ctx = render::context_2d(&canvas)?;

    let (width, height) = dom::sync_canvas_to_viewport(&canvas);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(params, width, height, seed)));
    log::info!(
        "[particles] started with {} particles ({:.0}x{:.0})",
        field.borrow().len(),
        width,
        height
    );

    wire_inputs(&canvas, &field);

    let field_tick = field.clone();
    frame::start_loop(move || {
        let mut sink = render::CanvasSink { ctx: &ctx };
        field_tick.borrow_mut().advance(&mut sink);
    });
    Ok(())
}

fn wire_inputs(canvas: &web::HtmlCanvasElement, field: &Rc<RefCell<ParticleField>>) {
    {
        let canvas = canvas.clone();
        let field = field.clone();
        dom::add_window_listener("resize", move |_: web::Event| {
            let (width, height) = dom::sync_canvas_to_viewport(&canvas);
            field
                .borrow_mut()
                .handle(FieldInput::Resize { width, height });
        });
    }
    {
        let field = field.clone();
        dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
            field.borrow_mut().handle(FieldInput::PointerMove {
                x: ev.client_x() as f64,
                y: ev.client_y() as f64,
            });
        });
    }
    {
        let field = field.clone();
        dom::add_window_listener("touchmove", move |ev: web::TouchEvent| {
            field.borrow_mut().handle(touch_input(&ev));
        });
    }
}

#[inline]
fn touch_input(ev: &web::TouchEvent) -> FieldInput {
    let first = ev
        .touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64));
    FieldInput::TouchMove(first)
}

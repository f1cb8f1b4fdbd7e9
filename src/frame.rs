use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `tick` from `requestAnimationFrame` until page teardown.
///
/// There is no cancellation: the closure re-schedules itself after every
/// frame and is kept alive by the cycle through `slot`.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let slot: FrameClosure = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        request_frame(&slot_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&slot);
}

fn request_frame(slot: &FrameClosure) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

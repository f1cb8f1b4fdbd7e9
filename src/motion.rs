use crate::constants::REDUCED_MOTION_QUERY;
use pagefx_core::MotionPreference;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read the reduced-motion preference and reload the page whenever it changes.
pub fn init(window: &web::Window) -> MotionPreference {
    let query = match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(q)) => q,
        _ => {
            log::warn!("[motion] matchMedia unavailable, assuming full motion");
            return MotionPreference::Full;
        }
    };

    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        log::info!("[motion] preference changed, reloading");
        if let Some(w) = web::window() {
            _ = w.location().reload();
        }
    }) as Box<dyn FnMut(_)>);
    _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();

    MotionPreference::from_reduce_matches(query.matches())
}

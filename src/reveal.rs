use crate::constants::{REVEAL_INDEX_ATTR, REVEAL_SELECTOR, VISIBLE_CLASS};
use crate::dom;
use pagefx_core::{RevealHost, RevealLedger, RevealParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ObserverHost<'a> {
    observer: &'a web::IntersectionObserver,
}

impl RevealHost for ObserverHost<'_> {
    type Target = web::Element;

    fn mark_visible(&mut self, target: &web::Element) {
        _ = target.class_list().add_1(VISIBLE_CLASS);
    }

    fn unobserve(&mut self, target: &web::Element) {
        self.observer.unobserve(target);
    }
}

#[inline]
fn reveal_index(el: &web::Element) -> Option<usize> {
    el.get_attribute(REVEAL_INDEX_ATTR)?.parse().ok()
}

/// Observe every reveal target and add the visible class the first time it
/// is reported intersecting. Each element is unobserved once revealed.
pub fn init(document: &web::Document, params: &RevealParams) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    let ledger = Rc::new(RefCell::new(RevealLedger::new()));

    let ledger_cb = ledger.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut host = ObserverHost {
                observer: &observer,
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = reveal_index(&target) else {
                    continue;
                };
                ledger_cb
                    .borrow_mut()
                    .apply(&mut host, index, &target, entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(params.threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {e:?}"))?;
    callback.forget();

    for (i, el) in targets.iter().enumerate() {
        _ = el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
        ledger.borrow_mut().observe(i);
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}

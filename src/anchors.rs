use crate::constants::ANCHOR_LINK_SELECTOR;
use crate::dom;
use pagefx_core::{fragment_target, resolve_anchor_click, AnchorClick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth-scroll in-page navigation links to their targets.
///
/// Links without a fragment at load are left alone. The hash is re-read on
/// every click; a fragment that matches nothing (or is not a valid selector)
/// keeps the browser's default navigation.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let mut wired = 0usize;
    for el in dom::query_all(document, ANCHOR_LINK_SELECTOR)? {
        let Ok(link) = el.dyn_into::<web::HtmlAnchorElement>() else {
            continue;
        };
        if fragment_target(&link.hash()).is_none() {
            continue;
        }
        let doc = document.clone();
        let link_cb = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let click = resolve_anchor_click(&link_cb.hash(), |fragment| {
                doc.query_selector(fragment).ok().flatten()
            });
            if let AnchorClick::Scroll(target) = click {
                ev.prevent_default();
                scroll_to_top(&target);
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }
    log::info!("[anchors] {wired} links wired");
    Ok(())
}

fn scroll_to_top(target: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

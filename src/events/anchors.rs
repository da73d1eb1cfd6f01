use crate::constants::ANCHOR_SELECTOR;
use crate::core::motion::anchor_target;
use crate::page::SharedPage;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Delegated handler for in-page links: glide to the target instead of
/// jumping. Links whose target does not exist keep the browser default.
pub fn wire_anchors(page: &SharedPage) {
    let p = page.clone();
    dom::listen(&page.document, "click", move |ev: web::MouseEvent| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };
        let Some(target) = dom::query(&p.document, selector) else {
            log::debug!("[anchors] no element for {}", selector);
            return;
        };
        ev.prevent_default();
        p.scroller.scroll_to(&target);
    });
    log::info!("[anchors] smooth scrolling via {}", page.scroller.name());
}

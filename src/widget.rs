use crate::constants::{WIDGET_OVERRIDE_CSS, WIDGET_STYLE_ID, WIDGET_TAG};
use crate::core::constants::{WIDGET_RETRY_ATTEMPTS, WIDGET_RETRY_MS};
use crate::core::RetryBudget;
use crate::dom;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Inject the override stylesheet into the viewer's shadow tree.
/// Returns false while the shadow root does not exist yet.
fn inject_override(document: &web::Document, viewer: &web::Element) -> bool {
    let Some(root) = viewer.shadow_root() else {
        return false;
    };
    if root.get_element_by_id(WIDGET_STYLE_ID).is_some() {
        return true;
    }
    let Ok(style) = document.create_element("style") else {
        return false;
    };
    style.set_id(WIDGET_STYLE_ID);
    style.set_text_content(Some(WIDGET_OVERRIDE_CSS));
    if let Err(e) = root.append_child(&style) {
        log::warn!("[widget] style injection failed: {:?}", e);
        return false;
    }
    log::debug!("[widget] override stylesheet injected");
    true
}

/// Hide the 3D viewer's built-in logo and hints. Re-applied on load and on a
/// short bounded interval for nodes the viewer renders late.
pub fn wire(document: &web::Document) {
    let Some(viewer) = dom::query(document, WIDGET_TAG) else {
        return;
    };
    inject_override(document, &viewer);

    let (d, v) = (document.clone(), viewer.clone());
    dom::listen(&viewer, "load", move |_: web::Event| {
        inject_override(&d, &v);
    });

    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let mut budget = RetryBudget::new(WIDGET_RETRY_ATTEMPTS);
    let (d, h) = (document.clone(), handle.clone());
    let interval = Interval::new(WIDGET_RETRY_MS, move || {
        if budget.tick() {
            inject_override(&d, &viewer);
        }
        if budget.exhausted() {
            // The interval owns this closure; drop it after the callback returns.
            if let Some(done) = h.borrow_mut().take() {
                log::debug!("[widget] retries done after {}", budget.attempts());
                spawn_local(async move { drop(done) });
            }
        }
    });
    *handle.borrow_mut() = Some(interval);
}

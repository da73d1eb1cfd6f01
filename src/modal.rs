use crate::constants::*;
use crate::dom;
use crate::page::{Page, SharedPage};
use web_sys as web;

#[inline]
fn modal_element(document: &web::Document) -> Option<web::Element> {
    dom::query(document, MODAL_SELECTOR)
}

pub fn open(page: &Page) {
    if let Some(el) = modal_element(&page.document) {
        _ = el.class_list().add_1(MODAL_ACTIVE_CLASS);
        let overflow = page.context.borrow_mut().open_modal();
        page.apply_overflow(overflow);
    }
}

pub fn close(page: &Page) {
    if let Some(el) = modal_element(&page.document) {
        _ = el.class_list().remove_1(MODAL_ACTIVE_CLASS);
        let overflow = page.context.borrow_mut().close_modal();
        page.apply_overflow(overflow);
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    modal_element(document)
        .map(|el| el.class_list().contains(MODAL_ACTIVE_CLASS))
        .unwrap_or(false)
}

/// Open/close triggers and backdrop dismissal.
pub fn wire(page: &SharedPage) {
    let Some(modal) = modal_element(&page.document) else {
        log::debug!("[modal] no dialog on page");
        return;
    };

    let p = page.clone();
    dom::add_click_listener(&page.document, MODAL_OPEN_SELECTOR, move || open(&p));
    let p = page.clone();
    dom::add_click_listener(&page.document, MODAL_CLOSE_SELECTOR, move || close(&p));

    // Only clicks on the backdrop itself close; clicks inside the content bubble
    // up with a different target.
    let p = page.clone();
    let backdrop: web::EventTarget = modal.clone().into();
    dom::listen(&modal, "click", move |ev: web::MouseEvent| {
        if ev.target().as_ref() == Some(&backdrop) {
            close(&p);
        }
    });
}

use crate::constants::*;
use crate::core::{InquiryForm, SubmissionFlow, SubmitEffect, SubmitPolicy};
use crate::page::SharedPage;
use crate::{dom, modal, relay};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct InquiryWiring {
    page: SharedPage,
    form: web::HtmlFormElement,
    policy: SubmitPolicy,
    flow: RefCell<SubmissionFlow>,
    submit_label: RefCell<Option<String>>,
}

fn field_value(document: &web::Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}

fn collect(document: &web::Document) -> InquiryForm {
    let interests = dom::query_all(document, INTEREST_CHECKED_SELECTOR)
        .iter()
        .filter_map(|el| el.dyn_ref::<web::HtmlInputElement>().map(|i| i.value()))
        .collect();
    InquiryForm {
        event_type: field_value(document, FIELD_EVENT_TYPE_ID).unwrap_or_default(),
        event_date: field_value(document, FIELD_EVENT_DATE_ID).unwrap_or_default(),
        location: field_value(document, FIELD_LOCATION_ID),
        interests,
        crowd_size: field_value(document, FIELD_CROWD_SIZE_ID).unwrap_or_default(),
    }
}

impl InquiryWiring {
    fn submit_button(&self) -> Option<web::HtmlButtonElement> {
        self.form
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    }

    fn success_block(&self) -> Option<web::Element> {
        dom::query(&self.page.document, SUCCESS_SELECTOR)
    }

    fn set_form_chrome_display(&self, display: &str) {
        dom::set_style(&self.form, "display", display);
        for sel in [MODAL_HEADER_SELECTOR, MODAL_DESC_SELECTOR] {
            if let Some(el) = dom::query(&self.page.document, sel) {
                dom::set_style(&el, "display", display);
            }
        }
    }
}

fn apply(w: &Rc<InquiryWiring>, effects: Vec<SubmitEffect>) {
    for effect in effects {
        match effect {
            SubmitEffect::Alert(msg) => {
                log::info!("[inquiry] {}", msg);
                dom::alert(&msg);
            }
            SubmitEffect::DisableSubmit => {
                if let Some(btn) = w.submit_button() {
                    *w.submit_label.borrow_mut() = btn.text_content();
                    btn.set_disabled(true);
                    btn.set_text_content(Some(SUBMIT_BUSY_LABEL));
                }
            }
            SubmitEffect::EnableSubmit => {
                if let Some(btn) = w.submit_button() {
                    btn.set_disabled(false);
                    if let Some(label) = w.submit_label.borrow_mut().take() {
                        btn.set_text_content(Some(label.as_str()));
                    }
                }
            }
            SubmitEffect::OpenChat(url) => {
                if let Some(win) = web::window() {
                    if let Err(e) = win.open_with_url_and_target(&url, "_blank") {
                        log::warn!("[inquiry] chat link blocked: {:?}", e);
                    }
                }
            }
            SubmitEffect::SendEmail(params) => w.page.email.send(&params),
            SubmitEffect::PostFormRelay => {
                let w2 = w.clone();
                spawn_local(async move {
                    let endpoint = w2.page.config.form_relay.endpoint.clone();
                    let outcome = relay::post_form(&endpoint, &w2.form).await;
                    log::info!("[inquiry] form relay answered {:?}", outcome);
                    let next = w2.flow.borrow_mut().relay_finished(outcome);
                    apply(&w2, next);
                });
            }
            SubmitEffect::ShowSuccess => {
                if let Some(success) = w.success_block() {
                    w.set_form_chrome_display("none");
                    dom::set_style(&success, "display", "block");
                }
            }
            SubmitEffect::ScheduleClose { after_ms } => {
                // Without a success block there is nothing to show, so close now.
                let delay = if w.success_block().is_some() { after_ms } else { 0 };
                let w2 = w.clone();
                Timeout::new(delay, move || {
                    let next = w2.flow.borrow_mut().close_elapsed();
                    apply(&w2, next);
                })
                .forget();
            }
            SubmitEffect::CloseModal => {
                if modal::is_open(&w.page.document) {
                    modal::close(&w.page);
                }
            }
            SubmitEffect::ScheduleRestore { after_ms } => {
                let w2 = w.clone();
                Timeout::new(after_ms, move || {
                    let next = w2.flow.borrow_mut().restore_elapsed();
                    apply(&w2, next);
                })
                .forget();
            }
            SubmitEffect::RestoreForm => {
                w.set_form_chrome_display("");
                if let Some(success) = w.success_block() {
                    dom::set_style(&success, "display", "none");
                }
                w.form.reset();
            }
        }
    }
}

/// Attach the submit handler to the inquiry form, if present.
pub fn wire(page: &SharedPage) {
    let Some(form) = page
        .document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[inquiry] no form on page");
        return;
    };
    let w = Rc::new(InquiryWiring {
        page: page.clone(),
        form: form.clone(),
        policy: page.config.submit_policy(),
        flow: RefCell::new(SubmissionFlow::default()),
        submit_label: RefCell::new(None),
    });
    log::info!("[inquiry] channels {:?}", w.policy.channels);
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let data = collect(&w.page.document);
        let effects = w.flow.borrow_mut().submit(&data, &w.policy);
        apply(&w, effects);
    });
}

use crate::constants::*;
use crate::core::constants::{REVEAL_THRESHOLD, STAT_THRESHOLD};
use crate::core::{assigned_delay, CountFrame, RevealAction, RevealTarget, StatCounter};
use crate::{dom, frame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn observer(threshold: f64, callback: ObserverCallback) -> Option<web::IntersectionObserver> {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin("0px");
    let obs = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    callback.forget();
    match obs {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

fn entries(list: &js_sys::Array) -> impl Iterator<Item = web::IntersectionObserverEntry> + '_ {
    list.iter()
        .map(|v| v.unchecked_into::<web::IntersectionObserverEntry>())
}

fn data_attr(el: &web::Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", key))
}

/// One-shot reveal of content blocks as they scroll into view.
pub fn wire_reveals(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let mut targets = Vec::with_capacity(elements.len());
    for (index, el) in elements.iter().enumerate() {
        let cl = el.class_list();
        let explicit = data_attr(el, "delay");
        let staggered = cl.contains(STAGGERED_CLASS);
        let delay = match assigned_delay(explicit.as_deref(), staggered, index) {
            Some(d) => {
                _ = el.set_attribute("data-delay", &d);
                Some(d)
            }
            None => explicit,
        };
        let slider_item = SLIDER_ITEM_CLASSES.iter().any(|c| cl.contains(c));
        targets.push((el.clone(), RevealTarget::new(delay, slider_item)));
    }
    let targets = Rc::new(RefCell::new(targets));

    let state = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |list: js_sys::Array, _obs: web::IntersectionObserver| {
            let (viewport_width, _) = dom::viewport_size();
            let mut state = state.borrow_mut();
            for entry in entries(&list) {
                let el = entry.target();
                let Some((_, target)) = state.iter_mut().find(|(e, _)| *e == el) else {
                    continue;
                };
                if let RevealAction::Reveal { delay } =
                    target.observe(entry.is_intersecting(), viewport_width)
                {
                    dom::set_style(&el, "transition-delay", &delay);
                    _ = el.class_list().add_1(VISIBLE_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let Some(obs) = observer(REVEAL_THRESHOLD, callback) else {
        // Without an observer nothing would ever show; reveal everything now.
        for (el, _) in targets.borrow().iter() {
            _ = el.class_list().add_1(VISIBLE_CLASS);
        }
        return;
    };
    for (el, _) in targets.borrow().iter() {
        obs.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.borrow().len());
}

fn run_count_up(el: web::Element, target: i64) {
    let mut counter = StatCounter::new(target);
    frame::start_loop(move |_| {
        let f = counter.step();
        el.set_text_content(Some(&f.value().to_string()));
        matches!(f, CountFrame::Running(_))
    });
}

/// Count statistic numbers up from zero the first time they become visible.
pub fn wire_stat_counters(document: &web::Document) {
    let stats = dom::query_all(document, STAT_SELECTOR);
    if stats.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |list: js_sys::Array, obs: web::IntersectionObserver| {
            for entry in entries(&list) {
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                obs.unobserve(&el);
                match data_attr(&el, "target").and_then(|raw| StatCounter::parse_target(&raw)) {
                    Some(target) => run_count_up(el, target),
                    None => log::debug!("[reveal] stat without a numeric data-target"),
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let Some(obs) = observer(STAT_THRESHOLD, callback) else {
        // No count-up without an observer; show the final figures.
        for el in &stats {
            let target = data_attr(el, "target").and_then(|raw| StatCounter::parse_target(&raw));
            if let Some(target) = target {
                el.set_text_content(Some(&target.to_string()));
            }
        }
        return;
    };
    for el in &stats {
        obs.observe(el);
    }
}

use crate::animator::Target;
use crate::constants::*;
use crate::core::constants::SCROLL_HINT_REMOVE_MS;
use crate::core::motion::should_dismiss_hint;
use crate::core::{BackdropTransform, FrameGate, ScrollMetrics, ScrollState, SmartNavbar, Tween};
use crate::page::SharedPage;
use crate::{dom, frame};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Elements touched on every processed scroll frame. Each is optional.
struct ScrollTargets {
    navbar: Option<web::Element>,
    progress_bar: Option<web::Element>,
    backdrop: Option<web::Element>,
}

struct ScrollWiring {
    document: web::Document,
    targets: ScrollTargets,
    state: RefCell<ScrollState>,
    gate: RefCell<FrameGate>,
}

fn sample(document: &web::Document) -> ScrollMetrics {
    // clientHeight excludes a horizontal scrollbar, unlike innerHeight.
    let (document_height, viewport_height) = document
        .document_element()
        .map(|el| (el.scroll_height() as f64, el.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    ScrollMetrics {
        offset_y: dom::scroll_y(),
        document_height,
        viewport_height,
    }
}

impl ScrollWiring {
    fn process(&self) {
        let metrics = sample(&self.document);
        let nav = self.state.borrow_mut().update(metrics.offset_y);
        if let Some(el) = &self.targets.navbar {
            let cl = el.class_list();
            _ = cl.toggle_with_force(AT_TOP_CLASS, nav.at_top);
            _ = cl.toggle_with_force(HIDDEN_CLASS, nav.hidden);
        }
        let progress = metrics.progress();
        if let Some(el) = &self.targets.progress_bar {
            dom::set_style(el, "width", &format!("{}%", metrics.progress_percent()));
        }
        if let Some(el) = &self.targets.backdrop {
            dom::set_style(el, "transform", &BackdropTransform::from_progress(progress).to_css());
        }
    }
}

/// Progress bar, backdrop transform and navbar state, coalesced to one
/// update per animation frame.
pub fn wire_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let w = Rc::new(ScrollWiring {
        document: document.clone(),
        targets: ScrollTargets {
            navbar: dom::query(document, NAVBAR_SELECTOR),
            progress_bar: document.get_element_by_id(PROGRESS_BAR_ID),
            backdrop: dom::query(document, BACKDROP_SELECTOR),
        },
        state: RefCell::new(ScrollState::new(dom::scroll_y())),
        gate: RefCell::new(FrameGate::default()),
    });
    // Paint the initial state before the first scroll event.
    w.process();

    dom::listen_passive(&window, "scroll", move |_: web::Event| {
        if !w.gate.borrow_mut().request() {
            return;
        }
        let w2 = w.clone();
        frame::request_once(move |_| {
            w2.process();
            w2.gate.borrow_mut().complete();
        });
    });
}

/// Tuck the hero navbar away while scrolling down; attached on hero start.
pub fn wire_smart_navbar(page: &SharedPage) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(nav) = dom::query(&page.document, SMART_NAV_SELECTOR) else {
        return;
    };
    let smart = RefCell::new(SmartNavbar::new(dom::scroll_y()));
    let p = page.clone();
    let mut on_scroll = frame::per_frame(move |y: f64| {
        let changed = smart.borrow_mut().update(y);
        if let Some(placement) = changed {
            p.animator.to(
                Target::Element(&nav),
                &Tween {
                    y_percent: Some(placement.y_percent()),
                    overwrite: Some(true),
                    ..Tween::new().duration(0.5).ease("power2.out")
                },
            );
        }
    });
    dom::listen_passive(&window, "scroll", move |_: web::Event| {
        on_scroll(dom::scroll_y())
    });
}

/// Fade out a slider's swipe hint when its first scroll has moved it far
/// enough. Only that first scroll event is considered.
pub fn wire_scroll_hints(document: &web::Document) {
    for slider in dom::query_all(document, SLIDER_SELECTOR) {
        let source = slider.clone();
        dom::listen_once(&slider, "scroll", move |_: web::Event| {
            let Some(hint) = source
                .parent_element()
                .and_then(|parent| parent.query_selector(SCROLL_HINT_SELECTOR).ok().flatten())
            else {
                return;
            };
            if should_dismiss_hint(source.scroll_left()) {
                dom::set_style(&hint, "opacity", "0");
                Timeout::new(SCROLL_HINT_REMOVE_MS, move || hint.remove()).forget();
            }
        });
    }
}

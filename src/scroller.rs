use crate::animator::has_global;
use crate::core::motion::{ease_out_expo, Glide};
use crate::{dom, frame};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    type Lenis;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Lenis, JsValue>;

    #[wasm_bindgen(method)]
    fn raf(this: &Lenis, time: f64);

    #[wasm_bindgen(method, catch, js_name = scrollTo)]
    fn scroll_to(this: &Lenis, target: &JsValue, options: &JsValue) -> Result<(), JsValue>;
}

/// Smooth-scroll capability used by in-page anchors.
pub trait SmoothScroller {
    fn scroll_to(&self, target: &web::Element);
    fn name(&self) -> &'static str;
}

/// Cubic ease-in-out glide driven from animation frames.
pub struct EasedScroller;

impl SmoothScroller for EasedScroller {
    fn scroll_to(&self, target: &web::Element) {
        let glide = Glide::to_element(dom::scroll_y(), target.get_bounding_client_rect().top());
        let mut started: Option<f64> = None;
        frame::start_loop(move |now| {
            let t0 = *started.get_or_insert(now);
            let (y, finished) = glide.sample(now - t0);
            if let Some(w) = web::window() {
                w.scroll_to_with_x_and_y(0.0, y);
            }
            !finished
        });
    }

    fn name(&self) -> &'static str {
        "eased"
    }
}

/// Wraps a Lenis instance and feeds it animation frames.
pub struct LenisScroller {
    lenis: Rc<Lenis>,
    fallback: EasedScroller,
}

impl LenisScroller {
    fn create() -> Result<Self, JsValue> {
        let opts = js_sys::Object::new();
        let easing = Closure::<dyn Fn(f64) -> f64>::new(ease_out_expo);
        js_sys::Reflect::set(&opts, &"duration".into(), &JsValue::from_f64(1.2))?;
        js_sys::Reflect::set(&opts, &"easing".into(), easing.as_ref())?;
        js_sys::Reflect::set(&opts, &"smooth".into(), &JsValue::TRUE)?;
        js_sys::Reflect::set(&opts, &"smoothTouch".into(), &JsValue::FALSE)?;
        easing.forget();

        let lenis = Rc::new(Lenis::new(&opts)?);
        let driver = lenis.clone();
        frame::start_loop(move |now| {
            driver.raf(now);
            true
        });
        Ok(Self {
            lenis,
            fallback: EasedScroller,
        })
    }
}

impl SmoothScroller for LenisScroller {
    fn scroll_to(&self, target: &web::Element) {
        let opts = js_sys::Object::new();
        _ = js_sys::Reflect::set(&opts, &"offset".into(), &JsValue::from_f64(0.0));
        _ = js_sys::Reflect::set(&opts, &"immediate".into(), &JsValue::FALSE);
        if let Err(e) = self.lenis.scroll_to(target.as_ref(), &opts) {
            log::warn!("[scroll] lenis.scrollTo failed, gliding instead: {:?}", e);
            self.fallback.scroll_to(target);
        }
    }

    fn name(&self) -> &'static str {
        "lenis"
    }
}

/// Pick the smooth-scroll engine present on the page.
pub fn detect() -> Box<dyn SmoothScroller> {
    if has_global("Lenis") {
        match LenisScroller::create() {
            Ok(s) => return Box::new(s),
            Err(e) => log::warn!("[scroll] Lenis init failed: {:?}", e),
        }
    }
    Box::new(EasedScroller)
}

use crate::core::Tween;
use crate::dom;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(targets: &JsValue, from: &JsValue, to: &JsValue) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = killTweensOf)]
    fn gsap_kill_tweens_of(targets: &JsValue) -> Result<JsValue, JsValue>;
}

/// What a tween applies to.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Selector(&'a str),
    Element(&'a web::Element),
}

impl Target<'_> {
    fn to_js(self) -> JsValue {
        match self {
            Target::Selector(s) => JsValue::from_str(s),
            Target::Element(el) => el.clone().into(),
        }
    }

    fn elements(self, document: &web::Document) -> Vec<web::Element> {
        match self {
            Target::Selector(s) => dom::query_all(document, s),
            Target::Element(el) => vec![el.clone()],
        }
    }
}

/// Animation capability, chosen once at startup.
pub trait Animator {
    fn set(&self, target: Target<'_>, vars: &Tween);
    fn to(&self, target: Target<'_>, vars: &Tween);
    fn from_to(&self, target: Target<'_>, from: &Tween, to: &Tween);
    fn kill(&self, target: Target<'_>);
    fn name(&self) -> &'static str;
}

/// Delegates to the page's GSAP global.
pub struct GsapAnimator;

fn vars_to_js(vars: &Tween) -> Option<JsValue> {
    match serde_wasm_bindgen::to_value(vars) {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("[animator] vars serialisation failed: {}", e);
            None
        }
    }
}

fn report(op: &str, res: Result<JsValue, JsValue>) {
    if let Err(e) = res {
        log::warn!("[animator] gsap.{} failed: {:?}", op, e);
    }
}

impl Animator for GsapAnimator {
    fn set(&self, target: Target<'_>, vars: &Tween) {
        if let Some(v) = vars_to_js(vars) {
            report("set", gsap_set(&target.to_js(), &v));
        }
    }

    fn to(&self, target: Target<'_>, vars: &Tween) {
        if let Some(v) = vars_to_js(vars) {
            report("to", gsap_to(&target.to_js(), &v));
        }
    }

    fn from_to(&self, target: Target<'_>, from: &Tween, to: &Tween) {
        if let (Some(f), Some(t)) = (vars_to_js(from), vars_to_js(to)) {
            report("fromTo", gsap_from_to(&target.to_js(), &f, &t));
        }
    }

    fn kill(&self, target: Target<'_>) {
        report("killTweensOf", gsap_kill_tweens_of(&target.to_js()));
    }

    fn name(&self) -> &'static str {
        "gsap"
    }
}

/// Fallback without an animation engine: jumps straight to the end state
/// using inline styles. CSS transitions on the page still smooth it out.
pub struct StyleAnimator {
    pub document: web::Document,
}

impl StyleAnimator {
    fn apply(&self, target: Target<'_>, vars: &Tween) {
        let decls = vars.inline_declarations();
        for el in target.elements(&self.document) {
            for (prop, value) in &decls {
                dom::set_style(&el, prop, value);
            }
        }
    }
}

impl Animator for StyleAnimator {
    fn set(&self, target: Target<'_>, vars: &Tween) {
        self.apply(target, vars);
    }

    fn to(&self, target: Target<'_>, vars: &Tween) {
        self.apply(target, vars);
    }

    fn from_to(&self, target: Target<'_>, _from: &Tween, to: &Tween) {
        self.apply(target, to);
    }

    fn kill(&self, _target: Target<'_>) {}

    fn name(&self) -> &'static str {
        "inline-style"
    }
}

#[inline]
pub fn has_global(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Pick the animation engine present on the page.
pub fn detect(document: &web::Document) -> Box<dyn Animator> {
    if has_global("gsap") {
        Box::new(GsapAnimator)
    } else {
        Box::new(StyleAnimator {
            document: document.clone(),
        })
    }
}

use crate::constants::{VISUALIZER_FILL, VISUALIZER_HEIGHT_PX};
use crate::core::{FrameGate, PageContext, Visualizer};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(tick: &FrameClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `step` on every animation frame until it returns false.
///
/// `step` receives the frame timestamp in milliseconds.
pub fn start_loop(mut step: impl FnMut(f64) -> bool + 'static) {
    let tick: FrameClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if step(now) {
            request_frame(&tick_clone);
        } else {
            // Drop our handle so the closure is freed once this call returns.
            _ = tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

/// Run `f` once on the next animation frame.
pub fn request_once(f: impl FnOnce(f64) + 'static) {
    let cb = Closure::once_into_js(f);
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Wrap `apply` so it runs at most once per animation frame, with the latest
/// value handed to the returned sampler since the previous frame.
pub fn per_frame<T: Copy + 'static>(apply: impl Fn(T) + 'static) -> impl FnMut(T) {
    let latest: Rc<Cell<Option<T>>> = Rc::new(Cell::new(None));
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let apply = Rc::new(apply);
    move |value: T| {
        latest.set(Some(value));
        if !gate.borrow_mut().request() {
            return;
        }
        let (latest, gate, apply) = (latest.clone(), gate.clone(), apply.clone());
        request_once(move |_| {
            gate.borrow_mut().complete();
            if let Some(v) = latest.take() {
                apply(v);
            }
        });
    }
}

/// Canvas equalizer redrawn every frame while the page context keeps it active.
pub struct VisualizerFrame {
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub context: Rc<RefCell<PageContext>>,
    pub bars: Visualizer,
    rng: StdRng,
}

impl VisualizerFrame {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        context: Rc<RefCell<PageContext>>,
    ) -> Option<Self> {
        let ctx2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx2d,
            context,
            bars: Visualizer::default(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Draw one frame; returns false once the visualizer has been deactivated.
    pub fn frame(&mut self) -> bool {
        if !self.context.borrow().visualizer_active {
            return false;
        }
        self.bars.step(&mut self.rng);
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx2d.clear_rect(0.0, 0.0, w, h);
        self.ctx2d.set_fill_style_str(VISUALIZER_FILL);
        for bar in self.bars.bars(w, h) {
            self.ctx2d.fill_rect(bar.x, bar.y, bar.width, bar.height);
        }
        true
    }
}

/// Keep the canvas as wide as the viewport at a fixed height.
pub fn sync_visualizer_size(canvas: &web::HtmlCanvasElement) {
    let (vw, _) = dom::viewport_size();
    let width = vw.max(1.0) as u32;
    if canvas.width() != width || canvas.height() != VISUALIZER_HEIGHT_PX {
        canvas.set_width(width);
        canvas.set_height(VISUALIZER_HEIGHT_PX);
    }
}

/// Size the canvas, follow window resizes, and start the redraw loop.
pub fn start_visualizer(document: &web::Document, context: Rc<RefCell<PageContext>>) {
    let Some(canvas) = document
        .get_element_by_id(crate::constants::VISUALIZER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[visualizer] no canvas; skipping");
        return;
    };
    sync_visualizer_size(&canvas);
    if let Some(w) = web::window() {
        let resize_canvas = canvas.clone();
        dom::listen(&w, "resize", move |_: web::Event| {
            sync_visualizer_size(&resize_canvas);
        });
    }
    let Some(vis) = VisualizerFrame::new(canvas, context) else {
        log::warn!("[visualizer] 2d context unavailable");
        return;
    };
    let vis = Rc::new(RefCell::new(vis));
    start_loop(move |_| vis.borrow_mut().frame());
}

#![cfg(target_arch = "wasm32")]
use crate::config::{ConfigError, SiteConfig};
use crate::core::PageContext;
use crate::page::{Page, SharedPage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animator;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod inquiry;
mod modal;
mod page;
mod relay;
mod reveal;
mod scroller;
mod splash;
mod widget;

/// Configuration embedded in the page, if any. `Ok(None)` when the page
/// carries no config element.
fn read_config(document: &web::Document) -> Result<Option<SiteConfig>, ConfigError> {
    let Some(raw) = document
        .get_element_by_id(constants::CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(None);
    };
    SiteConfig::from_json(&raw).map(Some)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let loaded = match dom::window_document() {
        Some(doc) => read_config(&doc),
        None => Ok(None),
    };
    let (config, config_err) = match loaded {
        Ok(cfg) => (cfg.unwrap_or_default(), None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    let level = config.level().unwrap_or(log::Level::Info);
    console_log::init_with_level(level).ok();
    if let Some(e) = config_err {
        log::warn!("{}; using defaults", e);
    }
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: SiteConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page: SharedPage = Rc::new(Page {
        animator: animator::detect(&document),
        scroller: scroller::detect(),
        email: relay::detect_email(&config.email_relay),
        context: Rc::new(RefCell::new(PageContext::default())),
        document: document.clone(),
        config,
    });
    log::info!(
        "[init] animator={} scroller={}",
        page.animator.name(),
        page.scroller.name()
    );

    events::scroll::wire_scroll(&document);
    reveal::wire_reveals(&document);
    reveal::wire_stat_counters(&document);
    splash::run(&page);
    modal::wire(&page);
    inquiry::wire(&page);
    widget::wire(&document);
    events::pointer::wire_mouse_glow(&document);
    events::pointer::wire_desktop_effects(&page);
    events::anchors::wire_anchors(&page);
    events::scroll::wire_scroll_hints(&document);

    Ok(())
}

use crate::animator::Animator;
use crate::config::SiteConfig;
use crate::core::{BodyOverflow, PageContext};
use crate::relay::EmailRelay;
use crate::scroller::SmoothScroller;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page units share, built once in `init`.
pub struct Page {
    pub document: web::Document,
    pub config: SiteConfig,
    pub context: Rc<RefCell<PageContext>>,
    pub animator: Box<dyn Animator>,
    pub scroller: Box<dyn SmoothScroller>,
    pub email: Box<dyn EmailRelay>,
}

impl Page {
    #[inline]
    pub fn apply_overflow(&self, overflow: BodyOverflow) {
        dom::set_body_overflow(&self.document, overflow.css_value());
    }
}

pub type SharedPage = Rc<Page>;

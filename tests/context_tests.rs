// Host-side tests for shared page state.

#![allow(dead_code)]
mod core {
    pub mod context {
        include!("../src/core/context.rs");
    }
}

use crate::core::context::*;

#[test]
fn hero_starts_once_and_activates_visualizer() {
    let mut ctx = PageContext::default();
    assert!(!ctx.visualizer_active);
    assert!(ctx.start_hero());
    assert!(ctx.visualizer_active);
    assert!(!ctx.start_hero());
    assert!(ctx.hero.has_fired());
}

#[test]
fn modal_toggles_body_overflow() {
    let mut ctx = PageContext::default();
    assert_eq!(ctx.open_modal(), BodyOverflow::Hidden);
    assert!(ctx.modal.open);
    assert_eq!(ctx.close_modal(), BodyOverflow::Auto);
    assert!(!ctx.modal.open);
    assert_eq!(BodyOverflow::Auto.css_value(), "auto");
}

#[test]
fn scroll_lock_is_last_writer_wins() {
    let mut lock = ScrollLock::default();
    assert!(!lock.is_locked());

    // Modal opens during the splash, then the splash finishes.
    lock.lock(LockOwner::Splash);
    lock.lock(LockOwner::Modal);
    assert_eq!(lock.unlock(LockOwner::Splash), BodyOverflow::Inherit);
    assert!(!lock.is_locked());
    assert_eq!(lock.last_writer(), Some(LockOwner::Splash));
    assert_eq!(lock.overflow().css_value(), "");
}

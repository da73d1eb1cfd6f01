// Host-side tests for the scroll orchestrator logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

fn metrics(offset_y: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset_y,
        document_height,
        viewport_height,
    }
}

#[test]
fn progress_is_zero_when_document_cannot_scroll() {
    assert_eq!(metrics(0.0, 800.0, 800.0).progress(), 0.0);
    assert_eq!(metrics(50.0, 600.0, 800.0).progress(), 0.0);
    assert_eq!(metrics(0.0, 0.0, 0.0).progress_percent(), 0.0);
    assert!(!metrics(10.0, 800.0, 800.0).progress().is_nan());
}

#[test]
fn progress_is_clamped_to_unit_range() {
    assert_eq!(metrics(-40.0, 2000.0, 1000.0).progress(), 0.0);
    assert_eq!(metrics(500.0, 2000.0, 1000.0).progress(), 0.5);
    assert_eq!(metrics(1500.0, 2000.0, 1000.0).progress(), 1.0);
    assert_eq!(metrics(500.0, 2000.0, 1000.0).progress_percent(), 50.0);
}

#[test]
fn navbar_hides_past_threshold_and_reappears_on_upward_scroll() {
    let mut s = ScrollState::new(0.0);
    let nav = s.update(160.0);
    assert!(!nav.at_top);
    assert!(nav.hidden);
    let nav = s.update(140.0);
    assert!(!nav.at_top);
    assert!(!nav.hidden);
}

#[test]
fn navbar_ignores_small_direction_changes() {
    let mut s = ScrollState::new(0.0);
    assert!(s.update(300.0).hidden);
    // 5 px up is inside the band: still hidden, but the anchor moves.
    assert!(s.update(295.0).hidden);
    assert_eq!(s.last_y, 295.0);
    assert!(!s.update(280.0).hidden);
}

#[test]
fn navbar_does_not_hide_before_hide_offset() {
    let mut s = ScrollState::new(0.0);
    let nav = s.update(120.0);
    assert!(!nav.at_top);
    assert!(!nav.hidden);
}

#[test]
fn navbar_at_top_always_shows() {
    let mut s = ScrollState::new(0.0);
    s.update(400.0);
    let nav = s.update(5.0);
    assert!(nav.at_top);
    assert!(!nav.hidden);
    assert!(s.update(10.0).at_top);
}

#[test]
fn frame_gate_coalesces_requests_into_one_update() {
    let mut gate = FrameGate::default();
    let scheduled = (0..25).filter(|_| gate.request()).count();
    assert_eq!(scheduled, 1);
    assert!(gate.is_pending());
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

#[test]
fn backdrop_transform_follows_progress() {
    let start = BackdropTransform::from_progress(0.0);
    assert_eq!(start.scale, 1.0);
    assert_eq!(start.translate_y_px, 0.0);
    assert_eq!(start.rotate_z_deg, 0.0);

    let end = BackdropTransform::from_progress(1.0);
    assert!((end.scale - 1.45).abs() < 1e-9);
    assert_eq!(end.translate_y_px, 80.0);
    assert_eq!(end.rotate_z_deg, 5.0);
    assert_eq!(end.to_css(), "scale(1.45) translateY(80px) rotateZ(5deg)");

    assert_eq!(BackdropTransform::from_progress(3.0), end);
}

#[test]
fn smart_navbar_tucks_on_scroll_down_and_returns_on_scroll_up() {
    let mut nav = SmartNavbar::new(0.0);
    assert_eq!(nav.update(50.0), None);
    assert_eq!(nav.update(150.0), Some(NavPlacement::Tucked));
    assert_eq!(nav.update(200.0), None);
    assert_eq!(nav.update(180.0), Some(NavPlacement::Shown));
    assert_eq!(nav.update(250.0), Some(NavPlacement::Tucked));
    assert_eq!(nav.update(90.0), Some(NavPlacement::Shown));
    assert_eq!(NavPlacement::Tucked.y_percent(), -150.0);
    assert_eq!(nav.placement().y_percent(), 0.0);
}

#[test]
fn progress_measured_against_client_height_fills_only_at_the_bottom() {
    // innerHeight 800 includes a 15px horizontal scrollbar; clientHeight is 785.
    let (document_height, client_height) = (3000.0, 785.0);
    let bottom = document_height - client_height;
    assert_eq!(metrics(bottom, document_height, client_height).progress_percent(), 100.0);
    assert!(metrics(bottom - 15.0, document_height, client_height).progress() < 1.0);
    // Measured against innerHeight the bar would fill 15px early.
    assert_eq!(metrics(bottom - 15.0, document_height, 800.0).progress(), 1.0);
}

// Host-side tests for easing, glide and pointer-effect math.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use crate::core::motion::*;
use glam::Vec2;

#[test]
fn easing_hits_endpoints() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert!(ease_out_expo(0.0).abs() < 0.01);
}

#[test]
fn glide_targets_element_with_offset() {
    let g = Glide::to_element(200.0, 500.0);
    assert_eq!(g.target_y, 680.0);
    assert_eq!(g.duration_ms, 1500.0);
    assert_eq!(g.sample(0.0), (200.0, false));
    let (mid, done) = g.sample(750.0);
    assert!((mid - 440.0).abs() < 1e-9);
    assert!(!done);
    assert_eq!(g.sample(2000.0), (680.0, true));
}

#[test]
fn magnets_pull_a_third_inside_radius() {
    let c = Vec2::new(100.0, 100.0);
    assert!(magnet_offset(Vec2::new(130.0, 100.0), c).abs_diff_eq(Vec2::new(10.0, 0.0), 1e-5));
    assert_eq!(magnet_offset(Vec2::new(250.0, 100.0), c), Vec2::ZERO);
}

#[test]
fn tilt_is_zero_at_center_and_max_at_edges() {
    let size = Vec2::new(200.0, 100.0);
    assert_eq!(tilt_degrees(Vec2::new(100.0, 50.0), size), (0.0, 0.0));
    assert_eq!(tilt_degrees(Vec2::new(200.0, 0.0), size), (10.0, 10.0));
    assert_eq!(tilt_degrees(Vec2::new(0.0, 100.0), size), (-10.0, -10.0));
    assert_eq!(tilt_degrees(Vec2::ONE, Vec2::ZERO), (0.0, 0.0));
}

#[test]
fn orb_parallax_is_centered() {
    let vp = Vec2::new(1000.0, 800.0);
    assert_eq!(orb_parallax(Vec2::new(500.0, 400.0), vp), Vec2::ZERO);
    assert_eq!(orb_parallax(Vec2::new(1000.0, 0.0), vp), Vec2::new(10.0, -10.0));
}

#[test]
fn anchors_and_hints() {
    assert_eq!(anchor_target("#services"), Some("#services"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/about"), None);
    assert!(!should_dismiss_hint(20));
    assert!(should_dismiss_hint(21));
    assert!(is_desktop(1024.0));
    assert!(!is_desktop(768.0));
}

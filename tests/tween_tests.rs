// Host-side tests for animation vars and the inline-style fallback.

#![allow(dead_code)]
mod core {
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use crate::core::tween::*;

#[test]
fn vars_serialise_camel_case_and_skip_unset() {
    let t = Tween {
        y_percent: Some(-150.0),
        overwrite: Some(true),
        ..Tween::new().duration(0.5).ease("power2.out")
    };
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "yPercent": -150.0,
            "overwrite": true,
            "duration": 0.5,
            "ease": "power2.out"
        })
    );
}

#[test]
fn auto_alpha_maps_to_opacity_and_visibility() {
    let decls = Tween::new().auto_alpha(0.0).y(30.0).inline_declarations();
    assert_eq!(
        decls,
        vec![
            ("opacity", "0".to_string()),
            ("visibility", "hidden".to_string()),
            ("transform", "translate(0px, 30px)".to_string()),
        ]
    );
}

#[test]
fn timing_only_vars_produce_no_styles() {
    let t = Tween::new().duration(1.0).delay(0.2).ease("sine.inOut");
    assert!(t.inline_declarations().is_empty());
}

#[test]
fn tilt_vars_build_a_perspective_transform() {
    let t = Tween {
        rotate_x: Some(5.0),
        rotate_y: Some(-3.0),
        transform_perspective: Some(1000.0),
        ..Tween::new()
    };
    assert_eq!(
        t.inline_declarations(),
        vec![(
            "transform",
            "perspective(1000px) rotateX(5deg) rotateY(-3deg)".to_string()
        )]
    );
}

#[test]
fn display_is_serialised_and_inlined() {
    let t = Tween::new().display("none");
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json, serde_json::json!({ "display": "none" }));
    assert_eq!(
        t.inline_declarations(),
        vec![("display", "none".to_string())]
    );
}

#[test]
fn hero_buttons_fade_in_without_moving() {
    let t = Tween::new().auto_alpha(1.0).duration(0.1).delay(0.7);
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "autoAlpha": 1.0, "duration": 0.1, "delay": 0.7 })
    );
    assert!(json.get("y").is_none());
}

// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn navbar_thresholds_are_ordered() {
    assert!(NAV_AT_TOP_PX < SMART_NAV_THRESHOLD_PX);
    assert!(SMART_NAV_THRESHOLD_PX < NAV_HIDE_AFTER_PX);
    assert!(NAV_DELTA_HYSTERESIS_PX > 0.0);
    assert!(SMART_NAV_TUCK_PERCENT < -100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn watchdog_fires_after_the_hero_is_due() {
    let glitch = SPLASH_GLITCH_FLICKER_MS * (SPLASH_GLITCH_REPEATS + 1) as f64;
    let hero = SPLASH_BEAM_IN_MS + glitch + SPLASH_BEAM_SCAN_MS + SPLASH_STABILIZE_MS;
    assert_eq!(hero, 2800.0);
    assert!(SPLASH_WATCHDOG_MS as f64 > hero);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_and_fractions_are_in_unit_range() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(STAT_THRESHOLD > 0.0 && STAT_THRESHOLD < 1.0);
    assert!(VISUALIZER_JUMP_CHANCE > 0.0 && VISUALIZER_JUMP_CHANCE < 1.0);
    assert!(VISUALIZER_EASE > 0.0 && VISUALIZER_EASE < 1.0);
    assert!(MAGNET_PULL > 0.0 && MAGNET_PULL < 1.0);
}

#[test]
fn success_timers_total_3500ms() {
    assert_eq!(SUCCESS_CLOSE_DELAY_MS + SUCCESS_RESET_DELAY_MS, 3500);
    assert_eq!(COUNT_UP_DURATION_MS / COUNT_UP_FRAME_MS, 125.0);
    assert_eq!(WIDGET_RETRY_ATTEMPTS * WIDGET_RETRY_MS, 10_000);
}

// Host-side tests for the reveal engine and stat count-up.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::reveal::*;

const DESKTOP: f64 = 1280.0;
const PHONE: f64 = 390.0;

#[test]
fn stagger_cycles_in_groups_of_three() {
    let delays: Vec<String> = (0..6)
        .map(|i| assigned_delay(None, true, i).unwrap())
        .collect();
    assert_eq!(delays, ["0s", "0.2s", "0.4s", "0s", "0.2s", "0.4s"]);
}

#[test]
fn explicit_delay_wins_and_unstaggered_gets_none() {
    assert_eq!(assigned_delay(Some("1s"), true, 1), None);
    assert_eq!(assigned_delay(None, false, 1), None);
    assert_eq!(assigned_delay(Some("  "), true, 2).as_deref(), Some("0.4s"));
}

#[test]
fn reveal_is_one_shot() {
    let mut t = RevealTarget::new(Some("0.2s".into()), false);
    assert_eq!(t.observe(false, DESKTOP), RevealAction::Ignore);
    assert!(!t.is_revealed());
    assert_eq!(
        t.observe(true, DESKTOP),
        RevealAction::Reveal {
            delay: "0.2s".into()
        }
    );
    // Leaving and re-entering never toggles back.
    assert_eq!(t.observe(false, DESKTOP), RevealAction::Ignore);
    assert_eq!(t.observe(true, DESKTOP), RevealAction::Ignore);
    assert!(t.is_revealed());
}

#[test]
fn slider_items_reveal_immediately_on_narrow_viewports() {
    let mut t = RevealTarget::new(Some("0.4s".into()), true);
    assert_eq!(
        t.observe(false, PHONE),
        RevealAction::Reveal { delay: "0s".into() }
    );
    assert!(t.is_revealed());

    let mut wide = RevealTarget::new(Some("0.4s".into()), true);
    assert_eq!(wide.observe(false, DESKTOP), RevealAction::Ignore);
}

#[test]
fn missing_delay_reveals_with_zero() {
    let mut t = RevealTarget::new(None, false);
    assert_eq!(
        t.observe(true, DESKTOP),
        RevealAction::Reveal { delay: "0s".into() }
    );
}

fn run_to_end(target: i64) -> (Vec<i64>, i64) {
    let mut c = StatCounter::new(target);
    let mut shown = Vec::new();
    for _ in 0..1000 {
        match c.step() {
            CountFrame::Running(v) => shown.push(v),
            CountFrame::Finished(v) => return (shown, v),
        }
    }
    panic!("count-up did not finish");
}

#[test]
fn count_up_ends_on_exact_target() {
    for target in [0, 1, 7, 150, 1000, 12345] {
        let (running, last) = run_to_end(target);
        assert_eq!(last, target);
        assert!(running.iter().all(|v| *v <= target));
        assert!(running.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn count_up_takes_about_two_seconds_of_frames() {
    let (running, _) = run_to_end(1000);
    // 2000 ms at 16 ms per frame.
    assert!((120..=126).contains(&running.len()), "{}", running.len());
}

#[test]
fn count_up_with_negative_target_finishes_immediately() {
    let mut c = StatCounter::new(-5);
    assert_eq!(c.step(), CountFrame::Finished(-5));
    assert!(c.is_done());
    assert_eq!(c.step().value(), -5);
}

#[test]
fn parse_target_reads_leading_integer() {
    assert_eq!(StatCounter::parse_target("150"), Some(150));
    assert_eq!(StatCounter::parse_target(" 98+ "), Some(98));
    assert_eq!(StatCounter::parse_target("-3"), Some(-3));
    assert_eq!(StatCounter::parse_target("12.5"), Some(12));
    assert_eq!(StatCounter::parse_target("abc"), None);
    assert_eq!(StatCounter::parse_target(""), None);
}

#[test]
fn final_figures_come_from_markup_targets() {
    let shown: Vec<Option<String>> = ["500+", "98%", " 24 ", "n/a", ""]
        .iter()
        .map(|raw| StatCounter::parse_target(raw).map(|v| v.to_string()))
        .collect();
    assert_eq!(
        shown,
        vec![
            Some("500".to_string()),
            Some("98".to_string()),
            Some("24".to_string()),
            None,
            None
        ]
    );
}

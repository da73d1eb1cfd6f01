// Host-side tests for the intro sequencer.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod splash {
        include!("../src/core/splash.rs");
    }
}

use crate::core::splash::*;

fn hero_starts(effects: &[SplashEffect]) -> usize {
    effects
        .iter()
        .filter(|e| **e == SplashEffect::StartHero)
        .count()
}

#[test]
fn state_offsets_follow_the_timeline() {
    assert_eq!(SplashState::BeamIn.starts_at_ms(), 0.0);
    assert_eq!(SplashState::TextGlitch.starts_at_ms(), 400.0);
    assert_eq!(SplashState::BeamScan.starts_at_ms(), 1000.0);
    assert_eq!(SplashState::TextStabilize.starts_at_ms(), 1800.0);
    assert_eq!(SplashState::HeroStarted.starts_at_ms(), 2800.0);
    assert_eq!(SplashState::FadeOut.starts_at_ms(), 2800.0);
    assert_eq!(SplashState::Done.starts_at_ms(), 3300.0);
}

#[test]
fn first_frame_locks_scroll_and_starts_the_beam() {
    let mut seq = SplashSequencer::new();
    let fx = seq.advance(0.0);
    assert_eq!(
        fx.as_slice(),
        &[
            SplashEffect::LockScroll,
            SplashEffect::PrepareHero,
            SplashEffect::BeamIn { duration_ms: 400.0 },
        ]
    );
    assert_eq!(seq.state(), SplashState::BeamIn);
    assert!(seq.advance(399.0).is_empty());
}

#[test]
fn states_are_visited_in_order() {
    let mut seq = SplashSequencer::new();
    let mut visited = vec![];
    let mut t = 0.0;
    while !seq.is_done() {
        seq.advance(t);
        if visited.last() != Some(&seq.state()) {
            visited.push(seq.state());
        }
        t += 16.0;
    }
    assert!(visited.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(visited.first(), Some(&SplashState::BeamIn));
    assert_eq!(visited.last(), Some(&SplashState::Done));
}

#[test]
fn timeline_end_unlocks_scroll_and_hides_splash_later() {
    let mut seq = SplashSequencer::new();
    let fx = seq.advance(3300.0);
    assert_eq!(hero_starts(&fx), 1);
    let tail = &fx[fx.len() - 2..];
    assert_eq!(
        tail,
        &[
            SplashEffect::UnlockScroll,
            SplashEffect::HideSplash { after_ms: 500 },
        ]
    );
    assert!(seq.is_done());
    assert!(seq.advance(10_000.0).is_empty());
}

#[test]
fn watchdog_after_timeline_does_nothing() {
    let mut seq = SplashSequencer::new();
    let mut all = seq.advance(2800.0).to_vec();
    assert!(seq.hero_started());
    all.extend(seq.watchdog());
    all.extend(seq.advance(4000.0));
    assert_eq!(hero_starts(&all), 1);
}

#[test]
fn stalled_timeline_is_rescued_by_watchdog_once() {
    let mut seq = SplashSequencer::new();
    let mut all = seq.advance(500.0).to_vec();
    assert!(!seq.hero_started());

    let rescue = seq.watchdog();
    assert!(rescue.contains(&SplashEffect::HideSplash { after_ms: 0 }));
    assert!(rescue.contains(&SplashEffect::UnlockScroll));
    all.extend(rescue);
    assert!(seq.is_done());

    // A late timeline or a second watchdog must not start the hero again.
    all.extend(seq.advance(5000.0));
    all.extend(seq.watchdog());
    assert_eq!(hero_starts(&all), 1);
}

use crate::animator::Target;
use crate::constants::*;
use crate::core::{LockOwner, SplashEffect, SplashEffects, SplashSequencer, Tween};
use crate::events;
use crate::frame;
use crate::page::{Page, SharedPage};
use gloo_timers::callback::Timeout;
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn splash_element(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(SPLASH_ID)
}

fn hide_splash(document: &web::Document) {
    if let Some(el) = splash_element(document) {
        crate::dom::set_style(&el, "display", "none");
    }
}

fn apply(page: &SharedPage, effects: SplashEffects) {
    let anim = page.animator.as_ref();
    let glitch = Target::Selector(SPLASH_GLITCH_SELECTOR);
    let beam = Target::Selector(SPLASH_BEAM_SELECTOR);
    for effect in effects {
        log::debug!("[splash] {:?}", effect);
        match effect {
            SplashEffect::LockScroll => {
                let overflow = page.context.borrow_mut().scroll_lock.lock(LockOwner::Splash);
                page.apply_overflow(overflow);
            }
            SplashEffect::UnlockScroll => {
                let overflow = page
                    .context
                    .borrow_mut()
                    .scroll_lock
                    .unlock(LockOwner::Splash);
                page.apply_overflow(overflow);
            }
            SplashEffect::PrepareHero => anim.set(
                Target::Selector(HERO_PREPARE_SELECTOR),
                &Tween::new().auto_alpha(0.0).y(30.0),
            ),
            SplashEffect::BeamIn { duration_ms } => {
                anim.set(glitch, &Tween::new().opacity(0.0));
                anim.set(
                    beam,
                    &Tween {
                        scale_x: Some(0.0),
                        ..Tween::new().opacity(1.0)
                    },
                );
                anim.to(
                    beam,
                    &Tween {
                        scale_x: Some(1.0),
                        ..Tween::new().duration(duration_ms / 1000.0).ease("expo.out")
                    },
                );
            }
            SplashEffect::GlitchText {
                flicker_ms,
                repeats,
            } => anim.to(
                glitch,
                &Tween {
                    repeat: Some(repeats as i32),
                    yoyo: Some(true),
                    ..Tween::new()
                        .opacity(1.0)
                        .duration(flicker_ms / 1000.0)
                        .ease("steps(1)")
                },
            ),
            SplashEffect::BeamScan { duration_ms } => {
                anim.set(glitch, &Tween::new().opacity(1.0));
                anim.to(
                    beam,
                    &Tween {
                        height: Some("100vh".into()),
                        ..Tween::new()
                            .opacity(0.0)
                            .duration(duration_ms / 1000.0)
                            .ease("power2.in")
                    },
                );
            }
            SplashEffect::StabilizeText { duration_ms } => anim.from_to(
                glitch,
                &Tween {
                    letter_spacing: Some("20px".into()),
                    scale: Some(1.1),
                    ..Tween::new()
                },
                &Tween {
                    letter_spacing: Some("5px".into()),
                    scale: Some(1.0),
                    ..Tween::new().duration(duration_ms / 1000.0).ease("bounce.out")
                },
            ),
            SplashEffect::HideGlitch => {
                anim.kill(glitch);
                anim.set(glitch, &Tween::new().display("none"));
                crate::dom::set_style_by_selector(
                    &page.document,
                    SPLASH_GLITCH_SELECTOR,
                    "animation",
                    "none",
                );
            }
            SplashEffect::StartHero => start_hero(page),
            SplashEffect::FadeOutSplash { duration_ms } => {
                if let Some(el) = splash_element(&page.document) {
                    anim.to(
                        Target::Element(&el),
                        &Tween::new()
                            .opacity(0.0)
                            .duration(duration_ms / 1000.0)
                            .ease("power2.out"),
                    );
                }
            }
            SplashEffect::HideSplash { after_ms: 0 } => hide_splash(&page.document),
            SplashEffect::HideSplash { after_ms } => {
                let document = page.document.clone();
                Timeout::new(after_ms, move || hide_splash(&document)).forget();
            }
        }
    }
}

/// Run the intro sequence, or start the hero directly when there is no splash.
pub fn run(page: &SharedPage) {
    if splash_element(&page.document).is_none() {
        log::info!("[splash] no splash screen; starting hero");
        start_hero(page);
        return;
    }

    let sequencer = Rc::new(RefCell::new(SplashSequencer::new()));
    let started = Instant::now();

    let seq = sequencer.clone();
    let p = page.clone();
    frame::start_loop(move |_| {
        let elapsed = started.elapsed().as_secs_f64() * 1000.0;
        let effects = seq.borrow_mut().advance(elapsed);
        apply(&p, effects);
        !seq.borrow().is_done()
    });

    let p = page.clone();
    Timeout::new(page.config.watchdog_ms, move || {
        let effects = sequencer.borrow_mut().watchdog();
        if !effects.is_empty() {
            log::warn!("[splash] timeline stalled; forcing hero start");
            apply(&p, effects);
        }
    })
    .forget();
}

/// Hero entrance, visualizer, orb float and the effects tied to the hero.
/// Runs at most once per page load.
pub fn start_hero(page: &SharedPage) {
    if !page.context.borrow_mut().start_hero() {
        return;
    }
    log::info!("[splash] hero started ({})", page.animator.name());

    frame::start_visualizer(&page.document, page.context.clone());

    let p = page.clone();
    Timeout::new(ORB_FLOAT_DELAY_MS, move || float_orbs(&p)).forget();

    let anim = page.animator.as_ref();
    let shown = || Tween::new().auto_alpha(1.0).y(0.0);
    anim.to(
        Target::Selector(HERO_HEADING_SELECTOR),
        &shown().duration(0.8).delay(0.1).ease("power3.out"),
    );
    anim.to(
        Target::Selector(HERO_COPY_SELECTOR),
        &shown().duration(0.8).delay(0.4).ease("power3.out"),
    );
    anim.to(
        Target::Selector(HERO_BUTTONS_SELECTOR),
        &Tween::new().auto_alpha(1.0).duration(0.1).delay(0.7),
    );
    anim.to(
        Target::Selector(HERO_PILL_SELECTOR),
        &Tween {
            stagger: Some(0.1),
            ..shown().duration(0.6).delay(0.5).ease("back.out(1.5)")
        },
    );
    if let Some(canvas) = page.document.get_element_by_id(VISUALIZER_ID) {
        anim.to(
            Target::Element(&canvas),
            &Tween::new().opacity(0.6).duration(1.0).delay(0.2),
        );
    }

    events::pointer::wire_orb_parallax(page);
    events::scroll::wire_smart_navbar(page);
}

fn float_orbs(page: &Page) {
    let mut rng = rand::thread_rng();
    // (amplitude px, duration range s) per orb; the third orb only drifts
    // with the pointer.
    let drift = [(50.0, 10.0..20.0), (30.0, 15.0..25.0)];
    for (selector, (amp, secs)) in ORB_SELECTORS.iter().zip(drift) {
        let x = rng.gen_range(-amp..amp);
        let y = rng.gen_range(-amp..amp);
        page.animator.to(
            Target::Selector(selector),
            &Tween {
                repeat: Some(-1),
                yoyo: Some(true),
                ..Tween::new()
                    .xy(x, y)
                    .duration(rng.gen_range(secs))
                    .ease("sine.inOut")
            },
        );
    }
}

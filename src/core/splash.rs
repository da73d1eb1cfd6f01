use super::constants::*;
use smallvec::SmallVec;

/// Named states of the intro sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SplashState {
    Idle,
    BeamIn,
    TextGlitch,
    BeamScan,
    TextStabilize,
    HeroStarted,
    FadeOut,
    Done,
}

impl SplashState {
    /// Offset from sequence start at which this state is entered.
    pub fn starts_at_ms(self) -> f64 {
        let glitch = SPLASH_GLITCH_FLICKER_MS * (SPLASH_GLITCH_REPEATS + 1) as f64;
        let beam_scan = SPLASH_BEAM_IN_MS + glitch;
        let stabilize = beam_scan + SPLASH_BEAM_SCAN_MS;
        let hero = stabilize + SPLASH_STABILIZE_MS;
        match self {
            SplashState::Idle | SplashState::BeamIn => 0.0,
            SplashState::TextGlitch => SPLASH_BEAM_IN_MS,
            SplashState::BeamScan => beam_scan,
            SplashState::TextStabilize => stabilize,
            SplashState::HeroStarted | SplashState::FadeOut => hero,
            SplashState::Done => hero + SPLASH_FADE_OUT_MS,
        }
    }

    fn next(self) -> Option<SplashState> {
        match self {
            SplashState::Idle => Some(SplashState::BeamIn),
            SplashState::BeamIn => Some(SplashState::TextGlitch),
            SplashState::TextGlitch => Some(SplashState::BeamScan),
            SplashState::BeamScan => Some(SplashState::TextStabilize),
            SplashState::TextStabilize => Some(SplashState::HeroStarted),
            SplashState::HeroStarted => Some(SplashState::FadeOut),
            SplashState::FadeOut => Some(SplashState::Done),
            SplashState::Done => None,
        }
    }
}

/// Side effect requested by a transition. The web layer maps each to DOM or
/// animation-engine calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SplashEffect {
    LockScroll,
    /// Hide hero content so the entrance animation can play it in.
    PrepareHero,
    BeamIn { duration_ms: f64 },
    GlitchText { flicker_ms: f64, repeats: u32 },
    BeamScan { duration_ms: f64 },
    StabilizeText { duration_ms: f64 },
    HideGlitch,
    StartHero,
    FadeOutSplash { duration_ms: f64 },
    UnlockScroll,
    HideSplash { after_ms: u32 },
}

pub type SplashEffects = SmallVec<[SplashEffect; 4]>;

/// The intro timeline as an explicit state machine.
///
/// `advance` is fed the elapsed time since the sequence started and walks
/// through every state whose start offset has passed. `watchdog` forces the
/// hero start if the timeline has stalled. Whichever reaches `HeroStarted`
/// first emits `StartHero`; the other path emits nothing for it.
#[derive(Clone, Debug)]
pub struct SplashSequencer {
    state: SplashState,
    hero_emitted: bool,
}

impl Default for SplashSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashSequencer {
    pub fn new() -> Self {
        Self {
            state: SplashState::Idle,
            hero_emitted: false,
        }
    }

    #[inline]
    pub fn state(&self) -> SplashState {
        self.state
    }

    #[inline]
    pub fn hero_started(&self) -> bool {
        self.hero_emitted
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == SplashState::Done
    }

    /// Move through all states due at `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: f64) -> SplashEffects {
        let mut out = SplashEffects::new();
        while let Some(next) = self.state.next() {
            if next.starts_at_ms() > elapsed_ms {
                break;
            }
            self.enter(next, &mut out);
        }
        out
    }

    /// Safety net: force `HeroStarted` then `Done` if the hero never started.
    pub fn watchdog(&mut self) -> SplashEffects {
        let mut out = SplashEffects::new();
        if self.hero_emitted {
            return out;
        }
        out.push(SplashEffect::HideSplash { after_ms: 0 });
        out.push(SplashEffect::HideGlitch);
        out.push(SplashEffect::UnlockScroll);
        self.hero_emitted = true;
        self.state = SplashState::HeroStarted;
        out.push(SplashEffect::StartHero);
        self.state = SplashState::Done;
        out
    }

    fn enter(&mut self, next: SplashState, out: &mut SplashEffects) {
        self.state = next;
        match next {
            SplashState::Idle => {}
            SplashState::BeamIn => {
                out.push(SplashEffect::LockScroll);
                out.push(SplashEffect::PrepareHero);
                out.push(SplashEffect::BeamIn {
                    duration_ms: SPLASH_BEAM_IN_MS,
                });
            }
            SplashState::TextGlitch => out.push(SplashEffect::GlitchText {
                flicker_ms: SPLASH_GLITCH_FLICKER_MS,
                repeats: SPLASH_GLITCH_REPEATS,
            }),
            SplashState::BeamScan => out.push(SplashEffect::BeamScan {
                duration_ms: SPLASH_BEAM_SCAN_MS,
            }),
            SplashState::TextStabilize => out.push(SplashEffect::StabilizeText {
                duration_ms: SPLASH_STABILIZE_MS,
            }),
            SplashState::HeroStarted => {
                out.push(SplashEffect::HideGlitch);
                if !self.hero_emitted {
                    self.hero_emitted = true;
                    out.push(SplashEffect::StartHero);
                }
            }
            SplashState::FadeOut => out.push(SplashEffect::FadeOutSplash {
                duration_ms: SPLASH_FADE_OUT_MS,
            }),
            SplashState::Done => {
                out.push(SplashEffect::UnlockScroll);
                out.push(SplashEffect::HideSplash {
                    after_ms: SPLASH_HIDE_DELAY_MS,
                });
            }
        }
    }
}

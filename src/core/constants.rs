// Shared tuning constants for the pure page logic.

// Scroll orchestrator
pub const NAV_AT_TOP_PX: f64 = 10.0; // offsets at or above this count as "at top"
pub const NAV_DELTA_HYSTERESIS_PX: f64 = 10.0; // smaller direction changes are ignored
pub const NAV_HIDE_AFTER_PX: f64 = 150.0; // scrolling down only hides past this offset
pub const SMART_NAV_THRESHOLD_PX: f64 = 100.0; // hero-variant navbar tucks beyond this offset
pub const SMART_NAV_TUCK_PERCENT: f64 = -150.0;

// Decorative backdrop transform at full progress
pub const BACKDROP_ZOOM_SPAN: f64 = 0.45;
pub const BACKDROP_SINK_PX: f64 = 80.0;
pub const BACKDROP_ROTATE_DEG: f64 = 5.0;

// Reveal engine
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const STAT_THRESHOLD: f64 = 0.5;
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const STAGGER_STEP_SEC: f64 = 0.2;
pub const STAGGER_GROUP: usize = 3;

// Stat count-up
pub const COUNT_UP_DURATION_MS: f64 = 2000.0;
pub const COUNT_UP_FRAME_MS: f64 = 16.0;

// Visualizer
pub const VISUALIZER_BARS: usize = 60;
pub const VISUALIZER_EASE: f32 = 0.08; // fraction of the gap closed each frame
pub const VISUALIZER_JUMP_CHANCE: f64 = 0.03;
pub const VISUALIZER_JUMP_MIN: f32 = 20.0;
pub const VISUALIZER_JUMP_SPAN: f32 = 100.0;
pub const VISUALIZER_DECAY_PER_FRAME: f32 = 1.0;
pub const VISUALIZER_BAR_GAP_PX: f64 = 4.0;

// Splash timeline (milliseconds from sequence start)
pub const SPLASH_BEAM_IN_MS: f64 = 400.0;
pub const SPLASH_GLITCH_FLICKER_MS: f64 = 100.0;
pub const SPLASH_GLITCH_REPEATS: u32 = 5; // yoyo repeats after the first play
pub const SPLASH_BEAM_SCAN_MS: f64 = 800.0;
pub const SPLASH_STABILIZE_MS: f64 = 1000.0;
pub const SPLASH_FADE_OUT_MS: f64 = 500.0;
pub const SPLASH_HIDE_DELAY_MS: u32 = 500;
pub const SPLASH_WATCHDOG_MS: u32 = 3500;

// Inquiry success flow
pub const SUCCESS_CLOSE_DELAY_MS: u32 = 3000;
pub const SUCCESS_RESET_DELAY_MS: u32 = 500;

// Pointer effects
pub const MAGNET_RADIUS_PX: f32 = 100.0;
pub const MAGNET_PULL: f32 = 1.0 / 3.0;
pub const TILT_MAX_DEG: f32 = 10.0;
pub const ORB_PARALLAX_PX: f32 = 20.0;

// Anchor glide
pub const ANCHOR_GLIDE_MS: f64 = 1500.0;
pub const ANCHOR_OFFSET_PX: f64 = 20.0;

// Slider scroll hints
pub const SCROLL_HINT_DISMISS_PX: i32 = 20;
pub const SCROLL_HINT_REMOVE_MS: u32 = 500;

// Widget suppression
pub const WIDGET_RETRY_MS: u32 = 2000;
pub const WIDGET_RETRY_ATTEMPTS: u32 = 5;

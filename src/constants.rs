//! DOM contract consumed by the page wiring.
//!
//! Every lookup is optional: when an element is missing the feature that needs
//! it stays inactive. Keeping selectors here keeps the markup contract in one
//! place.
// Scroll orchestrator
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SMART_NAV_SELECTOR: &str = ".nav-wrapper";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const BACKDROP_SELECTOR: &str = ".spline-bg-container";
pub const AT_TOP_CLASS: &str = "at-top";
pub const HIDDEN_CLASS: &str = "hidden";

// Reveal engine
pub const REVEAL_SELECTOR: &str = ".reveal-text, .glass-card, .gallery-item";
pub const STAGGERED_CLASS: &str = "glass-card";
pub const SLIDER_ITEM_CLASSES: [&str; 2] = ["glass-card", "gallery-item"];
pub const VISIBLE_CLASS: &str = "visible";
pub const STAT_SELECTOR: &str = ".stat-number";

// Splash and hero
pub const SPLASH_ID: &str = "splash-screen";
pub const SPLASH_GLITCH_SELECTOR: &str = ".splash-text-glitch";
pub const SPLASH_BEAM_SELECTOR: &str = ".holo-beam";
pub const HERO_HEADING_SELECTOR: &str = ".hero-box h1";
pub const HERO_COPY_SELECTOR: &str = ".hero-box p";
pub const HERO_BUTTONS_SELECTOR: &str = ".hero-buttons";
pub const HERO_PILL_SELECTOR: &str = ".btn-pill";
pub const HERO_PREPARE_SELECTOR: &str = ".hero-box h1, .hero-box p, .hero-buttons, .btn-pill";
pub const VISUALIZER_ID: &str = "audio-visualizer";
pub const VISUALIZER_HEIGHT_PX: u32 = 150;
pub const VISUALIZER_FILL: &str = "rgba(79, 172, 254, 0.6)";
pub const ORB_SELECTORS: [&str; 3] = [".orb-1", ".orb-2", ".orb-3"];
pub const ORB_FLOAT_DELAY_MS: u32 = 500;

// Pointer effects
pub const MOUSE_GLOW_ID: &str = "mouse-glow";
pub const SPOTLIGHT_SELECTOR: &str = ".cursor-spotlight";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";

// Anchors and sliders
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SLIDER_SELECTOR: &str = ".services-grid, .gallery-grid";
pub const SCROLL_HINT_SELECTOR: &str = ".scroll-hint-overlay";

// Inquiry modal
pub const MODAL_SELECTOR: &str = ".modal";
pub const MODAL_OPEN_SELECTOR: &str = ".cta-button";
pub const MODAL_CLOSE_SELECTOR: &str = ".close-button";
pub const MODAL_ACTIVE_CLASS: &str = "active";
pub const FORM_ID: &str = "booking-form";
pub const FIELD_EVENT_TYPE_ID: &str = "event-type";
pub const FIELD_EVENT_DATE_ID: &str = "event-date";
pub const FIELD_LOCATION_ID: &str = "event-location";
pub const FIELD_CROWD_SIZE_ID: &str = "crowd-size";
pub const INTEREST_CHECKED_SELECTOR: &str = "input[name=\"interest\"]:checked";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const SUBMIT_BUSY_LABEL: &str = "Sending...";
pub const SUCCESS_SELECTOR: &str = ".success-message";
pub const MODAL_HEADER_SELECTOR: &str = ".modal-content h2";
pub const MODAL_DESC_SELECTOR: &str = ".modal-content p";

// 3D viewer widget
pub const WIDGET_TAG: &str = "spline-viewer";
pub const WIDGET_STYLE_ID: &str = "landing-widget-override";
pub const WIDGET_OVERRIDE_CSS: &str = r#"
#logo, #hint, #loading, #interaction-hint, #preloader,
.spline-watermark, .spline-hint-container, .spline-loading,
[id*="hint"], [class*="hint"], [id*="logo"], [id*="watermark"],
div[style*="pointer-events: none"] {
    display: none !important;
    opacity: 0 !important;
    visibility: hidden !important;
    pointer-events: none !important;
    width: 0 !important;
    height: 0 !important;
}
"#;

// Runtime configuration
pub const CONFIG_SCRIPT_ID: &str = "site-config";

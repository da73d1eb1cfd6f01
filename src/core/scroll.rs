use super::constants::*;

/// Snapshot of the document geometry sampled on a scroll frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Height the document can actually scroll through; never negative.
    #[inline]
    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Scroll progress in [0, 1]. A document that cannot scroll reports 0.
    pub fn progress(&self) -> f64 {
        let h = self.scrollable_height();
        if h <= 0.0 || !self.offset_y.is_finite() {
            return 0.0;
        }
        (self.offset_y.max(0.0) / h).clamp(0.0, 1.0)
    }

    /// Width of the progress bar as a CSS percentage value.
    #[inline]
    pub fn progress_percent(&self) -> f64 {
        self.progress() * 100.0
    }
}

/// Debounce-by-frame: at most one queued update per scheduling tick.
///
/// Event handlers call `request`; only the first request since the last
/// processed frame returns true and should schedule a frame. The frame
/// callback calls `complete` once it has sampled the latest state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Visual state of the primary navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub at_top: bool,
    pub hidden: bool,
}

/// Scroll position memory for direction detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    pub last_y: f64,
    pub navbar: NavbarState,
}

impl ScrollState {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y.max(0.0),
            navbar: NavbarState::default(),
        }
    }

    /// Apply one sampled offset and return the resulting navbar state.
    pub fn update(&mut self, offset_y: f64) -> NavbarState {
        if offset_y <= NAV_AT_TOP_PX {
            self.navbar.at_top = true;
            self.navbar.hidden = false;
        } else {
            self.navbar.at_top = false;
            let delta = offset_y - self.last_y;
            if delta.abs() > NAV_DELTA_HYSTERESIS_PX {
                if delta > 0.0 && offset_y > NAV_HIDE_AFTER_PX {
                    self.navbar.hidden = true;
                } else if delta < 0.0 {
                    self.navbar.hidden = false;
                }
            }
        }
        // Every processed frame re-anchors, even inside the hysteresis band.
        self.last_y = offset_y.max(0.0);
        self.navbar
    }
}

/// Decorative transform applied to the 3D backdrop, a pure function of progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropTransform {
    pub scale: f64,
    pub translate_y_px: f64,
    pub rotate_z_deg: f64,
}

impl BackdropTransform {
    pub fn from_progress(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            scale: 1.0 + p * BACKDROP_ZOOM_SPAN,
            translate_y_px: p * BACKDROP_SINK_PX,
            rotate_z_deg: p * BACKDROP_ROTATE_DEG,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "scale({}) translateY({}px) rotateZ({}deg)",
            self.scale, self.translate_y_px, self.rotate_z_deg
        )
    }
}

/// Vertical placement of the hero-variant navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPlacement {
    Shown,
    Tucked,
}

impl NavPlacement {
    #[inline]
    pub fn y_percent(self) -> f64 {
        match self {
            NavPlacement::Shown => 0.0,
            NavPlacement::Tucked => SMART_NAV_TUCK_PERCENT,
        }
    }
}

/// Direction-tracking navbar attached once the hero has started.
///
/// Unlike `ScrollState` this has no hysteresis: any downward movement beyond
/// the threshold tucks the bar, any upward movement brings it back.
#[derive(Clone, Copy, Debug)]
pub struct SmartNavbar {
    last_y: f64,
    placement: NavPlacement,
}

impl SmartNavbar {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            placement: NavPlacement::Shown,
        }
    }

    #[inline]
    pub fn placement(&self) -> NavPlacement {
        self.placement
    }

    /// Returns the new placement when it changed.
    pub fn update(&mut self, offset_y: f64) -> Option<NavPlacement> {
        let moving_down = offset_y > self.last_y;
        let moving_up = offset_y < self.last_y;
        self.last_y = offset_y;
        let next = if offset_y > SMART_NAV_THRESHOLD_PX {
            if moving_down {
                NavPlacement::Tucked
            } else if moving_up {
                NavPlacement::Shown
            } else {
                self.placement
            }
        } else {
            NavPlacement::Shown
        };
        if next == self.placement {
            return None;
        }
        self.placement = next;
        Some(next)
    }
}

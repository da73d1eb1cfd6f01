use super::constants::*;
use glam::Vec2;

/// Cubic ease-in-out on t in [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Exponential ease-out used for the smooth-scroll engine.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Time-based vertical glide between two offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glide {
    pub start_y: f64,
    pub target_y: f64,
    pub duration_ms: f64,
}

impl Glide {
    /// Glide toward an element whose top edge is `element_top` in viewport
    /// coordinates, leaving a small gap above it.
    pub fn to_element(scroll_y: f64, element_top: f64) -> Self {
        Self {
            start_y: scroll_y,
            target_y: element_top + scroll_y - ANCHOR_OFFSET_PX,
            duration_ms: ANCHOR_GLIDE_MS,
        }
    }

    /// Offset at `elapsed_ms` and whether the glide has finished.
    pub fn sample(&self, elapsed_ms: f64) -> (f64, bool) {
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        let y = self.start_y + (self.target_y - self.start_y) * ease_in_out_cubic(progress);
        (y, progress >= 1.0)
    }
}

/// Pull of a magnetic button toward the pointer. Zero outside the radius.
pub fn magnet_offset(pointer: Vec2, center: Vec2) -> Vec2 {
    let delta = pointer - center;
    if delta.length() < MAGNET_RADIUS_PX {
        delta * MAGNET_PULL
    } else {
        Vec2::ZERO
    }
}

/// Card tilt (rotateX, rotateY) in degrees for a pointer at `local` inside a
/// card of `size`. Pointer at the center gives no tilt.
pub fn tilt_degrees(local: Vec2, size: Vec2) -> (f32, f32) {
    if size.x <= 0.0 || size.y <= 0.0 {
        return (0.0, 0.0);
    }
    let center = size / 2.0;
    let rotate_x = ((local.y - center.y) / center.y) * -TILT_MAX_DEG;
    let rotate_y = ((local.x - center.x) / center.x) * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

/// Parallax offset for decorative orbs from a pointer in client coordinates.
pub fn orb_parallax(pointer: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    (pointer / viewport - Vec2::splat(0.5)) * ORB_PARALLAX_PX
}

/// Desktop-only pointer effects are skipped on narrow viewports.
#[inline]
pub fn is_desktop(viewport_width: f64) -> bool {
    viewport_width > NARROW_VIEWPORT_PX
}

/// A slider hint is dismissed once its container has been swiped far enough.
#[inline]
pub fn should_dismiss_hint(scroll_left: i32) -> bool {
    scroll_left > SCROLL_HINT_DISMISS_PX
}

/// Anchor hrefs that point somewhere on the page (not the bare `#`).
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

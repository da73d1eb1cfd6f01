use super::constants::*;
use rand::Rng;

/// One bar rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Decorative equalizer: each bar eases toward a randomly kicked target that
/// decays every frame.
#[derive(Clone, Debug)]
pub struct Visualizer {
    pub current: [f32; VISUALIZER_BARS],
    pub target: [f32; VISUALIZER_BARS],
}

impl Default for Visualizer {
    fn default() -> Self {
        Self {
            current: [0.0; VISUALIZER_BARS],
            target: [0.0; VISUALIZER_BARS],
        }
    }
}

impl Visualizer {
    /// Advance all bars by one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..VISUALIZER_BARS {
            self.current[i] += (self.target[i] - self.current[i]) * VISUALIZER_EASE;
            if rng.gen_bool(VISUALIZER_JUMP_CHANCE) {
                self.target[i] = rng.gen::<f32>() * VISUALIZER_JUMP_SPAN + VISUALIZER_JUMP_MIN;
            }
            self.target[i] = (self.target[i] - VISUALIZER_DECAY_PER_FRAME).max(0.0);
        }
    }

    /// Bars laid out across a canvas of the given size, anchored to the bottom.
    pub fn bars(&self, width: f64, height: f64) -> impl Iterator<Item = BarRect> + '_ {
        let bar_w = width / VISUALIZER_BARS as f64;
        self.current.iter().enumerate().map(move |(i, h)| {
            let h = *h as f64;
            BarRect {
                x: i as f64 * bar_w,
                y: height - h,
                width: (bar_w - VISUALIZER_BAR_GAP_PX).max(0.0),
                height: h,
            }
        })
    }
}

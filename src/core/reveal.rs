use super::constants::*;

/// Stagger delay in seconds for the `index`-th staggered element.
#[inline]
pub fn stagger_delay_sec(index: usize) -> f64 {
    STAGGER_STEP_SEC * (index % STAGGER_GROUP) as f64
}

/// CSS `transition-delay` value for a delay in seconds, e.g. `0.4s`.
#[inline]
pub fn css_delay(seconds: f64) -> String {
    // Round away float noise such as 0.6000000000000001.
    let rounded = (seconds * 1000.0).round() / 1000.0;
    format!("{}s", rounded)
}

/// Delay to assign at registration time. An explicit delay always wins.
pub fn assigned_delay(explicit: Option<&str>, staggered: bool, index: usize) -> Option<String> {
    match explicit {
        Some(d) if !d.trim().is_empty() => None,
        _ if staggered => Some(css_delay(stagger_delay_sec(index))),
        _ => None,
    }
}

/// What an observer callback should do with one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark visible with the given transition delay.
    Reveal { delay: String },
    Ignore,
}

/// One observed element. Transitions pending -> revealed at most once.
#[derive(Clone, Debug, Default)]
pub struct RevealTarget {
    pub delay: Option<String>,
    pub slider_item: bool,
    revealed: bool,
}

impl RevealTarget {
    pub fn new(delay: Option<String>, slider_item: bool) -> Self {
        Self {
            delay,
            slider_item,
            revealed: false,
        }
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Decide the reaction to a visibility change.
    ///
    /// Slider items on narrow viewports reveal unconditionally with no delay so
    /// touch sliders never show half-animated cards. Leaving the viewport never
    /// un-reveals.
    pub fn observe(&mut self, intersecting: bool, viewport_width: f64) -> RevealAction {
        if self.slider_item && viewport_width <= NARROW_VIEWPORT_PX {
            self.revealed = true;
            return RevealAction::Reveal {
                delay: "0s".to_string(),
            };
        }
        if !intersecting || self.revealed {
            return RevealAction::Ignore;
        }
        self.revealed = true;
        RevealAction::Reveal {
            delay: self.delay.clone().unwrap_or_else(|| "0s".to_string()),
        }
    }
}

/// One rendered frame of a stat count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountFrame {
    Running(i64),
    Finished(i64),
}

impl CountFrame {
    #[inline]
    pub fn value(self) -> i64 {
        match self {
            CountFrame::Running(v) | CountFrame::Finished(v) => v,
        }
    }
}

/// Fixed-step count from 0 to an integer target.
#[derive(Clone, Debug)]
pub struct StatCounter {
    pub target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl StatCounter {
    pub fn new(target: i64) -> Self {
        let steps = COUNT_UP_DURATION_MS / COUNT_UP_FRAME_MS;
        Self {
            target,
            current: 0.0,
            increment: target as f64 / steps,
            done: false,
        }
    }

    /// Parse a `data-target` attribute. Leading integer digits are accepted the
    /// way `parseInt` reads them (`"150+"` -> 150).
    pub fn parse_target(raw: &str) -> Option<i64> {
        let s = raw.trim();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s.strip_prefix('+').unwrap_or(s)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        digits[..end].parse::<i64>().ok().map(|v| v * sign)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame. The terminal frame always carries the exact target.
    pub fn step(&mut self) -> CountFrame {
        if self.done {
            return CountFrame::Finished(self.target);
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            let shown = (self.current.ceil() as i64).min(self.target);
            CountFrame::Running(shown)
        } else {
            self.done = true;
            CountFrame::Finished(self.target)
        }
    }
}

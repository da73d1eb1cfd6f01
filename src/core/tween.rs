use serde::Serialize;

/// Animation vars in the animation engine's vocabulary.
///
/// Serialised with camelCase keys and unset fields omitted, so the same value
/// can be handed straight to the engine or folded into inline styles.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_perspective: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    /// -1 repeats forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yoyo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl Tween {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, sec: f64) -> Self {
        self.duration = Some(sec);
        self
    }

    pub fn delay(mut self, sec: f64) -> Self {
        self.delay = Some(sec);
        self
    }

    pub fn ease(mut self, ease: &'static str) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn auto_alpha(mut self, v: f64) -> Self {
        self.auto_alpha = Some(v);
        self
    }

    pub fn xy(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn display(mut self, d: &str) -> Self {
        self.display = Some(d.to_string());
        self
    }

    /// End-state CSS declarations, used when no animation engine is present.
    pub fn inline_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let alpha = self.auto_alpha.or(self.opacity);
        if let Some(a) = alpha {
            out.push(("opacity", a.to_string()));
        }
        if let Some(a) = self.auto_alpha {
            let vis = if a <= 0.0 { "hidden" } else { "visible" };
            out.push(("visibility", vis.to_string()));
        }
        let transform = self.transform();
        if !transform.is_empty() {
            out.push(("transform", transform));
        }
        if let Some(h) = &self.height {
            out.push(("height", h.clone()));
        }
        if let Some(ls) = &self.letter_spacing {
            out.push(("letter-spacing", ls.clone()));
        }
        if let Some(d) = &self.display {
            out.push(("display", d.clone()));
        }
        out
    }

    fn transform(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(p) = self.transform_perspective {
            parts.push(format!("perspective({}px)", p));
        }
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if let Some(yp) = self.y_percent {
            parts.push(format!("translateY({}%)", yp));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({})", s));
        }
        if let Some(sx) = self.scale_x {
            parts.push(format!("scaleX({})", sx));
        }
        if let Some(rx) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", rx));
        }
        if let Some(ry) = self.rotate_y {
            parts.push(format!("rotateY({}deg)", ry));
        }
        parts.join(" ")
    }
}

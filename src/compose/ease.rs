/// Easing curves applied to looping layer animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InOutQuad,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }
}

/// Position within a loop of `period_secs`, in `[0, 1)`.
pub fn loop_phase(t_secs: f64, period_secs: f64) -> f64 {
    if period_secs <= 0.0 || !period_secs.is_finite() {
        return 0.0;
    }
    (t_secs / period_secs).rem_euclid(1.0)
}

/// Triangle wave over a loop phase: 0 at the ends, 1 at mid-period, eased both ways.
pub fn there_and_back(phase: f64, ease: Ease) -> f64 {
    if phase < 0.5 {
        ease.apply(phase * 2.0)
    } else {
        ease.apply((1.0 - phase) * 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/ease.rs"]
mod tests;

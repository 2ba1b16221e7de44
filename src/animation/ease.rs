use std::f64::consts::PI;

/// Progress curve of a reveal animation.
///
/// Every curve maps `0 -> 0` and `1 -> 1` and is non-decreasing in between, so a trace never
/// runs backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, `t^2`.
    InQuad,
    /// Ends slow, mirror of [`Ease::InQuad`].
    OutQuad,
    /// Slow at both ends, quadratic.
    InOutQuad,
    /// Starts slow, `t^3`.
    InCubic,
    /// Ends slow, mirror of [`Ease::InCubic`].
    OutCubic,
    /// Slow at both ends, cubic.
    InOutCubic,
    /// Half-cosine: `(1 - cos(pi * t)) / 2`.
    AccelerateDecelerate,
}

impl Ease {
    /// Map linear progress `t` (clamped to `[0, 1]`) through this curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in(t, 2),
            Self::OutQuad => ease_out(t, 2),
            Self::InOutQuad => ease_in_out(t, 2),
            Self::InCubic => ease_in(t, 3),
            Self::OutCubic => ease_out(t, 3),
            Self::InOutCubic => ease_in_out(t, 3),
            Self::AccelerateDecelerate => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - ease_in(1.0 - t, power)
}

fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        ease_in(2.0 * t, power) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t, power) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

use std::path::Path;

use anyhow::Context as _;

use crate::animation::driver::RevealTiming;
use crate::animation::ease::Ease;
use crate::foundation::core::{Argb, Padding};
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::clamp_unit;
use crate::geometry::provider::GeometrySource;
use crate::reveal::state::FALLBACK_FADE_FACTOR;

/// Construction-time options of a [`RevealSession`](crate::RevealSession).
///
/// Every field has a default, so a JSON document only needs the fields it changes. Out-of-range
/// values are normalized rather than rejected; see [`RevealConfig::normalized`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Stroke width in viewport pixels.
    pub stroke_width: f64,
    /// Stroke color, `0xAARRGGBB`.
    pub stroke_color: Argb,
    /// Fill color, `0xAARRGGBB`.
    pub fill_color: Argb,
    /// Trace phase shown before the first reveal.
    pub initial_phase: f64,
    /// Trace animation duration.
    pub trace_duration_ms: i64,
    /// Fill animation duration.
    pub fill_duration_ms: i64,
    /// Delay from the reveal call to the start of the fill animation.
    pub fill_start_delay_ms: i64,
    /// Multiplier turning trace phase into stroke opacity.
    pub fade_factor: f64,
    /// Drawing to reveal. Without one, resizes load nothing.
    pub geometry_source: Option<GeometrySource>,
    /// Insets between the host bounds and the drawing viewport.
    pub padding: Padding,
    /// Easing of both animations.
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            stroke_color: Argb::BLACK,
            fill_color: Argb::BLACK,
            initial_phase: 0.0,
            trace_duration_ms: 4000,
            fill_duration_ms: 4000,
            fill_start_delay_ms: 2000,
            fade_factor: 10.0,
            geometry_source: None,
            padding: Padding::default(),
            ease: Ease::Linear,
        }
    }
}

impl RevealConfig {
    /// Parse a JSON document and normalize it.
    pub fn from_json(json: &str) -> RevealResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| RevealError::serde(format!("parse reveal config: {e}")))?;
        Ok(cfg.normalized())
    }

    /// Read and parse a JSON file. A relative file `geometry_source` resolves against the
    /// config's directory.
    pub fn from_json_file(path: &Path) -> RevealResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read reveal config '{}'", path.display()))?;
        let mut cfg = Self::from_json(&text)?;
        if let Some(GeometrySource::File(svg)) = cfg.geometry_source.as_mut()
            && svg.is_relative()
            && let Some(dir) = path.parent()
        {
            *svg = dir.join(&*svg);
        }
        Ok(cfg)
    }

    /// Clamp every field into its valid range.
    ///
    /// Negative durations become zero, a negative or non-finite stroke width becomes zero, the
    /// initial phase is clamped to `[0, 1]`, and a non-positive or non-finite fade factor falls
    /// back to [`FALLBACK_FADE_FACTOR`].
    pub fn normalized(mut self) -> Self {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            self.stroke_width = 0.0;
        }
        self.initial_phase = clamp_unit(self.initial_phase);
        self.trace_duration_ms = self.trace_duration_ms.max(0);
        self.fill_duration_ms = self.fill_duration_ms.max(0);
        self.fill_start_delay_ms = self.fill_start_delay_ms.max(0);
        if !(self.fade_factor.is_finite() && self.fade_factor > 0.0) {
            self.fade_factor = FALLBACK_FADE_FACTOR;
        }
        self
    }

    /// Animation timing described by this config.
    pub fn timing(&self) -> RevealTiming {
        RevealTiming::from_millis(
            self.trace_duration_ms,
            self.fill_duration_ms,
            self.fill_start_delay_ms,
        )
        .with_ease(self.ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;

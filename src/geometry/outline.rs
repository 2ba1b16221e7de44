use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::core::{Argb, BezPath, Rect};
use crate::foundation::math::{alpha_byte, clamp_unit};
use crate::geometry::trim::{arc_length, trim_prefix};

/// Stroke paint of a single outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePaint {
    /// Base stroke color.
    pub color: Argb,
    /// Stroke width in viewport pixels.
    pub width: f64,
    /// Current opacity fraction, derived from the trace phase.
    pub alpha: f64,
}

impl Default for StrokePaint {
    fn default() -> Self {
        Self {
            color: Argb::BLACK,
            width: 1.0,
            alpha: 0.0,
        }
    }
}

impl StrokePaint {
    /// Current opacity as an 8-bit alpha.
    pub fn alpha_byte(&self) -> u8 {
        alpha_byte(self.alpha)
    }
}

/// One path of the drawing together with its reveal state.
///
/// `path`, `arc_length` and `bounds` are fixed at construction. `render_prefix` and the stroke
/// alpha are rewritten by [`RevealState`](crate::RevealState) on every phase change, always while
/// its gate is held.
#[derive(Clone, Debug)]
pub struct PathOutline {
    path: Arc<BezPath>,
    arc_length: f64,
    bounds: Rect,
    render_prefix: BezPath,
    stroke: StrokePaint,
}

impl PathOutline {
    /// Build an outline and measure its arc length.
    pub fn new(path: BezPath) -> Self {
        let len = arc_length(&path);
        Self::with_arc_length(path, len)
    }

    /// Build an outline whose arc length was measured by the caller.
    ///
    /// Negative or non-finite lengths are stored as zero.
    pub fn with_arc_length(path: BezPath, arc_length: f64) -> Self {
        let arc_length = if arc_length.is_finite() {
            arc_length.max(0.0)
        } else {
            0.0
        };
        let bounds = if path.elements().is_empty() {
            Rect::ZERO
        } else {
            path.bounding_box()
        };
        Self {
            path: Arc::new(path),
            arc_length,
            bounds,
            render_prefix: BezPath::new(),
            stroke: StrokePaint::default(),
        }
    }

    /// Replace the stroke color and width, keeping the derived alpha.
    pub fn with_stroke(mut self, color: Argb, width: f64) -> Self {
        self.stroke.color = color;
        self.stroke.width = width;
        self
    }

    /// The full, immutable path.
    pub fn path(&self) -> &Arc<BezPath> {
        &self.path
    }

    /// Total arc length of [`Self::path`].
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// Bounding box of [`Self::path`].
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The currently revealed part of the path.
    pub fn render_prefix(&self) -> &BezPath {
        &self.render_prefix
    }

    /// Stroke paint, including the derived alpha.
    pub fn stroke(&self) -> &StrokePaint {
        &self.stroke
    }

    /// Recompute the render prefix and stroke alpha for `phase`.
    pub(crate) fn update_for_phase(&mut self, phase: f64, fade_factor: f64) {
        let phase = clamp_unit(phase);
        if phase >= 1.0 && self.arc_length > 0.0 {
            self.render_prefix.clone_from(&self.path);
        } else {
            trim_prefix(&self.path, phase * self.arc_length, &mut self.render_prefix);
        }
        self.stroke.alpha = stroke_alpha_fraction(phase, fade_factor);
    }
}

/// Stroke opacity for a trace phase: `min(phase * fade_factor, 1)`.
pub fn stroke_alpha_fraction(phase: f64, fade_factor: f64) -> f64 {
    clamp_unit(phase * fade_factor)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/outline.rs"]
mod tests;

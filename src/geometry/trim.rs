//! Arc-length measurement and prefix extraction for [`BezPath`].
//!
//! Paths are measured across all of their subpaths in element order. A `ClosePath` contributes the
//! length of the implicit closing segment back to the subpath start.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point};

/// Accuracy passed to kurbo's arc-length routines.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

enum Step {
    MoveTo(Point),
    Segment(PathSeg),
    /// Closing segment; `None` when the current point already sits on the subpath start.
    Close(Option<PathSeg>),
}

struct Steps<'a> {
    elements: std::slice::Iter<'a, PathEl>,
    start: Point,
    current: Point,
}

impl<'a> Steps<'a> {
    fn new(path: &'a BezPath) -> Self {
        Self {
            elements: path.elements().iter(),
            start: Point::ZERO,
            current: Point::ZERO,
        }
    }
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let el = *self.elements.next()?;
        let from = self.current;
        let step = match el {
            PathEl::MoveTo(p) => {
                self.start = p;
                self.current = p;
                return Some(Step::MoveTo(p));
            }
            PathEl::LineTo(p) => {
                self.current = p;
                Step::Segment(PathSeg::Line(kurbo::Line::new(from, p)))
            }
            PathEl::QuadTo(p1, p2) => {
                self.current = p2;
                Step::Segment(PathSeg::Quad(kurbo::QuadBez::new(from, p1, p2)))
            }
            PathEl::CurveTo(p1, p2, p3) => {
                self.current = p3;
                Step::Segment(PathSeg::Cubic(kurbo::CubicBez::new(from, p1, p2, p3)))
            }
            PathEl::ClosePath => {
                self.current = self.start;
                if from == self.start {
                    Step::Close(None)
                } else {
                    Step::Close(Some(PathSeg::Line(kurbo::Line::new(from, self.start))))
                }
            }
        };
        Some(step)
    }
}

/// Total arc length of `path`, summed over every subpath.
pub fn arc_length(path: &BezPath) -> f64 {
    Steps::new(path)
        .map(|step| match step {
            Step::Segment(seg) | Step::Close(Some(seg)) => seg.arclen(ARCLEN_ACCURACY),
            Step::MoveTo(_) | Step::Close(None) => 0.0,
        })
        .sum()
}

/// Write into `out` the prefix of `path` whose arc length is `length`.
///
/// `out` is cleared first and its allocation reused. A non-positive or NaN `length` leaves `out`
/// empty; a `length` past the end copies every segment.
pub fn trim_prefix(path: &BezPath, length: f64, out: &mut BezPath) {
    out.truncate(0);
    if length.is_nan() || length <= 0.0 {
        return;
    }

    let mut remaining = length;
    let mut pending_move: Option<Point> = None;
    let mut subpath_open = false;

    for step in Steps::new(path) {
        let (seg, closing) = match step {
            Step::MoveTo(p) => {
                pending_move = Some(p);
                subpath_open = false;
                continue;
            }
            Step::Close(None) => {
                if subpath_open {
                    out.close_path();
                    subpath_open = false;
                }
                continue;
            }
            Step::Segment(seg) => (seg, false),
            Step::Close(Some(seg)) => (seg, true),
        };

        if !subpath_open {
            out.move_to(pending_move.take().unwrap_or_else(|| seg.start()));
            subpath_open = true;
        }

        let len = seg.arclen(ARCLEN_ACCURACY);
        if len <= remaining {
            if closing {
                out.close_path();
                subpath_open = false;
            } else {
                push_segment(out, seg);
            }
            remaining -= len;
            if remaining <= 0.0 {
                return;
            }
        } else {
            let t = seg.inv_arclen(remaining, ARCLEN_ACCURACY).clamp(0.0, 1.0);
            push_segment(out, seg.subsegment(0.0..t));
            return;
        }
    }
}

fn push_segment(out: &mut BezPath, seg: PathSeg) {
    match seg {
        PathSeg::Line(l) => out.line_to(l.p1),
        PathSeg::Quad(q) => out.quad_to(q.p1, q.p2),
        PathSeg::Cubic(c) => out.curve_to(c.p1, c.p2, c.p3),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/trim.rs"]
mod tests;

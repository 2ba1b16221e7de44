use crate::foundation::core::{Affine, BezPath};
use crate::render::target::DrawTarget;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// [`DrawTarget::set_transform`].
    SetTransform(Affine),
    /// [`DrawTarget::fill_path`].
    Fill {
        /// Filled path.
        path: BezPath,
        /// Straight-alpha color.
        rgba: [u8; 4],
    },
    /// [`DrawTarget::stroke_path`].
    Stroke {
        /// Stroked path.
        path: BezPath,
        /// Stroke width in pixels.
        width: f64,
        /// Straight-alpha color.
        rgba: [u8; 4],
    },
}

/// [`DrawTarget`] that records calls for later inspection or replay.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    cmds: Vec<DrawCmd>,
}

impl RecordingTarget {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Take the recorded calls, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Issue every recorded call against `target`, in order.
    pub fn replay(&self, target: &mut impl DrawTarget) {
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::SetTransform(t) => target.set_transform(*t),
                DrawCmd::Fill { path, rgba } => target.fill_path(path, *rgba),
                DrawCmd::Stroke { path, width, rgba } => target.stroke_path(path, *width, *rgba),
            }
        }
    }
}

impl DrawTarget for RecordingTarget {
    fn set_transform(&mut self, transform: Affine) {
        self.cmds.push(DrawCmd::SetTransform(transform));
    }

    fn fill_path(&mut self, path: &BezPath, rgba: [u8; 4]) {
        self.cmds.push(DrawCmd::Fill {
            path: path.clone(),
            rgba,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, rgba: [u8; 4]) {
        self.cmds.push(DrawCmd::Stroke {
            path: path.clone(),
            width,
            rgba,
        });
    }
}

use crate::foundation::core::{Affine, Argb};
use crate::reveal::state::RevealState;
use crate::render::target::DrawTarget;

/// Draws a [`RevealState`]: for each outline, in list order, the filled silhouette and then the
/// revealed stroke prefix on top of it.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    fill_color: Argb,
    origin: Affine,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Argb::BLACK)
    }
}

impl Renderer {
    /// Renderer filling silhouettes with `fill_color`.
    pub fn new(fill_color: Argb) -> Self {
        Self {
            fill_color,
            origin: Affine::IDENTITY,
        }
    }

    /// Transform applied before drawing, e.g. the padding offset.
    pub fn with_origin(mut self, origin: Affine) -> Self {
        self.origin = origin;
        self
    }

    /// Fill color; its alpha is replaced by the state's fill alpha.
    pub fn fill_color(&self) -> Argb {
        self.fill_color
    }

    /// Draw `state` into `target`, returning the number of outlines drawn.
    ///
    /// The whole pass runs inside the state's gate, so it never observes a list or a render prefix
    /// that is being rebuilt.
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T, state: &RevealState) -> usize {
        state.with_frame(|frame| {
            target.set_transform(self.origin);
            let fill = self.fill_color.to_rgba8_with_alpha(frame.fill_alpha);
            for outline in frame.paths {
                let stroke = outline.stroke();
                target.fill_path(outline.path(), fill);
                target.stroke_path(
                    outline.render_prefix(),
                    stroke.width,
                    stroke.color.to_rgba8_with_alpha(stroke.alpha),
                );
            }
            frame.paths.len()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;

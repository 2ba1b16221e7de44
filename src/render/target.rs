use crate::foundation::core::{Affine, BezPath};

/// Surface the [`Renderer`](crate::Renderer) draws into.
///
/// Colors are straight-alpha `[r, g, b, a]`. Paths are in viewport coordinates and pass through
/// the most recent transform.
pub trait DrawTarget {
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Fill `path` with the nonzero rule.
    fn fill_path(&mut self, path: &BezPath, rgba: [u8; 4]);

    /// Stroke `path` `width` pixels wide with default joins and caps.
    fn stroke_path(&mut self, path: &BezPath, width: f64, rgba: [u8; 4]);
}

impl<T: DrawTarget + ?Sized> DrawTarget for &mut T {
    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }

    fn fill_path(&mut self, path: &BezPath, rgba: [u8; 4]) {
        (**self).fill_path(path, rgba);
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, rgba: [u8; 4]) {
        (**self).stroke_path(path, width, rgba);
    }
}

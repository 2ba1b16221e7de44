pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

use crate::foundation::math::alpha_byte;

/// Drawable area handed to geometry providers, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Insets between the host's bounds and the drawable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Left inset in pixels.
    pub left: u32,
    /// Top inset in pixels.
    pub top: u32,
    /// Right inset in pixels.
    pub right: u32,
    /// Bottom inset in pixels.
    pub bottom: u32,
}

impl Padding {
    /// Same inset on every side.
    pub fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }

    /// Shrink a `width` x `height` host area by this padding.
    ///
    /// Sides that would go negative collapse to zero.
    pub fn inner_viewport(self, width: u32, height: u32) -> Viewport {
        Viewport {
            width: width.saturating_sub(self.left.saturating_add(self.right)),
            height: height.saturating_sub(self.top.saturating_add(self.bottom)),
        }
    }

    /// Translation from host coordinates to viewport coordinates.
    pub fn origin(self) -> Affine {
        Affine::translate((f64::from(self.left), f64::from(self.top)))
    }
}

/// Packed `0xAARRGGBB` color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);

    /// Build from separate channels.
    pub fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Straight-alpha `[r, g, b, a]`.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [a, r, g, b] = self.0.to_be_bytes();
        [r, g, b, a]
    }

    /// Straight-alpha `[r, g, b, a]` whose alpha is replaced by `fraction` in `[0, 1]`.
    ///
    /// The color's own alpha is ignored.
    pub fn to_rgba8_with_alpha(self, fraction: f64) -> [u8; 4] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b, alpha_byte(fraction)]
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

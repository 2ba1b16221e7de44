use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::{RevealError, RevealResult};
use crate::render::target::DrawTarget;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write the frame as a straight-alpha PNG.
    pub fn save_png(&self, path: &Path) -> RevealResult<()> {
        let mut bytes = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut bytes);
        }
        let img = image::RgbaImage::from_raw(self.width, self.height, bytes)
            .ok_or_else(|| RevealError::render("frame buffer size does not match dimensions"))?;
        img.save(path)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// CPU raster [`DrawTarget`] powered by `vello_cpu`.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> RevealResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| RevealError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| RevealError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(RevealError::render("surface width/height must be non-zero"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
        })
    }

    /// Surface whose background is filled with straight-alpha `rgba`.
    pub fn with_background(width: u32, height: u32, rgba: [u8; 4]) -> RevealResult<Self> {
        let mut surface = Self::new(width, height)?;
        let [r, g, b, a] = rgba;
        surface
            .ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        surface
            .ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        surface.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(surface.width),
            f64::from(surface.height),
        ));
        Ok(surface)
    }

    /// Rasterize everything drawn so far into a premultiplied frame.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl DrawTarget for CpuSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.ctx.set_transform(affine_to_cpu(transform));
    }

    fn fill_path(&mut self, path: &BezPath, rgba: [u8; 4]) {
        if path.elements().is_empty() || rgba[3] == 0 {
            return;
        }
        let [r, g, b, a] = rgba;
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, rgba: [u8; 4]) {
        if path.elements().is_empty() || rgba[3] == 0 || width.is_nan() || width <= 0.0 {
            return;
        }
        let [r, g, b, a] = rgba;
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

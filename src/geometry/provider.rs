use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use anyhow::Context as _;
use usvg::tiny_skia_path::PathSegment;

use crate::foundation::core::{Affine, BezPath, Point, Viewport};
use crate::foundation::error::GeometryLoadError;
use crate::geometry::outline::PathOutline;

/// Where the drawing comes from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometrySource {
    /// SVG file on disk.
    File(PathBuf),
    /// SVG document text.
    Inline(Arc<str>),
}

impl GeometrySource {
    /// Inline SVG document.
    pub fn inline(svg: impl Into<Arc<str>>) -> Self {
        Self::Inline(svg.into())
    }
}

/// Turns a geometry source into viewport-space path outlines.
///
/// Called from the loader's worker thread, never from the render path. Implementations may cache
/// parsed documents but must not have other side effects.
pub trait GeometryProvider: Send + Sync {
    /// Produce outlines fitted to `viewport`, each with its arc length measured.
    fn parse(
        &self,
        source: &GeometrySource,
        viewport: Viewport,
    ) -> Result<Vec<PathOutline>, GeometryLoadError>;
}

impl<F> GeometryProvider for F
where
    F: Fn(&GeometrySource, Viewport) -> Result<Vec<PathOutline>, GeometryLoadError> + Send + Sync,
{
    fn parse(
        &self,
        source: &GeometrySource,
        viewport: Viewport,
    ) -> Result<Vec<PathOutline>, GeometryLoadError> {
        self(source, viewport)
    }
}

/// [`GeometryProvider`] backed by `usvg`.
///
/// Every visible path of the document (text included, as flattened glyph outlines) becomes one
/// outline, in document order. The document is scaled uniformly to fit the viewport and centered
/// on the axis with slack. The most recently parsed tree is cached per source.
pub struct SvgGeometryProvider {
    load_system_fonts: bool,
    fontdb: OnceLock<Arc<usvg::fontdb::Database>>,
    cache: Mutex<Option<(GeometrySource, Arc<usvg::Tree>)>>,
}

impl Default for SvgGeometryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgGeometryProvider {
    /// Provider that resolves `<text>` against the system fonts.
    pub fn new() -> Self {
        Self {
            load_system_fonts: true,
            fontdb: OnceLock::new(),
            cache: Mutex::new(None),
        }
    }

    /// Provider with an empty font database; `<text>` elements produce no outlines.
    pub fn without_system_fonts() -> Self {
        Self {
            load_system_fonts: false,
            ..Self::new()
        }
    }

    fn fontdb(&self) -> Arc<usvg::fontdb::Database> {
        self.fontdb
            .get_or_init(|| {
                let mut db = usvg::fontdb::Database::new();
                if self.load_system_fonts {
                    db.load_system_fonts();
                }
                tracing::debug!(faces = db.len(), "svg font database ready");
                Arc::new(db)
            })
            .clone()
    }

    fn tree_for(&self, source: &GeometrySource) -> Result<Arc<usvg::Tree>, GeometryLoadError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_source, tree)) = cache.as_ref()
            && cached_source == source
        {
            return Ok(tree.clone());
        }

        let (bytes, resources_dir) = match source {
            GeometrySource::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("read svg from '{}'", path.display()))
                    .map_err(|e| GeometryLoadError::unavailable(format!("{e:#}")))?;
                (bytes, path.parent().map(|p| p.to_path_buf()))
            }
            GeometrySource::Inline(text) => (text.as_bytes().to_vec(), None),
        };

        let opts = usvg::Options {
            resources_dir,
            fontdb: self.fontdb(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(&bytes, &opts)
            .map_err(|e| GeometryLoadError::malformed(format!("parse svg tree: {e}")))?;
        let tree = Arc::new(tree);
        *cache = Some((source.clone(), tree.clone()));
        Ok(tree)
    }
}

impl GeometryProvider for SvgGeometryProvider {
    #[tracing::instrument(skip(self))]
    fn parse(
        &self,
        source: &GeometrySource,
        viewport: Viewport,
    ) -> Result<Vec<PathOutline>, GeometryLoadError> {
        let tree = self.tree_for(source)?;
        if viewport.is_empty() {
            return Ok(Vec::new());
        }

        let fit = fit_center(tree.size(), viewport)?;
        let mut out = Vec::new();
        collect_group(tree.root(), fit, &mut out);
        tracing::debug!(paths = out.len(), "svg outlines extracted");
        Ok(out)
    }
}

/// Uniform scale that fits `doc` inside `viewport`, centered on the axis with slack.
fn fit_center(doc: usvg::Size, viewport: Viewport) -> Result<Affine, GeometryLoadError> {
    let (dw, dh) = (f64::from(doc.width()), f64::from(doc.height()));
    if !(dw.is_finite() && dh.is_finite() && dw > 0.0 && dh > 0.0) {
        return Err(GeometryLoadError::malformed(
            "svg document has invalid width/height",
        ));
    }

    let (vw, vh) = (f64::from(viewport.width), f64::from(viewport.height));
    let scale = (vw / dw).min(vh / dh);
    let dx = (vw - dw * scale) / 2.0;
    let dy = (vh - dh * scale) / 2.0;
    Ok(Affine::translate((dx, dy)) * Affine::scale(scale))
}

fn collect_group(group: &usvg::Group, fit: Affine, out: &mut Vec<PathOutline>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_group(g, fit, out),
            usvg::Node::Path(p) => {
                if !p.is_visible() {
                    continue;
                }
                let xform = fit * affine_from_usvg(p.abs_transform());
                let path = bezpath_from_usvg(p.data(), xform);
                if !path.elements().is_empty() {
                    out.push(PathOutline::new(path));
                }
            }
            usvg::Node::Text(t) => collect_group(t.flattened(), fit, out),
            usvg::Node::Image(_) => {}
        }
    }
}

fn affine_from_usvg(t: usvg::Transform) -> Affine {
    Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ])
}

fn bezpath_from_usvg(data: &usvg::tiny_skia_path::Path, xform: Affine) -> BezPath {
    let pt = |p: usvg::tiny_skia_path::Point| xform * Point::new(f64::from(p.x), f64::from(p.y));

    let mut out = BezPath::new();
    for seg in data.segments() {
        match seg {
            PathSegment::MoveTo(p) => out.move_to(pt(p)),
            PathSegment::LineTo(p) => out.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/provider.rs"]
mod tests;

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::foundation::core::{Argb, Viewport};
use crate::foundation::error::GeometryLoadError;
use crate::geometry::outline::PathOutline;
use crate::geometry::provider::{GeometryProvider, GeometrySource};
use crate::reveal::state::RevealState;

/// Result of one background load: the number of installed outlines, or why nothing was installed.
pub type LoadOutcome = Result<usize, GeometryLoadError>;

#[derive(Clone)]
struct LoadJob {
    provider: Arc<dyn GeometryProvider>,
    source: GeometrySource,
    stroke_color: Argb,
    stroke_width: f64,
}

impl LoadJob {
    fn run(&self, viewport: Viewport) -> Result<Vec<PathOutline>, GeometryLoadError> {
        let outlines = self.provider.parse(&self.source, viewport)?;
        Ok(outlines
            .into_iter()
            .map(|o| o.with_stroke(self.stroke_color, self.stroke_width))
            .collect())
    }
}

/// Loads path outlines on a background worker, one task at a time.
///
/// [`GeometryLoader::issue`] joins the outstanding task before starting the next one; requests are
/// neither cancelled nor coalesced. A failed load keeps whatever [`RevealState`] already shows.
pub struct GeometryLoader {
    job: LoadJob,
    in_flight: Option<JoinHandle<LoadOutcome>>,
}

impl GeometryLoader {
    /// Loader for `source`, stroking every outline in opaque black at width 1.
    pub fn new(provider: Arc<dyn GeometryProvider>, source: GeometrySource) -> Self {
        Self {
            job: LoadJob {
                provider,
                source,
                stroke_color: Argb::BLACK,
                stroke_width: 1.0,
            },
            in_flight: None,
        }
    }

    /// Stroke paint stamped onto every loaded outline.
    pub fn with_stroke(mut self, color: Argb, width: f64) -> Self {
        self.job.stroke_color = color;
        self.job.stroke_width = width;
        self
    }

    /// The geometry source this loader reads.
    pub fn source(&self) -> &GeometrySource {
        &self.job.source
    }

    /// Produce outlines for `viewport` on the calling thread without installing them.
    pub fn load(&self, viewport: Viewport) -> Result<Vec<PathOutline>, GeometryLoadError> {
        self.job.run(viewport)
    }

    /// Return `true` while a background task has been issued and not yet joined.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start loading for `viewport` on a worker thread and install the result into `state`.
    ///
    /// Blocks until any previously issued task has finished.
    #[tracing::instrument(skip(self, state))]
    pub fn issue(&mut self, viewport: Viewport, state: &Arc<RevealState>) {
        if let Some(Err(e)) = self.wait() {
            tracing::debug!(error = %e, "previous geometry load did not install");
        }

        let job = self.job.clone();
        let state = Arc::clone(state);
        let spawned = std::thread::Builder::new()
            .name("geometry-loader".to_string())
            .spawn(move || match job.run(viewport) {
                Ok(outlines) => {
                    let n = outlines.len();
                    state.install_paths(outlines);
                    Ok(n)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "geometry load failed; keeping previous outlines");
                    Err(e)
                }
            });

        match spawned {
            Ok(handle) => self.in_flight = Some(handle),
            Err(e) => tracing::error!(error = %e, "failed to spawn geometry loader thread"),
        }
    }

    /// Join the outstanding task, if any, and report how it ended.
    pub fn wait(&mut self) -> Option<LoadOutcome> {
        let handle = self.in_flight.take()?;
        Some(handle.join().unwrap_or_else(|_| {
            tracing::error!("geometry loader thread panicked; keeping previous outlines");
            Err(GeometryLoadError::WorkerPanicked)
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/loader.rs"]
mod tests;

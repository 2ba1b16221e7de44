use std::sync::Arc;
use std::time::Instant;

use crate::animation::driver::{AnimationDriver, RevealTiming, TickOutcome};
use crate::foundation::error::{GeometryLoadError, RevealResult};
use crate::geometry::loader::{GeometryLoader, LoadOutcome};
use crate::geometry::provider::GeometryProvider;
use crate::render::renderer::Renderer;
use crate::render::target::DrawTarget;
use crate::reveal::state::RevealState;
use crate::session::config::RevealConfig;

/// Host-facing facade wiring a [`RevealState`] to its animations, geometry loader and renderer.
///
/// A host forwards three events: viewport resizes to [`RevealSession::on_viewport_resized`], frame
/// ticks to [`RevealSession::tick`], and paints to [`RevealSession::draw`]. Hosts that paint from
/// another thread can share [`RevealSession::state`] and draw it with their own [`Renderer`].
///
/// Resizes and ticks share `&mut self`, so a resize that waits for the previous load also holds up
/// ticks. Hosts that need ticks to keep running during that wait should drive a
/// [`GeometryLoader`] from their layout thread against a clone of [`RevealSession::state`], and
/// leave [`RevealSession::on_viewport_resized`] uncalled.
pub struct RevealSession {
    config: RevealConfig,
    state: Arc<RevealState>,
    driver: AnimationDriver,
    renderer: Renderer,
    loader: Option<GeometryLoader>,
}

impl RevealSession {
    /// Session for `config`, loading geometry through `provider`.
    ///
    /// Nothing is loaded until the first [`RevealSession::on_viewport_resized`].
    pub fn new(config: RevealConfig, provider: Arc<dyn GeometryProvider>) -> Self {
        let config = config.normalized();
        let state = Arc::new(RevealState::new(config.initial_phase, config.fade_factor));
        let renderer = Renderer::new(config.fill_color).with_origin(config.padding.origin());
        let loader = config.geometry_source.clone().map(|source| {
            GeometryLoader::new(provider, source)
                .with_stroke(config.stroke_color, config.stroke_width)
        });
        Self {
            config,
            state,
            driver: AnimationDriver::new(),
            renderer,
            loader,
        }
    }

    /// Normalized configuration in effect.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Shared reveal state.
    pub fn state(&self) -> &Arc<RevealState> {
        &self.state
    }

    /// Renderer configured with the fill color and padding offset.
    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// Start the reveal at `now` with the configured timing.
    pub fn reveal(&mut self, now: Instant) {
        let timing = self.config.timing();
        self.reveal_with(timing, now);
    }

    /// Start the reveal at `now` with explicit timing, replacing any running animation.
    pub fn reveal_with(&mut self, timing: RevealTiming, now: Instant) {
        self.driver.reveal(&self.state, timing, now);
    }

    /// Advance the animations to `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        self.driver.tick(&self.state, now)
    }

    /// Return `true` while an animation is still running.
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Draw the current state, returning the number of outlines drawn.
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) -> usize {
        self.renderer.draw(target, &self.state)
    }

    /// React to a new host size by reloading geometry for the padded viewport.
    ///
    /// Blocks until the previously issued load, if any, has finished.
    #[tracing::instrument(skip(self))]
    pub fn on_viewport_resized(&mut self, width: u32, height: u32) {
        let viewport = self.config.padding.inner_viewport(width, height);
        match self.loader.as_mut() {
            Some(loader) => loader.issue(viewport, &self.state),
            None => tracing::debug!("no geometry source configured; nothing to load"),
        }
    }

    /// Load geometry for a `width` x `height` host area on the calling thread and install it.
    ///
    /// Waits for any background load first. Unlike [`RevealSession::on_viewport_resized`], a
    /// failure is returned; the previously installed outlines stay in place either way.
    pub fn load_blocking(&mut self, width: u32, height: u32) -> RevealResult<usize> {
        let viewport = self.config.padding.inner_viewport(width, height);
        let loader = self
            .loader
            .as_mut()
            .ok_or_else(|| GeometryLoadError::unavailable("no geometry source configured"))?;
        if let Some(Err(e)) = loader.wait() {
            tracing::debug!(error = %e, "previous geometry load did not install");
        }
        let outlines = loader.load(viewport)?;
        let n = outlines.len();
        self.state.install_paths(outlines);
        Ok(n)
    }

    /// Join the outstanding geometry load, if any.
    pub fn wait_for_geometry(&mut self) -> Option<LoadOutcome> {
        self.loader.as_mut()?.wait()
    }

    /// Set the trace phase directly.
    pub fn set_phase(&self, phase: f64) {
        self.state.set_phase(phase);
    }

    /// Set the fill alpha directly.
    pub fn set_fill_alpha(&self, alpha: f64) {
        self.state.set_fill_alpha(alpha);
    }

    /// Return `true` if the state changed since `last_revision` was read.
    pub fn needs_redraw(&self, last_revision: u64) -> bool {
        self.state.revision() != last_revision
    }
}

impl Drop for RevealSession {
    fn drop(&mut self) {
        if let Some(Err(e)) = self.wait_for_geometry() {
            tracing::debug!(error = %e, "geometry load finished with error during shutdown");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/reveal_session.rs"]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::math::{AtomicF64, clamp_unit};
use crate::geometry::outline::{PathOutline, stroke_alpha_fraction};
use crate::reveal::gate::SyncGate;

/// Fade factor used when a non-positive or non-finite one is supplied.
pub const FALLBACK_FADE_FACTOR: f64 = 1.0;

#[derive(Debug, Default)]
struct Shared {
    phase: f64,
    paths: Vec<PathOutline>,
}

/// Consistent read view of the reveal state, handed out while the gate is held.
#[derive(Clone, Copy, Debug)]
pub struct RevealFrame<'a> {
    /// Trace phase in `[0, 1]`.
    pub phase: f64,
    /// Fill opacity in `[0, 1]`.
    pub fill_alpha: f64,
    /// Stroke opacity multiplier.
    pub fade_factor: f64,
    /// Outlines in draw order.
    pub paths: &'a [PathOutline],
}

impl RevealFrame<'_> {
    /// `min(phase * fade_factor, 1)`.
    pub fn stroke_alpha_fraction(&self) -> f64 {
        stroke_alpha_fraction(self.phase, self.fade_factor)
    }
}

/// Animation parameters plus the current outline list.
///
/// The outline list and the phase live behind one [`SyncGate`]; the fill alpha is an independent
/// atomic. Share it between the render thread and the geometry loader as `Arc<RevealState>`.
#[derive(Debug)]
pub struct RevealState {
    gate: SyncGate<Shared>,
    fill_alpha: AtomicF64,
    fade_factor: f64,
    revision: AtomicU64,
}

impl RevealState {
    /// Empty state at `initial_phase` (clamped) with the given stroke fade factor.
    pub fn new(initial_phase: f64, fade_factor: f64) -> Self {
        let fade_factor = if fade_factor.is_finite() && fade_factor > 0.0 {
            fade_factor
        } else {
            FALLBACK_FADE_FACTOR
        };
        Self {
            gate: SyncGate::new(Shared {
                phase: clamp_unit(initial_phase),
                paths: Vec::new(),
            }),
            fill_alpha: AtomicF64::new(0.0),
            fade_factor,
            revision: AtomicU64::new(0),
        }
    }

    /// Set the trace phase and rebuild every outline's render prefix.
    pub fn set_phase(&self, phase: f64) {
        let phase = clamp_unit(phase);
        let fade = self.fade_factor;
        self.gate.with(|shared| {
            shared.phase = phase;
            for path in &mut shared.paths {
                path.update_for_phase(phase, fade);
            }
        });
        self.bump();
    }

    /// Set the fill opacity. Does not touch the gate.
    pub fn set_fill_alpha(&self, alpha: f64) {
        self.fill_alpha.store(clamp_unit(alpha));
        self.bump();
    }

    /// Replace the outline list, bringing every new outline to the current phase first.
    ///
    /// Readers observe either the old list or the fully prepared new one.
    #[tracing::instrument(skip_all, fields(paths = paths.len()))]
    pub fn install_paths(&self, mut paths: Vec<PathOutline>) {
        let fade = self.fade_factor;
        let previous = self.gate.with(|shared| {
            for path in &mut paths {
                path.update_for_phase(shared.phase, fade);
            }
            std::mem::replace(&mut shared.paths, paths)
        });
        drop(previous);
        self.bump();
        tracing::debug!("installed path outlines");
    }

    /// Current trace phase.
    pub fn phase(&self) -> f64 {
        self.gate.with(|shared| shared.phase)
    }

    /// Current fill opacity.
    pub fn fill_alpha(&self) -> f64 {
        self.fill_alpha.load()
    }

    /// Stroke opacity multiplier.
    pub fn fade_factor(&self) -> f64 {
        self.fade_factor
    }

    /// `min(phase * fade_factor, 1)` at the current phase.
    pub fn stroke_alpha_fraction(&self) -> f64 {
        stroke_alpha_fraction(self.phase(), self.fade_factor)
    }

    /// Number of installed outlines.
    pub fn path_count(&self) -> usize {
        self.gate.with(|shared| shared.paths.len())
    }

    /// Counter bumped on every visible change. Hosts repaint when it moves.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Run `f` on a consistent view of the state while holding the gate.
    pub fn with_frame<R>(&self, f: impl FnOnce(RevealFrame<'_>) -> R) -> R {
        let fill_alpha = self.fill_alpha.load();
        let fade_factor = self.fade_factor;
        self.gate.with(|shared| {
            f(RevealFrame {
                phase: shared.phase,
                fill_alpha,
                fade_factor,
                paths: &shared.paths,
            })
        })
    }

    /// Clone of the installed outlines.
    pub fn snapshot(&self) -> Vec<PathOutline> {
        self.gate.with(|shared| shared.paths.clone())
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::AcqRel);
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/state.rs"]
mod tests;

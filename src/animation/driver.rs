use std::time::{Duration, Instant};

use crate::animation::ease::Ease;
use crate::animation::tween::{Tween, TweenSample};
use crate::reveal::state::RevealState;

/// Durations of the two reveal animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    /// Time for the trace phase to go from 0 to 1.
    pub trace: Duration,
    /// Time for the fill alpha to go from 0 to 1.
    pub fill: Duration,
    /// Delay between the reveal call and the start of the fill animation.
    pub fill_delay: Duration,
    /// Easing shared by both animations.
    pub ease: Ease,
}

impl RevealTiming {
    /// Build from millisecond values; negative values are treated as zero.
    pub fn from_millis(trace_ms: i64, fill_ms: i64, fill_delay_ms: i64) -> Self {
        fn ms(v: i64) -> Duration {
            Duration::from_millis(v.max(0).unsigned_abs())
        }
        Self {
            trace: ms(trace_ms),
            fill: ms(fill_ms),
            fill_delay: ms(fill_delay_ms),
            ease: Ease::Linear,
        }
    }

    /// Same timing with a different easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::from_millis(4000, 4000, 2000)
    }
}

/// What a [`AnimationDriver::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// At least one value was written; the host should repaint.
    pub redraw: bool,
    /// At least one animation has not finished yet.
    pub running: bool,
}

/// Drives the trace and fill animations into a [`RevealState`].
///
/// The host supplies the clock: call [`AnimationDriver::tick`] once per frame with the frame time.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    trace: Option<Tween>,
    fill: Option<Tween>,
}

impl AnimationDriver {
    /// Idle driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start both animations at `now`.
    ///
    /// The fill alpha is forced to zero first. The trace starts immediately and the fill starts
    /// `timing.fill_delay` later; the two run concurrently. Calling this again replaces any running
    /// animations.
    pub fn reveal(&mut self, state: &RevealState, timing: RevealTiming, now: Instant) {
        tracing::debug!(?timing, "starting reveal");
        state.set_fill_alpha(0.0);
        self.trace = Some(Tween::new(now, timing.trace, 0.0, 1.0, timing.ease));
        self.fill = Some(Tween::new(
            now + timing.fill_delay,
            timing.fill,
            0.0,
            1.0,
            timing.ease,
        ));
        self.tick(state, now);
    }

    /// Advance both animations to `now`, writing their values into `state`.
    pub fn tick(&mut self, state: &RevealState, now: Instant) -> TickOutcome {
        let mut redraw = false;
        if let Some(phase) = advance(&mut self.trace, now) {
            state.set_phase(phase);
            redraw = true;
        }
        if let Some(alpha) = advance(&mut self.fill, now) {
            state.set_fill_alpha(alpha);
            redraw = true;
        }
        TickOutcome {
            redraw,
            running: self.is_running(),
        }
    }

    /// Return `true` while either animation still has work to do.
    pub fn is_running(&self) -> bool {
        self.trace.is_some() || self.fill.is_some()
    }
}

/// Sample the tween in `slot`, retiring it once it has produced its end value.
fn advance(slot: &mut Option<Tween>, now: Instant) -> Option<f64> {
    match slot.as_ref()?.sample(now) {
        TweenSample::Pending => None,
        TweenSample::Active(v) => Some(v),
        TweenSample::Done(v) => {
            *slot = None;
            Some(v)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;

use std::time::{Duration, Instant};

use crate::animation::ease::Ease;

/// Where a [`Tween`] stands at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenSample {
    /// Start time not reached yet.
    Pending,
    /// Running; carries the interpolated value.
    Active(f64),
    /// Finished; carries the end value.
    Done(f64),
}

/// Time-driven interpolation from `from` to `to`.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: Instant,
    duration: Duration,
    from: f64,
    to: f64,
    ease: Ease,
}

impl Tween {
    /// Tween beginning at `start` and lasting `duration`.
    pub fn new(start: Instant, duration: Duration, from: f64, to: f64, ease: Ease) -> Self {
        Self {
            start,
            duration,
            from,
            to,
            ease,
        }
    }

    /// Instant at which the value starts moving.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Instant at which the end value is reached.
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    /// Sample at `now`. A zero duration completes as soon as `start` is reached.
    pub fn sample(&self, now: Instant) -> TweenSample {
        if now < self.start {
            return TweenSample::Pending;
        }
        let elapsed = now - self.start;
        if elapsed >= self.duration {
            return TweenSample::Done(self.to);
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let te = self.ease.apply(t);
        TweenSample::Active(self.from + (self.to - self.from) * te)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;

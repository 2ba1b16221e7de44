use std::sync::atomic::{AtomicU64, Ordering};

/// Clamp into `[0, 1]`; NaN maps to 0.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Convert an opacity fraction into an 8-bit alpha, truncating like an integer cast.
pub(crate) fn alpha_byte(fraction: f64) -> u8 {
    (clamp_unit(fraction) * 255.0) as u8
}

/// `f64` stored as bits in an [`AtomicU64`].
#[derive(Debug, Default)]
pub(crate) struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub(crate) fn new(v: f64) -> Self {
        Self(AtomicU64::new(v.to_bits()))
    }

    pub(crate) fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn store(&self, v: f64) {
        self.0.store(v.to_bits(), Ordering::Release);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

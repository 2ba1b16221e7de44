use std::sync::{Mutex, PoisonError};

/// Single exclusion domain around shared render state.
///
/// Every read or write of the guarded value happens inside [`SyncGate::with`]. Critical sections
/// never leave the value half-updated, so a poisoned lock is recovered instead of propagated.
#[derive(Debug, Default)]
pub struct SyncGate<T> {
    inner: Mutex<T>,
}

impl<T> SyncGate<T> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Run `f` with exclusive access to the guarded value.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("sync gate was poisoned by a panicking holder; recovering");
            PoisonError::into_inner(poisoned)
        });
        f(&mut guard)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/gate.rs"]
mod tests;

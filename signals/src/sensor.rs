use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::subscription::ObserverSet;
use crate::traits::Observer;

/// One delivered update, as an owned snapshot. Channel observers forward
/// these; see the `Observer` impls in `traits`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub sensor: String,
    pub value: f64,
}

/// The subject: a named sensor owning its current reading and the set of
/// attached observers.
///
/// Single-threaded, synchronous semantics: `set_temperature` stores the
/// value and completes the full notification fan-out before returning, so
/// callers observe a strict happens-before between the call and every
/// observer's updated state.
pub struct TemperatureSensor {
    name: String,
    value: RwLock<f64>,
    observers: ObserverSet,
}

impl TemperatureSensor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: RwLock::new(0.0), observers: ObserverSet::new() }
    }

    pub fn name(&self) -> &str { &self.name }

    /// The most recently stored reading, `0.0` before the first
    /// [`set_temperature`](Self::set_temperature).
    pub fn temperature(&self) -> f64 { *self.value.read().expect("value lock is poisoned") }

    /// Attach an observer. The sensor takes a shared ownership claim; the
    /// observer is not notified retroactively.
    pub fn attach(&self, observer: Arc<dyn Observer>) { self.observers.attach(observer) }

    /// Detach an observer by identity, releasing the sensor's ownership
    /// claim. A no-op when the observer is not attached.
    pub fn detach(&self, observer: &dyn Observer) { self.observers.detach(observer) }

    /// Store `value`, then synchronously deliver `(name, value)` to every
    /// attached observer in attachment order. Every call fans out, even when
    /// the value is unchanged. Any `f64` is accepted, NaN and the infinities
    /// included.
    pub fn set_temperature(&self, value: f64) {
        {
            let mut current = self.value.write().expect("value lock is poisoned");
            *current = value;
        }
        debug!(sensor = %self.name, value, "temperature updated");
        self.observers.notify(&self.name, value);
    }

    /// Number of currently attached observers, duplicates counted.
    pub fn observer_count(&self) -> usize { self.observers.len() }
}

impl std::fmt::Debug for TemperatureSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemperatureSensor").field("name", &self.name).field("observers", &self.observers.len()).finish()
    }
}

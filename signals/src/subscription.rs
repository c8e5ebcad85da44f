use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use crate::traits::Observer;

/// The ordered set of observers attached to a sensor.
///
/// Holds strong references: an attached observer is kept alive for as long
/// as it stays attached. Attachment order is notification order. Attaching
/// the same observer twice is permitted and delivers two updates per change.
#[derive(Default)]
pub struct ObserverSet(Arc<RwLock<Vec<Arc<dyn Observer>>>>);

impl Clone for ObserverSet {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl ObserverSet {
    pub fn new() -> Self { Self(Arc::new(RwLock::new(Vec::new()))) }

    /// Append an observer. No dedup, and no retroactive notification of the
    /// current value.
    pub fn attach(&self, observer: Arc<dyn Observer>) {
        let mut observers = self.0.write().expect("observer list lock is poisoned");
        observers.push(observer);
        debug!(count = observers.len(), "attached observer");
    }

    /// Remove every entry referring to `observer`.
    ///
    /// Identity comparison (allocation address), not value equality. With
    /// duplicate attach permitted, all occurrences go at once. Detaching an
    /// observer that is not attached is a no-op.
    pub fn detach(&self, observer: &dyn Observer) {
        let target = observer as *const dyn Observer as *const ();
        let mut observers = self.0.write().expect("observer list lock is poisoned");
        observers.retain(|o| Arc::as_ptr(o) as *const () != target);
        debug!(count = observers.len(), "detached observer");
    }

    /// Deliver one update to every attached observer, in attachment order.
    pub fn notify(&self, sensor: &str, value: f64) {
        // Clone the list to avoid holding the lock during callback execution,
        // so a callback may attach or detach without deadlocking. The
        // in-flight fan-out keeps delivering to the snapshot.
        let observers = {
            let observers = self.0.read().expect("observer list lock is poisoned");
            observers.clone()
        };

        for observer in observers.iter() {
            trace!(sensor, value, "notifying observer");
            observer.on_update(sensor, value);
        }
    }

    /// Number of attached observers, duplicates counted.
    pub fn len(&self) -> usize { self.0.read().expect("observer list lock is poisoned").len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::Observer;

/// Threshold alarm: on while the last delivered reading was at or above the
/// threshold.
///
/// The comparison is `value >= threshold` - a reading exactly at the
/// threshold trips the alarm. No hysteresis and no latching: a lower
/// subsequent reading clears it again. NaN compares false against any
/// threshold, so a NaN reading reads as off.
pub struct AlarmObserver {
    threshold: f64,
    is_on: AtomicBool,
}

impl AlarmObserver {
    pub fn new(threshold: f64) -> Self { Self { threshold, is_on: AtomicBool::new(false) } }

    pub fn threshold(&self) -> f64 { self.threshold }

    /// Off until the first update.
    pub fn is_on(&self) -> bool { self.is_on.load(Ordering::Relaxed) }
}

impl Observer for AlarmObserver {
    fn on_update(&self, _sensor: &str, value: f64) { self.is_on.store(value >= self.threshold, Ordering::Relaxed); }
}

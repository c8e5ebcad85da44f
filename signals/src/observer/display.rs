use std::sync::RwLock;

use crate::traits::Observer;

/// Mirrors the most recent update it was delivered: the value and the name
/// of the sensor that sent it.
pub struct DisplayObserver {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_value: f64,
    last_sensor: String,
}

impl DisplayObserver {
    pub fn new() -> Self { Self { state: RwLock::new(State::default()) } }

    /// The value from the most recent update, `0.0` before any.
    pub fn last_value(&self) -> f64 { self.state.read().expect("display state lock is poisoned").last_value }

    /// The sensor name from the most recent update, empty before any.
    pub fn last_sensor_name(&self) -> String { self.state.read().expect("display state lock is poisoned").last_sensor.clone() }
}

impl Default for DisplayObserver {
    fn default() -> Self { Self::new() }
}

impl Observer for DisplayObserver {
    fn on_update(&self, sensor: &str, value: f64) {
        let mut state = self.state.write().expect("display state lock is poisoned");
        state.last_value = value;
        state.last_sensor = sensor.to_owned();
    }
}

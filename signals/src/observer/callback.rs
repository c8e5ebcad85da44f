use crate::traits::Observer;

/// A CallbackObserver is an observer that wraps a callback which is called
/// with every update the observed sensors deliver.
pub struct CallbackObserver(Box<dyn Fn(&str, f64) + Send + Sync>);

impl CallbackObserver {
    pub fn new<F: Fn(&str, f64) + Send + Sync + 'static>(callback: F) -> Self { Self(Box::new(callback)) }
}

impl Observer for CallbackObserver {
    fn on_update(&self, sensor: &str, value: f64) { (self.0)(sensor, value) }
}

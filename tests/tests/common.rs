use tracing::Level;

use std::sync::{Arc, Mutex};
use thermo_signals::{CallbackObserver, Reading};

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init(); }

#[allow(unused)]
pub fn reading_watcher() -> (Arc<CallbackObserver>, Box<dyn Fn() -> Vec<Reading> + Send + Sync>) {
    let readings = Arc::new(Mutex::new(Vec::new()));
    let observer = {
        let readings = readings.clone();
        Arc::new(CallbackObserver::new(move |sensor: &str, value: f64| {
            readings.lock().unwrap().push(Reading { sensor: sensor.to_owned(), value });
        }))
    };

    let check = Box::new(move || {
        let readings: Vec<Reading> = readings.lock().unwrap().drain(..).collect();
        readings
    });

    (observer, check)
}

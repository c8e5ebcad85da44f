use crate::sensor::Reading;

/// The observer capability: receive one update per sensor state change.
///
/// Implementations mutate only their own state, and must accept any `f64` -
/// NaN and the infinities are delivered verbatim, never validated.
pub trait Observer: Send + Sync {
    fn on_update(&self, sensor: &str, value: f64);
}

/// Simple Observer implementation for std channel senders - every update
/// becomes one [`Reading`] in the channel. A disconnected receiver is not
/// an error.
impl Observer for std::sync::mpsc::Sender<Reading> {
    fn on_update(&self, sensor: &str, value: f64) {
        let _ = self.send(Reading { sensor: sensor.to_owned(), value });
    }
}

/// Simple Observer implementation for tokio unbounded senders
#[cfg(feature = "tokio")]
impl Observer for tokio::sync::mpsc::UnboundedSender<Reading> {
    fn on_update(&self, sensor: &str, value: f64) {
        let _ = self.send(Reading { sensor: sensor.to_owned(), value });
    }
}

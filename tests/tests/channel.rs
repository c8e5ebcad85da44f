mod common;
use std::sync::Arc;

use anyhow::Result;
use thermo_signals::{Reading, TemperatureSensor};

#[tokio::test]
async fn forwards_updates_to_channel() -> Result<()> {
    let sensor = TemperatureSensor::new("boiler");
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Reading>();

    sensor.attach(Arc::new(tx));
    sensor.set_temperature(55.0);

    let reading = rx.try_recv()?;
    assert_eq!(reading, Reading { sensor: "boiler".to_owned(), value: 55.0 });
    assert!(rx.try_recv().is_err());

    Ok(())
}

#[test]
fn dropped_receiver_does_not_fail_the_fanout() {
    let sensor = TemperatureSensor::new("boiler");
    let (tx, rx) = std::sync::mpsc::channel::<Reading>();

    sensor.attach(Arc::new(tx));
    drop(rx);

    // Send errors are ignored; the remaining observers still get updates
    let (observer, check) = common::reading_watcher();
    sensor.attach(observer);
    sensor.set_temperature(55.0);
    assert_eq!(check().len(), 1);
}

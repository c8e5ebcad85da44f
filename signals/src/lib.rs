/*!
An observable temperature sensor library for thermo

# Design requirements:
- Observers must be dyn object safe - the sensor stores them as trait objects
- The sensor holds shared ownership of attached observers - an attached
  observer stays alive for as long as it is attached, so detach never
  dangles a reference another owner still holds
- Notification is synchronous - `set_temperature` returns only after every
  attached observer has seen the new reading
- Attachment order is notification order
- New observer kinds are added by implementing [`Observer`], never by
  modifying the sensor

# Basic usage

```rust
use std::sync::Arc;
use thermo_signals::*;

let sensor = TemperatureSensor::new("greenhouse");
let display = Arc::new(DisplayObserver::new());
let alarm = Arc::new(AlarmObserver::new(30.0));

sensor.attach(display.clone());
sensor.attach(alarm.clone());

sensor.set_temperature(21.5);
assert_eq!(display.last_value(), 21.5);
assert!(!alarm.is_on());

sensor.set_temperature(31.0);
assert!(alarm.is_on());
```

# Closure observers

```rust
use std::sync::Arc;
use thermo_signals::*;

let sensor = TemperatureSensor::new("cellar");
sensor.attach(Arc::new(CallbackObserver::new(|sensor, value| {
    println!("{sensor}: {value}");
})));
sensor.set_temperature(12.0);
```
*/

mod observer;
mod sensor;
mod subscription;
mod traits;

pub use observer::*;
pub use sensor::*;
pub use subscription::*;
pub use traits::*;

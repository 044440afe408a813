//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | Hvac               | Relay board (GPIO)       |
//!
//! The thermistor implements `FallibleGauge` directly in
//! [`sensors::temperature`](crate::sensors::temperature).

pub mod hardware;

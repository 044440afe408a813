//! Sensor drivers.  The thermistor is the controller's only input.

pub mod temperature;

pub use temperature::Thermistor;

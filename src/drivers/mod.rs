//! Relay drivers, GPIO access, watchdog, and hardware initialisation.

pub mod gpio;
pub mod hw_init;
pub mod relay;
pub mod watchdog;

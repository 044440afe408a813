//! Thermostat firmware library.
//!
//! Exposes the regulation core and its adapters for integration testing
//! and the host simulator. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod sim;

pub mod adapters;
pub mod drivers;
pub mod sensors;

pub use app::controller::Controller;
pub use app::mode::Mode;
pub use app::ports::{FallibleGauge, Gauge, Hvac};

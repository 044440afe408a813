//! Application core: pure regulation logic, zero I/O.
//!
//! The threshold policy, the blower/cooler interlocks and the two
//! protection timers live here.  All interaction with hardware happens
//! through the **port traits** defined in [`ports`], keeping this layer
//! fully testable without real relays or sensors.

pub mod controller;
pub mod mode;
pub mod ports;

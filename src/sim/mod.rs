//! Closed-loop plant simulation for running the controller without hardware.

pub mod harness;
pub mod room;

pub use harness::{Actuators, SimGauge, SimHvac, SimSummary, Simulation, TickRecord};
pub use room::Room;

//! First-order thermal model of a single room.
//!
//! Each tick the indoor temperature closes a fixed fraction of its gap to
//! the outdoor temperature, then the running equipment adds or removes a
//! fixed amount of heat.  Heat only moves efficiently with the blower
//! running; with still air the heater and cooler reach a quarter of their
//! rated effect.

use crate::config::SimConfig;

use super::harness::Actuators;

const STILL_AIR_FACTOR: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct Room {
    indoor_f: f32,
}

impl Room {
    pub fn new(initial_indoor_f: f32) -> Self {
        Self {
            indoor_f: initial_indoor_f,
        }
    }

    /// Advance one tick.
    pub fn step(&mut self, outdoor_f: f32, actuators: Actuators, config: &SimConfig) {
        self.indoor_f += (outdoor_f - self.indoor_f) * config.envelope_coupling;

        let airflow = if actuators.blower { 1.0 } else { STILL_AIR_FACTOR };
        if actuators.heater {
            self.indoor_f += config.heater_rate_f * airflow;
        }
        if actuators.cooler {
            self.indoor_f -= config.cooler_rate_f * airflow;
        }
    }

    pub fn indoor_f(&self) -> f32 {
        self.indoor_f
    }

    /// What a perfect gauge would report: nearest whole degree.
    pub fn reading(&self) -> i32 {
        self.indoor_f.round() as i32
    }
}

//! System configuration parameters
//!
//! The regulation thresholds and protection timers are fixed design
//! constants of the thermostat and are deliberately not tunable at runtime.
//! [`SimConfig`] parameterises the host-side plant simulation only.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Regulation policy
// ---------------------------------------------------------------------------

/// Readings strictly above this (°F) call for cooling.
pub const HOT_ABOVE_F: i32 = 75;
/// Readings strictly below this (°F) call for heating.
pub const COLD_BELOW_F: i32 = 65;

/// Ticks the blower keeps running after the heater was last commanded on.
pub const BLOWER_HOLD_TICKS: u8 = 5;
/// Ticks the cooler must stay off after it was shut down.
pub const COOLER_LOCKOUT_TICKS: u8 = 3;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Firmware control loop period: one tick per minute.
pub const CONTROL_TICK_SECS: u64 = 60;

// ---------------------------------------------------------------------------
// Plant simulation
// ---------------------------------------------------------------------------

/// Maximum number of segments in an outdoor temperature profile.
pub const MAX_OUTDOOR_SEGMENTS: usize = 16;

/// A stretch of constant outdoor temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutdoorSegment {
    /// How many ticks this segment lasts.
    pub ticks: u32,
    /// Outdoor temperature during the segment (°F).
    pub temperature_f: f32,
}

/// Simulation scenario, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of control ticks to run.
    pub ticks: u32,
    /// Simulated minutes per tick (labels only; the model is per-tick).
    pub minutes_per_tick: u32,
    /// Indoor temperature at tick 0 (°F).
    pub initial_indoor_f: f32,
    /// Outdoor profile, played in order; the last segment holds forever.
    pub outdoor_profile: Vec<OutdoorSegment, MAX_OUTDOOR_SEGMENTS>,
    /// Fraction of the indoor/outdoor gap closed per tick (0, 1].
    pub envelope_coupling: f32,
    /// Indoor temperature gain per tick with the heater running (°F).
    pub heater_rate_f: f32,
    /// Indoor temperature loss per tick with the cooler running (°F).
    pub cooler_rate_f: f32,
}

/// Hot afternoon, mild evening, cold night.
const DEFAULT_OUTDOOR_PROFILE: [OutdoorSegment; 3] = [
    OutdoorSegment { ticks: 60, temperature_f: 98.0 },
    OutdoorSegment { ticks: 45, temperature_f: 70.0 },
    OutdoorSegment { ticks: 90, temperature_f: 30.0 },
];
const _: () = assert!(DEFAULT_OUTDOOR_PROFILE.len() <= MAX_OUTDOOR_SEGMENTS);

/// Indoor and outdoor temperatures a scenario may use (°F).
pub const SIM_TEMPERATURE_RANGE_F: core::ops::RangeInclusive<f32> = -100.0..=200.0;
/// Largest heater / cooler effect per tick (°F).
pub const MAX_EQUIPMENT_RATE_F: f32 = 50.0;

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 195,
            minutes_per_tick: 1,
            initial_indoor_f: 72.0,
            // Fits: checked at compile time above.
            outdoor_profile: DEFAULT_OUTDOOR_PROFILE.into_iter().collect(),
            envelope_coupling: 0.05,
            heater_rate_f: 3.0,
            cooler_rate_f: 2.5,
        }
    }
}

impl SimConfig {
    /// Reject parameters the plant model cannot run with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.ticks == 0 {
            return Err(Error::Config("ticks must be > 0"));
        }
        if self.minutes_per_tick == 0 {
            return Err(Error::Config("minutes_per_tick must be > 0"));
        }
        if self.ticks.checked_mul(self.minutes_per_tick).is_none() {
            return Err(Error::Config("ticks * minutes_per_tick overflows"));
        }
        if !SIM_TEMPERATURE_RANGE_F.contains(&self.initial_indoor_f) {
            return Err(Error::Config("initial_indoor_f must be within -100..=200"));
        }
        if self.outdoor_profile.is_empty() {
            return Err(Error::Config("outdoor_profile must not be empty"));
        }
        if self
            .outdoor_profile
            .iter()
            .any(|s| s.ticks == 0 || !SIM_TEMPERATURE_RANGE_F.contains(&s.temperature_f))
        {
            return Err(Error::Config(
                "outdoor segments need ticks > 0 and a temperature within -100..=200",
            ));
        }
        if !(self.envelope_coupling > 0.0 && self.envelope_coupling <= 1.0) {
            return Err(Error::Config("envelope_coupling must be in (0, 1]"));
        }
        if !(0.0..=MAX_EQUIPMENT_RATE_F).contains(&self.heater_rate_f) {
            return Err(Error::Config("heater_rate_f must be within 0..=50"));
        }
        if !(0.0..=MAX_EQUIPMENT_RATE_F).contains(&self.cooler_rate_f) {
            return Err(Error::Config("cooler_rate_f must be within 0..=50"));
        }
        Ok(())
    }

    /// Simulated minutes covered by `ticks` ticks.
    pub fn minutes_for(&self, ticks: u32) -> u32 {
        ticks.saturating_mul(self.minutes_per_tick)
    }

    /// Outdoor temperature in effect at `tick`.
    pub fn outdoor_at(&self, tick: u32) -> f32 {
        let mut start = 0u32;
        for seg in &self.outdoor_profile {
            let end = start.saturating_add(seg.ticks);
            if tick < end {
                return seg.temperature_f;
            }
            start = end;
        }
        self.outdoor_profile
            .last()
            .map_or(self.initial_indoor_f, |s| s.temperature_f)
    }
}

//! Fake hardware for integration tests.
//!
//! `FakeHvac` records every command so tests can assert on the command
//! history as well as the resulting state, and can be told to refuse
//! individual actuators to model hardware that ignores a command.

use thermostat::app::controller::Controller;
use thermostat::app::ports::{FallibleGauge, Gauge, Hvac};
use thermostat::error::SensorError;

// ── Command record ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacCall {
    Blower(bool),
    Cooler(bool),
    Heater(bool),
}

// ── FakeHvac ──────────────────────────────────────────────────

pub struct FakeHvac {
    pub blowing: bool,
    pub cooling: bool,
    pub heating: bool,
    /// When set, `set_cooler(true)` is accepted but has no effect.
    pub cooler_refuses_start: bool,
    pub calls: Vec<HvacCall>,
}

#[allow(dead_code)]
impl FakeHvac {
    /// Everything on, as if left running by a previous controller.
    pub fn new() -> Self {
        Self {
            blowing: true,
            cooling: true,
            heating: true,
            cooler_refuses_start: false,
            calls: Vec::new(),
        }
    }

    /// Compact state: one letter each for blower / cooler / heater,
    /// uppercase = on.  `"BCh"` is blowing and cooling, heater off.
    pub fn state(&self) -> String {
        [
            if self.blowing { 'B' } else { 'b' },
            if self.cooling { 'C' } else { 'c' },
            if self.heating { 'H' } else { 'h' },
        ]
        .iter()
        .collect()
    }
}

impl Default for FakeHvac {
    fn default() -> Self {
        Self::new()
    }
}

impl Hvac for FakeHvac {
    fn set_blower(&mut self, on: bool) {
        self.calls.push(HvacCall::Blower(on));
        self.blowing = on;
    }

    fn set_cooler(&mut self, on: bool) {
        self.calls.push(HvacCall::Cooler(on));
        if on && self.cooler_refuses_start {
            return;
        }
        self.cooling = on;
    }

    fn set_heater(&mut self, on: bool) {
        self.calls.push(HvacCall::Heater(on));
        self.heating = on;
    }

    fn is_blowing(&self) -> bool {
        self.blowing
    }

    fn is_cooling(&self) -> bool {
        self.cooling
    }

    fn is_heating(&self) -> bool {
        self.heating
    }
}

// ── FakeThermometer ───────────────────────────────────────────

pub struct FakeThermometer {
    pub temp: i32,
    /// Returned by the fallible read instead of `temp` when set.
    pub fault: Option<SensorError>,
}

impl FakeThermometer {
    pub fn new() -> Self {
        Self {
            temp: 70,
            fault: None,
        }
    }
}

impl Default for FakeThermometer {
    fn default() -> Self {
        Self::new()
    }
}

impl Gauge for FakeThermometer {
    fn current_temperature(&mut self) -> i32 {
        self.temp
    }
}

impl FallibleGauge for FakeThermometer {
    fn try_current_temperature(&mut self) -> Result<i32, SensorError> {
        match self.fault {
            Some(e) => Err(e),
            None => Ok(self.temp),
        }
    }
}

// ── Fixture ───────────────────────────────────────────────────

pub const TOO_HOT: i32 = 76;
pub const TOO_COLD: i32 = 64;
pub const COMFORTABLE: i32 = 70;

pub struct Fixture {
    pub controller: Controller<FakeHvac, FakeThermometer>,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self::with_hvac(FakeHvac::new())
    }

    pub fn with_hvac(hvac: FakeHvac) -> Self {
        Self {
            controller: Controller::new(hvac, FakeThermometer::new()),
        }
    }

    pub fn tick_at(&mut self, temp: i32) {
        self.controller.gauge_mut().temp = temp;
        self.controller.regulate();
    }

    pub fn make_too_hot(&mut self) {
        self.tick_at(TOO_HOT);
    }

    pub fn make_too_cold(&mut self) {
        self.tick_at(TOO_COLD);
    }

    pub fn make_comfortable(&mut self) {
        self.tick_at(COMFORTABLE);
    }

    pub fn hvac(&self) -> &FakeHvac {
        self.controller.hvac()
    }

    #[track_caller]
    pub fn assert_state(&self, expected: &str) {
        assert_eq!(self.hvac().state(), expected, "blower/cooler/heater");
    }

    #[track_caller]
    pub fn assert_all_off(&self) {
        self.assert_state("bch");
    }

    #[track_caller]
    pub fn assert_blowing(&self) {
        self.assert_state("Bch");
    }

    #[track_caller]
    pub fn assert_cooling(&self) {
        self.assert_state("BCh");
    }

    #[track_caller]
    pub fn assert_heating(&self) {
        self.assert_state("BcH");
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

//! Host-side simulation: in-memory HVAC and gauge, plus a runner that
//! closes the loop between the [`Controller`] and the [`Room`] model.
//!
//! Each tick:
//!
//! 1. the gauge is loaded with the room's rounded temperature,
//! 2. the controller regulates,
//! 3. the room advances one tick with the resulting actuator state.

use log::{debug, info};
use serde::Serialize;

use crate::app::controller::Controller;
use crate::app::mode::Mode;
use crate::app::ports::{Gauge, Hvac};
use crate::config::SimConfig;
use crate::error::Error;

use super::room::Room;

// ───────────────────────────────────────────────────────────────
// Actuator snapshot
// ───────────────────────────────────────────────────────────────

/// Point-in-time view of the three actuators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Actuators {
    pub blower: bool,
    pub cooler: bool,
    pub heater: bool,
}

impl Actuators {
    pub fn of(hvac: &impl Hvac) -> Self {
        Self {
            blower: hvac.is_blowing(),
            cooler: hvac.is_cooling(),
            heater: hvac.is_heating(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// SimHvac
// ───────────────────────────────────────────────────────────────

/// In-memory relay set that counts every real transition.
#[derive(Debug, Default)]
pub struct SimHvac {
    state: Actuators,
    /// Transitions in blower / cooler / heater order.
    switches: [u32; 3],
}

impl SimHvac {
    /// A relay set in an arbitrary prior state (e.g. left on by a reset).
    pub fn with_state(state: Actuators) -> Self {
        Self {
            state,
            switches: [0; 3],
        }
    }

    pub fn state(&self) -> Actuators {
        self.state
    }

    pub fn switch_counts(&self) -> [u32; 3] {
        self.switches
    }

    fn switch(current: &mut bool, count: &mut u32, on: bool) {
        if *current != on {
            *count += 1;
            *current = on;
        }
    }
}

impl Hvac for SimHvac {
    fn set_blower(&mut self, on: bool) {
        Self::switch(&mut self.state.blower, &mut self.switches[0], on);
    }

    fn set_cooler(&mut self, on: bool) {
        Self::switch(&mut self.state.cooler, &mut self.switches[1], on);
    }

    fn set_heater(&mut self, on: bool) {
        Self::switch(&mut self.state.heater, &mut self.switches[2], on);
    }

    fn is_blowing(&self) -> bool {
        self.state.blower
    }

    fn is_cooling(&self) -> bool {
        self.state.cooler
    }

    fn is_heating(&self) -> bool {
        self.state.heater
    }
}

// ───────────────────────────────────────────────────────────────
// SimGauge
// ───────────────────────────────────────────────────────────────

/// Gauge whose reading is set from outside before each tick.
#[derive(Debug, Clone, Copy)]
pub struct SimGauge {
    reading_f: i32,
}

impl SimGauge {
    pub fn new(reading_f: i32) -> Self {
        Self { reading_f }
    }

    pub fn set(&mut self, reading_f: i32) {
        self.reading_f = reading_f;
    }
}

impl Gauge for SimGauge {
    fn current_temperature(&mut self) -> i32 {
        self.reading_f
    }
}

// ───────────────────────────────────────────────────────────────
// Runner
// ───────────────────────────────────────────────────────────────

/// What happened on one tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TickRecord {
    pub tick: u32,
    pub outdoor_f: f32,
    pub reading_f: i32,
    pub mode: &'static str,
    pub actuators: Actuators,
    pub blower_timer: u8,
    pub cooler_timer: u8,
}

/// Totals over a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimSummary {
    pub ticks: u32,
    pub minutes: u32,
    pub ticks_heating: u32,
    pub ticks_cooling: u32,
    pub ticks_blowing: u32,
    pub min_indoor_f: f32,
    pub max_indoor_f: f32,
    pub final_indoor_f: f32,
    pub blower_switches: u32,
    pub cooler_switches: u32,
    pub heater_switches: u32,
}

pub struct Simulation {
    controller: Controller<SimHvac, SimGauge>,
    room: Room,
    config: SimConfig,
    tick: u32,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, Error> {
        config.validate()?;
        let room = Room::new(config.initial_indoor_f);
        let controller = Controller::new(SimHvac::default(), SimGauge::new(room.reading()));
        Ok(Self {
            controller,
            room,
            config,
            tick: 0,
        })
    }

    pub fn controller(&self) -> &Controller<SimHvac, SimGauge> {
        &self.controller
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Run a single closed-loop tick.
    pub fn step(&mut self) -> TickRecord {
        let tick = self.tick;
        let outdoor_f = self.config.outdoor_at(tick);
        let reading_f = self.room.reading();

        let before = self.controller.hvac().state();
        self.controller.gauge_mut().set(reading_f);
        self.controller.regulate();
        let actuators = self.controller.hvac().state();

        if actuators != before {
            info!(
                "t={:>4}min | {}F | blower={} cooler={} heater={}",
                self.config.minutes_for(tick),
                reading_f,
                on_off(actuators.blower),
                on_off(actuators.cooler),
                on_off(actuators.heater),
            );
        }

        self.room.step(outdoor_f, actuators, &self.config);
        self.tick += 1;

        let record = TickRecord {
            tick,
            outdoor_f,
            reading_f,
            mode: self.controller.last_mode().map_or("-", Mode::as_str),
            actuators,
            blower_timer: self.controller.blower_timer(),
            cooler_timer: self.controller.cooler_timer(),
        };
        debug!("{:?}", record);
        record
    }

    /// Run every configured tick and summarise.
    pub fn run(&mut self) -> SimSummary {
        let mut summary = SimSummary {
            min_indoor_f: self.room.indoor_f(),
            max_indoor_f: self.room.indoor_f(),
            ..SimSummary::default()
        };

        for _ in 0..self.config.ticks {
            let rec = self.step();
            let indoor = self.room.indoor_f();
            summary.ticks += 1;
            summary.ticks_heating += u32::from(rec.actuators.heater);
            summary.ticks_cooling += u32::from(rec.actuators.cooler);
            summary.ticks_blowing += u32::from(rec.actuators.blower);
            summary.min_indoor_f = summary.min_indoor_f.min(indoor);
            summary.max_indoor_f = summary.max_indoor_f.max(indoor);
        }

        let [blower, cooler, heater] = self.controller.hvac().switch_counts();
        summary.minutes = self.config.minutes_for(summary.ticks);
        summary.final_indoor_f = self.room.indoor_f();
        summary.blower_switches = blower;
        summary.cooler_switches = cooler;
        summary.heater_switches = heater;
        summary
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "off" }
}

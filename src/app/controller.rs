//! The regulation controller: the hexagonal core.
//!
//! [`Controller`] owns (or borrows) a [`Gauge`] and an [`Hvac`] and runs
//! the threshold policy once per tick:
//!
//! ```text
//!  Gauge ──▶ ┌──────────────────────────────┐ ──▶ Hvac
//!            │          Controller          │
//!            │  classify · interlocks ·     │
//!            │  blower hold · cooler lockout│
//!            └──────────────────────────────┘
//! ```
//!
//! ## Timers
//!
//! | Timer    | Armed when                          | Holds                        |
//! |----------|-------------------------------------|------------------------------|
//! | blower   | heater commanded on                 | blower on through idle ticks |
//! | cooler   | cooler observed on, then shut off   | cooler start on hot ticks    |
//!
//! Both count down by one at the start of every tick and saturate at zero.
//! A running cooler is never forced off by the lockout; it only blocks a
//! fresh start.

use log::{debug, info, warn};

use crate::config::{BLOWER_HOLD_TICKS, COOLER_LOCKOUT_TICKS};
use crate::error::Error;

use super::mode::Mode;
use super::ports::{FallibleGauge, Gauge, Hvac};

/// Thermostat controller.
///
/// Not internally synchronised: exactly one driver loop should call
/// [`regulate`](Self::regulate) per tick.
pub struct Controller<H, G> {
    hvac: H,
    gauge: G,
    /// Ticks left before the blower may switch off after heating.
    blower_timer: u8,
    /// Ticks left before the cooler may restart.
    cooler_timer: u8,
    /// Mode picked on the previous tick (diagnostics only).
    last_mode: Option<Mode>,
}

impl<H: Hvac, G> Controller<H, G> {
    /// Take the collaborators and force every actuator off, whatever its
    /// prior state.
    pub fn new(mut hvac: H, gauge: G) -> Self {
        hvac.set_blower(false);
        hvac.set_cooler(false);
        hvac.set_heater(false);
        info!("Controller started, all actuators off");

        Self {
            hvac,
            gauge,
            blower_timer: 0,
            cooler_timer: 0,
            last_mode: None,
        }
    }

    // ── Per-tick steps ────────────────────────────────────────

    fn decrement_timers(&mut self) {
        self.blower_timer = self.blower_timer.saturating_sub(1);
        self.cooler_timer = self.cooler_timer.saturating_sub(1);
    }

    /// Classify `reading_f` and command the actuators.  Timers must already
    /// have been decremented for this tick.
    fn drive(&mut self, reading_f: i32) {
        let mode = Mode::classify(reading_f);
        if self.last_mode != Some(mode) {
            info!("MODE | {:?} -> {} at {}F", self.last_mode, mode, reading_f);
        }

        match mode {
            Mode::Cooling => self.cool_the_room(),
            Mode::Heating => self.heat_the_room(),
            Mode::Idle => self.idle(),
        }
        self.last_mode = Some(mode);

        debug!(
            "TICK | {}F {} | blower_timer={} cooler_timer={}",
            reading_f, mode, self.blower_timer, self.cooler_timer
        );
    }

    fn cool_the_room(&mut self) {
        self.hvac.set_blower(true);
        self.turn_on_cooler();
        self.hvac.set_heater(false);
    }

    fn heat_the_room(&mut self) {
        self.hvac.set_blower(true);
        self.turn_on_heater();
        self.turn_off_cooler();
    }

    fn idle(&mut self) {
        self.turn_off_blower();
        self.hvac.set_heater(false);
        self.turn_off_cooler();
    }

    // ── Guarded actuator commands ─────────────────────────────

    fn turn_on_cooler(&mut self) {
        if self.cooler_timer == 0 {
            self.hvac.set_cooler(true);
        } else {
            debug!("Cooler start held off, lockout {} ticks", self.cooler_timer);
        }
    }

    fn turn_off_cooler(&mut self) {
        if self.hvac.is_cooling() {
            self.cooler_timer = COOLER_LOCKOUT_TICKS;
        }
        self.hvac.set_cooler(false);
    }

    fn turn_on_heater(&mut self) {
        self.hvac.set_heater(true);
        self.blower_timer = BLOWER_HOLD_TICKS;
    }

    fn turn_off_blower(&mut self) {
        if self.blower_timer == 0 {
            self.hvac.set_blower(false);
        }
    }
}

impl<H: Hvac, G: Gauge> Controller<H, G> {
    /// Run one control tick: advance the timers, read the gauge, drive the
    /// actuators.
    pub fn regulate(&mut self) {
        self.decrement_timers();
        let reading = self.gauge.current_temperature();
        self.drive(reading);
    }
}

impl<H: Hvac, G: FallibleGauge> Controller<H, G> {
    /// Run one control tick against a gauge that can fail.
    ///
    /// This is an extension of the plain [`regulate`](Controller::regulate)
    /// policy: the gauge is read *before* anything else, and a failed read
    /// aborts the whole tick with neither the timers nor the actuators
    /// touched.  On success the tick is identical to `regulate`.
    pub fn try_regulate(&mut self) -> Result<(), Error> {
        let reading = self.gauge.try_current_temperature().map_err(|e| {
            warn!("Temperature read failed ({}), tick skipped", e);
            Error::from(e)
        })?;
        self.decrement_timers();
        self.drive(reading);
        Ok(())
    }
}

impl<H, G> Controller<H, G> {
    // ── Queries ───────────────────────────────────────────────

    /// Ticks remaining on the post-heating blower hold.
    pub fn blower_timer(&self) -> u8 {
        self.blower_timer
    }

    /// Ticks remaining on the cooler restart lockout.
    pub fn cooler_timer(&self) -> u8 {
        self.cooler_timer
    }

    /// Mode chosen on the most recent tick, `None` before the first one.
    pub fn last_mode(&self) -> Option<Mode> {
        self.last_mode
    }

    pub fn hvac(&self) -> &H {
        &self.hvac
    }

    pub fn hvac_mut(&mut self) -> &mut H {
        &mut self.hvac
    }

    pub fn gauge(&self) -> &G {
        &self.gauge
    }

    pub fn gauge_mut(&mut self) -> &mut G {
        &mut self.gauge
    }

    /// Give the collaborators back.
    pub fn into_parts(self) -> (H, G) {
        (self.hvac, self.gauge)
    }
}

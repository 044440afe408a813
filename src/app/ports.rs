//! Port traits: the hexagonal boundary between the control policy and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (thermistor, relay bank, simulation doubles) implement
//! these traits.  The [`Controller`](super::controller::Controller) consumes
//! them via generics, so the policy never touches hardware directly.
//!
//! Both ports are also implemented for `&mut T`, so a caller that wants to
//! keep ownership of its hardware can lend it to the controller instead.

use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Gauge port (driven adapter: sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the controller calls this once per tick.
pub trait Gauge {
    /// Current ambient temperature, rounded to the nearest whole degree Fahrenheit.
    ///
    /// Must be side-effect free from the controller's point of view.
    fn current_temperature(&mut self) -> i32;
}

/// A temperature source whose read can fail (ADC timeout, open thermistor).
///
/// Consumed by [`Controller::try_regulate`](super::controller::Controller::try_regulate).
pub trait FallibleGauge {
    fn try_current_temperature(&mut self) -> Result<i32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// HVAC port (driven adapter: domain → relays)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the controller commands the three climate actuators.
///
/// Commands are assumed to take effect before the next query.  Queries
/// report the actuator's *actual* state, which need not mirror the last
/// command if the hardware rejected it.
pub trait Hvac {
    /// Turn the blower on or off.
    fn set_blower(&mut self, on: bool);
    /// Turn the cooler on or off.
    fn set_cooler(&mut self, on: bool);
    /// Turn the heater on or off.
    fn set_heater(&mut self, on: bool);

    fn is_blowing(&self) -> bool;
    fn is_cooling(&self) -> bool;
    fn is_heating(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Borrowed handles
// ───────────────────────────────────────────────────────────────

impl<T: Gauge + ?Sized> Gauge for &mut T {
    fn current_temperature(&mut self) -> i32 {
        (**self).current_temperature()
    }
}

impl<T: FallibleGauge + ?Sized> FallibleGauge for &mut T {
    fn try_current_temperature(&mut self) -> Result<i32, SensorError> {
        (**self).try_current_temperature()
    }
}

impl<T: Hvac + ?Sized> Hvac for &mut T {
    fn set_blower(&mut self, on: bool) {
        (**self).set_blower(on);
    }

    fn set_cooler(&mut self, on: bool) {
        (**self).set_cooler(on);
    }

    fn set_heater(&mut self, on: bool) {
        (**self).set_heater(on);
    }

    fn is_blowing(&self) -> bool {
        (**self).is_blowing()
    }

    fn is_cooling(&self) -> bool {
        (**self).is_cooling()
    }

    fn is_heating(&self) -> bool {
        (**self).is_heating()
    }
}

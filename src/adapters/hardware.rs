//! Hardware adapter: bridges the relay board to the [`Hvac`] port.
//!
//! Owns the three relay drivers.  This is the only module that turns
//! controller commands into pin writes.  On non-espidf targets the
//! underlying [`GpioOutput`] pins land in the simulated level mask.

use embedded_hal::digital::OutputPin;
use log::error;

use crate::app::ports::Hvac;
use crate::drivers::gpio::GpioOutput;
use crate::drivers::relay::Relay;
use crate::pins;

/// Blower, cooler and heater relays behind one [`Hvac`] implementation.
pub struct RelayBank<P> {
    blower: Relay<P>,
    cooler: Relay<P>,
    heater: Relay<P>,
    write_faults: u32,
}

impl<P: OutputPin> RelayBank<P> {
    pub fn new(blower: P, cooler: P, heater: P) -> Self {
        Self {
            blower: Relay::new(blower, "blower"),
            cooler: Relay::new(cooler, "cooler"),
            heater: Relay::new(heater, "heater"),
            write_faults: 0,
        }
    }

    /// Total rejected relay writes since construction.
    pub fn write_faults(&self) -> u32 {
        self.write_faults
    }

    /// Switch counts in blower / cooler / heater order.
    pub fn switch_counts(&self) -> [u32; 3] {
        [
            self.blower.switch_count(),
            self.cooler.switch_count(),
            self.heater.switch_count(),
        ]
    }

    pub fn relays(&self) -> [&Relay<P>; 3] {
        [&self.blower, &self.cooler, &self.heater]
    }

    fn drive(relay: &mut Relay<P>, on: bool, faults: &mut u32) {
        if relay.set(on).is_err() {
            *faults = faults.saturating_add(1);
            if on && relay.name() == "blower" {
                // Heating or cooling without airflow; the next tick retries.
                error!("Blower failed to start");
            }
        }
    }
}

impl RelayBank<GpioOutput> {
    /// Relay bank on the board's pin map.
    pub fn on_board() -> Self {
        Self::new(
            GpioOutput::new(pins::BLOWER_RELAY_GPIO),
            GpioOutput::new(pins::COOLER_RELAY_GPIO),
            GpioOutput::new(pins::HEATER_RELAY_GPIO),
        )
    }
}

// ── Hvac implementation ───────────────────────────────────────

impl<P: OutputPin> Hvac for RelayBank<P> {
    fn set_blower(&mut self, on: bool) {
        Self::drive(&mut self.blower, on, &mut self.write_faults);
    }

    fn set_cooler(&mut self, on: bool) {
        Self::drive(&mut self.cooler, on, &mut self.write_faults);
    }

    fn set_heater(&mut self, on: bool) {
        Self::drive(&mut self.heater, on, &mut self.write_faults);
    }

    fn is_blowing(&self) -> bool {
        self.blower.is_on()
    }

    fn is_cooling(&self) -> bool {
        self.cooler.is_on()
    }

    fn is_heating(&self) -> bool {
        self.heater.is_on()
    }
}

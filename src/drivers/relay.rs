//! Single-pole relay driver (blower, cooler or heater contactor).
//!
//! The driver only believes a relay changed once the pin write succeeded,
//! so [`Relay::is_on`] reports the contact state actually driven rather
//! than the last command.  A rejected write leaves the relay where it was.
//!
//! ## Dual-target design
//!
//! Generic over any `embedded-hal` [`OutputPin`]: [`GpioOutput`] on the
//! board, any mock pin in tests.
//!
//! [`GpioOutput`]: crate::drivers::gpio::GpioOutput

use embedded_hal::digital::{Error as _, ErrorKind, OutputPin, PinState};
use log::warn;

pub struct Relay<P> {
    pin: P,
    name: &'static str,
    closed: bool,
    switch_count: u32,
    last_fault: Option<ErrorKind>,
}

impl<P: OutputPin> Relay<P> {
    /// Wrap an output that `hw_init` already drove low (contact open).
    pub fn new(pin: P, name: &'static str) -> Self {
        Self {
            pin,
            name,
            closed: false,
            switch_count: 0,
            last_fault: None,
        }
    }

    /// Close (`true`) or open (`false`) the contact.
    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        match self.pin.set_state(PinState::from(on)) {
            Ok(()) => {
                if self.closed != on {
                    self.switch_count = self.switch_count.saturating_add(1);
                }
                self.closed = on;
                self.last_fault = None;
                Ok(())
            }
            Err(e) => {
                warn!(
                    "{} relay rejected {} ({:?}), stays {}",
                    self.name,
                    if on { "ON" } else { "OFF" },
                    e.kind(),
                    if self.closed { "ON" } else { "OFF" },
                );
                self.last_fault = Some(e.kind());
                Err(e)
            }
        }
    }

    pub fn is_on(&self) -> bool {
        self.closed
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of successful on/off transitions since construction.
    pub fn switch_count(&self) -> u32 {
        self.switch_count
    }

    /// Kind of the most recent failed write, cleared by the next good one.
    pub fn last_fault(&self) -> Option<ErrorKind> {
        self.last_fault
    }
}

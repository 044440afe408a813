//! Digital output pin over the raw GPIO helpers in [`hw_init`].
//!
//! Gives the relay driver an `embedded-hal` [`OutputPin`] regardless of
//! target: on ESP-IDF it writes the real pad, on the host it writes the
//! simulated level mask.

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::drivers::hw_init;
use crate::error::ActuatorError;

impl digital::Error for ActuatorError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// A GPIO configured as a push-pull output by [`hw_init::init_peripherals`].
#[derive(Debug)]
pub struct GpioOutput {
    pin: i32,
}

impl GpioOutput {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }
}

impl ErrorType for GpioOutput {
    type Error = ActuatorError;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, true)
    }
}

//! Controller driving the real relay adapter over mock output pins.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::mock_hw::{FakeThermometer, COMFORTABLE, TOO_COLD, TOO_HOT};

use thermostat::adapters::hardware::RelayBank;
use thermostat::app::controller::Controller;
use thermostat::app::ports::Hvac;
use thermostat::sim::Actuators;

/// Output pin whose level and failure mode are visible to the test.
#[derive(Clone, Default)]
struct ProbePin {
    high: Rc<Cell<bool>>,
    broken: Rc<Cell<bool>>,
}

impl ErrorType for ProbePin {
    type Error = ErrorKind;
}

impl OutputPin for ProbePin {
    fn set_low(&mut self) -> Result<(), ErrorKind> {
        if self.broken.get() {
            return Err(ErrorKind::Other);
        }
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), ErrorKind> {
        if self.broken.get() {
            return Err(ErrorKind::Other);
        }
        self.high.set(true);
        Ok(())
    }
}

struct Board {
    blower: ProbePin,
    cooler: ProbePin,
    heater: ProbePin,
    controller: Controller<RelayBank<ProbePin>, FakeThermometer>,
}

impl Board {
    fn new() -> Self {
        let (blower, cooler, heater) = (ProbePin::default(), ProbePin::default(), ProbePin::default());
        // Pins start energised: construction must drop them.
        for p in [&blower, &cooler, &heater] {
            p.high.set(true);
        }
        let bank = RelayBank::new(blower.clone(), cooler.clone(), heater.clone());
        Self {
            blower,
            cooler,
            heater,
            controller: Controller::new(bank, FakeThermometer::new()),
        }
    }

    fn tick_at(&mut self, temp: i32) {
        self.controller.gauge_mut().temp = temp;
        self.controller.regulate();
    }

    fn pins(&self) -> (bool, bool, bool) {
        (self.blower.high.get(), self.cooler.high.get(), self.heater.high.get())
    }
}

#[test]
fn relays_follow_the_policy() {
    let mut b = Board::new();
    assert_eq!(b.pins(), (false, false, false));

    b.tick_at(TOO_HOT);
    assert_eq!(b.pins(), (true, true, false));

    b.tick_at(TOO_COLD);
    assert_eq!(b.pins(), (true, false, true));
    assert_eq!(b.controller.cooler_timer(), 3);

    assert_eq!(b.controller.hvac().write_faults(), 0);
}

#[test]
fn stuck_cooler_relay_is_reported_as_still_running() {
    let mut b = Board::new();
    b.tick_at(TOO_HOT);

    b.cooler.broken.set(true);
    b.tick_at(COMFORTABLE);
    assert!(b.controller.hvac().is_cooling(), "relay never opened");
    assert!(b.cooler.high.get());
    assert_eq!(b.controller.hvac().write_faults(), 1);

    // Relay recovers; the next idle tick finally opens it.
    b.cooler.broken.set(false);
    b.tick_at(COMFORTABLE);
    assert_eq!(
        Actuators::of(b.controller.hvac()),
        Actuators {
            blower: false,
            cooler: false,
            heater: false,
        }
    );
}

#[test]
fn blower_retried_every_tick_until_it_starts() {
    let mut b = Board::new();
    b.blower.broken.set(true);

    b.tick_at(TOO_COLD);
    assert_eq!(b.pins(), (false, false, true));

    b.blower.broken.set(false);
    b.tick_at(TOO_COLD);
    assert_eq!(b.pins(), (true, false, true));
    assert_eq!(b.controller.hvac().switch_counts()[0], 1);
}

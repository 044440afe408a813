//! Fuzz target: `Controller::regulate`
//!
//! Each 4-byte chunk of input is one reading. The first byte also seeds the
//! actuator state the controller inherits at construction.
//!
//! Invariants checked after every tick:
//! - heater or cooler on implies blower on
//! - heater and cooler never on together
//! - timers never exceed their hold / lockout lengths
//!
//! cargo fuzz run fuzz_controller

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermostat::config::{BLOWER_HOLD_TICKS, COOLER_LOCKOUT_TICKS};
use thermostat::sim::{Actuators, SimGauge, SimHvac};
use thermostat::Controller;

fuzz_target!(|data: &[u8]| {
    let Some(&seed) = data.first() else {
        return;
    };
    let inherited = Actuators {
        blower: seed & 1 != 0,
        cooler: seed & 2 != 0,
        heater: seed & 4 != 0,
    };

    let mut c = Controller::new(SimHvac::with_state(inherited), SimGauge::new(70));
    assert_eq!(c.hvac().state(), Actuators::default());

    for chunk in data.chunks_exact(4) {
        let reading = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        c.gauge_mut().set(reading);
        c.regulate();

        let s = c.hvac().state();
        assert!(!s.heater || s.blower, "heater without blower");
        assert!(!s.cooler || s.blower, "cooler without blower");
        assert!(!(s.heater && s.cooler), "heater and cooler together");
        assert!(c.blower_timer() <= BLOWER_HOLD_TICKS);
        assert!(c.cooler_timer() <= COOLER_LOCKOUT_TICKS);
    }
});

//! Controller policy against fake hardware: thresholds, interlocks and
//! the blower-hold / cooler-lockout timers.

use crate::mock_hw::{Fixture, FakeHvac, FakeThermometer, HvacCall, COMFORTABLE, TOO_HOT};

use thermostat::app::controller::Controller;
use thermostat::app::mode::Mode;
use thermostat::error::{Error, SensorError};

// ── Startup ───────────────────────────────────────────────────

#[test]
fn at_startup_everything_turned_off() {
    let f = Fixture::new();
    f.assert_all_off();
    assert_eq!(f.controller.blower_timer(), 0);
    assert_eq!(f.controller.cooler_timer(), 0);
}

#[test]
fn startup_commands_each_actuator_off_once() {
    let f = Fixture::new();
    assert_eq!(
        f.hvac().calls,
        vec![
            HvacCall::Blower(false),
            HvacCall::Cooler(false),
            HvacCall::Heater(false),
        ]
    );
}

// ── Single-tick responses ─────────────────────────────────────

#[test]
fn when_too_hot_engage_cooler_and_blower() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.assert_cooling();
}

#[test]
fn when_too_cold_engage_heater_and_blower() {
    let mut f = Fixture::new();
    f.make_too_cold();
    f.assert_heating();
    assert_eq!(f.controller.blower_timer(), 5);
}

#[test]
fn comfort_band_includes_both_thresholds() {
    for temp in [65, 70, 75] {
        let mut f = Fixture::new();
        f.tick_at(temp);
        f.assert_all_off();
        assert_eq!(f.controller.last_mode(), Some(Mode::Idle), "{temp}F");
    }

    let mut f = Fixture::new();
    f.tick_at(76);
    f.assert_cooling();

    let mut f = Fixture::new();
    f.tick_at(64);
    f.assert_heating();
}

// ── Transitions ───────────────────────────────────────────────

#[test]
fn when_too_cold_then_comfortable() {
    let mut f = Fixture::new();
    f.make_too_cold();
    f.make_comfortable();
    f.assert_blowing();
}

#[test]
fn when_too_cold_then_too_hot() {
    let mut f = Fixture::new();
    f.make_too_cold();
    f.make_too_hot();
    f.assert_cooling();
}

#[test]
fn when_too_hot_then_too_cold() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.make_too_cold();
    f.assert_heating();
}

#[test]
fn when_too_hot_then_comfortable() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.make_comfortable();
    f.assert_all_off();
}

// ── Timers ────────────────────────────────────────────────────

#[test]
fn when_too_cold_then_blower_stays_on_for_five_minutes_after_heating() {
    let mut f = Fixture::new();
    f.make_too_cold();
    for expected_timer in [4, 3, 2, 1] {
        f.make_comfortable();
        f.assert_blowing();
        assert_eq!(f.controller.blower_timer(), expected_timer);
    }
    f.make_comfortable();
    f.assert_all_off();
}

#[test]
fn when_too_hot_then_comfortable_then_too_hot_cooler_stays_off_for_three_minutes() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.make_comfortable();
    assert_eq!(f.controller.cooler_timer(), 3);
    for _ in 0..2 {
        f.make_too_hot();
        f.assert_blowing();
    }
    f.make_too_hot();
    f.assert_cooling();
}

#[test]
fn heating_shuts_running_cooler_and_arms_lockout() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.make_too_cold();
    f.assert_heating();
    assert_eq!(f.controller.cooler_timer(), 3);

    // Swinging straight back to hot: airflow, but no compressor restart.
    f.make_too_hot();
    f.assert_blowing();
}

#[test]
fn lockout_only_arms_when_cooler_was_running() {
    let mut f = Fixture::new();
    f.make_too_cold();
    f.make_comfortable();
    assert_eq!(f.controller.cooler_timer(), 0);
}

#[test]
fn blocked_cooler_request_issues_no_cooler_command() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.make_comfortable();
    f.controller.hvac_mut().calls.clear();

    f.make_too_hot();
    assert_eq!(
        f.hvac().calls,
        vec![HvacCall::Blower(true), HvacCall::Heater(false)]
    );
}

#[test]
fn lockout_does_not_force_running_cooler_off() {
    let mut f = Fixture::new();
    f.make_too_hot();
    f.make_comfortable();
    assert_eq!(f.controller.cooler_timer(), 3);

    // Something outside the controller restarted the compressor.
    f.controller.hvac_mut().cooling = true;
    f.make_too_hot();
    assert_eq!(f.controller.cooler_timer(), 2);
    f.assert_cooling();
}

// ── Steady state ──────────────────────────────────────────────

#[test]
fn repeated_reading_is_idempotent_once_timers_settle() {
    for temp in [60, COMFORTABLE, 90] {
        let mut f = Fixture::new();
        for _ in 0..6 {
            f.tick_at(temp);
        }
        let settled = f.hvac().state();
        for _ in 0..10 {
            f.tick_at(temp);
            assert_eq!(f.hvac().state(), settled, "{temp}F");
        }
        assert_eq!(f.controller.cooler_timer(), 0);
    }
}

// ── Hardware that disagrees with its commands ─────────────────

#[test]
fn refused_cooler_start_is_requeried_not_assumed() {
    let mut hvac = FakeHvac::new();
    hvac.cooler_refuses_start = true;
    let mut f = Fixture::with_hvac(hvac);

    f.make_too_hot();
    f.assert_blowing();

    // The cooler never actually ran, so shutting it down arms nothing.
    f.make_comfortable();
    assert_eq!(f.controller.cooler_timer(), 0);
    f.assert_all_off();
}

// ── Fallible gauge ────────────────────────────────────────────

#[test]
fn sensor_failure_skips_the_whole_tick() {
    let mut f = Fixture::new();
    f.make_too_cold();
    f.controller.hvac_mut().calls.clear();

    f.controller.gauge_mut().fault = Some(SensorError::OutOfRange);
    for _ in 0..3 {
        assert_eq!(
            f.controller.try_regulate(),
            Err(Error::Sensor(SensorError::OutOfRange))
        );
    }
    assert_eq!(f.controller.blower_timer(), 5);
    assert!(f.hvac().calls.is_empty());
    f.assert_heating();

    f.controller.gauge_mut().fault = None;
    f.controller.gauge_mut().temp = COMFORTABLE;
    f.controller.try_regulate().unwrap();
    assert_eq!(f.controller.blower_timer(), 4);
    f.assert_blowing();
}

// ── Borrowed collaborators ────────────────────────────────────

#[test]
fn controller_can_borrow_hardware() {
    let mut hvac = FakeHvac::new();
    let mut thermo = FakeThermometer::new();
    thermo.temp = TOO_HOT;

    let mut controller = Controller::new(&mut hvac, &mut thermo);
    controller.regulate();
    drop(controller);

    assert_eq!(hvac.state(), "BCh");
}

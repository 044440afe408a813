//! Fuzz target: scenario JSON -> `SimConfig` -> `Simulation`
//!
//! Arbitrary bytes must either fail to parse, fail validation, or run to
//! completion without panicking, covering exactly the configured ticks.
//!
//! cargo fuzz run fuzz_sim_config

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermostat::config::SimConfig;
use thermostat::sim::Simulation;

/// Keeps individual runs short.
const MAX_TICKS: u32 = 5_000;

fuzz_target!(|data: &[u8]| {
    let Ok(cfg) = serde_json::from_slice::<SimConfig>(data) else {
        return;
    };
    if cfg.ticks > MAX_TICKS {
        return;
    }
    let ticks = cfg.ticks;
    let Ok(mut sim) = Simulation::new(cfg) else {
        return;
    };

    let summary = sim.run();
    assert_eq!(summary.ticks, ticks);
    assert!(summary.ticks_heating + summary.ticks_cooling <= summary.ticks_blowing);
});

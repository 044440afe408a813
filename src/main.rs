//! Thermostat Firmware: Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │   Thermistor (FallibleGauge)   RelayBank (Hvac)      │
//! │                                                      │
//! │  ───────────── Port Trait Boundary ─────────────     │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │          Controller (pure policy)              │  │
//! │  │  thresholds · interlocks · blower/cooler timers│  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! One regulation tick per minute; the task watchdog resets the board if
//! the loop stalls.
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::{error, info, warn};

use thermostat::adapters::hardware::RelayBank;
use thermostat::app::controller::Controller;
use thermostat::config::CONTROL_TICK_SECS;
use thermostat::drivers::hw_init;
use thermostat::drivers::watchdog::Watchdog;
use thermostat::pins;
use thermostat::sensors::Thermistor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Thermostat v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Relays stay de-energised; the watchdog is not armed yet, so halt.
        error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let mut watchdog = Watchdog::arm();

    // ── 3. Controller (forces every relay off) ────────────────
    let mut controller = Controller::new(
        RelayBank::on_board(),
        Thermistor::new(pins::TEMP_ADC_CHANNEL),
    );

    // ── 4. Control loop ───────────────────────────────────────
    let tick = Duration::from_secs(CONTROL_TICK_SECS);
    let mut failed_reads: u32 = 0;
    let mut relay_faults: u32 = 0;
    info!("Entering control loop ({}s tick)", CONTROL_TICK_SECS);

    loop {
        match controller.try_regulate() {
            Ok(()) => {
                if failed_reads > 0 {
                    info!("Thermistor recovered after {} failed reads", failed_reads);
                    failed_reads = 0;
                }
            }
            Err(e) => {
                failed_reads = failed_reads.saturating_add(1);
                warn!("Tick skipped: {} ({} in a row)", e, failed_reads);
            }
        }

        let faults = controller.hvac().write_faults();
        if faults != relay_faults {
            warn!("Relay write faults since boot: {}", faults);
            relay_faults = faults;
        }

        watchdog.feed();
        std::thread::sleep(tick);
    }
}

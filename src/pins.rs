//! GPIO / peripheral pin assignments for the thermostat relay board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Relay outputs (active HIGH, opto-isolated relay module)
// ---------------------------------------------------------------------------

/// Blower fan contactor.
pub const BLOWER_RELAY_GPIO: i32 = 4;
/// Cooler (compressor) contactor.
pub const COOLER_RELAY_GPIO: i32 = 5;
/// Heater contactor.
pub const HEATER_RELAY_GPIO: i32 = 6;

/// All relay outputs, in blower / cooler / heater order.
pub const RELAY_GPIOS: [i32; 3] = [BLOWER_RELAY_GPIO, COOLER_RELAY_GPIO, HEATER_RELAY_GPIO];

// ---------------------------------------------------------------------------
// Sensors: Analog (ADC1)
// ---------------------------------------------------------------------------

/// NTC thermistor: 10 kΩ @ 25 °C, voltage-divider to ADC.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 9;
/// ADC1 channel index for [`TEMP_ADC_GPIO`].
pub const TEMP_ADC_CHANNEL: u32 = 8;

// ---------------------------------------------------------------------------
// UART debug
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

//! NTC thermistor temperature sensor (10 kOhm @ 25 C, B = 3950).
//!
//! Wired in a voltage-divider with a fixed 10 kOhm resistor, read via
//! the ESP32-S3 ADC. The simplified Beta (Steinhart-Hart) equation
//! converts resistance to temperature, which is then reported to the
//! controller in whole degrees Fahrenheit.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::app::ports::FallibleGauge;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(2048);
#[cfg(not(target_os = "espidf"))]
static SIM_ADC_FAULT: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

/// Make subsequent simulated ADC reads fail until cleared.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc_fault(fault: bool) {
    SIM_ADC_FAULT.store(fault, Ordering::Relaxed);
}

const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;
const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;

/// Plausible indoor range; anything outside means a broken probe.
const MIN_PLAUSIBLE_F: i32 = -40;
const MAX_PLAUSIBLE_F: i32 = 150;

#[derive(Debug, Clone, Copy)]
pub struct TemperatureReading {
    pub raw: u16,
    pub celsius: f32,
    /// Rounded to the nearest whole degree.
    pub fahrenheit: i32,
}

pub struct Thermistor {
    _adc_channel: u32,
}

impl Thermistor {
    pub fn new(adc_channel: u32) -> Self {
        Self {
            _adc_channel: adc_channel,
        }
    }

    pub fn read(&self) -> Result<TemperatureReading, SensorError> {
        let raw = self.read_adc()?;
        let celsius = adc_to_celsius(raw).ok_or(SensorError::OutOfRange)?;
        let fahrenheit = celsius_to_whole_fahrenheit(celsius);
        if !(MIN_PLAUSIBLE_F..=MAX_PLAUSIBLE_F).contains(&fahrenheit) {
            return Err(SensorError::OutOfRange);
        }
        Ok(TemperatureReading {
            raw,
            celsius,
            fahrenheit,
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(self._adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> Result<u16, SensorError> {
        if SIM_ADC_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(SIM_TEMP_ADC.load(Ordering::Relaxed))
    }
}

impl FallibleGauge for Thermistor {
    fn try_current_temperature(&mut self) -> Result<i32, SensorError> {
        self.read().map(|r| r.fahrenheit)
    }
}

/// Convert a 12-bit divider reading to Celsius.  `None` at either rail
/// (open or shorted thermistor).
pub fn adc_to_celsius(raw: u16) -> Option<f32> {
    let voltage = (raw as f32 / ADC_MAX) * V_REF;
    if voltage <= 0.01 || voltage >= (V_REF - 0.01) {
        return None;
    }
    let r_ntc = R_DIVIDER * voltage / (V_REF - voltage);
    let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
    if inv_t <= 0.0 {
        return None;
    }
    Some((1.0 / inv_t) - 273.15)
}

pub fn celsius_to_whole_fahrenheit(celsius: f32) -> i32 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i32
}

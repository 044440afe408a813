//! Regulation mode selection.
//!
//! The mode has no memory of its own: it is recomputed from every reading.
//! Cross-tick behaviour lives entirely in the controller's timers.

use crate::config::{COLD_BELOW_F, HOT_ABOVE_F};

/// What the controller is trying to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Reading above the hot threshold.
    Cooling,
    /// Reading below the cold threshold.
    Heating,
    /// Reading inside the comfort band (both thresholds inclusive).
    Idle,
}

impl Mode {
    /// Classify a whole-degree Fahrenheit reading.
    pub const fn classify(reading_f: i32) -> Self {
        if reading_f > HOT_ABOVE_F {
            Self::Cooling
        } else if reading_f < COLD_BELOW_F {
            Self::Heating
        } else {
            Self::Idle
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cooling => "COOLING",
            Self::Heating => "HEATING",
            Self::Idle => "IDLE",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

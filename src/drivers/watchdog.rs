//! Control-loop watchdog.
//!
//! If the regulation loop hangs, the relays freeze in whatever state the
//! last tick left them, which can mean a heater running with no one
//! watching the temperature.  The ESP-IDF task watchdog resets the board
//! in that case, and `hw_init` brings every relay up open again.
//!
//! The loop sleeps a whole tick between feeds, so the timeout spans
//! [`WATCHDOG_TICKS`] ticks instead of the usual few seconds.

use log::{info, warn};

use crate::config::CONTROL_TICK_SECS;

/// Ticks the loop may miss before the board resets.
pub const WATCHDOG_TICKS: u64 = 3;

/// TWDT timeout in milliseconds.
pub const fn timeout_ms() -> u32 {
    (CONTROL_TICK_SECS * WATCHDOG_TICKS * 1000) as u32
}

/// Handle on the calling task's watchdog subscription.
///
/// Arm it from the task that runs the control loop; `feed` resets the
/// countdown for that task only.
pub struct Watchdog {
    armed: bool,
    feeds: u32,
}

impl Watchdog {
    /// Configure the TWDT for [`timeout_ms`] and subscribe the current task.
    ///
    /// A failed subscription is logged and leaves the handle disarmed: the
    /// thermostat keeps regulating without reset protection rather than
    /// refusing to start.
    pub fn arm() -> Self {
        let armed = platform::subscribe(timeout_ms());
        if armed {
            info!(
                "Watchdog armed: reset after {} missed ticks ({}ms)",
                WATCHDOG_TICKS,
                timeout_ms()
            );
        } else {
            warn!("Watchdog not armed, control loop runs unprotected");
        }
        Self { armed, feeds: 0 }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Tell the TWDT this tick completed.
    pub fn feed(&mut self) {
        if self.armed {
            platform::reset();
        }
        self.feeds = self.feeds.wrapping_add(1);
    }

    /// Ticks reported since arming.
    pub fn feeds(&self) -> u32 {
        self.feeds
    }
}

#[cfg(target_os = "espidf")]
mod platform {
    use esp_idf_svc::sys::{
        ESP_OK, esp_task_wdt_add, esp_task_wdt_config_t, esp_task_wdt_reconfigure,
        esp_task_wdt_reset,
    };

    pub(super) fn subscribe(timeout_ms: u32) -> bool {
        let cfg = esp_task_wdt_config_t {
            timeout_ms,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        // SAFETY: cfg outlives the call; the TWDT copies it.
        let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
        if ret != ESP_OK {
            // Not fatal: the bootloader config stays in effect.
            log::warn!("TWDT reconfigure rc={}", ret);
        }
        // SAFETY: null subscribes the calling task, which is the control loop.
        let ret = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
        if ret != ESP_OK {
            log::warn!("TWDT subscribe rc={}", ret);
        }
        ret == ESP_OK
    }

    pub(super) fn reset() {
        // SAFETY: only reached from the subscribed control-loop task.
        unsafe {
            esp_task_wdt_reset();
        }
    }
}

#[cfg(not(target_os = "espidf"))]
mod platform {
    pub(super) fn subscribe(_timeout_ms: u32) -> bool {
        true
    }

    pub(super) fn reset() {}
}

//! Display-mode state machine with button debounce.
//!
//! The controller is shared between the button task (writer) and the
//! monitor loop (reader), typically as a `static`. Every piece of state
//! is a single atomic, so a reader always sees a complete `DisplayMode`
//! and `trigger` never blocks.
//!
//! Timestamps are milliseconds since boot truncated to 32 bits; the
//! elapsed-time check uses wrapping arithmetic so it survives the
//! ~49 day rollover.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use super::DisplayMode;
use crate::config::{BUTTON_DEBOUNCE_MS, DISPLAY_POWER_AT_BOOT};

/// What a single button edge did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Accepted; the display moved to this mode.
    Advanced(DisplayMode),
    /// Too close to the previous accepted press; dropped.
    Debounced,
    /// Accepted while the display is off; mode left untouched.
    Suppressed,
}

/// Owner of the current view, the display power flag and the debounce
/// timestamp.
pub struct DisplayModeController {
    /// Last selected view. Never holds `Off`; power is tracked separately
    /// so the view survives a power cycle.
    mode: AtomicU8,
    powered: AtomicBool,
    last_accepted_ms: AtomicU32,
    /// Cleared until the first press is accepted, so a press right after
    /// boot is never debounced against a made-up timestamp.
    has_accepted: AtomicBool,
}

impl DisplayModeController {
    /// Start in `Summary` with the boot-time power setting.
    pub const fn new() -> Self {
        Self::with_power(DISPLAY_POWER_AT_BOOT)
    }

    pub const fn with_power(powered: bool) -> Self {
        Self {
            mode: AtomicU8::new(DisplayMode::Summary as u8),
            powered: AtomicBool::new(powered),
            last_accepted_ms: AtomicU32::new(0),
            has_accepted: AtomicBool::new(false),
        }
    }

    /// Handle one falling edge of the mode button at `now_ms`.
    ///
    /// O(1), lock-free, safe to call from an interrupt-driven task.
    pub fn trigger(&self, now_ms: u64) -> Trigger {
        let now = now_ms as u32;

        if self.has_accepted.load(Ordering::Acquire) {
            let last = self.last_accepted_ms.load(Ordering::Acquire);
            if now.wrapping_sub(last) <= BUTTON_DEBOUNCE_MS {
                return Trigger::Debounced;
            }
        }

        self.last_accepted_ms.store(now, Ordering::Release);
        self.has_accepted.store(true, Ordering::Release);

        if !self.powered.load(Ordering::Acquire) {
            return Trigger::Suppressed;
        }

        let next = match self.mode.fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
            Some(DisplayMode::from_u8(raw).next() as u8)
        }) {
            Ok(prev) | Err(prev) => DisplayMode::from_u8(prev).next(),
        };
        Trigger::Advanced(next)
    }

    /// The view the renderer should draw right now.
    pub fn current_mode(&self) -> DisplayMode {
        if self.powered.load(Ordering::Acquire) {
            DisplayMode::from_u8(self.mode.load(Ordering::Acquire))
        } else {
            DisplayMode::Off
        }
    }

    /// Switch display power. The selected view is kept across power cycles.
    pub fn set_display_power(&self, on: bool) {
        self.powered.store(on, Ordering::Release);
    }

    pub fn display_powered(&self) -> bool {
        self.powered.load(Ordering::Acquire)
    }
}

impl Default for DisplayModeController {
    fn default() -> Self {
        Self::new()
    }
}

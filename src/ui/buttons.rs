//! GPIO mode button (active-low with internal pull-up).
//!
//! The task waits for a falling edge via GPIOTE and hands the timestamp
//! to the [`DisplayModeController`]. Debouncing is purely time-based and
//! done by the controller; the task never sleeps or touches the display.

use defmt::{debug, info};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Instant;

use super::controller::{DisplayModeController, Trigger};

/// Run the button edge loop forever.
pub async fn button_task(pin: AnyPin, controller: &'static DisplayModeController) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        btn.wait_for_falling_edge().await;

        match controller.trigger(Instant::now().as_millis()) {
            Trigger::Advanced(mode) => info!("Button: mode -> {}", mode),
            Trigger::Debounced => debug!("Button: ignored (debounce)"),
            Trigger::Suppressed => debug!("Button: ignored (display off)"),
        }
    }
}

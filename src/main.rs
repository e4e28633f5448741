//! envmon firmware entry point (nRF52840).
//!
//! Two tasks share one [`DisplayModeController`]:
//!
//! - **button**: waits for falling edges on the mode button and advances
//!   the view (debounced, non-blocking).
//! - **monitor**: every 500 ms reads the sensors, updates the histories,
//!   computes the VOC index and renders the current view; while the
//!   display is off it only clears the panel.

#![no_std]
#![no_main]

use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::peripherals::{TWISPI0, TWISPI1};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use envmon::config::SAMPLE_INTERVAL_MS;
use envmon::sensors::env::EnvSensors;
use envmon::ui::buttons;
use envmon::ui::display::Oled;
use envmon::{AdaptiveVocIndex, DisplayModeController, Error, Monitor, Tick};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<peripherals::TWISPI1>;
});

/// The only state shared between the button and monitor tasks.
static DISPLAY_MODE: DisplayModeController = DisplayModeController::new();

type SensorBus = Twim<'static, TWISPI0>;
type DisplayBus = Twim<'static, TWISPI1>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("envmon starting");

    let mut sensor_config = twim::Config::default();
    sensor_config.frequency = twim::Frequency::K100;
    let sensor_bus = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, sensor_config);

    let mut display_config = twim::Config::default();
    display_config.frequency = twim::Frequency::K400;
    let display_bus = Twim::new(p.TWISPI1, Irqs, p.P0_30, p.P0_31, display_config);

    let display = match Oled::init(display_bus) {
        Ok(display) => display,
        Err(e) => defmt::panic!("Display init failed: {}", e),
    };
    info!("Display ready");

    unwrap!(spawner.spawn(button(p.P0_11.degrade())));
    unwrap!(spawner.spawn(monitor(EnvSensors::new(sensor_bus), display)));
}

#[embassy_executor::task]
async fn button(pin: AnyPin) {
    buttons::button_task(pin, &DISPLAY_MODE).await
}

#[embassy_executor::task]
async fn monitor(mut sensors: EnvSensors<SensorBus>, mut display: Oled<DisplayBus>) {
    let mut monitor = Monitor::new(AdaptiveVocIndex::new());

    loop {
        match monitor.tick(&mut sensors, &mut display, &DISPLAY_MODE).await {
            Ok(Tick::Rendered {
                mode,
                sample,
                voc_index,
            }) => debug!("{}: {} -> VOC index {}", mode, sample, voc_index),
            Ok(Tick::Blanked) => {}
            Ok(Tick::SensorFault(e)) => warn!("Sensor read failed: {}", e),
            Err(Error::Display) => warn!("Display update failed"),
            Err(e) => defmt::panic!("Monitor state corrupted: {}", e),
        }

        Timer::after(Duration::from_millis(SAMPLE_INTERVAL_MS)).await;
    }
}

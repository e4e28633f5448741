//! User interface subsystem - OLED views + the mode button.
//!
//! A single push-button cycles the OLED between four views. The button
//! task feeds edges into the [`controller::DisplayModeController`]; the
//! monitor loop reads the current mode every tick and renders it.
//!
//! ## Components
//!
//! - **Controller**: mode state machine + debounce, shared via atomics
//! - **Layout**: pure view models (graph points, bar height, labels)
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded only)
//! - **Buttons**: falling-edge task on the mode button (embedded only)

pub mod controller;
pub mod layout;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;

use crate::error::Error;
use layout::{AirQualityView, GraphView, SummaryView};

/// Something that can put a view on the panel.
///
/// Every `draw_*` call replaces the whole frame: clear, draw, flush.
pub trait Renderer {
    fn draw_summary(&mut self, view: &SummaryView) -> Result<(), Error>;
    fn draw_temperature_graph(&mut self, view: &GraphView) -> Result<(), Error>;
    fn draw_humidity_graph(&mut self, view: &GraphView) -> Result<(), Error>;
    fn draw_air_quality(&mut self, view: &AirQualityView) -> Result<(), Error>;
    /// Blank the panel (display powered off).
    fn clear(&mut self) -> Result<(), Error>;
}

/// Views the display can be in.
///
/// `Off` is only ever reported while display power is off; the cycle
/// itself runs over the remaining four.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// Panel blanked.
    Off = 0,
    /// Point values for temperature, humidity and VOC index.
    Summary = 1,
    /// Temperature history graph.
    TemperatureGraph = 2,
    /// Humidity history graph.
    HumidityGraph = 3,
    /// VOC index bar.
    AirQualityGraph = 4,
}

impl DisplayMode {
    /// The view a button press moves to.
    pub const fn next(self) -> Self {
        match self {
            DisplayMode::Summary => DisplayMode::TemperatureGraph,
            DisplayMode::TemperatureGraph => DisplayMode::HumidityGraph,
            DisplayMode::HumidityGraph => DisplayMode::AirQualityGraph,
            DisplayMode::AirQualityGraph => DisplayMode::Summary,
            DisplayMode::Off => DisplayMode::Off,
        }
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => DisplayMode::Summary,
            2 => DisplayMode::TemperatureGraph,
            3 => DisplayMode::HumidityGraph,
            4 => DisplayMode::AirQualityGraph,
            _ => DisplayMode::Off,
        }
    }
}

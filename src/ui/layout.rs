//! View models for the four OLED screens.
//!
//! Everything here is plain geometry and text, computed on the host-testable
//! side; the SSD1306 renderer only turns these into pixels.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::{
    AIR_QUALITY_BAR_DIVISOR, AIR_QUALITY_BAR_MAX_HEIGHT, AIR_QUALITY_BAR_WIDTH, AIR_QUALITY_BAR_X,
    AIR_QUALITY_BAR_Y, GRAPH_BASELINE_Y, GRAPH_X_ORIGIN, GRAPH_X_STEP, HISTORY_CAPACITY,
    HUMIDITY_Y_SCALE, TEMPERATURE_Y_SCALE,
};
use crate::history::{EmptyBufferError, HistoryBuffer};

/// Longest line any view prints (21 columns of a 6×10 font on 128 px).
pub const LABEL_LEN: usize = 24;

pub type Label = String<LABEL_LEN>;

/// Panel coordinate. Not clamped; off-panel points are the renderer's
/// problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GraphPoint {
    pub x: i32,
    pub y: i32,
}

/// Summary screen: three text lines.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub temperature: Label,
    pub humidity: Label,
    pub voc_index: Label,
}

impl SummaryView {
    pub fn new(temperature: f32, humidity: f32, voc_index: u16) -> Self {
        let mut view = Self {
            temperature: Label::new(),
            humidity: Label::new(),
            voc_index: Label::new(),
        };
        let _ = write!(view.temperature, "Temp: {:.1}C", temperature);
        let _ = write!(view.humidity, "Humidity: {:.1}%", humidity);
        let _ = write!(view.voc_index, "VOC Index: {}", voc_index);
        view
    }
}

/// History graph: title, polyline and a label with the latest value.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphView {
    pub title: &'static str,
    pub points: Vec<GraphPoint, HISTORY_CAPACITY>,
    pub label: Label,
}

impl GraphView {
    pub fn temperature(history: &HistoryBuffer) -> Result<Self, EmptyBufferError> {
        Self::build("Temperature", history, TEMPERATURE_Y_SCALE, "C")
    }

    pub fn humidity(history: &HistoryBuffer) -> Result<Self, EmptyBufferError> {
        Self::build("Humidity", history, HUMIDITY_Y_SCALE, "%")
    }

    fn build(
        title: &'static str,
        history: &HistoryBuffer,
        y_scale: f32,
        unit: &str,
    ) -> Result<Self, EmptyBufferError> {
        let latest = history.latest()?;

        let points = history
            .snapshot()
            .iter()
            .enumerate()
            .map(|(i, &value)| GraphPoint {
                x: GRAPH_X_ORIGIN + i as i32 * GRAPH_X_STEP,
                y: graph_y(value, y_scale),
            })
            .collect();

        let mut label = Label::new();
        let _ = write!(label, "{:.1} {}", latest, unit);

        Ok(Self {
            title,
            points,
            label,
        })
    }
}

/// Y coordinate for `value`; the scaled value is truncated toward zero.
pub fn graph_y(value: f32, y_scale: f32) -> i32 {
    GRAPH_BASELINE_Y - (value * y_scale) as i32
}

/// Air-quality screen: a single vertical bar plus the raw index.
#[derive(Clone, Debug, PartialEq)]
pub struct AirQualityView {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub label: Label,
}

impl AirQualityView {
    pub fn new(voc_index: u16) -> Self {
        let mut label = Label::new();
        let _ = write!(label, "VOC Index: {}", voc_index);
        Self {
            x: AIR_QUALITY_BAR_X,
            y: AIR_QUALITY_BAR_Y,
            width: AIR_QUALITY_BAR_WIDTH,
            height: bar_height(voc_index),
            label,
        }
    }
}

/// Bar height for a VOC index, clamped to the panel.
pub fn bar_height(voc_index: u16) -> u32 {
    u32::from(voc_index / AIR_QUALITY_BAR_DIVISOR).min(AIR_QUALITY_BAR_MAX_HEIGHT)
}

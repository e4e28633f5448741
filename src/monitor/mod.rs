//! The sample → render loop body.
//!
//! [`Monitor`] owns both history buffers and the VOC estimator. One call
//! to [`Monitor::tick`] performs a single iteration; the firmware task
//! wraps it in `loop { tick; sleep }`, which keeps the fixed-interval
//! sleep as the only suspension point besides the bounded sensor read.
//!
//! Nothing here is shared with the button task except the
//! [`DisplayModeController`], which is only read.

#[cfg(test)]
mod tests;

use crate::error::{Error, SensorError};
use crate::history::{EmptyBufferError, HistoryBuffer};
use crate::sensors::{Sample, SampleSource};
use crate::ui::controller::DisplayModeController;
use crate::ui::layout::{AirQualityView, GraphView, SummaryView};
use crate::ui::{DisplayMode, Renderer};
use crate::voc::VocEstimator;

/// Outcome of one loop iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// A fresh sample was taken and `mode` was drawn.
    Rendered {
        mode: DisplayMode,
        sample: Sample,
        voc_index: u16,
    },
    /// Display power is off; the panel was cleared, nothing sampled.
    Blanked,
    /// The sensor read failed; buffers and panel were left untouched.
    SensorFault(SensorError),
}

/// A fully laid-out screen, ready for a [`Renderer`].
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Summary(SummaryView),
    TemperatureGraph(GraphView),
    HumidityGraph(GraphView),
    AirQuality(AirQualityView),
}

impl Frame {
    /// Lay out `mode` from the current sample and histories.
    ///
    /// Returns `None` for [`DisplayMode::Off`].
    pub fn compose(
        mode: DisplayMode,
        sample: &Sample,
        voc_index: u16,
        temperature: &HistoryBuffer,
        humidity: &HistoryBuffer,
    ) -> Result<Option<Self>, EmptyBufferError> {
        let frame = match mode {
            DisplayMode::Off => return Ok(None),
            DisplayMode::Summary => Frame::Summary(SummaryView::new(
                sample.temperature,
                sample.humidity,
                voc_index,
            )),
            DisplayMode::TemperatureGraph => Frame::TemperatureGraph(GraphView::temperature(temperature)?),
            DisplayMode::HumidityGraph => Frame::HumidityGraph(GraphView::humidity(humidity)?),
            DisplayMode::AirQualityGraph => Frame::AirQuality(AirQualityView::new(voc_index)),
        };
        Ok(Some(frame))
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> Result<(), Error> {
        match self {
            Frame::Summary(view) => renderer.draw_summary(view),
            Frame::TemperatureGraph(view) => renderer.draw_temperature_graph(view),
            Frame::HumidityGraph(view) => renderer.draw_humidity_graph(view),
            Frame::AirQuality(view) => renderer.draw_air_quality(view),
        }
    }
}

/// Loop state owned exclusively by the monitor task.
pub struct Monitor<V> {
    temperature: HistoryBuffer,
    humidity: HistoryBuffer,
    voc: V,
}

impl<V: VocEstimator> Monitor<V> {
    pub const fn new(voc: V) -> Self {
        Self {
            temperature: HistoryBuffer::new(),
            humidity: HistoryBuffer::new(),
            voc,
        }
    }

    /// Run one iteration: sample, record, estimate, render.
    ///
    /// A sensor failure is reported as [`Tick::SensorFault`], not as an
    /// error; the caller just sleeps and tries again. `Err` means the
    /// display failed or a buffer invariant was broken.
    pub async fn tick<S, R>(
        &mut self,
        source: &mut S,
        renderer: &mut R,
        controller: &DisplayModeController,
    ) -> Result<Tick, Error>
    where
        S: SampleSource,
        R: Renderer,
    {
        if !controller.display_powered() {
            renderer.clear()?;
            return Ok(Tick::Blanked);
        }

        let sample = match source.read().await {
            Ok(sample) => sample,
            Err(e) => return Ok(Tick::SensorFault(e)),
        };

        self.temperature.push(sample.temperature);
        self.humidity.push(sample.humidity);
        let voc_index = self.voc.process(sample.voc_raw);

        // Power may have dropped while the sensors were being read; the
        // controller then reports `Off`.
        let mode = controller.current_mode();
        match Frame::compose(mode, &sample, voc_index, &self.temperature, &self.humidity)? {
            Some(frame) => frame.draw(renderer)?,
            None => {
                renderer.clear()?;
                return Ok(Tick::Blanked);
            }
        }

        Ok(Tick::Rendered {
            mode,
            sample,
            voc_index,
        })
    }

    pub fn temperature_history(&self) -> &HistoryBuffer {
        &self.temperature
    }

    pub fn humidity_history(&self) -> &HistoryBuffer {
        &self.humidity
    }
}

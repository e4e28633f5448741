//! Unit tests for the monitor loop body.
//!
//! These tests run on the host with scripted sensors and a renderer that
//! records what it was asked to draw.

use std::collections::VecDeque;
use std::vec::Vec;

use embassy_futures::block_on;

use super::{Frame, Monitor, Tick};
use crate::error::{Error, SensorError};
use crate::history::HistoryBuffer;
use crate::sensors::{Sample, SampleSource};
use crate::ui::controller::{DisplayModeController, Trigger};
use crate::ui::layout::{AirQualityView, GraphPoint, GraphView, SummaryView};
use crate::ui::{DisplayMode, Renderer};
use crate::voc::VocEstimator;

// ═══════════════════════════════════════════════════════════════════════════
// Fakes
// ═══════════════════════════════════════════════════════════════════════════

struct Scripted {
    readings: VecDeque<Result<Sample, SensorError>>,
    reads: usize,
}

impl Scripted {
    fn new(readings: impl IntoIterator<Item = Result<Sample, SensorError>>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            reads: 0,
        }
    }
}

impl SampleSource for Scripted {
    async fn read(&mut self) -> Result<Sample, SensorError> {
        self.reads += 1;
        self.readings.pop_front().unwrap_or(Err(SensorError::Timeout))
    }
}

/// Passes the raw value straight through as the index.
struct Identity;

impl VocEstimator for Identity {
    fn process(&mut self, raw: u16) -> u16 {
        raw
    }
}

#[derive(Debug, PartialEq)]
enum Drawn {
    Summary(SummaryView),
    Temperature(GraphView),
    Humidity(GraphView),
    AirQuality(AirQualityView),
    Cleared,
}

#[derive(Default)]
struct Recorder {
    frames: Vec<Drawn>,
    fail: bool,
}

impl Recorder {
    fn record(&mut self, drawn: Drawn) -> Result<(), Error> {
        if self.fail {
            return Err(Error::Display);
        }
        self.frames.push(drawn);
        Ok(())
    }
}

impl Renderer for Recorder {
    fn draw_summary(&mut self, view: &SummaryView) -> Result<(), Error> {
        self.record(Drawn::Summary(view.clone()))
    }

    fn draw_temperature_graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.record(Drawn::Temperature(view.clone()))
    }

    fn draw_humidity_graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.record(Drawn::Humidity(view.clone()))
    }

    fn draw_air_quality(&mut self, view: &AirQualityView) -> Result<(), Error> {
        self.record(Drawn::AirQuality(view.clone()))
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.record(Drawn::Cleared)
    }
}

fn sample(temperature: f32, humidity: f32, voc_raw: u16) -> Sample {
    Sample {
        temperature,
        humidity,
        voc_raw,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tick behaviour
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn summary_tick_records_and_renders() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Identity);
    let mut source = Scripted::new([Ok(sample(21.5, 40.0, 87))]);
    let mut display = Recorder::default();

    let tick = block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();

    assert_eq!(
        tick,
        Tick::Rendered {
            mode: DisplayMode::Summary,
            sample: sample(21.5, 40.0, 87),
            voc_index: 87,
        }
    );
    assert_eq!(display.frames, [Drawn::Summary(SummaryView::new(21.5, 40.0, 87))]);
    assert_eq!(monitor.temperature_history().latest(), Ok(21.5));
    assert_eq!(monitor.humidity_history().latest(), Ok(40.0));
}

#[test]
fn sensor_fault_leaves_state_untouched() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Identity);
    let mut source = Scripted::new([
        Ok(sample(20.0, 50.0, 100)),
        Err(SensorError::Checksum),
        Ok(sample(21.0, 51.0, 110)),
    ]);
    let mut display = Recorder::default();

    block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();
    let fault = block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();
    assert_eq!(fault, Tick::SensorFault(SensorError::Checksum));
    assert_eq!(monitor.temperature_history().len(), 1);
    assert_eq!(display.frames.len(), 1);

    // The loop carries on with the next reading.
    block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();
    assert_eq!(monitor.temperature_history().snapshot().as_slice(), &[20.0, 21.0]);
    assert_eq!(display.frames.len(), 2);
}

#[test]
fn powered_off_clears_without_sampling() {
    let ctrl = DisplayModeController::with_power(false);
    let mut monitor = Monitor::new(Identity);
    let mut source = Scripted::new([Ok(sample(20.0, 50.0, 100))]);
    let mut display = Recorder::default();

    for _ in 0..3 {
        let tick = block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();
        assert_eq!(tick, Tick::Blanked);
    }
    assert_eq!(source.reads, 0);
    assert!(monitor.temperature_history().is_empty());
    assert_eq!(display.frames, [Drawn::Cleared, Drawn::Cleared, Drawn::Cleared]);
}

#[test]
fn mode_selects_view() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Identity);
    let mut source = Scripted::new([
        Ok(sample(20.0, 50.0, 635)),
        Ok(sample(21.0, 60.0, 635)),
        Ok(sample(22.0, 70.0, 635)),
    ]);
    let mut display = Recorder::default();

    block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();
    assert_eq!(ctrl.trigger(0), Trigger::Advanced(DisplayMode::TemperatureGraph));
    block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();
    ctrl.trigger(600);
    ctrl.trigger(1_200);
    assert_eq!(ctrl.current_mode(), DisplayMode::AirQualityGraph);
    block_on(monitor.tick(&mut source, &mut display, &ctrl)).unwrap();

    assert!(matches!(display.frames[0], Drawn::Summary(_)));
    match &display.frames[1] {
        Drawn::Temperature(graph) => {
            assert_eq!(
                graph.points.as_slice(),
                &[GraphPoint { x: 20, y: 23 }, GraphPoint { x: 30, y: 21 }]
            );
            assert_eq!(graph.label.as_str(), "21.0 C");
        }
        other => panic!("expected temperature graph, got {:?}", other),
    }
    match &display.frames[2] {
        Drawn::AirQuality(bar) => {
            assert_eq!(bar.height, 63);
            assert_eq!(bar.label.as_str(), "VOC Index: 635");
        }
        other => panic!("expected air quality bar, got {:?}", other),
    }
}

#[test]
fn display_error_is_propagated() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Identity);
    let mut source = Scripted::new([Ok(sample(20.0, 50.0, 100))]);
    let mut display = Recorder {
        fail: true,
        ..Recorder::default()
    };

    let result = block_on(monitor.tick(&mut source, &mut display, &ctrl));
    assert_eq!(result, Err(Error::Display));
    // The sample was still recorded before drawing failed.
    assert_eq!(monitor.temperature_history().len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Frame composition
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn compose_off_is_none() {
    let history = HistoryBuffer::new();
    let frame = Frame::compose(
        DisplayMode::Off,
        &sample(20.0, 50.0, 0),
        0,
        &history,
        &history,
    );
    assert_eq!(frame, Ok(None));
}

#[test]
fn compose_graph_from_empty_history_fails() {
    let history = HistoryBuffer::new();
    let frame = Frame::compose(
        DisplayMode::HumidityGraph,
        &sample(20.0, 50.0, 0),
        0,
        &history,
        &history,
    );
    assert!(frame.is_err());
}

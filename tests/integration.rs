//! Integration tests for envmon host-testable logic.
//!
//! Drives the public API the way the firmware does: a monitor loop
//! ticking every 500 ms of simulated time while button edges arrive
//! in between.

use embassy_futures::block_on;
use envmon::ui::layout::{AirQualityView, GraphView, SummaryView};
use envmon::{
    DisplayMode, DisplayModeController, Error, Monitor, Renderer, Sample, SampleSource,
    SensorError, Tick, Trigger, VocEstimator,
};

struct Ramp {
    next: f32,
}

impl SampleSource for Ramp {
    async fn read(&mut self) -> Result<Sample, SensorError> {
        let temperature = self.next;
        self.next += 1.0;
        Ok(Sample {
            temperature,
            humidity: temperature * 2.0,
            voc_raw: (temperature as u16) * 50,
        })
    }
}

struct Scaled;

impl VocEstimator for Scaled {
    fn process(&mut self, raw: u16) -> u16 {
        raw
    }
}

#[derive(Default)]
struct Screens {
    log: Vec<&'static str>,
    last_graph: Option<GraphView>,
    last_bar: Option<AirQualityView>,
}

impl Renderer for Screens {
    fn draw_summary(&mut self, _view: &SummaryView) -> Result<(), Error> {
        self.log.push("summary");
        Ok(())
    }

    fn draw_temperature_graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.log.push("temperature");
        self.last_graph = Some(view.clone());
        Ok(())
    }

    fn draw_humidity_graph(&mut self, view: &GraphView) -> Result<(), Error> {
        self.log.push("humidity");
        self.last_graph = Some(view.clone());
        Ok(())
    }

    fn draw_air_quality(&mut self, view: &AirQualityView) -> Result<(), Error> {
        self.log.push("air");
        self.last_bar = Some(view.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.log.push("off");
        Ok(())
    }
}

#[test]
fn button_cycles_views_across_ticks() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Scaled);
    let mut source = Ramp { next: 1.0 };
    let mut screens = Screens::default();

    // (tick time in ms, button edges that arrive before that tick)
    let script: [(u64, &[u64]); 8] = [
        (0, &[]),
        (500, &[450]),
        (1_000, &[700, 720, 760]),
        (1_500, &[1_100]),
        (2_000, &[]),
        (2_500, &[2_300, 2_310]),
        (3_000, &[]),
        (3_500, &[3_400]),
    ];

    for (_, presses) in script {
        for &t in presses {
            ctrl.trigger(t);
        }
        block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();
    }

    assert_eq!(
        screens.log,
        [
            "summary",
            "temperature",
            "temperature",
            "humidity",
            "humidity",
            "air",
            "air",
            "summary",
        ]
    );
    assert_eq!(monitor.temperature_history().len(), 8);
}

#[test]
fn history_window_and_bar_after_many_ticks() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Scaled);
    let mut source = Ramp { next: 1.0 };
    let mut screens = Screens::default();

    for _ in 0..12 {
        block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();
    }
    let temps = monitor.temperature_history().snapshot();
    assert_eq!(temps.as_slice(), &[3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    assert_eq!(monitor.humidity_history().latest(), Ok(24.0));

    ctrl.trigger(0);
    let tick = block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();
    assert!(matches!(
        tick,
        Tick::Rendered {
            mode: DisplayMode::TemperatureGraph,
            ..
        }
    ));
    let graph = screens.last_graph.take().unwrap();
    assert_eq!(graph.points.len(), 10);
    assert_eq!(graph.label.as_str(), "13.0 C");

    ctrl.trigger(600);
    ctrl.trigger(1_200);
    // Ramp reaches 14 °C -> raw 700 -> index 700 -> bar clamps at 63.
    block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();
    let bar = screens.last_bar.take().unwrap();
    assert_eq!(bar.height, 63);
    assert_eq!(bar.label.as_str(), "VOC Index: 700");
}

#[test]
fn power_cycle_keeps_selected_view() {
    let ctrl = DisplayModeController::with_power(true);
    let mut monitor = Monitor::new(Scaled);
    let mut source = Ramp { next: 20.0 };
    let mut screens = Screens::default();

    assert_eq!(ctrl.trigger(0), Trigger::Advanced(DisplayMode::TemperatureGraph));
    assert_eq!(ctrl.trigger(600), Trigger::Advanced(DisplayMode::HumidityGraph));
    block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();

    ctrl.set_display_power(false);
    assert_eq!(ctrl.trigger(1_500), Trigger::Suppressed);
    let tick = block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();
    assert_eq!(tick, Tick::Blanked);
    assert_eq!(monitor.temperature_history().len(), 1);

    ctrl.set_display_power(true);
    block_on(monitor.tick(&mut source, &mut screens, &ctrl)).unwrap();
    assert_eq!(screens.log, ["humidity", "off", "humidity"]);
}

//! Application-wide constants and compile-time configuration.
//!
//! All hardware addresses, timing parameters, and graph geometry
//! live here so they can be tuned in one place.

// Timing

/// Period of the sample → render loop (ms). Also the delay used while
/// the display is powered off.
pub const SAMPLE_INTERVAL_MS: u64 = 500;

/// Minimum spacing between two accepted button presses (ms).
/// A press is accepted only if strictly more than this has elapsed.
pub const BUTTON_DEBOUNCE_MS: u32 = 500;

/// Upper bound for one complete sensor read (SHTC3 + SGP40).
pub const SENSOR_READ_TIMEOUT_MS: u64 = 200;

/// Whether the display starts powered on.
pub const DISPLAY_POWER_AT_BOOT: bool = true;

// History

/// Number of samples kept per history trace.
pub const HISTORY_CAPACITY: usize = 10;

// I²C addresses

/// SSD1306 OLED (SA0 tied high).
pub const OLED_ADDR: u8 = 0x3D;

/// Sensirion SHTC3 temperature / humidity sensor.
pub const SHTC3_ADDR: u8 = 0x70;

/// Sensirion SGP40 VOC sensor.
pub const SGP40_ADDR: u8 = 0x59;

// GPIO pin assignments (nRF52840-DK defaults)
//
//   Mode button    → P0.11 (active-low, internal pull-up)
//   Sensor SDA     → P0.26   (TWIM0, 100 kHz)
//   Sensor SCL     → P0.27
//   OLED SDA       → P0.30   (TWIM1, 400 kHz)
//   OLED SCL       → P0.31

// Graph layout (128×64 panel)

/// X coordinate of the first graph sample.
pub const GRAPH_X_ORIGIN: i32 = 20;

/// Horizontal distance between consecutive graph samples.
pub const GRAPH_X_STEP: i32 = 10;

/// Bottom row of the panel; graph values grow upwards from here.
pub const GRAPH_BASELINE_Y: i32 = 63;

/// Pixels per °C on the temperature graph.
pub const TEMPERATURE_Y_SCALE: f32 = 2.0;

/// Pixels per %RH on the humidity graph.
pub const HUMIDITY_Y_SCALE: f32 = 0.63;

/// Top-left corner and width of the air-quality bar.
pub const AIR_QUALITY_BAR_X: i32 = 20;
pub const AIR_QUALITY_BAR_Y: i32 = 10;
pub const AIR_QUALITY_BAR_WIDTH: u32 = 10;

/// VOC index units per bar pixel.
pub const AIR_QUALITY_BAR_DIVISOR: u16 = 10;

/// Tallest bar the panel can show.
pub const AIR_QUALITY_BAR_MAX_HEIGHT: u32 = 63;

// VOC index

/// Samples consumed before the estimator reports a non-zero index.
pub const VOC_WARMUP_SAMPLES: u32 = 45;

/// Upper bound of the VOC index scale.
pub const VOC_INDEX_MAX: u16 = 500;

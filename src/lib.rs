//! envmon - handheld environmental monitor firmware.
//!
//! Samples temperature, humidity (SHTC3) and VOC (SGP40), keeps a short
//! history of each trace and renders one of four views on a 128×64
//! SSD1306 OLED. A single button cycles the views.
//!
//! Everything that does not touch hardware (history buffers, the
//! display-mode state machine, view layout, Sensirion framing, the VOC
//! estimator and the loop body) builds on the host and is tested there:
//!
//! ```text
//! cargo test
//! ```
//!
//! The drivers, the OLED renderer and the firmware binary need the
//! `embedded` feature and a `thumbv7em-none-eabihf` target:
//!
//! ```text
//! cargo run --release --features embedded --target thumbv7em-none-eabihf
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod history;
pub mod monitor;
pub mod sensors;
pub mod ui;
pub mod voc;

pub use error::{Error, SensorError};
pub use history::HistoryBuffer;
pub use monitor::{Frame, Monitor, Tick};
pub use sensors::{Sample, SampleSource};
pub use ui::controller::{DisplayModeController, Trigger};
pub use ui::{DisplayMode, Renderer};
pub use voc::{AdaptiveVocIndex, VocEstimator};

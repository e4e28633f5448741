//! Sensor subsystem - SHTC3 (temperature/humidity) + SGP40 (VOC).
//!
//! Both chips share one I²C bus and speak Sensirion's word protocol
//! (16-bit big-endian words, each followed by a CRC-8). The pure framing
//! helpers live in [`sensirion`]; the async drivers are only built for
//! the target.
//!
//! The monitor loop only sees the [`SampleSource`] trait, so host tests
//! can feed it scripted readings.

pub mod sensirion;

#[cfg(feature = "embedded")]
pub mod env;
#[cfg(feature = "embedded")]
pub mod sgp40;
#[cfg(feature = "embedded")]
pub mod shtc3;

use crate::error::SensorError;

/// One reading of all sensors, taken together in a single tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Relative humidity, percent.
    pub humidity: f32,
    /// SGP40 raw signal (ticks), already compensated for `temperature`
    /// and `humidity`.
    pub voc_raw: u16,
}

/// Anything that can produce a [`Sample`] per tick.
///
/// Implementations must bound their own I/O time; a read that cannot
/// complete reports [`SensorError::Timeout`] instead of blocking the loop.
#[allow(async_fn_in_trait)]
pub trait SampleSource {
    async fn read(&mut self) -> Result<Sample, SensorError>;
}

//! Unified error type for envmon.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for
//! efficient on-target logging.

use crate::history::EmptyBufferError;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A sensor read failed. Transient - the tick is skipped.
    Sensor(SensorError),

    /// I²C transaction to the display failed.
    Display,

    /// A history buffer was read before anything was pushed.
    /// Only reachable through a logic error in the monitor loop.
    EmptyBuffer,
}

/// Failures of the SHTC3 / SGP40 read sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The I²C transfer itself failed (NACK, arbitration loss, ...).
    Bus,
    /// A received word did not match its CRC-8.
    Checksum,
    /// The complete read did not finish within the configured bound.
    Timeout,
}

// Convenience conversions

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::Sensor(e)
    }
}

impl From<EmptyBufferError> for Error {
    fn from(_: EmptyBufferError) -> Self {
        Error::EmptyBuffer
    }
}

//! Combined SHTC3 + SGP40 sample source on a single I²C bus.

use defmt::info;
use embassy_time::{with_timeout, Duration};
use embedded_hal_async::i2c::I2c;

use super::{sgp40, shtc3, Sample, SampleSource};
use crate::config::{SENSOR_READ_TIMEOUT_MS, SGP40_ADDR, SHTC3_ADDR};
use crate::error::SensorError;

/// Owns the sensor bus and produces one compensated [`Sample`] per read.
pub struct EnvSensors<I2C> {
    i2c: I2C,
    /// The SHTC3 powers up asleep. A failed wake-up is retried on the
    /// next read instead of failing boot.
    shtc3_awake: bool,
}

impl<I2C: I2c> EnvSensors<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            shtc3_awake: false,
        }
    }

    async fn read_unbounded(&mut self) -> Result<Sample, SensorError> {
        if !self.shtc3_awake {
            shtc3::wakeup(&mut self.i2c, SHTC3_ADDR).await?;
            self.shtc3_awake = true;
            info!("Sensors: SHTC3 awake");
        }

        let (temperature, humidity) = shtc3::measure(&mut self.i2c, SHTC3_ADDR).await?;
        // The SGP40 compensates its raw signal with this tick's ambient values.
        let voc_raw = sgp40::measure_raw(&mut self.i2c, SGP40_ADDR, temperature, humidity).await?;
        Ok(Sample {
            temperature,
            humidity,
            voc_raw,
        })
    }
}

impl<I2C: I2c> SampleSource for EnvSensors<I2C> {
    async fn read(&mut self) -> Result<Sample, SensorError> {
        with_timeout(
            Duration::from_millis(SENSOR_READ_TIMEOUT_MS),
            self.read_unbounded(),
        )
        .await
        .map_err(|_| SensorError::Timeout)?
    }
}

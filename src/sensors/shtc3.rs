//! SHTC3 temperature / humidity sensor.

use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;

use super::sensirion::{decode_word, ticks_to_celsius, ticks_to_humidity, WORD_LEN};
use crate::error::SensorError;

const CMD_WAKEUP: u16 = 0x3517;
/// Normal power mode, temperature first, no clock stretching.
const CMD_MEASURE_T_FIRST: u16 = 0x7866;

/// Datasheet max wake-up time is 240 µs.
const WAKEUP_TIME: Duration = Duration::from_micros(240);
/// Datasheet max normal-mode measurement time is 12.1 ms.
const MEASUREMENT_TIME: Duration = Duration::from_micros(12_100);

async fn command<I2C: I2c>(i2c: &mut I2C, addr: u8, cmd: u16) -> Result<(), SensorError> {
    i2c.write(addr, &cmd.to_be_bytes())
        .await
        .map_err(|_| SensorError::Bus)
}

/// Bring the sensor out of sleep. The SHTC3 powers up asleep.
pub async fn wakeup<I2C: I2c>(i2c: &mut I2C, addr: u8) -> Result<(), SensorError> {
    command(i2c, addr, CMD_WAKEUP).await?;
    Timer::after(WAKEUP_TIME).await;
    Ok(())
}

/// Run one measurement and return `(°C, %RH)`.
pub async fn measure<I2C: I2c>(i2c: &mut I2C, addr: u8) -> Result<(f32, f32), SensorError> {
    command(i2c, addr, CMD_MEASURE_T_FIRST).await?;
    Timer::after(MEASUREMENT_TIME).await;

    let mut buf = [0u8; 2 * WORD_LEN];
    i2c.read(addr, &mut buf)
        .await
        .map_err(|_| SensorError::Bus)?;

    let temperature = decode_word(&buf[..WORD_LEN])?;
    let humidity = decode_word(&buf[WORD_LEN..])?;
    Ok((ticks_to_celsius(temperature), ticks_to_humidity(humidity)))
}

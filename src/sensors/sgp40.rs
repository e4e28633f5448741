//! SGP40 VOC sensor - raw signal with humidity/temperature compensation.

use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;

use super::sensirion::{celsius_to_ticks, decode_word, encode_word, humidity_to_ticks, WORD_LEN};
use crate::error::SensorError;

const CMD_MEASURE_RAW: u16 = 0x260F;

/// Datasheet max measurement time is 30 ms.
const MEASUREMENT_TIME: Duration = Duration::from_millis(30);

/// Measure the raw VOC signal compensated for the given ambient conditions.
pub async fn measure_raw<I2C: I2c>(
    i2c: &mut I2C,
    addr: u8,
    temperature: f32,
    humidity: f32,
) -> Result<u16, SensorError> {
    // [cmd msb, cmd lsb, rh word + crc, t word + crc]
    let mut frame = [0u8; 2 + 2 * WORD_LEN];
    frame[..2].copy_from_slice(&CMD_MEASURE_RAW.to_be_bytes());
    frame[2..2 + WORD_LEN].copy_from_slice(&encode_word(humidity_to_ticks(humidity)));
    frame[2 + WORD_LEN..].copy_from_slice(&encode_word(celsius_to_ticks(temperature)));

    i2c.write(addr, &frame).await.map_err(|_| SensorError::Bus)?;
    Timer::after(MEASUREMENT_TIME).await;

    let mut buf = [0u8; WORD_LEN];
    i2c.read(addr, &mut buf).await.map_err(|_| SensorError::Bus)?;
    decode_word(&buf)
}

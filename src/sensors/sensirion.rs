//! Sensirion I²C word framing and unit conversions.
//!
//! Every 16-bit word on the wire is sent MSB first and followed by a
//! CRC-8 (polynomial 0x31, init 0xFF, no reflection, no final XOR).

use crate::error::SensorError;

/// Wire size of one word plus its checksum.
pub const WORD_LEN: usize = 3;

/// CRC-8 over `data` as used by all Sensirion sensors.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ 0x31;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Serialise `word` as `[msb, lsb, crc]`.
pub fn encode_word(word: u16) -> [u8; WORD_LEN] {
    let [msb, lsb] = word.to_be_bytes();
    [msb, lsb, crc8(&[msb, lsb])]
}

/// Parse a `[msb, lsb, crc]` triple, checking the CRC.
pub fn decode_word(chunk: &[u8]) -> Result<u16, SensorError> {
    match chunk {
        [msb, lsb, crc] if crc8(&[*msb, *lsb]) == *crc => Ok(u16::from_be_bytes([*msb, *lsb])),
        [_, _, _] => Err(SensorError::Checksum),
        _ => Err(SensorError::Bus),
    }
}

/// SHTC3 temperature ticks → °C.
pub fn ticks_to_celsius(ticks: u16) -> f32 {
    -45.0 + 175.0 * f32::from(ticks) / 65536.0
}

/// SHTC3 humidity ticks → %RH.
pub fn ticks_to_humidity(ticks: u16) -> f32 {
    100.0 * f32::from(ticks) / 65536.0
}

/// %RH → SGP40 compensation ticks (saturating outside 0..=100 %).
pub fn humidity_to_ticks(humidity: f32) -> u16 {
    to_ticks(humidity * 65535.0 / 100.0)
}

/// °C → SGP40 compensation ticks (saturating outside -45..=130 °C).
pub fn celsius_to_ticks(temperature: f32) -> u16 {
    to_ticks((temperature + 45.0) * 65535.0 / 175.0)
}

fn to_ticks(scaled: f32) -> u16 {
    // `as` saturates and maps NaN to 0.
    scaled as u16
}

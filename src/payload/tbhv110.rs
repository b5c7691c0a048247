//! TBHV110 (Healthy Home Sensor IAQ) payload decoder
//!
//! Uplink layout, 11 bytes:
//!
//! | Byte | Field                                 | Bits |
//! |------|---------------------------------------|------|
//! |    0 | Status                                |    0 |
//! |    1 | Battery, `(25 + n) / 10` V            |  3:0 |
//! |    2 | Board temperature, `n - 32` °C        |  6:0 |
//! |    3 | Relative humidity, %                  |  6:0 |
//! |  4-5 | CO2 equivalent estimate (eCO2), LE    | 15:0 |
//! |  6-7 | VOC, LE                               | 15:0 |
//! |  8-9 | Indoor-air-quality (IAQ), LE          | 15:0 |
//! |   10 | Environment temperature, `n - 32` °C  |  6:0 |

use crate::decoder::{DecodedPayload, PayloadDecoder};
use crate::error::DecodeError;
use crate::logging::{log_payload_hex, log_payload_json};
use crate::payload::reading::IaqReading;

/// Exact uplink length of the TBHV110 format.
pub const PAYLOAD_LEN: usize = 11;

const STATUS_MASK: u8 = 0b0000_0001;
const BATTERY_MASK: u8 = 0b0000_1111;
const TEMP_MASK: u8 = 0b0111_1111;
const RH_MASK: u8 = 0b0111_1111;

const TEMP_OFFSET: i16 = 32;

/// Decoder for the TBHV110 indoor-air-quality sensor.
#[derive(Debug, Clone, Default)]
pub struct Tbhv110Decoder {
    debug_output: bool,
}

impl Tbhv110Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder that traces input and output at debug level.
    pub fn with_debug(debug_output: bool) -> Self {
        Self { debug_output }
    }

    /// Decode one uplink.
    ///
    /// `f_port` is accepted for symmetry with other device decoders; this
    /// format does not depend on it.
    pub fn decode(&self, raw: &[u8], _f_port: Option<u8>) -> Result<IaqReading, DecodeError> {
        if raw.len() != PAYLOAD_LEN {
            return Err(DecodeError::InvalidPayloadLength {
                expected: PAYLOAD_LEN,
                actual: raw.len(),
            });
        }

        if self.debug_output {
            log_payload_hex("Input", raw);
        }

        let reading = IaqReading {
            status: raw[0] & STATUS_MASK,
            battery: f64::from(25 + (raw[1] & BATTERY_MASK)) / 10.0,
            board_temp: i16::from(raw[2] & TEMP_MASK) - TEMP_OFFSET,
            rh: raw[3] & RH_MASK,
            eco2: reconstruct_signed16((u16::from(raw[5]) << 8) | u16::from(raw[4])),
            voc: reconstruct_signed16((u16::from(raw[7]) << 8) | u16::from(raw[6])),
            iaq: reconstruct_signed16((u16::from(raw[9]) << 8) | u16::from(raw[8])),
            env_temp: i16::from(raw[10] & TEMP_MASK) - TEMP_OFFSET,
        };

        if self.debug_output {
            log_payload_json("Output", &reading);
        }

        Ok(reading)
    }
}

impl PayloadDecoder for Tbhv110Decoder {
    fn decode(&self, payload: &[u8], f_port: Option<u8>) -> Result<DecodedPayload, DecodeError> {
        Tbhv110Decoder::decode(self, payload, f_port).map(DecodedPayload::Tbhv110)
    }

    fn decoder_type(&self) -> &str {
        "tbhv110"
    }

    fn can_decode(&self, payload: &[u8], _f_port: Option<u8>) -> bool {
        payload.len() == PAYLOAD_LEN
    }

    fn clone_box(&self) -> Box<dyn PayloadDecoder> {
        Box::new(self.clone())
    }
}

/// Two's-complement reinterpretation of a 16-bit pattern.
fn reconstruct_signed16(value: u16) -> i16 {
    if value >= 0x8000 {
        (i32::from(value) - 0x1_0000) as i16
    } else {
        value as i16
    }
}

//! Uplink transport encoding.
//!
//! Network servers hand uplink payloads over as standard base64 strings
//! (`frm_payload` / `PayloadData`). This module turns them back into raw bytes
//! and runs the TBHV110 decoder on the result.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::payload::{IaqReading, Tbhv110Decoder};

/// Decode a standard, padded base64 string into raw payload bytes.
///
/// Surrounding whitespace is ignored.
pub fn decode_transport(input: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(input.trim())?)
}

/// Decode a base64-encoded TBHV110 uplink into a reading.
///
/// # Arguments
/// * `base64_input` - Base64-encoded binary payload
/// * `f_port` - FPort from the uplink metadata, `None` when not provided
/// * `config` - Decoder options
///
/// # Returns
/// * `Ok(IaqReading)` - Decoded reading
/// * `Err(DecodeError)` - Invalid base64 or a payload that is not 11 bytes
pub fn decode_uplink(
    base64_input: &str,
    f_port: Option<u8>,
    config: &DecoderConfig,
) -> Result<IaqReading, DecodeError> {
    let raw = decode_transport(base64_input)?;
    Tbhv110Decoder::with_debug(config.debug_output).decode(&raw, f_port)
}

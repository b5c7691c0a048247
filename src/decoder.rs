//! Payload decoder dispatch
//!
//! Network servers forward uplinks from many device types. This module lets a
//! caller pick the decoder per device, either explicitly or by name, while each
//! device format stays in its own single-purpose module under
//! [`crate::payload`].

use std::collections::HashMap;

use serde::Serialize;

use crate::error::DecodeError;
use crate::payload::{IaqReading, Tbhv110Decoder};

/// Output of any registered decoder, one variant per device family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedPayload {
    Tbhv110(IaqReading),
}

impl DecodedPayload {
    pub fn to_json(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Trait for implementing device payload decoders
pub trait PayloadDecoder: Send + Sync + std::fmt::Debug {
    /// Decode a raw payload. `f_port` is `None` when the network server did not provide it.
    fn decode(&self, payload: &[u8], f_port: Option<u8>) -> Result<DecodedPayload, DecodeError>;

    /// Get the name/type of this decoder
    fn decoder_type(&self) -> &str;

    /// Check if this decoder can handle the given payload
    fn can_decode(&self, payload: &[u8], f_port: Option<u8>) -> bool {
        self.decode(payload, f_port).is_ok()
    }

    /// Clone the decoder into a boxed trait object
    fn clone_box(&self) -> Box<dyn PayloadDecoder>;
}

impl Clone for Box<dyn PayloadDecoder> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Names accepted by [`decoder_by_name`].
pub const DECODER_NAMES: &[&str] = &["tbhv110"];

/// Build a decoder from its name (case-insensitive).
pub fn decoder_by_name(name: &str, debug_output: bool) -> Result<Box<dyn PayloadDecoder>, DecodeError> {
    match name.to_ascii_lowercase().as_str() {
        "tbhv110" => Ok(Box::new(Tbhv110Decoder::with_debug(debug_output))),
        _ => Err(DecodeError::UnknownDecoder(name.to_string())),
    }
}

/// Registry mapping device identifiers (e.g. DevEUI) to their decoders.
#[derive(Debug, Clone, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<String, Box<dyn PayloadDecoder>>,
    default_decoder: Option<Box<dyn PayloadDecoder>>,
}

impl DecoderRegistry {
    /// Create an empty registry with no default decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for a specific device
    pub fn register_device(&mut self, device_id: impl Into<String>, decoder: Box<dyn PayloadDecoder>) {
        self.decoders.insert(device_id.into(), decoder);
    }

    /// Set the decoder used for devices without an explicit registration
    pub fn set_default_decoder(&mut self, decoder: Box<dyn PayloadDecoder>) {
        self.default_decoder = Some(decoder);
    }

    /// Decoder that would handle `device_id`, if any.
    pub fn decoder_for(&self, device_id: &str) -> Option<&dyn PayloadDecoder> {
        self.decoders
            .get(device_id)
            .or(self.default_decoder.as_ref())
            .map(|decoder| decoder.as_ref())
    }

    /// Decode a payload from a specific device
    pub fn decode_payload(
        &self,
        device_id: &str,
        payload: &[u8],
        f_port: Option<u8>,
    ) -> Result<DecodedPayload, DecodeError> {
        let decoder = self.decoder_for(device_id).ok_or(DecodeError::NoDecoder)?;
        log::trace!(
            "decoding {} bytes from {device_id} with {}",
            payload.len(),
            decoder.decoder_type()
        );
        decoder.decode(payload, f_port)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

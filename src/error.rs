//! # Decode Error Handling
//!
//! This module defines the DecodeError enum, which represents the different error
//! types that can occur while turning an uplink into a decoded reading.

use thiserror::Error;

/// Represents the different error types that can occur in the tbhv-rs crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// The uplink string is not valid in its transport encoding (base64).
    #[error("Invalid transport encoding: {0}")]
    InvalidTransportEncoding(String),

    /// The raw payload does not have the length the device format requires.
    #[error("Invalid payload length: expected {expected}, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },

    /// A decoder was requested by a name nobody registered.
    #[error("Unknown decoder type: {0}")]
    UnknownDecoder(String),

    /// No decoder configured for the device and no default set.
    #[error("No decoder configured for device")]
    NoDecoder,

    /// The decoded reading could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Serialization(err.to_string())
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::InvalidTransportEncoding(err.to_string())
    }
}

//! # Hex Encoding/Decoding Utilities
//!
//! Hex helpers used for payload traces and for accepting hex-encoded uplinks
//! on the command line, as printed by most LoRaWAN network server consoles.
//!
//! ## Usage
//!
//! ```rust
//! use tbhv_rs::util::hex::{decode_hex, encode_hex_upper};
//!
//! let data = [0x01, 0x0F, 0x7F];
//! assert_eq!(encode_hex_upper(&data), "010F7F");
//! assert_eq!(decode_hex("01 0f 7f").unwrap(), data);
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to uppercase hex string
///
/// This is the format used for the decoder's input trace.
pub fn encode_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decode hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is automatically stripped.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(HexError::EmptyString);
    }

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

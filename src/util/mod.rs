//! # Utility Modules
//!
//! Common helpers used by the decoder and the command line tool.

pub mod hex;

pub use hex::{decode_hex, encode_hex_upper, HexError};

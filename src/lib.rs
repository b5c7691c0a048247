//! # tbhv-rs - A Rust Crate for Decoding TBHV110 Indoor-Air-Quality Payloads
//!
//! The tbhv-rs crate decodes the 11-byte LoRaWAN uplink sent by the TBHV110
//! "Healthy Home Sensor IAQ" into named, scaled measurements: status, battery
//! voltage, board and environment temperature, relative humidity, eCO2, VOC
//! and IAQ.
//!
//! ## Features
//!
//! - Pure, allocation-free decode of the raw 11-byte payload
//! - Base64 transport decoding as delivered by LoRaWAN network servers
//! - JSON output with the device's field names
//! - A decoder trait and per-device registry for multi-device deployments
//! - Optional debug trace through the `log` facade
//!
//! ## Usage
//!
//! ```rust
//! use tbhv_rs::{decode_uplink, DecoderConfig};
//!
//! let reading = decode_uplink("AQ9/ZP//AID/fwA=", Some(1), &DecoderConfig::default()).unwrap();
//! assert_eq!(reading.battery, 4.0);
//! assert_eq!(reading.voc, -32768);
//! println!("{}", reading.to_json().unwrap());
//! ```

pub mod config;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod payload;
pub mod transport;
pub mod util;

pub use crate::config::DecoderConfig;
pub use crate::error::DecodeError;
pub use crate::logging::{init_logger, log_info};

pub use decoder::{decoder_by_name, DecodedPayload, DecoderRegistry, PayloadDecoder};
pub use payload::{IaqReading, Tbhv110Decoder, FIELD_NAMES, PAYLOAD_LEN};
pub use transport::{decode_transport, decode_uplink};

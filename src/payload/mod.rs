//! # Device Payload Formats
//!
//! Byte-level decoders for device uplink payloads and the readings they
//! produce.

pub mod reading;
pub mod tbhv110;

pub use reading::{IaqReading, FIELD_NAMES};
pub use tbhv110::{Tbhv110Decoder, PAYLOAD_LEN};

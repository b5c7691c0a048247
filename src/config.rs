//! Decoder configuration.
//!
//! Settings are passed explicitly to the decode call or injected into a
//! decoder at construction; nothing here is process-wide.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Options controlling a decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Emit a debug trace of the raw input and the decoded output.
    pub debug_output: bool,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the debug trace.
    pub fn with_debug_output(mut self, enabled: bool) -> Self {
        self.debug_output = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

//! Decoded TBHV110 reading and its JSON representation.

use serde::Serialize;

use crate::error::DecodeError;

/// Field names in their serialization order.
pub const FIELD_NAMES: [&str; 8] = [
    "Status",
    "Battery",
    "BoardTemp",
    "RH",
    "ECO2",
    "VOC",
    "IAQ",
    "EnvTemp",
];

/// One decoded uplink from a TBHV110 indoor-air-quality sensor.
///
/// Serializes to a JSON object whose keys match the device's field names
/// (`Status`, `Battery`, `BoardTemp`, `RH`, `ECO2`, `VOC`, `IAQ`, `EnvTemp`),
/// in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IaqReading {
    /// Device status bit, 0 or 1
    #[serde(rename = "Status")]
    pub status: u8,
    /// Battery voltage in volts (2.5 - 4.0)
    #[serde(rename = "Battery")]
    pub battery: f64,
    /// Board temperature in °C (-32 - 95)
    #[serde(rename = "BoardTemp")]
    pub board_temp: i16,
    /// Relative humidity in percent. Not clamped, the 7-bit field reaches 127.
    #[serde(rename = "RH")]
    pub rh: u8,
    /// CO2 equivalent estimate
    #[serde(rename = "ECO2")]
    pub eco2: i16,
    #[serde(rename = "VOC")]
    pub voc: i16,
    /// Indoor-air-quality index
    #[serde(rename = "IAQ")]
    pub iaq: i16,
    /// Environment temperature in °C (-32 - 95)
    #[serde(rename = "EnvTemp")]
    pub env_temp: i16,
}

impl IaqReading {
    /// The reading as `(name, value)` pairs, in serialization order.
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        let values = [
            f64::from(self.status),
            self.battery,
            f64::from(self.board_temp),
            f64::from(self.rh),
            f64::from(self.eco2),
            f64::from(self.voc),
            f64::from(self.iaq),
            f64::from(self.env_temp),
        ];
        let mut fields = [("", 0.0); 8];
        for (slot, (name, value)) in fields.iter_mut().zip(FIELD_NAMES.iter().zip(values)) {
            *slot = (*name, value);
        }
        fields
    }

    /// Look up a single field by its serialized name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn to_json(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DecodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IaqReading {
        IaqReading {
            status: 1,
            battery: 3.6,
            board_temp: 24,
            rh: 41,
            eco2: 612,
            voc: 87,
            iaq: 55,
            env_temp: 23,
        }
    }

    #[test]
    fn test_json_key_order() {
        let json = sample().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"Status":1,"Battery":3.6,"BoardTemp":24,"RH":41,"ECO2":612,"VOC":87,"IAQ":55,"EnvTemp":23}"#
        );
    }

    #[test]
    fn test_fields_follow_names() {
        let fields = sample().fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, FIELD_NAMES);
        assert_eq!(fields[1], ("Battery", 3.6));
        assert_eq!(fields[4], ("ECO2", 612.0));
    }

    #[test]
    fn test_get() {
        let reading = sample();
        assert_eq!(reading.get("RH"), Some(41.0));
        assert_eq!(reading.get("EnvTemp"), Some(23.0));
        assert_eq!(reading.get("Pressure"), None);
    }
}

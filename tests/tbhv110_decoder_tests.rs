//! Integration tests for the TBHV110 payload decoder

use tbhv_rs::{DecodeError, IaqReading, Tbhv110Decoder, FIELD_NAMES};

/// Captured uplink: battery 3.6 V, board 24 °C, RH 42 %, eCO2 612, VOC 87, IAQ 55, env 23 °C.
const OFFICE_UPLINK: [u8; 11] = [0x01, 0x0B, 0x38, 0x2A, 0x64, 0x02, 0x57, 0x00, 0x37, 0x00, 0x37];

#[test]
fn test_office_uplink() {
    let reading = Tbhv110Decoder::new().decode(&OFFICE_UPLINK, Some(1)).unwrap();

    assert_eq!(
        reading,
        IaqReading {
            status: 1,
            battery: 3.6,
            board_temp: 24,
            rh: 42,
            eco2: 612,
            voc: 87,
            iaq: 55,
            env_temp: 23,
        }
    );
}

#[test]
fn test_all_zero_boundary() {
    let reading = Tbhv110Decoder::new().decode(&[0u8; 11], None).unwrap();
    let values: Vec<f64> = reading.fields().iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![0.0, 2.5, -32.0, 0.0, 0.0, 0.0, 0.0, -32.0]);
}

#[test]
fn test_extreme_boundary() {
    let payload = [0x01, 0x0F, 0x7F, 0x64, 0xFF, 0xFF, 0x00, 0x80, 0xFF, 0x7F, 0x00];
    let reading = Tbhv110Decoder::new().decode(&payload, None).unwrap();
    let values: Vec<f64> = reading.fields().iter().map(|(_, v)| *v).collect();
    assert_eq!(
        values,
        vec![1.0, 4.0, 95.0, 100.0, -1.0, -32768.0, 32767.0, -32.0]
    );
}

#[test]
fn test_battery_steps() {
    let decoder = Tbhv110Decoder::new();
    for nibble in 0u8..=15 {
        let mut payload = [0u8; 11];
        payload[1] = nibble;
        let reading = decoder.decode(&payload, None).unwrap();
        let expected = f64::from(25 + nibble) / 10.0;
        assert_eq!(reading.battery, expected);
    }
}

#[test]
fn test_little_endian_pairs() {
    let mut payload = [0u8; 11];
    payload[4] = 0x34;
    payload[5] = 0x12;
    payload[6] = 0x01;
    payload[8] = 0x00;
    payload[9] = 0x01;

    let reading = Tbhv110Decoder::new().decode(&payload, None).unwrap();
    assert_eq!(reading.eco2, 0x1234);
    assert_eq!(reading.voc, 1);
    assert_eq!(reading.iaq, 256);
}

#[test]
fn test_length_guard() {
    let decoder = Tbhv110Decoder::new();
    for len in [0usize, 1, 10, 12, 51] {
        let payload = vec![0xAAu8; len];
        assert_eq!(
            decoder.decode(&payload, None),
            Err(DecodeError::InvalidPayloadLength {
                expected: 11,
                actual: len
            })
        );
    }
}

#[test]
fn test_json_output() {
    let reading = Tbhv110Decoder::new().decode(&OFFICE_UPLINK, None).unwrap();
    let json: serde_json::Value = serde_json::from_str(&reading.to_json().unwrap()).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), FIELD_NAMES.len());
    for name in FIELD_NAMES {
        assert!(object.contains_key(name), "missing key {name}");
    }
    assert_eq!(json["Battery"], 3.6);
    assert_eq!(json["ECO2"], 612);
}

#[test]
fn test_pretty_json_keeps_order() {
    let reading = Tbhv110Decoder::new().decode(&OFFICE_UPLINK, None).unwrap();
    let pretty = reading.to_json_pretty().unwrap();

    let positions: Vec<usize> = FIELD_NAMES
        .iter()
        .map(|name| pretty.find(&format!("\"{name}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

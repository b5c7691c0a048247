#![no_main]

use libfuzzer_sys::fuzz_target;
use tbhv_rs::{decode_uplink, DecoderConfig, Tbhv110Decoder, PAYLOAD_LEN};

fuzz_target!(|data: &[u8]| {
    let decoder = Tbhv110Decoder::new();

    // Any length must either decode or fail with a length error, never panic
    let result = decoder.decode(data, None);
    assert_eq!(result.is_ok(), data.len() == PAYLOAD_LEN);

    if data.len() >= PAYLOAD_LEN {
        let _ = decoder.decode(&data[..PAYLOAD_LEN], Some(data[0]));
    }

    // Arbitrary text through the base64 transport
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_uplink(text, None, &DecoderConfig::default());
    }
});

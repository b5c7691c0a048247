use log::{debug, error, info, log_enabled, Level};

/// Log target shared by both halves of the decoder trace.
pub const PAYLOAD_TARGET: &str = "tbhv::payload";

/// Maximum number of payload bytes rendered by [`log_payload_hex`].
const MAX_LOG_BYTES: usize = 64;

/// Initializes the logger with the `env_logger` crate.
///
/// Honors `RUST_LOG`; set `RUST_LOG=tbhv::payload=debug` to see decoder traces.
pub fn init_logger() {
    env_logger::init();
}

/// Initializes the logger, ignoring the error if one is already installed.
///
/// Useful from tests, where several cases may race to set up logging.
pub fn try_init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Logs an error message.
pub fn log_error(message: &str) {
    if log_enabled!(Level::Error) {
        error!("{message}");
    }
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}

/// Logs a debug message.
pub fn log_debug(message: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{message}");
    }
}

/// Log payload bytes as uppercase hex at debug level.
///
/// Output is capped at 64 bytes so a garbage uplink cannot flood the log.
pub fn log_payload_hex(prefix: &str, data: &[u8]) {
    if !log_enabled!(target: PAYLOAD_TARGET, Level::Debug) {
        return;
    }

    let shown = &data[..data.len().min(MAX_LOG_BYTES)];
    let hex_str = crate::util::hex::encode_hex_upper(shown);
    let suffix = if data.len() > MAX_LOG_BYTES {
        format!(" ... ({} bytes total)", data.len())
    } else {
        String::new()
    };

    debug!(target: PAYLOAD_TARGET, "{prefix}: {hex_str}{suffix}");
}

/// Log a decoded value as pretty JSON at debug level, next to its input trace.
pub fn log_payload_json<T: serde::Serialize + std::fmt::Debug>(prefix: &str, value: &T) {
    if !log_enabled!(target: PAYLOAD_TARGET, Level::Debug) {
        return;
    }

    match serde_json::to_string_pretty(value) {
        Ok(json) => debug!(target: PAYLOAD_TARGET, "{prefix}: {json}"),
        Err(e) => debug!(target: PAYLOAD_TARGET, "{prefix}: {value:?} ({e})"),
    }
}

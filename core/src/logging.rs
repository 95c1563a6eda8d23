use log::Level;
use serde_json::Value;

use crate::errors::ViewerError;

/// Emit a structured record through the `log` facade.
///
/// `module` becomes the record target so filters such as
/// `RUST_LOG=peek.host=debug` select a single subsystem.
pub fn log_event(
    level: Level,
    code: Option<&str>,
    module: &str,
    message: &str,
    data: Option<Value>,
) {
    let code = code.unwrap_or("-");
    match data {
        Some(data) => log::log!(target: module, level, "[{code}] {message} {data}"),
        None => log::log!(target: module, level, "[{code}] {message}"),
    }
}

/// Log a [`ViewerError`] together with its catalogue code and explanation.
pub fn log_failure(level: Level, module: &str, message: &str, err: &ViewerError) {
    log_event(
        level,
        Some(err.code()),
        module,
        message,
        Some(serde_json::json!({
            "error": err.to_string(),
            "explain": err.explain(),
        })),
    );
}

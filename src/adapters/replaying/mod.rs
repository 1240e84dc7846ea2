//! Replaying adapters that serve recorded interactions from cassettes.

pub mod http_fetcher;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;

/// Retrieve the next recorded output for a given port and method.
///
/// # Errors
///
/// Returns an error if the cassette has no more interactions for the pair
/// or the replayer lock is poisoned.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, String> {
    let mut guard = replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
    guard.next_interaction(port, method).map(|i| i.output)
}

/// Deserialize a replayed output as `Result<T, String>`.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, String> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        return Err(err_val.as_str().unwrap_or("replayed error").to_string());
    }
    let value = output.get("Ok").or_else(|| output.get("ok")).cloned().unwrap_or(output);
    serde_json::from_value(value).map_err(|e| format!("malformed recorded output: {e}"))
}

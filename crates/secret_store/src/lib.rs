//! # Secret Store
//!
//! Secret file resolution: read a JSON object from disk and return the
//! string value under a key.
//!
//! The file is read fresh on every call, never cached: the secret is a
//! deployment artifact that may rotate under a running module. Every
//! failure mode (open, parse, shape, missing key, wrong type) surfaces as
//! [`SensorError::SecretResolution`] carrying the offending path, so the
//! reading path never degrades to a default value.

use std::path::Path;

use contracts::{Result, SensorError};
use tracing::trace;

/// Resolve the string value under `key` in the JSON object at `path`.
///
/// # Errors
/// `SecretResolution` for an unreadable file, invalid JSON, a non-object
/// top level, an absent key, or a non-string value.
pub async fn resolve(path: &Path, key: &str) -> Result<String> {
    trace!(path = %path.display(), key, "resolving secret");

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| SensorError::secret_resolution(path, format!("failed to open secret file: {e}")))?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| SensorError::secret_resolution(path, format!("malformed json file: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| SensorError::secret_resolution(path, "secret file is not a JSON object"))?;

    let entry = object
        .get(key)
        .ok_or_else(|| SensorError::secret_resolution(path, format!("key `{key}` not found")))?;

    entry
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| SensorError::secret_resolution(path, format!("key `{key}` is not a string")))
}

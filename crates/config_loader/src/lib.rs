//! # Config Loader
//!
//! Extraction of the sensor configuration from the host attribute map.
//!
//! Responsibilities:
//! - Extract `limit` and `secret_path`
//! - Fail fast on absent or unconvertible required attributes
//!
//! Extraction is pure and re-invocable: every reconfiguration repeats it
//! from scratch and the result replaces prior state wholesale.
//!
//! # Example
//!
//! ```
//! use config_loader::SensorConfig;
//! use contracts::AttributeMap;
//!
//! let mut attrs = AttributeMap::new();
//! attrs.insert("limit", 100);
//! attrs.insert("secret_path", "/etc/app/secret.json");
//!
//! let config = SensorConfig::from_attributes(&attrs).unwrap();
//! assert_eq!(config.limit, 100);
//! ```

use std::path::PathBuf;

use contracts::{AttributeMap, Result, SensorError};
use tracing::debug;

/// Extracted sensor configuration.
///
/// Zero and negative limits pass extraction; the reading path guards the
/// division instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    /// Document budget the count is measured against.
    pub limit: i64,
    /// Path of the JSON secret file holding the database URL.
    pub secret_path: PathBuf,
}

impl SensorConfig {
    /// Extract a complete configuration from host attributes.
    ///
    /// # Errors
    /// - `limit` absent: "limit must be specified"
    /// - `limit` present but not integer-convertible
    /// - `secret_path` absent or empty: "secret path must be specified"
    pub fn from_attributes(attributes: &AttributeMap) -> Result<Self> {
        let limit = extract_limit(attributes)?;
        let secret_path = extract_secret_path(attributes)?;

        debug!(limit, secret_path = %secret_path.display(), "using configured limit");

        Ok(Self { limit, secret_path })
    }
}

fn extract_limit(attributes: &AttributeMap) -> Result<i64> {
    let raw = attributes
        .get("limit")
        .ok_or_else(|| SensorError::configuration("limit must be specified"))?;

    attributes.get_i64("limit").ok_or_else(|| {
        SensorError::configuration(format!("limit must be an integer, got {raw}"))
    })
}

fn extract_secret_path(attributes: &AttributeMap) -> Result<PathBuf> {
    match attributes.get_str("secret_path") {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(SensorError::configuration("secret path must be specified")),
    }
}

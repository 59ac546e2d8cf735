//! Model identity and the host-facing sensor trait.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{AttributeMap, Readings, Result, SensorError};

/// Fully qualified model identifier: `namespace:family:name`.
///
/// Cheap to clone (`Arc<str>` per segment), hashable, and usable as a
/// registry key.
///
/// # Examples
/// ```
/// use contracts::ModelId;
///
/// let id = ModelId::new("viam-data-ml", "sensor", "adfneedle");
/// assert_eq!(id.to_string(), "viam-data-ml:sensor:adfneedle");
/// let parsed: ModelId = "viam-data-ml:sensor:adfneedle".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId {
    namespace: Arc<str>,
    family: Arc<str>,
    name: Arc<str>,
}

impl ModelId {
    /// Create a model id from its three segments.
    pub fn new(namespace: &str, family: &str, name: &str) -> Self {
        Self {
            namespace: Arc::from(namespace),
            family: Arc::from(family),
            name: Arc::from(name),
        }
    }

    /// Namespace segment.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Family segment.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Model name segment.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.family, self.name)
    }
}

impl FromStr for ModelId {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(ns), Some(family), Some(name), None)
                if !ns.is_empty() && !family.is_empty() && !name.is_empty() =>
            {
                Ok(Self::new(ns, family, name))
            }
            _ => Err(SensorError::configuration(format!(
                "invalid model id '{s}', expected namespace:family:name"
            ))),
        }
    }
}

/// Per-call options forwarded by the host with a reading request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingOptions {
    /// Optional caller deadline, propagated to the database driver when
    /// supported. Never enforced internally when absent.
    pub timeout: Option<Duration>,
}

impl ReadingOptions {
    /// Options with a caller timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Host-facing sensor model contract.
///
/// The host serializes `reconfigure` against reads (encoded here in the
/// `&mut self` receiver); `get_readings` takes `&self` and may be invoked
/// concurrently.
#[async_trait]
pub trait Sensor: Send + Sync {
    /// Re-extract configuration from the host attributes, replacing prior
    /// state wholesale. A failed reconfiguration must leave prior state
    /// untouched.
    fn reconfigure(&mut self, attributes: &AttributeMap) -> Result<()>;

    /// Produce one set of named readings. No state survives between calls.
    async fn get_readings(&self, options: ReadingOptions) -> Result<Readings>;

    /// Release held resources. Models that open per-call connections have
    /// nothing to tear down.
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for dyn Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Sensor")
    }
}

//! UsageSensor core implementation
//!
//! Per reading request: resolve the database URL from the secret file,
//! count documents through the [`DocumentCounter`], derive the usage ratio.
//! No state besides the extracted configuration survives between calls.

use async_trait::async_trait;
use config_loader::SensorConfig;
use contracts::{
    AttributeMap, ModelId, ReadingOptions, Readings, Result, Sensor, SensorError,
};
use tracing::instrument;

use crate::counter::DocumentCounter;
use crate::metrics::{record_reading_failed, record_reading_served};

/// Secret file key holding the database connection string.
pub const URL_KEY: &str = "url";

/// Model id this sensor registers under.
pub fn model() -> ModelId {
    ModelId::new("viam-data-ml", "sensor", "adfneedle")
}

/// Usage sensor: reports document count against a configured limit.
///
/// Generic over the database client so tests can substitute a mock.
pub struct UsageSensor<C> {
    config: SensorConfig,
    counter: C,
}

impl<C: DocumentCounter> UsageSensor<C> {
    /// Construct from host attributes.
    ///
    /// Extraction runs before anything is stored, so construction either
    /// yields a fully configured sensor or nothing.
    pub fn new(attributes: &AttributeMap, counter: C) -> Result<Self> {
        let config = SensorConfig::from_attributes(attributes)?;
        Ok(Self { config, counter })
    }

    /// Currently configured limit.
    pub fn limit(&self) -> i64 {
        self.config.limit
    }

    /// Currently configured secret file path.
    pub fn secret_path(&self) -> &std::path::Path {
        &self.config.secret_path
    }

    #[instrument(name = "usage_sensor_read", skip(self, options), fields(limit = self.config.limit))]
    async fn read(&self, options: &ReadingOptions) -> Result<Readings> {
        let url = secret_store::resolve(&self.config.secret_path, URL_KEY).await?;
        let count = self.counter.count_documents(&url, options.timeout).await?;

        // Guard the division; a zero limit must never escape as an
        // unclassified arithmetic fault.
        if self.config.limit == 0 {
            return Err(SensorError::ZeroLimit);
        }
        let usage = count as f64 / self.config.limit as f64;

        let mut readings = Readings::new();
        readings.insert("limit", self.config.limit);
        readings.insert("count", count);
        readings.insert("usage", usage);

        record_reading_served(count, usage);
        Ok(readings)
    }
}

#[async_trait]
impl<C: DocumentCounter + 'static> Sensor for UsageSensor<C> {
    /// Replace the configuration wholesale. On failure the prior
    /// configuration stays in effect.
    fn reconfigure(&mut self, attributes: &AttributeMap) -> Result<()> {
        self.config = SensorConfig::from_attributes(attributes)?;
        Ok(())
    }

    async fn get_readings(&self, options: ReadingOptions) -> Result<Readings> {
        match self.read(&options).await {
            Ok(readings) => Ok(readings),
            Err(e) => {
                record_reading_failed();
                Err(e)
            }
        }
    }
}

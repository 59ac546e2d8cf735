//! # Usage Sensor
//!
//! The `adfneedle` sensor model: a config-driven metered reading over a
//! document database.
//!
//! On each reading request the sensor resolves a database URL from a JSON
//! secret file, counts the documents in a fixed collection over a fresh
//! connection, and reports `{limit, count, usage}` where
//! `usage = count / limit`.
//!
//! The database client sits behind the [`DocumentCounter`] trait, with a
//! real MongoDB implementation (feature `real-mongo`, on by default) and a
//! mock with failure injection for tests.

mod counter;
mod metrics;
mod mock;
#[cfg(feature = "real-mongo")]
mod mongo;
mod sensor;

pub use counter::DocumentCounter;
pub use mock::{MockCounter, MockCounterConfig};
#[cfg(feature = "real-mongo")]
pub use mongo::MongoCounter;
pub use sensor::{model, UsageSensor, URL_KEY};

#[cfg(feature = "real-mongo")]
use contracts::{Registry, Result};

/// Install this crate's models into a host registry.
///
/// Registers `viam-data-ml:sensor:adfneedle` backed by the real MongoDB
/// counter. Construction extracts the configuration, so a bad config fails
/// at build time and the registry never hands out a half-configured model.
#[cfg(feature = "real-mongo")]
pub fn register_models(registry: &mut Registry) -> Result<()> {
    registry.register(model(), |attributes| {
        let sensor = UsageSensor::new(attributes, MongoCounter::new())?;
        Ok(Box::new(sensor) as Box<dyn contracts::Sensor>)
    })
}

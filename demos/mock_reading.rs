//! End-to-end demo of the usage sensor against the mock counter.
//!
//! Mirrors what a host process does: install the model in a registry,
//! construct it from attributes, then poll readings. Run with:
//!
//! ```bash
//! cargo run --bin mock_reading
//! ```

use std::io::Write;

use anyhow::Result;
use contracts::{AttributeMap, ReadingOptions, Registry, Sensor};
use tracing::info;
use usage_sensor::{MockCounter, UsageSensor};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_with_config(observability::ObservabilityConfig {
        log_format: observability::LogFormat::Pretty,
        metrics_port: None,
        default_log_level: "debug".to_string(),
    })?;

    // Stand-in for the deployment-owned secret file.
    let mut secret = tempfile::NamedTempFile::new()?;
    secret.write_all(br#"{"url": "mongodb://demo-host/syncDB"}"#)?;

    // The host would install the MongoDB-backed model; the demo installs
    // the same model backed by the mock so it runs without a database.
    let mock = MockCounter::with_count(37);
    let mut registry = Registry::new();
    registry.register(usage_sensor::model(), {
        let mock = mock.clone();
        move |attributes| {
            let sensor = UsageSensor::new(attributes, mock.clone())?;
            Ok(Box::new(sensor) as Box<dyn Sensor>)
        }
    })?;

    let attributes = AttributeMap::try_from(serde_json::json!({
        "limit": 100,
        "secret_path": secret.path().to_str().unwrap(),
    }))?;

    let sensor = registry.build(&usage_sensor::model(), &attributes)?;

    for poll in 0..3 {
        let readings = sensor.get_readings(ReadingOptions::default()).await?;
        info!(
            poll,
            limit = readings.get("limit").and_then(|v| v.as_i64()),
            count = readings.get("count").and_then(|v| v.as_i64()),
            usage = readings.get("usage").map(|v| v.as_f64()),
            "reading produced"
        );
        mock.set_count(mock.call_count() as i64 * 10 + 37);
    }

    Ok(())
}

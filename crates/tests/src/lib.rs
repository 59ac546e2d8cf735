//! # Integration Tests
//!
//! End-to-end tests over the registry -> sensor -> counter path, without a
//! real database (the mock counter stands in for MongoDB).

#[cfg(test)]
mod e2e_tests {
    use std::io::Write;
    use std::time::Duration;

    use contracts::{AttributeMap, ModelId, ReadingOptions, Registry, Sensor, SensorError};
    use serde_json::json;
    use usage_sensor::{MockCounter, UsageSensor};

    fn secret_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn attrs(limit: i64, secret_path: &std::path::Path) -> AttributeMap {
        AttributeMap::try_from(json!({
            "limit": limit,
            "secret_path": secret_path.to_str().unwrap(),
        }))
        .unwrap()
    }

    /// Registry installed with a mock-backed build of the usage sensor
    /// model, the way a host process would install the real one.
    fn mock_registry(mock: MockCounter) -> Registry {
        let mut registry = Registry::new();
        registry
            .register(usage_sensor::model(), move |attributes| {
                let sensor = UsageSensor::new(attributes, mock.clone())?;
                Ok(Box::new(sensor) as Box<dyn Sensor>)
            })
            .unwrap();
        registry
    }

    /// Full path: registry lookup -> construction -> reading.
    ///
    /// limit 100, 37 documents -> {limit: 100, count: 37, usage: 0.37}.
    #[tokio::test]
    async fn test_e2e_reading_through_registry() {
        let file = secret_file(r#"{"url": "mongodb://host/db"}"#);
        let mock = MockCounter::with_count(37);
        let registry = mock_registry(mock.clone());

        let sensor = registry
            .build(&usage_sensor::model(), &attrs(100, file.path()))
            .unwrap();
        let readings = sensor.get_readings(ReadingOptions::default()).await.unwrap();

        assert_eq!(readings.get("limit").unwrap().as_i64(), Some(100));
        assert_eq!(readings.get("count").unwrap().as_i64(), Some(37));
        assert_eq!(readings.get("usage").unwrap().as_f64(), 0.37);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_e2e_concurrent_readings_share_no_state() {
        let file = secret_file(r#"{"url": "mongodb://host/db"}"#);
        let mock = MockCounter::with_count(4);
        let registry = mock_registry(mock.clone());
        let sensor = registry
            .build(&usage_sensor::model(), &attrs(8, file.path()))
            .unwrap();

        let (a, b) = tokio::join!(
            sensor.get_readings(ReadingOptions::default()),
            sensor.get_readings(ReadingOptions::with_timeout(Duration::from_secs(1))),
        );
        assert_eq!(a.unwrap().get("usage").unwrap().as_f64(), 0.5);
        assert_eq!(b.unwrap().get("usage").unwrap().as_f64(), 0.5);
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_e2e_bad_config_fails_at_build_time() {
        let registry = mock_registry(MockCounter::with_count(0));

        let missing_limit =
            AttributeMap::try_from(json!({ "secret_path": "/tmp/secret.json" })).unwrap();
        let err = registry
            .build(&usage_sensor::model(), &missing_limit)
            .unwrap_err();
        assert!(matches!(err, SensorError::Configuration { .. }));
    }

    #[test]
    fn test_e2e_unknown_model() {
        let registry = mock_registry(MockCounter::with_count(0));
        let other = ModelId::new("viam-data-ml", "sensor", "no-such-model");
        let err = registry.build(&other, &AttributeMap::new()).unwrap_err();
        assert!(matches!(err, SensorError::ModelNotFound { .. }));
    }

    /// Reconfiguration twice with the same config is observationally
    /// identical to once.
    #[tokio::test]
    async fn test_e2e_reconfiguration_idempotent() {
        let file = secret_file(r#"{"url": "mongodb://host/db"}"#);
        let mock = MockCounter::with_count(3);
        let registry = mock_registry(mock);
        let mut sensor = registry
            .build(&usage_sensor::model(), &attrs(10, file.path()))
            .unwrap();

        let same = attrs(10, file.path());
        sensor.reconfigure(&same).unwrap();
        sensor.reconfigure(&same).unwrap();

        let readings = sensor.get_readings(ReadingOptions::default()).await.unwrap();
        assert_eq!(readings.get("limit").unwrap().as_i64(), Some(10));
        assert_eq!(readings.get("usage").unwrap().as_f64(), 0.3);
    }

    /// Secret rotation between calls takes effect without reconfiguration.
    #[tokio::test]
    async fn test_e2e_secret_rotation_between_readings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.json");
        std::fs::write(&path, r#"{"url": "mongodb://old/db"}"#).unwrap();

        let mock = MockCounter::with_count(1);
        let registry = mock_registry(mock.clone());
        let sensor = registry
            .build(&usage_sensor::model(), &attrs(10, &path))
            .unwrap();

        sensor.get_readings(ReadingOptions::default()).await.unwrap();
        assert_eq!(mock.last_url().as_deref(), Some("mongodb://old/db"));

        std::fs::write(&path, r#"{"url": "mongodb://new/db"}"#).unwrap();
        sensor.get_readings(ReadingOptions::default()).await.unwrap();
        assert_eq!(mock.last_url().as_deref(), Some("mongodb://new/db"));
    }

    #[tokio::test]
    async fn test_e2e_close_is_a_noop_for_per_call_connections() {
        let file = secret_file(r#"{"url": "mongodb://host/db"}"#);
        let registry = mock_registry(MockCounter::with_count(1));
        let mut sensor = registry
            .build(&usage_sensor::model(), &attrs(10, file.path()))
            .unwrap();
        sensor.close().await.unwrap();
    }
}

#[cfg(test)]
mod error_path_tests {
    use std::io::Write;

    use contracts::{AttributeMap, ReadingOptions, Sensor, SensorError};
    use serde_json::json;
    use usage_sensor::{MockCounter, MockCounterConfig, UsageSensor};

    fn sensor_with(
        limit: i64,
        secret_path: &std::path::Path,
        mock: MockCounter,
    ) -> UsageSensor<MockCounter> {
        let attrs = AttributeMap::try_from(json!({
            "limit": limit,
            "secret_path": secret_path.to_str().unwrap(),
        }))
        .unwrap();
        UsageSensor::new(&attrs, mock).unwrap()
    }

    #[tokio::test]
    async fn test_missing_secret_file_is_an_error_reading() {
        let sensor = sensor_with(
            100,
            std::path::Path::new("/nonexistent/secret.json"),
            MockCounter::with_count(5),
        );
        let err = sensor.get_readings(ReadingOptions::default()).await.unwrap_err();
        assert!(matches!(err, SensorError::SecretResolution { .. }));
    }

    #[tokio::test]
    async fn test_malformed_secret_file_is_an_error_reading() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let sensor = sensor_with(100, file.path(), MockCounter::with_count(5));
        let err = sensor.get_readings(ReadingOptions::default()).await.unwrap_err();
        assert!(matches!(err, SensorError::SecretResolution { .. }));
    }

    #[tokio::test]
    async fn test_connect_failure_classified_as_database_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"url": "mongodb://unreachable/db"}"#).unwrap();

        let mock = MockCounter::with_config(MockCounterConfig {
            fail_connect: true,
            ..Default::default()
        });
        let sensor = sensor_with(100, file.path(), mock);
        let err = sensor.get_readings(ReadingOptions::default()).await.unwrap_err();
        assert!(matches!(err, SensorError::Database { .. }));
    }

    #[tokio::test]
    async fn test_zero_limit_never_panics() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"url": "mongodb://host/db"}"#).unwrap();

        let sensor = sensor_with(0, file.path(), MockCounter::with_count(123));
        let err = sensor.get_readings(ReadingOptions::default()).await.unwrap_err();
        assert!(matches!(err, SensorError::ZeroLimit));
    }
}

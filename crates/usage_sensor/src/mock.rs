//! Mock document counter
//!
//! Mock implementation for unit tests, supporting failure injection and
//! call inspection. Clones share state, so tests can keep a handle after
//! handing one to a sensor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use contracts::{Result, SensorError};
use tracing::instrument;

use crate::counter::DocumentCounter;

/// Mock counter configuration
#[derive(Debug, Default, Clone)]
pub struct MockCounterConfig {
    /// Count returned by successful calls
    pub count: i64,
    /// Fail as if the connection could not be established
    pub fail_connect: bool,
    /// Fail as if the aggregation query errored
    pub fail_query: bool,
}

#[derive(Debug, Default)]
struct MockState {
    config: Mutex<MockCounterConfig>,
    calls: AtomicU64,
    last_url: Mutex<Option<String>>,
    last_timeout: Mutex<Option<Duration>>,
}

/// Mock document counter
#[derive(Debug, Clone, Default)]
pub struct MockCounter {
    state: Arc<MockState>,
}

impl MockCounter {
    /// Mock returning a fixed count.
    pub fn with_count(count: i64) -> Self {
        Self::with_config(MockCounterConfig {
            count,
            ..Default::default()
        })
    }

    /// Mock with full configuration (failure injection).
    pub fn with_config(config: MockCounterConfig) -> Self {
        let mock = Self::default();
        *mock.state.config.lock().unwrap() = config;
        mock
    }

    /// Replace the returned count on a live mock.
    pub fn set_count(&self, count: i64) {
        self.state.config.lock().unwrap().count = count;
    }

    /// Number of counting calls observed.
    pub fn call_count(&self) -> u64 {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// URL passed to the most recent call.
    pub fn last_url(&self) -> Option<String> {
        self.state.last_url.lock().unwrap().clone()
    }

    /// Timeout passed to the most recent call.
    pub fn last_timeout(&self) -> Option<Duration> {
        *self.state.last_timeout.lock().unwrap()
    }
}

impl DocumentCounter for MockCounter {
    #[instrument(name = "mock_count_documents", skip(self, url))]
    async fn count_documents(&self, url: &str, timeout: Option<Duration>) -> Result<i64> {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        *self.state.last_url.lock().unwrap() = Some(url.to_string());
        *self.state.last_timeout.lock().unwrap() = timeout;

        let config = self.state.config.lock().unwrap().clone();
        if config.fail_connect {
            return Err(SensorError::database("mock connection failure"));
        }
        if config.fail_query {
            return Err(SensorError::database("mock query failure"));
        }
        Ok(config.count)
    }
}

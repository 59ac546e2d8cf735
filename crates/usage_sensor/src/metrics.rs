//! Reading metrics for observability

use metrics::{counter, gauge};

/// Record a successfully served reading.
///
/// Called once per reading request that produced a full result.
pub(crate) fn record_reading_served(count: i64, usage: f64) {
    counter!("adfneedle_readings_total").increment(1);
    gauge!("adfneedle_last_count").set(count as f64);
    gauge!("adfneedle_last_usage").set(usage);
}

/// Record a failed reading request.
pub(crate) fn record_reading_failed() {
    counter!("adfneedle_reading_failures_total").increment(1);
}

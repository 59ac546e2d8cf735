//! Document counter abstraction
//!
//! Defines the trait for the database round trip, supporting the real
//! MongoDB implementation and mock testing.

use std::future::Future;
use std::time::Duration;

use contracts::Result;

/// Client-side view of the counting aggregation.
///
/// One call equals one short-lived connection: the URL is passed per call
/// and no connection state survives between calls (no pooling, no reuse).
pub trait DocumentCounter: Send + Sync {
    /// Count all documents in the backing collection.
    ///
    /// # Arguments
    /// * `url` - Database connection string resolved from the secret file
    /// * `timeout` - Optional caller deadline, forwarded to the driver when
    ///   supported
    ///
    /// # Errors
    /// Connection and query failures surface as `SensorError::Database`.
    fn count_documents(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> impl Future<Output = Result<i64>> + Send;
}

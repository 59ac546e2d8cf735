//! MongoDB-backed document counter
//!
//! Fresh client per call: connect, run a single `$count` aggregation over
//! the fixed collection, tear the client down. Low call volume makes the
//! per-call connection acceptable (pooling is an explicit non-feature).

use std::time::Duration;

use contracts::{Result, SensorError};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::Client;
use tracing::instrument;

use crate::counter::DocumentCounter;

/// Database holding the federation records.
pub const DATABASE: &str = "syncDB";
/// Collection whose documents are counted.
pub const COLLECTION: &str = "data_federations";

const COUNT_FIELD: &str = "count";

/// Counter over the fixed `syncDB/data_federations` collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoCounter;

impl MongoCounter {
    /// Create a new counter. Holds no connection state.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCounter for MongoCounter {
    #[instrument(name = "mongo_count_documents", skip(self, url))]
    async fn count_documents(&self, url: &str, timeout: Option<Duration>) -> Result<i64> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| SensorError::database_with_source("invalid connection string", e))?;
        if let Some(timeout) = timeout {
            options.server_selection_timeout = Some(timeout);
        }

        let client = Client::with_options(options)
            .map_err(|e| SensorError::database_with_source("error connecting to client", e))?;

        let result = run_count(&client).await;
        client.shutdown().await;
        result
    }
}

async fn run_count(client: &Client) -> Result<i64> {
    let collection = client.database(DATABASE).collection::<Document>(COLLECTION);

    let mut cursor = collection
        .aggregate([doc! { "$count": COUNT_FIELD }])
        .await
        .map_err(|e| SensorError::database_with_source("error running query", e))?;

    let first = cursor
        .try_next()
        .await
        .map_err(|e| SensorError::database_with_source("error reading query result", e))?;

    match first {
        // $count emits no output document over an empty collection.
        None => Ok(0),
        Some(document) => match document.get(COUNT_FIELD) {
            Some(Bson::Int32(n)) => Ok(i64::from(*n)),
            Some(Bson::Int64(n)) => Ok(*n),
            other => Err(SensorError::database(format!(
                "count aggregation returned non-integer `{COUNT_FIELD}` field: {other:?}"
            ))),
        },
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::core::config::StoreConfig;

/// A stored document: a flat JSON object. The store-assigned identity is
/// kept in the `_id` field and is always a plain string on the way out.
pub type Document = serde_json::Map<String, Value>;

/// Serialize a model into a flat document for storage.
pub fn to_document<T: serde::Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Backend(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(StoreError::Backend(e.to_string())),
    }
}

/// Deserialize a stored document back into a model.
pub fn from_document<T: serde::de::DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(doc)).map_err(|e| StoreError::Backend(e.to_string()))
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unreachable after {attempts} attempts: {message}")]
    Unavailable { attempts: u32, message: String },

    #[error("document store error: {0}")]
    Backend(String),
}

/// Primitive operations a concrete store driver must provide.
///
/// `namespace` is `<database>.<collection>`; filters are equality matches on
/// document fields. `update_one` merges the given fields into the first
/// matching document (`$set` semantics) and reports whether the document
/// actually changed, not merely whether it matched.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Cheap liveness probe; fails when the store is unreachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn insert(&self, namespace: &str, doc: Document) -> Result<String, StoreError>;

    async fn find_all(&self, namespace: &str) -> Result<Vec<Document>, StoreError>;

    async fn find_one(
        &self,
        namespace: &str,
        filter: &Document,
    ) -> Result<Option<Document>, StoreError>;

    async fn update_one(
        &self,
        namespace: &str,
        filter: &Document,
        fields: Document,
    ) -> Result<u64, StoreError>;

    async fn delete_one(&self, namespace: &str, filter: &Document) -> Result<u64, StoreError>;
}

/// Gateway in front of the store backend, scoped to one named database.
///
/// Every operation first verifies connectivity and, when the backend is
/// down, retries a bounded number of times with a fixed delay before
/// surfacing [`StoreError::Unavailable`].
pub struct DocumentStore {
    backend: Arc<dyn StoreBackend>,
    database: String,
    connect_retries: u32,
    retry_delay: Duration,
}

impl DocumentStore {
    pub fn new(backend: Arc<dyn StoreBackend>, config: &StoreConfig) -> Self {
        Self {
            backend,
            database: config.database.clone(),
            connect_retries: config.connect_retries.max(1),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }

    fn namespace(&self, collection: &str) -> String {
        format!("{}.{}", self.database, collection)
    }

    /// Probe the backend, retrying up to `connect_retries` times.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut last_message = String::new();
        for attempt in 1..=self.connect_retries {
            match self.backend.ping().await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        "Store ping attempt {}/{} failed: {}",
                        attempt,
                        self.connect_retries,
                        e
                    );
                    last_message = e.to_string();
                    if attempt < self.connect_retries {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }
        tracing::error!(
            "Document store unreachable after {} attempts",
            self.connect_retries
        );
        Err(StoreError::Unavailable {
            attempts: self.connect_retries,
            message: last_message,
        })
    }

    /// Insert a single document; returns the store-assigned id.
    pub async fn create(&self, collection: &str, doc: Document) -> Result<String, StoreError> {
        self.ping().await?;
        self.backend.insert(&self.namespace(collection), doc).await
    }

    /// Full collection scan. Ids come back as plain strings in `_id`.
    pub async fn read(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.ping().await?;
        self.backend.find_all(&self.namespace(collection)).await
    }

    /// First document matching the filter, or `None`.
    pub async fn read_one(
        &self,
        collection: &str,
        filter: &Document,
    ) -> Result<Option<Document>, StoreError> {
        self.ping().await?;
        self.backend
            .find_one(&self.namespace(collection), filter)
            .await
    }

    /// `$set`-merge `fields` into the first matching document; returns the
    /// modified count (0 when nothing matched or nothing changed).
    pub async fn update(
        &self,
        collection: &str,
        filter: &Document,
        fields: Document,
    ) -> Result<u64, StoreError> {
        self.ping().await?;
        self.backend
            .update_one(&self.namespace(collection), filter, fields)
            .await
    }

    /// Delete the first matching document; returns the deleted count.
    pub async fn delete(&self, collection: &str, filter: &Document) -> Result<u64, StoreError> {
        self.ping().await?;
        self.backend
            .delete_one(&self.namespace(collection), filter)
            .await
    }
}

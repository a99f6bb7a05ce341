use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::states::dtos::{CreateStateDto, UpdateStateDto};
use crate::features::states::models::State;
use crate::modules::store::{from_document, to_document, Document, DocumentStore};
use crate::shared::constants::{CODE, DOC_ID, NAME, STATE_COLLECTION};

type StateCache = Option<HashMap<(String, String), State>>;

/// Query service for the state collection.
///
/// The cache is keyed by `(code, country_code)` and backs the composite
/// uniqueness check on create. Cache lifecycle: uninitialized until the
/// first access, then reloaded wholesale after every mutation; never
/// partially invalidated. Documents missing either key field are skipped
/// during the load rather than failing the whole scan.
pub struct StateService {
    store: Arc<DocumentStore>,
    cache: RwLock<StateCache>,
}

impl StateService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(AppError::InvalidId("Invalid id".to_string()));
        }
        Ok(())
    }

    fn id_filter(id: &str) -> Document {
        let mut filter = Document::new();
        filter.insert(DOC_ID.to_string(), Value::String(id.to_string()));
        filter
    }

    fn cache_guard(&self) -> Result<RwLockReadGuard<'_, StateCache>> {
        self.cache
            .read()
            .map_err(|_| AppError::Internal("state cache lock poisoned".to_string()))
    }

    /// Rebuild the cache from a full collection scan.
    async fn reload_cache(&self) -> Result<()> {
        let docs = self.store.read(STATE_COLLECTION).await?;
        let mut fresh = HashMap::with_capacity(docs.len());
        for doc in docs {
            match from_document::<State>(doc) {
                Ok(state) => {
                    fresh.insert(state.composite_key(), state);
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed state document: {}", e);
                }
            }
        }
        let mut guard = self
            .cache
            .write()
            .map_err(|_| AppError::Internal("state cache lock poisoned".to_string()))?;
        *guard = Some(fresh);
        Ok(())
    }

    /// Precondition for every public operation: the cache must be
    /// populated before the duplicate check (or any read) can be trusted.
    async fn ensure_cache(&self) -> Result<()> {
        if self.cache_guard()?.is_none() {
            self.reload_cache().await?;
        }
        Ok(())
    }

    /// Insert a new state; fails with `DuplicateKey` when the
    /// `(code, country_code)` pair is already present.
    pub async fn create(&self, dto: CreateStateDto) -> Result<String> {
        self.ensure_cache().await?;
        for (field, value) in [
            ("name", &dto.name),
            ("code", &dto.code),
            ("country_code", &dto.country_code),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Bad value for {field}: {value:?}"
                )));
            }
        }
        let key = (dto.code.clone(), dto.country_code.clone());
        {
            let guard = self.cache_guard()?;
            if guard.as_ref().is_some_and(|cache| cache.contains_key(&key)) {
                return Err(AppError::DuplicateKey(format!(
                    "code={}, country_code={}",
                    dto.code, dto.country_code
                )));
            }
        }
        let state = State {
            id: None,
            name: dto.name,
            code: dto.code,
            country_code: dto.country_code,
        };
        let id = self
            .store
            .create(STATE_COLLECTION, to_document(&state)?)
            .await?;
        tracing::info!("State created: id={}", id);
        self.reload_cache().await?;
        Ok(id)
    }

    /// All states, from the cache.
    pub async fn read(&self) -> Result<Vec<State>> {
        self.ensure_cache().await?;
        let guard = self.cache_guard()?;
        Ok(guard
            .as_ref()
            .map(|cache| cache.values().cloned().collect())
            .unwrap_or_default())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<State> {
        self.ensure_cache().await?;
        Self::validate_id(id)?;
        let doc = self
            .store
            .read_one(STATE_COLLECTION, &Self::id_filter(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("State not found: {id}")))?;
        Ok(from_document(doc)?)
    }

    /// Merge the given fields into a state; returns whether the document
    /// actually changed. The cache is reloaded unconditionally since the
    /// update may have touched a composite key field.
    pub async fn update_by_id(&self, id: &str, dto: UpdateStateDto) -> Result<bool> {
        self.ensure_cache().await?;
        Self::validate_id(id)?;
        for (field, value) in [
            ("name", &dto.name),
            ("code", &dto.code),
            ("country_code", &dto.country_code),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(AppError::Validation(format!(
                        "Bad value for {field}: {value:?}"
                    )));
                }
            }
        }
        let fields = to_document(&dto)?;
        if fields.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }
        let modified = self
            .store
            .update(STATE_COLLECTION, &Self::id_filter(id), fields)
            .await?;
        self.reload_cache().await?;
        Ok(modified > 0)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        self.ensure_cache().await?;
        Self::validate_id(id)?;
        let deleted = self
            .store
            .delete(STATE_COLLECTION, &Self::id_filter(id))
            .await?;
        self.reload_cache().await?;
        Ok(deleted > 0)
    }

    /// Delete by natural key; errors when nothing matched.
    pub async fn delete(&self, name: &str, code: &str) -> Result<u64> {
        let mut filter = Document::new();
        filter.insert(NAME.to_string(), Value::String(name.to_string()));
        filter.insert(CODE.to_string(), Value::String(code.to_string()));
        let deleted = self.store.delete(STATE_COLLECTION, &filter).await?;
        if deleted < 1 {
            return Err(AppError::NotFound(format!("State not found: {code}")));
        }
        self.reload_cache().await?;
        Ok(deleted)
    }

    /// Number of distinct `(code, country_code)` pairs currently cached.
    pub async fn num_states(&self) -> Result<usize> {
        self.ensure_cache().await?;
        let guard = self.cache_guard()?;
        Ok(guard.as_ref().map(HashMap::len).unwrap_or_default())
    }

    pub async fn count(&self) -> Result<usize> {
        self.num_states().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StoreConfig;
    use crate::modules::store::MemoryBackend;

    fn service() -> StateService {
        let config = StoreConfig {
            database: "geo_test".to_string(),
            connect_retries: 1,
            retry_delay_ms: 0,
        };
        let store = Arc::new(DocumentStore::new(Arc::new(MemoryBackend::new()), &config));
        StateService::new(store)
    }

    fn state(name: &str, code: &str, country_code: &str) -> CreateStateDto {
        CreateStateDto {
            name: name.to_string(),
            code: code.to_string(),
            country_code: country_code.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let svc = service();
        let id = svc.create(state("New York", "NY", "USA")).await.unwrap();

        let found = svc.get_by_id(&id).await.unwrap();
        assert_eq!(found.name, "New York");
        assert_eq!(found.code, "NY");
        assert_eq!(found.country_code, "USA");
    }

    #[tokio::test]
    async fn duplicate_composite_key_is_rejected() {
        let svc = service();
        svc.create(state("New York", "NY", "USA")).await.unwrap();

        let err = svc
            .create(state("Not York", "NY", "USA"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));

        // Same code under a different country is fine.
        svc.create(state("North Yorkshire", "NY", "GBR"))
            .await
            .unwrap();
        assert_eq!(svc.num_states().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let svc = service();
        for dto in [
            state("", "NY", "USA"),
            state("New York", "", "USA"),
            state("New York", "NY", " "),
        ] {
            let err = svc.create(dto).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn update_can_move_the_composite_key() {
        let svc = service();
        let id = svc.create(state("New York", "NY", "USA")).await.unwrap();

        let modified = svc
            .update_by_id(
                &id,
                UpdateStateDto {
                    name: None,
                    code: Some("NX".to_string()),
                    country_code: None,
                },
            )
            .await
            .unwrap();
        assert!(modified);

        // Old pair is free again after the wholesale reload.
        svc.create(state("New York 2", "NY", "USA")).await.unwrap();
        assert_eq!(svc.num_states().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_by_id_and_count() {
        let svc = service();
        let id = svc.create(state("New York", "NY", "USA")).await.unwrap();
        svc.create(state("Texas", "TX", "USA")).await.unwrap();
        assert_eq!(svc.count().await.unwrap(), 2);

        assert!(svc.delete_by_id(&id).await.unwrap());
        assert_eq!(svc.count().await.unwrap(), 1);
        assert!(!svc.delete_by_id(&id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_by_natural_key() {
        let svc = service();
        svc.create(state("Texas", "TX", "USA")).await.unwrap();

        let err = svc.delete("Nowhere", "ZZ").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let deleted = svc.delete("Texas", "TX").await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(svc.num_states().await.unwrap(), 0);

        // The pair is reusable once the record is gone.
        svc.create(state("Texas", "TX", "USA")).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_id_is_rejected_before_any_store_call() {
        let svc = service();
        assert!(matches!(
            svc.get_by_id("").await.unwrap_err(),
            AppError::InvalidId(_)
        ));
        assert!(matches!(
            svc.delete_by_id("").await.unwrap_err(),
            AppError::InvalidId(_)
        ));
    }
}

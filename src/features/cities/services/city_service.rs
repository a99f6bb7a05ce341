use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::cities::dtos::{CreateCityDto, UpdateCityDto};
use crate::features::cities::models::City;
use crate::modules::store::{from_document, to_document, Document, DocumentStore};
use crate::shared::constants::{CITY_COLLECTION, DOC_ID, NAME, STATE_CODE};

type CityCache = Option<HashMap<String, City>>;

/// Query service for the city collection.
///
/// Holds an id-keyed mirror of the collection, loaded lazily on first read
/// and replaced wholesale after each mutation. The store scan happens
/// outside the lock; the swap itself is a single write. Mutations made by
/// other processes leave the cache stale until the next reload.
pub struct CityService {
    store: Arc<DocumentStore>,
    cache: RwLock<CityCache>,
}

impl CityService {
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

    fn cache_guard(&self) -> Result<RwLockReadGuard<'_, CityCache>> {
        self.cache
            .read()
            .map_err(|_| AppError::Internal("city cache lock poisoned".to_string()))
    }

    /// Rebuild the cache from a full collection scan.
    async fn reload_cache(&self) -> Result<()> {
        let docs = self.store.read(CITY_COLLECTION).await?;
        let mut fresh = HashMap::with_capacity(docs.len());
        for doc in docs {
            let city: City = from_document(doc)?;
            if let Some(id) = city.id.clone() {
                fresh.insert(id, city);
            }
        }
        let mut guard = self
            .cache
            .write()
            .map_err(|_| AppError::Internal("city cache lock poisoned".to_string()))?;
        *guard = Some(fresh);
        Ok(())
    }

    /// Insert a new city; returns the store-assigned id.
    pub async fn create(&self, dto: CreateCityDto) -> Result<String> {
        if dto.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Bad value for name: {:?}",
                dto.name
            )));
        }
        let city = City {
            id: None,
            name: dto.name,
            state_code: dto.state_code,
        };
        let id = self.store.create(CITY_COLLECTION, to_document(&city)?).await?;
        tracing::info!("City created: id={}", id);
        self.reload_cache().await?;
        Ok(id)
    }

    /// All cities, from the cache (loading it when absent).
    pub async fn read(&self) -> Result<Vec<City>> {
        if self.cache_guard()?.is_none() {
            self.reload_cache().await?;
        }
        let guard = self.cache_guard()?;
        Ok(guard
            .as_ref()
            .map(|cache| cache.values().cloned().collect())
            .unwrap_or_default())
    }

    /// All cities, sorted case-insensitively on `sort`. A leading '-'
    /// flips to descending; an unknown field leaves the order untouched
    /// rather than erroring. That silence is the documented contract.
    pub async fn read_sorted(&self, sort: Option<&str>) -> Result<Vec<City>> {
        let mut cities = self.read().await?;
        let Some(sort) = sort.filter(|s| !s.is_empty()) else {
            return Ok(cities);
        };
        let (field, desc) = match sort.strip_prefix('-') {
            Some(field) => (field, true),
            None => (sort, false),
        };
        if !City::SORTABLE_FIELDS.contains(&field) {
            return Ok(cities);
        }
        cities.sort_by_cached_key(|city| city.sort_key(field).unwrap_or("").to_uppercase());
        if desc {
            cities.reverse();
        }
        Ok(cities)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<City> {
        Self::validate_id(id)?;
        let doc = self
            .store
            .read_one(CITY_COLLECTION, &Self::id_filter(id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City not found: {id}")))?;
        Ok(from_document(doc)?)
    }

    /// Merge the given fields into a city; returns whether the document
    /// actually changed, not whether the operation merely succeeded.
    pub async fn update_by_id(&self, id: &str, dto: UpdateCityDto) -> Result<bool> {
        Self::validate_id(id)?;
        if let Some(name) = &dto.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation(format!("Bad value for name: {name:?}")));
            }
        }
        let fields = to_document(&dto)?;
        if fields.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }
        let modified = self
            .store
            .update(CITY_COLLECTION, &Self::id_filter(id), fields)
            .await?;
        self.reload_cache().await?;
        Ok(modified > 0)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        Self::validate_id(id)?;
        let deleted = self
            .store
            .delete(CITY_COLLECTION, &Self::id_filter(id))
            .await?;
        if deleted > 0 {
            self.reload_cache().await?;
        }
        Ok(deleted > 0)
    }

    /// Delete by natural key; errors when nothing matched.
    pub async fn delete(&self, name: &str, state_code: &str) -> Result<u64> {
        let mut filter = Document::new();
        filter.insert(NAME.to_string(), Value::String(name.to_string()));
        filter.insert(STATE_CODE.to_string(), Value::String(state_code.to_string()));
        let deleted = self.store.delete(CITY_COLLECTION, &filter).await?;
        if deleted < 1 {
            return Err(AppError::NotFound(format!(
                "City not found: {name}, {state_code}"
            )));
        }
        self.reload_cache().await?;
        Ok(deleted)
    }

    pub async fn num_cities(&self) -> Result<usize> {
        Ok(self.read().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StoreConfig;
    use crate::modules::store::MemoryBackend;

    fn service() -> CityService {
        let config = StoreConfig {
            database: "geo_test".to_string(),
            connect_retries: 1,
            retry_delay_ms: 0,
        };
        let store = Arc::new(DocumentStore::new(Arc::new(MemoryBackend::new()), &config));
        CityService::new(store)
    }

    fn city(name: &str, state_code: Option<&str>) -> CreateCityDto {
        CreateCityDto {
            name: name.to_string(),
            state_code: state_code.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let svc = service();
        let id = svc.create(city("New York", Some("NY"))).await.unwrap();

        let found = svc.get_by_id(&id).await.unwrap();
        assert_eq!(found.name, "New York");
        assert_eq!(found.state_code.as_deref(), Some("NY"));
        assert_eq!(found.id.as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let svc = service();
        let err = svc.create(city("   ", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn num_cities_increments_on_create() {
        let svc = service();
        let before = svc.num_cities().await.unwrap();
        svc.create(city("Austin", Some("TX"))).await.unwrap();
        assert_eq!(svc.num_cities().await.unwrap(), before + 1);
    }

    #[tokio::test]
    async fn get_by_id_rejects_empty_id() {
        let svc = service();
        let err = svc.get_by_id("").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidId(_)));
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_not_found() {
        let svc = service();
        let err = svc.get_by_id("no-such-id").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_reports_whether_document_changed() {
        let svc = service();
        let id = svc.create(city("Austin", Some("TX"))).await.unwrap();

        let dto = UpdateCityDto {
            name: Some("New Austin".to_string()),
            state_code: None,
        };
        assert!(svc.update_by_id(&id, dto.clone()).await.unwrap());
        // Same value again: matched but unmodified.
        assert!(!svc.update_by_id(&id, dto).await.unwrap());
        assert_eq!(svc.get_by_id(&id).await.unwrap().name, "New Austin");
    }

    #[tokio::test]
    async fn update_with_no_fields_is_rejected() {
        let svc = service();
        let id = svc.create(city("Austin", Some("TX"))).await.unwrap();
        let err = svc
            .update_by_id(
                &id,
                UpdateCityDto {
                    name: None,
                    state_code: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_update_delete_scenario() {
        let svc = service();
        let before = svc.num_cities().await.unwrap();
        let id = svc.create(city("Austin", Some("TX"))).await.unwrap();
        assert_eq!(svc.num_cities().await.unwrap(), before + 1);

        let updated = svc
            .update_by_id(
                &id,
                UpdateCityDto {
                    name: Some("New Austin".to_string()),
                    state_code: None,
                },
            )
            .await
            .unwrap();
        assert!(updated);

        assert!(svc.delete_by_id(&id).await.unwrap());
        let err = svc.get_by_id(&id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_by_natural_key() {
        let svc = service();
        let id = svc.create(city("Austin", Some("TX"))).await.unwrap();

        let err = svc.delete("Nowhere", "ZZ").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let deleted = svc.delete("Austin", "TX").await.unwrap();
        assert!(deleted > 0);
        assert!(matches!(
            svc.get_by_id(&id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn read_sorted_orders_case_insensitively() {
        let svc = service();
        svc.create(city("boston", Some("MA"))).await.unwrap();
        svc.create(city("Austin", Some("TX"))).await.unwrap();
        svc.create(city("chicago", Some("IL"))).await.unwrap();

        let asc = svc.read_sorted(Some("name")).await.unwrap();
        let names: Vec<&str> = asc.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Austin", "boston", "chicago"]);

        let desc = svc.read_sorted(Some("-name")).await.unwrap();
        let names: Vec<&str> = desc.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["chicago", "boston", "Austin"]);
    }

    #[tokio::test]
    async fn read_sorted_unknown_field_is_a_no_op() {
        let svc = service();
        svc.create(city("Boston", Some("MA"))).await.unwrap();
        svc.create(city("Austin", Some("TX"))).await.unwrap();

        let unsorted = svc.read().await.unwrap();
        let result = svc.read_sorted(Some("population")).await.unwrap();
        assert_eq!(result.len(), unsorted.len());
        let mut expected: Vec<String> = unsorted.into_iter().map(|c| c.name).collect();
        let mut got: Vec<String> = result.into_iter().map(|c| c.name).collect();
        expected.sort();
        got.sort();
        assert_eq!(got, expected);
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::modules::store::gateway::{Document, StoreBackend, StoreError};
use crate::shared::constants::DOC_ID;

/// In-process store backend: one `Vec<Document>` per namespace.
///
/// Ids are random UUID hex strings assigned on insert. Insertion order is
/// preserved, which keeps the "unsorted" read contract deterministic in
/// tests. The lock is never held across an await point.
#[derive(Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(doc: &Document, filter: &Document) -> bool {
        filter.iter().all(|(k, v)| doc.get(k) == Some(v))
    }
}

#[async_trait]
impl StoreBackend for MemoryBackend {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(&self, namespace: &str, mut doc: Document) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        doc.insert(DOC_ID.to_string(), Value::String(id.clone()));
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        collections.entry(namespace.to_string()).or_default().push(doc);
        Ok(id)
    }

    async fn find_all(&self, namespace: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(collections.get(namespace).cloned().unwrap_or_default())
    }

    async fn find_one(
        &self,
        namespace: &str,
        filter: &Document,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(collections
            .get(namespace)
            .and_then(|docs| docs.iter().find(|d| Self::matches(d, filter)).cloned()))
    }

    async fn update_one(
        &self,
        namespace: &str,
        filter: &Document,
        fields: Document,
    ) -> Result<u64, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let Some(docs) = collections.get_mut(namespace) else {
            return Ok(0);
        };
        let Some(doc) = docs.iter_mut().find(|d| Self::matches(d, filter)) else {
            return Ok(0);
        };
        // Modified count reflects actual change, not a mere match.
        let mut modified = false;
        for (key, value) in fields {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }
        Ok(u64::from(modified))
    }

    async fn delete_one(&self, namespace: &str, filter: &Document) -> Result<u64, StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let Some(docs) = collections.get_mut(namespace) else {
            return Ok(0);
        };
        match docs.iter().position(|d| Self::matches(d, filter)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, &str)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[tokio::test]
    async fn insert_assigns_string_id_and_find_one_matches() {
        let backend = MemoryBackend::new();
        let id = backend
            .insert("db.cities", doc(&[("name", "Austin")]))
            .await
            .unwrap();

        let found = backend
            .find_one("db.cities", &doc(&[(DOC_ID, &id)]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("name"), Some(&Value::String("Austin".into())));
    }

    #[tokio::test]
    async fn update_one_reports_zero_when_nothing_changes() {
        let backend = MemoryBackend::new();
        let id = backend
            .insert("db.cities", doc(&[("name", "Austin")]))
            .await
            .unwrap();
        let filter = doc(&[(DOC_ID, &id)]);

        let modified = backend
            .update_one("db.cities", &filter, doc(&[("name", "Austin")]))
            .await
            .unwrap();
        assert_eq!(modified, 0);

        let modified = backend
            .update_one("db.cities", &filter, doc(&[("name", "New Austin")]))
            .await
            .unwrap();
        assert_eq!(modified, 1);
    }

    #[tokio::test]
    async fn delete_one_removes_only_first_match() {
        let backend = MemoryBackend::new();
        backend
            .insert("db.cities", doc(&[("name", "Springfield")]))
            .await
            .unwrap();
        backend
            .insert("db.cities", doc(&[("name", "Springfield")]))
            .await
            .unwrap();

        let deleted = backend
            .delete_one("db.cities", &doc(&[("name", "Springfield")]))
            .await
            .unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(backend.find_all("db.cities").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_on_missing_namespace_returns_zero() {
        let backend = MemoryBackend::new();
        let deleted = backend
            .delete_one("db.nowhere", &doc(&[("name", "x")]))
            .await
            .unwrap();
        assert_eq!(deleted, 0);
    }
}

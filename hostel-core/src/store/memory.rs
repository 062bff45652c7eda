use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::instrument;

use super::{Document, DocumentStore, Filter, StoreError, StoreResult, UniqueIndex};

/// Plain collection data shared by the memory and file stores
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Collections {
    collections: HashMap<String, BTreeMap<String, Document>>,
    #[serde(skip)]
    indexes: Vec<UniqueIndex>,
}

impl Collections {
    pub(crate) fn add_index(&mut self, index: UniqueIndex) {
        if !self.indexes.contains(&index) {
            self.indexes.push(index);
        }
    }

    fn check_unique(&self, collection: &str, key: &str, document: &Document) -> StoreResult<()> {
        let Some(existing) = self.collections.get(collection) else {
            return Ok(());
        };
        for index in self.indexes.iter().filter(|i| i.collection == collection) {
            let value = match document.get(&index.field) {
                None | Some(Value::Null) => continue,
                Some(value) => value,
            };
            let taken = existing
                .iter()
                .any(|(other_key, other)| other_key != key && other.get(&index.field) == Some(value));
            if taken {
                return Err(StoreError::DuplicateKey {
                    collection: collection.to_string(),
                    field: index.field.clone(),
                    value: match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                });
            }
        }
        Ok(())
    }

    pub(crate) fn insert(
        &mut self,
        collection: &str,
        key: &str,
        document: Document,
    ) -> StoreResult<()> {
        if self
            .collections
            .get(collection)
            .is_some_and(|c| c.contains_key(key))
        {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                field: "id".to_string(),
                value: key.to_string(),
            });
        }
        self.check_unique(collection, key, &document)?;
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Ok(())
    }

    pub(crate) fn get(&self, collection: &str, key: &str) -> Option<Document> {
        self.collections
            .get(collection)
            .and_then(|c| c.get(key))
            .cloned()
    }

    pub(crate) fn find(&self, collection: &str, filter: &Filter) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|c| {
                c.values()
                    .filter(|document| filter.matches(document))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn replace(
        &mut self,
        collection: &str,
        key: &str,
        document: Document,
    ) -> StoreResult<()> {
        if self.get(collection, key).is_none() {
            return Err(not_found(collection, key));
        }
        self.check_unique(collection, key, &document)?;
        if let Some(c) = self.collections.get_mut(collection) {
            c.insert(key.to_string(), document);
        }
        Ok(())
    }

    pub(crate) fn delete(&mut self, collection: &str, key: &str) -> StoreResult<()> {
        self.collections
            .get_mut(collection)
            .and_then(|c| c.remove(key))
            .map(|_| ())
            .ok_or_else(|| not_found(collection, key))
    }
}

fn not_found(collection: &str, key: &str) -> StoreError {
    StoreError::NotFound {
        collection: collection.to_string(),
        key: key.to_string(),
    }
}

/// Volatile store, lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ensure_unique_index(&self, index: UniqueIndex) -> StoreResult<()> {
        self.data.write().await.add_index(index);
        Ok(())
    }

    #[instrument(skip(self, document))]
    async fn insert(&self, collection: &str, key: &str, document: Document) -> StoreResult<()> {
        self.data.write().await.insert(collection, key, document)
    }

    #[instrument(skip(self))]
    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Document>> {
        Ok(self.data.read().await.get(collection, key))
    }

    #[instrument(skip(self))]
    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
        Ok(self.data.read().await.find(collection, filter))
    }

    #[instrument(skip(self, document))]
    async fn replace(&self, collection: &str, key: &str, document: Document) -> StoreResult<()> {
        self.data.write().await.replace(collection, key, document)
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        self.data.write().await.delete(collection, key)
    }
}

//! Document store abstraction
//!
//! Collections map an opaque key to an untyped JSON document. Typed records
//! cross this boundary only through [`crate::records::Record`].

pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

pub type Document = serde_json::Map<String, Value>;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate value for unique field {collection}.{field}: {value}")]
    DuplicateKey {
        collection: String,
        field: String,
        value: String,
    },

    #[error("Document {key} not found in {collection}")]
    NotFound { collection: String, key: String },

    #[error("Unsupported database url: {0}")]
    UnsupportedUrl(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Snapshot could not be decoded: {0}")]
    Codec(String),
}

/// A field whose value must be unique within a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueIndex {
    pub collection: String,
    pub field: String,
}

impl UniqueIndex {
    pub fn new(collection: &str, field: &str) -> Self {
        Self {
            collection: collection.to_string(),
            field: field.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Condition {
    Eq(String, Value),
    Contains(String, Value),
}

/// Conjunction of field conditions used to select documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Matches every document
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Eq(field.to_string(), value.into()));
        self
    }

    /// Matches documents whose array field contains `value`
    pub fn contains(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Contains(field.to_string(), value.into()));
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|condition| match condition {
            Condition::Eq(field, expected) => document.get(field) == Some(expected),
            Condition::Contains(field, expected) => match document.get(field) {
                Some(Value::Array(items)) => items.contains(expected),
                _ => false,
            },
        })
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Register a unique index. Existing documents are not re-checked.
    async fn ensure_unique_index(&self, index: UniqueIndex) -> StoreResult<()>;

    /// Insert a new document; fails on key collision or unique index violation
    async fn insert(&self, collection: &str, key: &str, document: Document) -> StoreResult<()>;

    async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Document>>;

    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>>;

    /// Replace an existing document; fails with `NotFound` if the key is missing
    async fn replace(&self, collection: &str, key: &str, document: Document) -> StoreResult<()>;

    /// Remove a document; fails with `NotFound` if the key is missing
    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()>;
}

pub type SharedStore = Arc<dyn DocumentStore>;

/// Open the store named by a database url.
///
/// Supported schemes are `memory://` and `file://<path>`.
pub async fn connect(url: &str) -> StoreResult<SharedStore> {
    let url = url.trim();
    if url == "memory://" || url == "memory" {
        tracing::info!("Using in-memory document store");
        return Ok(Arc::new(MemoryStore::new()));
    }
    if let Some(path) = url.strip_prefix("file://") {
        if path.is_empty() {
            return Err(StoreError::UnsupportedUrl(url.to_string()));
        }
        tracing::info!("Using file document store at {}", path);
        return Ok(Arc::new(FileStore::open(path).await?));
    }
    Err(StoreError::UnsupportedUrl(url.to_string()))
}

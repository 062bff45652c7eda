use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::memory::Collections;
use super::{Document, DocumentStore, Filter, StoreError, StoreResult, UniqueIndex};

/// Store kept in memory and written to a JSON snapshot after every write.
///
/// The write lock is held while the snapshot is written, so snapshots are
/// never interleaved. A change becomes visible only once its snapshot is on
/// disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: RwLock<Collections>,
}

impl FileStore {
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let data = if tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?
        {
            let content = tokio::fs::read(&path)
                .await
                .map_err(|e| StoreError::Io(format!("Failed to read {}: {e}", path.display())))?;
            let data: Collections =
                serde_json::from_slice(&content).map_err(|e| StoreError::Codec(e.to_string()))?;
            info!("Loaded document snapshot from {}", path.display());
            data
        } else {
            info!(
                "No document snapshot at {}, starting empty",
                path.display()
            );
            Collections::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    async fn persist(&self, data: &Collections) -> StoreResult<()> {
        let content =
            serde_json::to_vec_pretty(data).map_err(|e| StoreError::Codec(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write snapshot: {e}")))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to replace snapshot: {e}")))?;
        debug!("Snapshot written to {}", self.path.display());
        Ok(())
    }

    /// Apply `change` to a copy of the data and keep it only if it was saved
    async fn commit<F>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Collections) -> StoreResult<()>,
    {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        change(&mut next)?;
        self.persist(&next).await?;
        *data = next;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn ensure_unique_index(&self, index: UniqueIndex) -> StoreResult<()> {
        self.data.write().await.add_index(index);
        Ok(())
    }

    #[instrument(skip(self, document))]
    async fn insert(&self, collection: &str, key: &str, document: Document) -> StoreResult<()> {
        self.commit(|data| data.insert(collection, key, document)).await
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
        self.commit(|data| data.replace(collection, key, document)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
        self.commit(|data| data.delete(collection, key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("hostel.json");

        {
            let store = FileStore::open(&path).await.unwrap();
            let document = json!({"title": "Movie night"}).as_object().cloned().unwrap();
            store.insert("events", "e1", document).await.unwrap();
        }

        let reopened = FileStore::open(&path).await.unwrap();
        let loaded = reopened.get("events", "e1").await.unwrap().unwrap();
        assert_eq!(loaded["title"], "Movie night");

        reopened.delete("events", "e1").await.unwrap();
        let reopened = FileStore::open(&path).await.unwrap();
        assert!(reopened.get("events", "e1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_snapshot_discards_the_write() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let path = data_dir.join("hostel.json");
        let store = FileStore::open(&path).await.unwrap();
        let document = json!({"title": "Movie night"}).as_object().cloned().unwrap();
        store.insert("events", "e1", document.clone()).await.unwrap();

        // A plain file where the snapshot directory should be
        tokio::fs::remove_dir_all(&data_dir).await.unwrap();
        tokio::fs::write(&data_dir, b"").await.unwrap();

        let err = store
            .insert("events", "e2", document.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.get("events", "e2").await.unwrap().is_none());
        assert!(matches!(
            store.delete("events", "e1").await,
            Err(StoreError::Io(_))
        ));
        assert!(store.get("events", "e1").await.unwrap().is_some());

        // Once the directory is back, the same insert goes through
        tokio::fs::remove_file(&data_dir).await.unwrap();
        store.insert("events", "e2", document).await.unwrap();
        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(reopened.find("events", &Filter::all()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = FileStore::open(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
    }
}

use crate::domain::models::Document;
use crate::domain::storage::StorageBackend;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("\"{0}\" is not on the current trip")]
    UnknownItem(String),
    #[error("no category named \"{0}\"")]
    UnknownCategory(String),
    #[error("could not serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {target}: {reason}")]
    Write { target: String, reason: String },
}

/// Read the document from `backend`. Anything short of a well-formed document
/// (missing, empty, unreadable, malformed) yields the default document.
pub async fn load_document(backend: &dyn StorageBackend) -> Document {
    let raw = match backend.read().await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("no stored document, using defaults");
            return Document::default();
        }
        Err(e) => {
            tracing::warn!("failed to read stored document: {e:#}");
            return Document::default();
        }
    };

    if raw.trim().is_empty() {
        tracing::info!("stored document is empty, using defaults");
        return Document::default();
    }

    match Document::from_json(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("stored document is malformed ({e}), using defaults");
            Document::default()
        }
    }
}

/// Serialize `document` and overwrite the medium with it.
pub async fn save_document(
    backend: &dyn StorageBackend,
    document: &Document,
) -> Result<(), StoreError> {
    let raw = document.to_json()?;
    backend
        .write(&raw)
        .await
        .map_err(|e| StoreError::Write {
            target: backend.describe(),
            reason: format!("{e:#}"),
        })?;
    tracing::debug!(bytes = raw.len(), "document saved");
    Ok(())
}

/// The session's document plus the medium it lives on. Every mutation
/// rewrites the whole document before returning.
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    document: Document,
}

impl Store {
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let document = load_document(backend.as_ref()).await;
        Self { backend, document }
    }

    #[must_use]
    pub fn with_document(backend: Arc<dyn StorageBackend>, document: Document) -> Self {
        Self { backend, document }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn target(&self) -> String {
        self.backend.describe()
    }

    /// Re-read from the medium, replacing the in-memory document.
    pub async fn load(&mut self) -> &Document {
        self.document = load_document(self.backend.as_ref()).await;
        &self.document
    }

    pub async fn save(&self) -> Result<(), StoreError> {
        save_document(self.backend.as_ref(), &self.document).await
    }

    pub async fn create_trip(&mut self, items: Vec<String>) -> Result<(), StoreError> {
        self.document.create_trip(items);
        self.save().await
    }

    /// Returns the item's new packed flag.
    pub async fn toggle(&mut self, item: &str) -> Result<bool, StoreError> {
        let packed = self
            .document
            .toggle(item)
            .ok_or_else(|| StoreError::UnknownItem(item.to_string()))?;
        self.save().await?;
        Ok(packed)
    }

    pub async fn reset_trip(&mut self) -> Result<(), StoreError> {
        self.document.reset_trip();
        self.save().await
    }

    /// Returns `false` (and writes nothing) when the name is blank or taken.
    pub async fn add_category(&mut self, name: &str) -> Result<bool, StoreError> {
        if !self.document.add_category(name) {
            return Ok(false);
        }
        self.save().await?;
        Ok(true)
    }

    pub async fn delete_category(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.document.delete_category(name) {
            return Err(StoreError::UnknownCategory(name.to_string()));
        }
        self.save().await
    }

    pub async fn replace_items(
        &mut self,
        category: &str,
        items: Vec<String>,
    ) -> Result<(), StoreError> {
        if !self.document.replace_items(category, items) {
            return Err(StoreError::UnknownCategory(category.to_string()));
        }
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::MockStorageBackend;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryBackend {
        content: Mutex<Option<String>>,
        writes: Mutex<usize>,
    }

    #[async_trait]
    impl StorageBackend for MemoryBackend {
        async fn read(&self) -> anyhow::Result<Option<String>> {
            Ok(self.content.lock().unwrap().clone())
        }

        async fn write(&self, content: &str) -> anyhow::Result<()> {
            *self.content.lock().unwrap() = Some(content.to_string());
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn reading(result: anyhow::Result<Option<String>>) -> MockStorageBackend {
        let mut mock = MockStorageBackend::new();
        let mut result = Some(result);
        mock.expect_read()
            .times(1)
            .returning(move || result.take().unwrap_or(Ok(None)));
        mock
    }

    #[tokio::test]
    async fn test_load_missing_yields_default() {
        let mock = reading(Ok(None));
        assert_eq!(load_document(&mock).await, Document::default());
    }

    #[tokio::test]
    async fn test_load_empty_yields_default() {
        let mock = reading(Ok(Some("  \n".to_string())));
        assert_eq!(load_document(&mock).await, Document::default());
    }

    #[tokio::test]
    async fn test_load_malformed_yields_default() {
        let mock = reading(Ok(Some("{\"templates\": [1, 2".to_string())));
        assert_eq!(load_document(&mock).await, Document::default());

        let mock = reading(Ok(Some("{\"current_trip\": {\"A\": \"yes\"}}".to_string())));
        assert_eq!(load_document(&mock).await, Document::default());
    }

    #[tokio::test]
    async fn test_load_read_failure_yields_default() {
        let mock = reading(Err(anyhow!("permission denied")));
        assert_eq!(load_document(&mock).await, Document::default());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let backend = MemoryBackend::default();
        let mut doc = Document::empty();
        doc.templates
            .insert("Beach".to_string(), vec!["Sunscreen".to_string()]);
        doc.create_trip(["Sunscreen", "Hat"]);
        doc.toggle("Hat");

        save_document(&backend, &doc).await.unwrap();

        assert_eq!(load_document(&backend).await, doc);
    }

    #[tokio::test]
    async fn test_create_trip_writes_full_document() {
        let mut mock = reading(Ok(None));
        mock.expect_write()
            .withf(|content: &str| {
                let doc = Document::from_json(content).unwrap();
                doc.templates == Document::default().templates
                    && doc.current_trip.len() == 2
                    && doc.current_trip.values().all(|p| !p)
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut store = Store::open(Arc::new(mock)).await;
        store
            .create_trip(vec!["A".to_string(), "B".to_string()])
            .await
            .unwrap();

        assert_eq!(store.document().total_count(), 2);
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_writes_nothing() {
        let mut mock = MockStorageBackend::new();
        mock.expect_write().never();

        let mut store = Store::with_document(Arc::new(mock), Document::default());
        let err = store.toggle("Ghost").await.unwrap_err();

        assert!(matches!(err, StoreError::UnknownItem(ref i) if i == "Ghost"));
        assert_eq!(store.document(), &Document::default());
    }

    #[tokio::test]
    async fn test_every_mutation_writes_once() {
        let backend = Arc::new(MemoryBackend::default());
        let mut store = Store::open(backend.clone()).await;

        store
            .create_trip(vec!["A".to_string(), "B".to_string()])
            .await
            .unwrap();
        assert!(store.toggle("A").await.unwrap());
        store.reset_trip().await.unwrap();
        assert!(store.add_category("Camping").await.unwrap());
        assert!(!store.add_category("Camping").await.unwrap());
        store
            .replace_items("Camping", vec!["Tent".to_string(), " ".to_string()])
            .await
            .unwrap();
        store.delete_category("Clothing").await.unwrap();

        assert_eq!(*backend.writes.lock().unwrap(), 6);
        assert_eq!(load_document(backend.as_ref()).await, *store.document());
        assert_eq!(store.document().templates["Camping"], vec!["Tent".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_unknown_category_is_rejected() {
        let mut mock = MockStorageBackend::new();
        mock.expect_write().never();

        let mut store = Store::with_document(Arc::new(mock), Document::default());
        let err = store.delete_category("Snacks").await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownCategory(_)));

        let err = store
            .replace_items("Snacks", vec!["Chips".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownCategory(_)));
    }

    #[tokio::test]
    async fn test_write_failure_is_reported_and_mutation_kept() {
        let mut mock = MockStorageBackend::new();
        mock.expect_write()
            .returning(|_| Err(anyhow!("quota exceeded")));
        mock.expect_describe()
            .returning(|| "sheet test!A1:A2".to_string());

        let mut doc = Document::empty();
        doc.create_trip(["A"]);
        let mut store = Store::with_document(Arc::new(mock), doc);

        let err = store.toggle("A").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sheet test!A1:A2"));
        assert!(msg.contains("quota exceeded"));
        assert_eq!(store.document().current_trip["A"], true);
    }

    #[tokio::test]
    async fn test_reload_picks_up_medium_content() {
        let backend = Arc::new(MemoryBackend::default());
        let mut store = Store::open(backend.clone()).await;
        assert_eq!(store.document(), &Document::default());

        let mut other = Document::empty();
        other.create_trip(["Boots"]);
        save_document(backend.as_ref(), &other).await.unwrap();

        assert_eq!(store.load().await, &other);
    }
}

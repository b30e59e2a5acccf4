use anyhow::Result;
use async_trait::async_trait;

/// A medium that holds one serialized document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    // `None` when the medium holds no prior data
    async fn read(&self) -> Result<Option<String>>;

    // Overwrites whatever is stored
    async fn write(&self, content: &str) -> Result<()>;

    fn describe(&self) -> String;
}

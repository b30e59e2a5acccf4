pub mod file_backend;
pub mod sheets_backend;

use crate::config::{BackendKind, StorageConfig};
use crate::domain::storage::StorageBackend;
use anyhow::Result;
use std::sync::Arc;

pub use file_backend::FileBackend;
pub use sheets_backend::{SheetsBackend, TokenSource};

/// Build the backing medium selected in the config.
pub fn build_backend(config: &StorageConfig) -> Result<Arc<dyn StorageBackend>> {
    let backend: Arc<dyn StorageBackend> = match config.backend {
        BackendKind::File => Arc::new(FileBackend::new(config.data_path())),
        BackendKind::Sheets => Arc::new(SheetsBackend::from_config(config)?),
    };
    tracing::info!(target_medium = %backend.describe(), "storage backend ready");
    Ok(backend)
}

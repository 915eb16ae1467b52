//! Storage adapters for the [`OrderStore`](crate::domain::ports::OrderStore) port.

pub mod in_memory;
pub mod pool;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

use crate::domain::ports::OrderStoreBox;
use crate::error::{OrderError, Result};
use std::path::Path;

/// Runs synchronous storage work on tokio's blocking pool.
///
/// The returned future yields while `work` runs, so a caller's timeout can
/// still fire on a stalled disk. A panic inside `work` becomes a storage error.
pub async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| OrderError::StorageError(format!("Storage task failed: {e}")))?
}

/// Opens the configured store: RocksDB at `db_path` when given, in-memory otherwise.
///
/// Without the `storage-rocksdb` feature a `db_path` is ignored with a warning.
pub fn open_store(db_path: Option<&Path>) -> Result<OrderStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            tracing::info!(path = %path.display(), "Using RocksDB order store");
            Ok(Box::new(rocksdb::RocksDBStore::open(path)?))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(path) => {
            tracing::warn!(
                path = %path.display(),
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
            );
            Ok(Box::new(in_memory::InMemoryOrderStore::new()))
        }
        None => Ok(Box::new(in_memory::InMemoryOrderStore::new())),
    }
}

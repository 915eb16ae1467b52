use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Storage did not respond within {0} ms")]
    Timeout(u128),
    #[error("Connection pool closed")]
    PoolClosed,
}

pub type Result<T> = std::result::Result<T, OrderError>;

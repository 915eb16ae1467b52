use crate::domain::order::PersistedOrder;
use crate::domain::ports::{OrderStore, OrderStoreBox};
use crate::error::{OrderError, Result};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Largest pool the underlying semaphore can represent.
pub const MAX_POOL_SIZE: usize = Semaphore::MAX_PERMITS;

/// A bounded set of connections to an order store.
///
/// Each [`StoreConnection`] holds one permit for as long as it lives. Dropping
/// it, on success, on error or when the owning future is cancelled, returns the
/// permit to the pool.
pub struct ConnectionPool {
    store: Arc<dyn OrderStore>,
    permits: Arc<Semaphore>,
    size: usize,
}

/// A connection checked out of a [`ConnectionPool`].
pub struct StoreConnection {
    store: Arc<dyn OrderStore>,
    _permit: OwnedSemaphorePermit,
}

impl ConnectionPool {
    pub fn new(store: OrderStoreBox, size: usize) -> Self {
        Self {
            store: Arc::from(store),
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Waits for a free connection.
    pub async fn acquire(&self) -> Result<StoreConnection> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| OrderError::PoolClosed)?;
        Ok(StoreConnection {
            store: self.store.clone(),
            _permit: permit,
        })
    }

    /// Number of connections not currently checked out.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl StoreConnection {
    pub async fn save(&self, order: &PersistedOrder) -> Result<()> {
        self.store.save(order).await
    }

    pub async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
        self.store.all_orders().await
    }
}

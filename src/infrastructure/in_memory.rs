use crate::domain::order::PersistedOrder;
use crate::domain::ports::OrderStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order store.
///
/// Orders are kept in insertion order. Used when no database path is given
/// and in tests.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<PersistedOrder>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: &PersistedOrder) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.push(order.clone());
        Ok(())
    }

    async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }
}

use super::order::PersistedOrder;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence collaborator for accepted orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn save(&self, order: &PersistedOrder) -> Result<()>;
    async fn all_orders(&self) -> Result<Vec<PersistedOrder>>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;

use crate::domain::order::PersistedOrder;
use crate::domain::ports::OrderStore;
use crate::error::{OrderError, Result};
use crate::infrastructure::run_blocking;
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding one entry per accepted order.
pub const CF_SALES: &str = "sales";

/// A persistent order store backed by RocksDB.
///
/// Orders are keyed by their UUID and stored as JSON. `Clone` shares the
/// underlying `Arc<DB>`. Reads and writes run on the blocking pool.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, creating the sales
    /// column family when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_sales = ColumnFamilyDescriptor::new(CF_SALES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_sales])?;

        Ok(Self { db: Arc::new(db) })
    }
}

fn sales(db: &DB) -> Result<&ColumnFamily> {
    db.cf_handle(CF_SALES)
        .ok_or_else(|| OrderError::StorageError("Sales column family not found".to_string()))
}

#[async_trait]
impl OrderStore for RocksDBStore {
    async fn save(&self, order: &PersistedOrder) -> Result<()> {
        let db = self.db.clone();
        let key = *order.id.as_bytes();
        let value = serde_json::to_vec(order)?;

        run_blocking(move || {
            db.put_cf(sales(&db)?, key, value)?;
            Ok(())
        })
        .await
    }

    async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
        let db = self.db.clone();

        run_blocking(move || {
            let mut orders = Vec::new();
            for item in db.iterator_cf(sales(&db)?, rocksdb::IteratorMode::Start) {
                let (_key, value) = item?;
                orders.push(serde_json::from_slice::<PersistedOrder>(&value)?);
            }
            // Keys are random UUIDs; report in the order the sales happened.
            orders.sort_by_key(|order| order.placed_at);
            Ok(orders)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::ValidatedOrder;
    use crate::domain::pricing::PricingEngine;
    use tempfile::tempdir;

    fn sample_order() -> PersistedOrder {
        let order = ValidatedOrder {
            name: "Ann".into(),
            address: "1 Main St".into(),
            city: "Quebec City".into(),
            province: "Quebec".into(),
            phone_number: "555-555-5555".into(),
            email: "ann@example.com".into(),
            apples: 4,
            bananas: 0,
        };
        let subtotal = PricingEngine::compute_subtotal(order.apples, order.bananas);
        let pricing = PricingEngine::compute_total(subtotal, &order.province);
        PersistedOrder::new(order, pricing)
    }

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_SALES).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_order_store() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).unwrap();

        let order = sample_order();
        store.save(&order).await.unwrap();

        let all = store.all_orders().await.unwrap();
        assert_eq!(all, vec![order]);
    }
}

use crate::domain::order::{OrderInput, PersistedOrder};
use crate::domain::pricing::{Money, PricingEngine, meets_minimum};
use crate::domain::validation::Validator;
use crate::error::{OrderError, Result};
use crate::infrastructure::pool::ConnectionPool;
use std::time::Duration;
use tracing::{error, info};

/// Terminal state of a single submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The form failed field validation. Holds the messages in rule order.
    Invalid(Vec<String>),
    /// The subtotal was under the minimum purchase.
    BelowMinimum(Money),
    /// The order could not be saved. Details went to the log only.
    PersistFailed,
    /// The order was priced and saved.
    Accepted(PersistedOrder),
}

/// Runs one order submission from raw form fields to a stored order.
///
/// Each call is independent: it validates, prices, checks the minimum purchase,
/// and saves through exactly one pooled connection, bounded by `save_timeout`.
/// Nothing is retried.
pub struct CheckoutService {
    pool: ConnectionPool,
    save_timeout: Duration,
}

impl CheckoutService {
    pub fn new(pool: ConnectionPool, save_timeout: Duration) -> Self {
        Self { pool, save_timeout }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub async fn submit(&self, input: OrderInput) -> Submission {
        let order = match Validator::check(input) {
            Ok(order) => order,
            Err(errors) => return Submission::Invalid(errors),
        };

        let subtotal = PricingEngine::compute_subtotal(order.apples, order.bananas);
        if !meets_minimum(subtotal) {
            return Submission::BelowMinimum(subtotal);
        }
        let pricing = PricingEngine::compute_total(subtotal, &order.province);

        let record = PersistedOrder::new(order, pricing);
        match self.persist(&record).await {
            Ok(()) => {
                info!(
                    order_id = %record.id,
                    subtotal = %record.pricing.subtotal,
                    total = %record.pricing.total,
                    "Order saved"
                );
                Submission::Accepted(record)
            }
            Err(e) => {
                error!(order_id = %record.id, error = %e, "Failed to save order");
                Submission::PersistFailed
            }
        }
    }

    /// Saves `record` with a single connection. The connection is released
    /// when this future completes or is dropped by the timeout.
    async fn persist(&self, record: &PersistedOrder) -> Result<()> {
        let attempt = async {
            let conn = self.pool.acquire().await?;
            conn.save(record).await
        };
        tokio::time::timeout(self.save_timeout, attempt)
            .await
            .map_err(|_| OrderError::Timeout(self.save_timeout.as_millis()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::OrderStore;
    use crate::domain::validation::{APPLES_POSITIVE, QUANTITY_REQUIRED};
    use crate::infrastructure::in_memory::InMemoryOrderStore;
    use crate::infrastructure::run_blocking;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct BrokenStore;

    #[async_trait]
    impl OrderStore for BrokenStore {
        async fn save(&self, _order: &PersistedOrder) -> Result<()> {
            Err(OrderError::StorageError("disk on fire".to_string()))
        }

        async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
            Ok(Vec::new())
        }
    }

    struct StalledStore;

    #[async_trait]
    impl OrderStore for StalledStore {
        async fn save(&self, _order: &PersistedOrder) -> Result<()> {
            std::future::pending::<()>().await;
            Ok(())
        }

        async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
            Ok(Vec::new())
        }
    }

    /// Saves through the blocking pool and never finishes in time, like a
    /// disk write stuck in a synchronous call.
    struct SlowDiskStore;

    #[async_trait]
    impl OrderStore for SlowDiskStore {
        async fn save(&self, _order: &PersistedOrder) -> Result<()> {
            run_blocking(|| {
                std::thread::sleep(Duration::from_millis(300));
                Ok(())
            })
            .await
        }

        async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
            Ok(Vec::new())
        }
    }

    fn input(apples: &str, bananas: &str) -> OrderInput {
        OrderInput {
            name: "Ann Smith".into(),
            address: "1 Main St".into(),
            city: "Toronto".into(),
            province: "Ontario".into(),
            phone_number: "555-555-5555".into(),
            email: "ann@example.com".into(),
            apples: apples.into(),
            bananas: bananas.into(),
        }
    }

    fn service_with(store: InMemoryOrderStore) -> CheckoutService {
        CheckoutService::new(
            ConnectionPool::new(Box::new(store), 2),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn test_accepted_order_is_saved() {
        let store = InMemoryOrderStore::new();
        let service = service_with(store.clone());

        let Submission::Accepted(record) = service.submit(input("2", "3")).await else {
            panic!("expected the order to be accepted");
        };
        assert_eq!(record.pricing.subtotal, Money::new(dec!(12)));
        assert_eq!(record.pricing.tax, Money::new(dec!(1.56)));
        assert_eq!(record.pricing.total, Money::new(dec!(13.56)));

        assert_eq!(store.all_orders().await.unwrap(), vec![record]);
        assert_eq!(service.pool().available(), 2);
    }

    #[tokio::test]
    async fn test_invalid_order_is_not_saved() {
        let store = InMemoryOrderStore::new();
        let service = service_with(store.clone());

        assert_eq!(
            service.submit(input("0", "0")).await,
            Submission::Invalid(vec![QUANTITY_REQUIRED.to_string()])
        );
        assert_eq!(
            service.submit(input("-1", "5")).await,
            Submission::Invalid(vec![APPLES_POSITIVE.to_string()])
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_below_minimum_is_not_saved() {
        let store = InMemoryOrderStore::new();
        let service = service_with(store.clone());

        // 3 apples = 9
        assert_eq!(
            service.submit(input("3", "0")).await,
            Submission::BelowMinimum(Money::new(dec!(9)))
        );
        assert!(store.is_empty().await);

        // 5 bananas = 10, exactly the minimum
        assert!(matches!(
            service.submit(input("0", "5")).await,
            Submission::Accepted(_)
        ));
    }

    #[tokio::test]
    async fn test_store_failure_releases_connection() {
        let service = CheckoutService::new(
            ConnectionPool::new(Box::new(BrokenStore), 1),
            Duration::from_secs(1),
        );

        assert_eq!(service.submit(input("2", "3")).await, Submission::PersistFailed);
        assert_eq!(service.pool().available(), 1);
    }

    #[tokio::test]
    async fn test_store_timeout_is_a_failure() {
        let service = CheckoutService::new(
            ConnectionPool::new(Box::new(StalledStore), 1),
            Duration::from_millis(20),
        );

        assert_eq!(service.submit(input("2", "3")).await, Submission::PersistFailed);
        assert_eq!(service.pool().available(), 1);
    }

    #[tokio::test]
    async fn test_blocking_store_write_still_times_out() {
        let service = CheckoutService::new(
            ConnectionPool::new(Box::new(SlowDiskStore), 1),
            Duration::from_millis(20),
        );

        let started = std::time::Instant::now();
        assert_eq!(service.submit(input("2", "3")).await, Submission::PersistFailed);
        assert!(started.elapsed() < Duration::from_millis(300));
        assert_eq!(service.pool().available(), 1);
    }
}

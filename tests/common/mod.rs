#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use fruitstand::application::checkout::CheckoutService;
use fruitstand::domain::order::PersistedOrder;
use fruitstand::domain::ports::{OrderStore, OrderStoreBox};
use fruitstand::error::{OrderError, Result};
use fruitstand::infrastructure::pool::ConnectionPool;
use fruitstand::interfaces::http::{AppState, router};
use std::time::Duration;
use urlencoding::encode;

/// A store whose every save fails with an internal detail that must never
/// reach the client.
pub struct FailingStore;

pub const FAILURE_DETAIL: &str = "connection refused by sales-db-7";

#[async_trait]
impl OrderStore for FailingStore {
    async fn save(&self, _order: &PersistedOrder) -> Result<()> {
        Err(OrderError::StorageError(FAILURE_DETAIL.to_string()))
    }

    async fn all_orders(&self) -> Result<Vec<PersistedOrder>> {
        Ok(Vec::new())
    }
}

pub fn checkout(store: OrderStoreBox) -> CheckoutService {
    CheckoutService::new(ConnectionPool::new(store, 4), Duration::from_secs(2))
}

pub fn app(store: OrderStoreBox) -> Router {
    router(AppState::new(checkout(store)))
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A complete, valid order: 2 apples and 3 bananas to Ontario.
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ann Smith"),
        ("address", "1 Main St"),
        ("city", "Toronto"),
        ("province", "Ontario"),
        ("phoneNumber", "555-555-5555"),
        ("email", "ann@example.com"),
        ("apples", "2"),
        ("bananas", "3"),
    ]
}

/// `valid_fields` with some values replaced.
pub fn fields_with(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    valid_fields()
        .into_iter()
        .map(|(key, value)| {
            overrides
                .iter()
                .find(|(k, _)| *k == key)
                .map_or((key, value), |(k, v)| (*k, *v))
        })
        .collect()
}

pub fn submit_request(fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .expect("failed to build request")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

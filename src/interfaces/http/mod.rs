//! HTTP surface of the store.
//!
//! - `GET /` order form
//! - `POST /submit-form` url-encoded order submission
//! - `GET /health` liveness check

pub mod handlers;
pub mod presenter;

use crate::application::checkout::CheckoutService;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub checkout: Arc<CheckoutService>,
}

impl AppState {
    pub fn new(checkout: CheckoutService) -> Self {
        Self {
            checkout: Arc::new(checkout),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::order_form))
        .route("/submit-form", post(handlers::submit_form))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

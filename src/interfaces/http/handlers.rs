use super::AppState;
use super::presenter::{
    ErrorListTemplate, INTERNAL_ERROR_MESSAGE, MINIMUM_PURCHASE_MESSAGE, OrderFormTemplate,
    ReceiptTemplate,
};
use crate::application::checkout::Submission;
use crate::domain::order::OrderInput;
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, instrument};

/// Serve the order form.
///
/// GET /
pub async fn order_form() -> OrderFormTemplate {
    OrderFormTemplate::default()
}

/// Handle an order submission.
///
/// POST /submit-form
///
/// Every outcome is a 200 except a failed save, which is a bare 500 with no
/// order details in the body.
#[instrument(skip_all, fields(province = %input.province))]
pub async fn submit_form(
    State(state): State<AppState>,
    Form(input): Form<OrderInput>,
) -> Response {
    match state.checkout.submit(input).await {
        Submission::Invalid(errors) => {
            debug!(count = errors.len(), "Order rejected by validation");
            ErrorListTemplate { errors }.into_response()
        }
        Submission::BelowMinimum(subtotal) => {
            debug!(%subtotal, "Order below minimum purchase");
            (StatusCode::OK, MINIMUM_PURCHASE_MESSAGE).into_response()
        }
        Submission::PersistFailed => {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
        }
        Submission::Accepted(record) => ReceiptTemplate::from(&record).into_response(),
    }
}

/// Liveness check.
///
/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

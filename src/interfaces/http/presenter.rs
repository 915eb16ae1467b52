//! HTML documents returned by the order endpoints.
//!
//! Templates live under `templates/` and are compiled in by askama. Every
//! interpolated value is HTML-escaped.

use crate::domain::order::PersistedOrder;
use crate::domain::pricing::{self, APPLE_PRICE, BANANA_PRICE, MINIMUM_PURCHASE, Money};
use askama::Template;
use askama_web::WebTemplate;

/// Plain-text body for orders under the minimum purchase.
pub const MINIMUM_PURCHASE_MESSAGE: &str = "Minimum purchase should be $10.";

/// Body for any failure that must not leak detail to the client.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Renders a price without trailing zeros, e.g. `3` rather than `3.00`.
fn unit_price(price: Money) -> String {
    price.value().normalize().to_string()
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct OrderFormTemplate {
    pub provinces: Vec<&'static str>,
    pub apple_price: String,
    pub banana_price: String,
    pub minimum: String,
}

impl Default for OrderFormTemplate {
    fn default() -> Self {
        Self {
            provinces: pricing::provinces().collect(),
            apple_price: unit_price(APPLE_PRICE),
            banana_price: unit_price(BANANA_PRICE),
            minimum: unit_price(MINIMUM_PURCHASE),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "errors.html")]
pub struct ErrorListTemplate {
    pub errors: Vec<String>,
}

/// One purchased product on the receipt.
pub struct LineItem {
    pub quantity: u64,
    pub cost: Money,
}

impl LineItem {
    /// Lines with a zero quantity are left off the receipt.
    fn non_zero(quantity: u64, cost: Money) -> Option<Self> {
        (quantity > 0).then_some(Self { quantity, cost })
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "receipt.html")]
pub struct ReceiptTemplate {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub apple_price: String,
    pub banana_price: String,
    pub apples: Option<LineItem>,
    pub bananas: Option<LineItem>,
    pub subtotal: Money,
    pub tax_percentage: String,
    pub tax: Money,
    pub total: Money,
}

impl From<&PersistedOrder> for ReceiptTemplate {
    fn from(record: &PersistedOrder) -> Self {
        let order = &record.order;
        let pricing = &record.pricing;
        Self {
            name: order.name.clone(),
            email: order.email.clone(),
            phone_number: order.phone_number.clone(),
            address: order.address.clone(),
            city: order.city.clone(),
            province: order.province.clone(),
            apple_price: unit_price(APPLE_PRICE),
            banana_price: unit_price(BANANA_PRICE),
            apples: LineItem::non_zero(order.apples, order.apples_cost()),
            bananas: LineItem::non_zero(order.bananas, order.bananas_cost()),
            subtotal: pricing.subtotal,
            tax_percentage: pricing.tax_percentage(),
            tax: pricing.tax,
            total: pricing.total,
        }
    }
}

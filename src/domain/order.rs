use super::pricing::{APPLE_PRICE, BANANA_PRICE, Money, PricingResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw form submission. Nothing is checked until it goes through the validator.
///
/// Missing form fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderInput {
    pub name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub phone_number: String,
    pub email: String,
    pub apples: String,
    pub bananas: String,
}

/// A quantity field after parsing.
///
/// A blank field counts as zero. Whole values written with a zero fraction,
/// such as `4.0`, are counts. Text, fractional values and counts beyond `u64`
/// are `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Count(u64),
    Negative,
    Invalid,
}

impl Quantity {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::Count(0);
        }
        let Ok(value) = raw.parse::<Decimal>() else {
            return Self::Invalid;
        };
        if value.is_sign_negative() && !value.is_zero() {
            return Self::Negative;
        }
        if !value.fract().is_zero() {
            return Self::Invalid;
        }
        value.to_u64().map(Self::Count).unwrap_or(Self::Invalid)
    }

    /// True when the field is numeric and strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Count(n) if *n > 0)
    }

    /// True when the field is numeric and not negative.
    pub fn is_non_negative(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Negative | Self::Invalid => None,
        }
    }
}

/// An order that passed every field check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedOrder {
    pub name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub phone_number: String,
    pub email: String,
    pub apples: u64,
    pub bananas: u64,
}

impl ValidatedOrder {
    /// Builds a validated order from input the validator accepted.
    ///
    /// Returns `None` if a quantity is not a non-negative whole number, which
    /// cannot happen for input with an empty error list.
    pub(crate) fn from_checked(input: OrderInput) -> Option<Self> {
        let apples = Quantity::parse(&input.apples).count()?;
        let bananas = Quantity::parse(&input.bananas).count()?;
        Some(Self {
            name: input.name,
            address: input.address,
            city: input.city,
            province: input.province,
            phone_number: input.phone_number,
            email: input.email,
            apples,
            bananas,
        })
    }

    pub fn apples_cost(&self) -> Money {
        APPLE_PRICE.times(self.apples)
    }

    pub fn bananas_cost(&self) -> Money {
        BANANA_PRICE.times(self.bananas)
    }
}

/// The record written to the order store. Never modified after it is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedOrder {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub order: ValidatedOrder,
    pub pricing: PricingResult,
}

impl PersistedOrder {
    pub fn new(order: ValidatedOrder, pricing: PricingResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            order,
            pricing,
        }
    }
}

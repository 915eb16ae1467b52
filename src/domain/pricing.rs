use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A currency amount.
///
/// Wraps `rust_decimal::Decimal` so prices, taxes and totals never pass through
/// binary floating point. `Display` always renders exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to whole cents, half away from zero.
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies a unit price by a quantity.
    pub fn times(self, quantity: u64) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_to_cents().0)
    }
}

pub const APPLE_PRICE: Money = Money(dec!(3));
pub const BANANA_PRICE: Money = Money(dec!(2));

/// Orders with a subtotal strictly below this amount are rejected.
pub const MINIMUM_PURCHASE: Money = Money(dec!(10));

/// Sales tax by province or territory. Lookups are exact, case-sensitive matches.
pub const TAX_RATES: [(&str, Decimal); 13] = [
    ("Alberta", dec!(0.05)),
    ("British Columbia", dec!(0.12)),
    ("Manitoba", dec!(0.13)),
    ("New Brunswick", dec!(0.15)),
    ("Newfoundland and Labrador", dec!(0.15)),
    ("Northwest Territories", dec!(0.05)),
    ("Nova Scotia", dec!(0.15)),
    ("Nunavut", dec!(0.05)),
    ("Ontario", dec!(0.13)),
    ("Prince Edward Island", dec!(0.15)),
    ("Quebec", dec!(0.14975)),
    ("Saskatchewan", dec!(0.11)),
    ("Yukon", dec!(0.05)),
];

/// Returns the tax rate for `province`, or zero when the province is unknown.
pub fn tax_rate(province: &str) -> Decimal {
    TAX_RATES
        .iter()
        .find(|(name, _)| *name == province)
        .map(|(_, rate)| *rate)
        .unwrap_or(Decimal::ZERO)
}

/// Province names in table order.
pub fn provinces() -> impl Iterator<Item = &'static str> {
    TAX_RATES.iter().map(|(name, _)| *name)
}

pub fn meets_minimum(subtotal: Money) -> bool {
    subtotal >= MINIMUM_PURCHASE
}

/// Result of pricing an order.
///
/// `tax` is rounded to cents when computed, so `total` is always exactly
/// `subtotal + tax` as printed on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub subtotal: Money,
    pub tax_rate: Decimal,
    pub tax: Money,
    pub total: Money,
}

impl PricingResult {
    /// The tax rate as a percentage with two decimals, e.g. `14.98` for Quebec.
    pub fn tax_percentage(&self) -> String {
        let pct = (self.tax_rate * dec!(100))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", pct)
    }
}

pub struct PricingEngine;

impl PricingEngine {
    pub fn compute_subtotal(apples: u64, bananas: u64) -> Money {
        APPLE_PRICE.times(apples) + BANANA_PRICE.times(bananas)
    }

    pub fn compute_total(subtotal: Money, province: &str) -> PricingResult {
        let tax_rate = tax_rate(province);
        let tax = Money(subtotal.0 * tax_rate).round_to_cents();
        PricingResult {
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        }
    }
}

//! Application layer orchestrating a single order submission.
//!
//! [`checkout::CheckoutService`] takes raw form fields through validation,
//! pricing and the minimum-purchase rule, then saves the order through a
//! pooled store connection.

pub mod checkout;

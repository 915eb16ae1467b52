//! Business rules for fruit orders: field validation, pricing and tax.
//!
//! Nothing in here performs I/O. Storage is reached through the traits in
//! [`ports`].

pub mod order;
pub mod ports;
pub mod pricing;
pub mod validation;

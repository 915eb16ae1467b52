use super::order::{OrderInput, Quantity, ValidatedOrder};
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const ADDRESS_REQUIRED: &str = "Address is required.";
pub const CITY_REQUIRED: &str = "City is required.";
pub const PROVINCE_REQUIRED: &str = "Province is required.";
pub const PHONE_FORMAT: &str = "Phone Number must be in the format 555-555-5555.";
pub const EMAIL_FORMAT: &str = "Invalid Email Address format.";
pub const QUANTITY_REQUIRED: &str =
    "At least one of Apples or Bananas quantity must be greater than 0.";
pub const APPLES_POSITIVE: &str = "Apples quantity must be a positive number.";
pub const BANANAS_POSITIVE: &str = "Bananas quantity must be a positive number.";

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").unwrap())
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap())
}

/// Field-level checks for an order form.
///
/// Every rule runs; messages accumulate in rule order rather than stopping at
/// the first failure.
pub struct Validator;

impl Validator {
    /// Returns the error messages for `input`. An empty list means it is valid.
    pub fn validate(input: &OrderInput) -> Vec<String> {
        let mut errors = Vec::new();

        let required = [
            (&input.name, NAME_REQUIRED),
            (&input.address, ADDRESS_REQUIRED),
            (&input.city, CITY_REQUIRED),
            (&input.province, PROVINCE_REQUIRED),
        ];
        for (value, message) in required {
            if value.is_empty() {
                errors.push(message.to_string());
            }
        }

        if !phone_regex().is_match(&input.phone_number) {
            errors.push(PHONE_FORMAT.to_string());
        }
        // Unanchored: the pattern only has to occur somewhere in the field.
        if !email_regex().is_match(&input.email) {
            errors.push(EMAIL_FORMAT.to_string());
        }

        let apples = Quantity::parse(&input.apples);
        let bananas = Quantity::parse(&input.bananas);
        // The combined message and the per-field messages are exclusive.
        // Two zeros take the combined branch.
        if !apples.is_positive() && !bananas.is_positive() {
            errors.push(QUANTITY_REQUIRED.to_string());
        } else {
            if !apples.is_non_negative() {
                errors.push(APPLES_POSITIVE.to_string());
            }
            if !bananas.is_non_negative() {
                errors.push(BANANAS_POSITIVE.to_string());
            }
        }

        errors
    }

    /// Validates `input` and converts it into a [`ValidatedOrder`] on success.
    pub fn check(input: OrderInput) -> Result<ValidatedOrder, Vec<String>> {
        let errors = Self::validate(&input);
        if !errors.is_empty() {
            return Err(errors);
        }
        ValidatedOrder::from_checked(input).ok_or_else(|| vec![QUANTITY_REQUIRED.to_string()])
    }
}

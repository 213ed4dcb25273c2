//! Commerce error types.

use thiserror::Error;

/// Errors raised while validating or converting storefront input.
///
/// The stores themselves never fail: lookups return `Option`, and
/// quantities are clamped. These errors come from form input at the
/// edges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A required form field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present but could not be accepted.
    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// A price string could not be parsed as a non-negative amount.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// A parsed price does not fit in the minor-unit counter.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Name of the form field this error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CommerceError::MissingField(field) => Some(field),
            CommerceError::InvalidField { field, .. } => Some(field),
            CommerceError::InvalidPrice(_) => Some("price"),
            _ => None,
        }
    }
}

/// Errors raised when an order cannot be placed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Contact or shipping fields left blank, in form order.
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Credit card selected without number, expiry and CVC.
    #[error("Please fill in all payment details")]
    MissingCardDetails,
}

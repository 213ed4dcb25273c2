//! Checkout module.
//!
//! Validates the checkout form and turns the cart into a simulated order.
//! No payment is taken and nothing is sent anywhere.

mod form;
mod order;

pub use crate::error::CheckoutError;
pub use form::{CheckoutForm, PaymentMethod};
pub use order::{place_order, OrderConfirmation, OrderLine};

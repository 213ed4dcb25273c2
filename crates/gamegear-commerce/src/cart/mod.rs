//! Shopping cart module.
//!
//! Contains the cart store, its line items and the order summary.

mod cart;
mod summary;

pub use cart::{CartEvent, CartItem, CartStore};
pub use summary::CartSummary;

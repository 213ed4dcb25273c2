//! Order placement.

use crate::cart::{CartItem, CartStore};
use crate::checkout::{CheckoutError, CheckoutForm};
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A line on a placed order, copied from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// What the customer sees after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub customer_name: String,
    pub email: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Place a simulated order for everything in the cart.
///
/// On success the cart is cleared. On failure the cart is left untouched.
pub fn place_order(
    form: &CheckoutForm,
    cart: &mut CartStore,
) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        warn!("Checkout attempted with an empty cart");
        return Err(CheckoutError::EmptyCart);
    }
    if let Err(e) = form.validate() {
        warn!(error = %e, "Checkout form rejected");
        return Err(e);
    }

    let confirmation = OrderConfirmation {
        order_id: OrderId::generate(),
        customer_name: form.full_name(),
        email: form.email.trim().to_string(),
        shipping_address: form.one_line_address(),
        payment_method: form.payment.display_name().to_string(),
        lines: cart.items().iter().map(OrderLine::from).collect(),
        total: cart.total(),
        placed_at: Utc::now(),
    };
    cart.clear();

    info!(
        order_id = %confirmation.order_id,
        total = %confirmation.total,
        lines = confirmation.lines.len(),
        "Order placed"
    );
    Ok(confirmation)
}

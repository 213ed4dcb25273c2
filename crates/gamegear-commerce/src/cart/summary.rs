//! Cart order summary.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Label shown for charges that are only known at checkout.
pub const CALCULATED_AT_CHECKOUT: &str = "Calculated at checkout";

/// The order summary box on the cart page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charge, not known until checkout.
    pub shipping: Option<Money>,
    /// Tax, not known until checkout.
    pub tax: Option<Money>,
    /// Subtotal plus any known charges.
    pub total: Money,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: u64,
}

impl CartSummary {
    /// Build a summary with shipping and tax left to checkout.
    pub fn new(subtotal: Money, line_count: usize, item_count: u64) -> Self {
        Self {
            subtotal,
            shipping: None,
            tax: None,
            total: subtotal,
            line_count,
            item_count,
        }
    }

    /// Display text for the shipping row.
    pub fn shipping_label(&self) -> String {
        charge_label(self.shipping)
    }

    /// Display text for the tax row.
    pub fn tax_label(&self) -> String {
        charge_label(self.tax)
    }
}

fn charge_label(charge: Option<Money>) -> String {
    charge
        .map(|m| m.display())
        .unwrap_or_else(|| CALCULATED_AT_CHECKOUT.to_string())
}

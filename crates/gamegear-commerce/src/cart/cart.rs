//! Cart store and line item types.

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::events::{SubscriptionId, Subscribers};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// A line in the cart: a frozen copy of the product plus a quantity.
///
/// The copy is taken when the line is created and is not refreshed if the
/// catalog record changes or is deleted later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Units in the cart, at least one.
    pub quantity: u32,
}

impl CartItem {
    /// The product id this line is for.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        let price = self.product.price;
        Money::new(
            price.amount_cents.saturating_mul(i64::from(self.quantity)),
            price.currency,
        )
    }

    /// Check if one more unit fits within the stock recorded on this line.
    pub fn can_increment(&self) -> bool {
        self.quantity < self.product.stock
    }
}

/// A cart change, published after the cart has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added, or merged into its existing line.
    Added {
        id: ProductId,
        name: String,
        quantity: u32,
    },
    /// A line's quantity was set.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// A line was removed.
    Removed { id: ProductId, name: String },
    /// Every line was removed.
    Cleared,
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartEvent::Added { name, .. } => write!(f, "{} added to cart", name),
            CartEvent::QuantityChanged { quantity, .. } => {
                write!(f, "Quantity updated to {}", quantity)
            }
            CartEvent::Removed { name, .. } => write!(f, "{} removed from cart", name),
            CartEvent::Cleared => write!(f, "Cart cleared"),
        }
    }
}

/// The active shopping cart.
///
/// Quantities are clamped rather than rejected: a line never holds fewer
/// than one unit or more units than the product had in stock when it was
/// added. Lines are kept in the order they were first added.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    currency: Currency,
    subscribers: Subscribers<CartEvent>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
            subscribers: Subscribers::new(),
        }
    }

    /// Rebuild a cart from saved lines.
    ///
    /// Lines that could not have been produced by [`CartStore::add`] (zero
    /// quantity, repeated product, foreign currency) are dropped, and
    /// quantities above the recorded stock are capped.
    pub fn from_items(currency: Currency, items: Vec<CartItem>) -> Self {
        let mut cart = Self::new(currency);
        for mut item in items {
            if item.quantity == 0
                || item.product.stock == 0
                || item.product.price.currency != currency
                || cart.get(item.id()).is_some()
            {
                warn!(product_id = %item.id(), "Dropping invalid saved cart line");
                continue;
            }
            item.quantity = item.quantity.min(item.product.stock);
            cart.items.push(item);
        }
        cart
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Register a callback for cart changes.
    pub fn subscribe(&mut self, callback: impl Fn(&CartEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a cart change callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the product grows by `quantity`; otherwise a new
    /// line is created from a copy of `product`. Either way the resulting
    /// quantity is capped at `product.stock`, so adding to a line already at
    /// the cap leaves it unchanged. Nothing is added for a zero quantity, an
    /// out-of-stock product, or a product priced in another currency.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if product.price.currency != self.currency {
            warn!(
                product_id = %product.id,
                product_currency = %product.price.currency,
                cart_currency = %self.currency,
                "Ignoring product priced in another currency"
            );
            return;
        }

        let resulting = match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => {
                let wanted = item.quantity.saturating_add(quantity);
                // Never shrink a line here, even if stock has since dropped below it.
                item.quantity = wanted.min(product.stock).max(item.quantity);
                if item.quantity < wanted {
                    debug!(product_id = %product.id, requested = wanted, kept = item.quantity, "Quantity capped at stock");
                }
                item.quantity
            }
            None => {
                let capped = quantity.min(product.stock);
                if capped == 0 {
                    debug!(product_id = %product.id, "Out of stock, not added");
                    return;
                }
                if capped < quantity {
                    debug!(product_id = %product.id, requested = quantity, kept = capped, "Quantity capped at stock");
                }
                self.items.push(CartItem {
                    product: product.clone(),
                    quantity: capped,
                });
                capped
            }
        };

        info!(product_id = %product.id, quantity = resulting, "Added to cart");
        self.subscribers.publish(&CartEvent::Added {
            id: product.id.clone(),
            name: product.name.clone(),
            quantity: resulting,
        });
    }

    /// Remove the line for a product. Returns false if there was none.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.items.iter().position(|i| i.id() == id) else {
            return false;
        };
        let removed = self.items.remove(index);

        info!(product_id = %id, "Removed from cart");
        self.subscribers.publish(&CartEvent::Removed {
            id: removed.product.id,
            name: removed.product.name,
        });
        true
    }

    /// Set a line's quantity.
    ///
    /// Zero removes the line. Anything else is clamped to `1..=stock` using
    /// the stock recorded on the line. Does nothing if the product is not
    /// in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        let Some(item) = self.items.iter_mut().find(|i| i.id() == id) else {
            return;
        };

        item.quantity = quantity.min(item.product.stock).max(1);
        let quantity = item.quantity;

        info!(product_id = %id, quantity, "Cart quantity set");
        self.subscribers.publish(&CartEvent::QuantityChanged {
            id: id.clone(),
            quantity,
        });
    }

    /// Sum of price times quantity over all lines, computed on every call.
    pub fn total(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.line_total().amount_cents));
        Money::new(cents, self.currency)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        info!("Cart cleared");
        self.subscribers.publish(&CartEvent::Cleared);
    }

    /// The cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for a product, if present.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check if a line can take one more unit. False if the line is absent.
    pub fn can_increment(&self, id: &ProductId) -> bool {
        self.get(id).is_some_and(CartItem::can_increment)
    }

    /// The order summary for the cart page.
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(self.total(), self.len(), self.item_count())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: &str, cents: i64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            description: String::new(),
            price: Money::new(cents, Currency::USD),
            category: "Accessories".to_string(),
            image_url: String::new(),
            stock,
            featured: false,
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(&product("1", 1000, 5), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = CartStore::new(Currency::USD);
        let p = product("1", 1000, 10);
        cart.add(&p, 1);
        cart.add(&p, 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_caps_at_stock() {
        let mut cart = CartStore::new(Currency::USD);
        let p = product("1", 1000, 4);
        for _ in 0..3 {
            cart.add(&p, 5);
            assert_eq!(cart.get(&p.id).unwrap().quantity, 4);
        }
    }

    #[test]
    fn test_add_at_ceiling_is_noop() {
        let mut cart = CartStore::new(Currency::USD);
        let p = product("1", 1000, 2);
        cart.add(&p, 2);
        assert!(!cart.can_increment(&p.id));
        cart.add(&p, 1);
        assert_eq!(cart.get(&p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_never_shrinks_line() {
        let mut cart = CartStore::new(Currency::USD);
        let mut p = product("1", 1000, 10);
        cart.add(&p, 8);
        p.stock = 3;
        cart.add(&p, 1);
        assert_eq!(cart.get(&p.id).unwrap().quantity, 8);
    }

    #[test]
    fn test_add_ignores_zero_and_out_of_stock() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(&product("1", 1000, 5), 0);
        cart.add(&product("2", 1000, 0), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_ignores_other_currency() {
        let mut cart = CartStore::new(Currency::USD);
        let mut p = product("1", 1000, 5);
        p.price = Money::new(1000, Currency::EUR);
        cart.add(&p, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_is_a_snapshot() {
        let mut cart = CartStore::new(Currency::USD);
        let mut p = product("1", 1000, 5);
        cart.add(&p, 1);
        p.name = "Renamed".to_string();
        p.price = Money::new(1, Currency::USD);

        let line = cart.get(&p.id).unwrap();
        assert_eq!(line.product.name, "Product 1");
        assert_eq!(line.line_total().amount_cents, 1000);
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut cart = CartStore::new(Currency::USD);
        let p = product("1", 1000, 6);
        cart.add(&p, 1);

        cart.set_quantity(&p.id, 4);
        assert_eq!(cart.get(&p.id).unwrap().quantity, 4);

        cart.set_quantity(&p.id, 60);
        assert_eq!(cart.get(&p.id).unwrap().quantity, 6);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = CartStore::new(Currency::USD);
        let p = product("1", 1000, 6);
        cart.add(&p, 3);
        cart.set_quantity(&p.id, 0);
        assert!(cart.get(&p.id).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_is_noop() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(&product("1", 1000, 6), 3);
        cart.set_quantity(&ProductId::new("9"), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(&product("1", 1000, 6), 1);
        assert!(!cart.remove(&ProductId::new("2")));
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(&ProductId::new("1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = CartStore::new(Currency::USD);
        assert!(cart.total().is_zero());

        cart.add(&product("1", 1000, 5), 2);
        assert_eq!(cart.total(), Money::new(2000, Currency::USD));
        assert_eq!(cart.total().display(), "$20.00");

        cart.add(&product("2", 2550, 5), 1);
        assert_eq!(cart.total().amount_cents, 4550);

        cart.set_quantity(&ProductId::new("1"), 1);
        assert_eq!(cart.total().amount_cents, 3550);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new(Currency::USD);
        for p in seed_products(Currency::USD) {
            cart.add(&p, 1);
        }
        assert_eq!(cart.len(), 6);
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut cart = CartStore::new(Currency::USD);
        cart.add(&product("1", 1000, 5), 2);
        cart.add(&product("2", 500, 5), 3);

        let summary = cart.summary();
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.subtotal.amount_cents, 3500);
        assert_eq!(summary.total, summary.subtotal);
        assert!(summary.shipping.is_none());
    }

    #[test]
    fn test_from_items_sanitizes() {
        let good = CartItem {
            product: product("1", 1000, 5),
            quantity: 9,
        };
        let zero = CartItem {
            product: product("2", 1000, 5),
            quantity: 0,
        };
        let dup = CartItem {
            product: product("1", 1000, 5),
            quantity: 1,
        };
        let sold_out = CartItem {
            product: product("3", 1000, 0),
            quantity: 3,
        };

        let cart = CartStore::from_items(Currency::USD, vec![good, zero, dup, sold_out]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert!(cart.get(&ProductId::new("3")).is_none());
        assert!(cart
            .items()
            .iter()
            .all(|item| item.quantity >= 1 && item.quantity <= item.product.stock));
    }

    #[test]
    fn test_item_json_is_flat() {
        let item = CartItem {
            product: product("1", 1000, 5),
            quantity: 2,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 2);

        let back: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cart = CartStore::new(Currency::USD);
        let sink = Rc::clone(&seen);
        cart.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let p = product("1", 1000, 5);
        cart.add(&p, 7);
        cart.set_quantity(&p.id, 2);
        cart.remove(&p.id);
        cart.remove(&p.id);
        cart.clear();

        assert_eq!(
            *seen.borrow(),
            vec![
                CartEvent::Added {
                    id: p.id.clone(),
                    name: "Product 1".to_string(),
                    quantity: 5
                },
                CartEvent::QuantityChanged {
                    id: p.id.clone(),
                    quantity: 2
                },
                CartEvent::Removed {
                    id: p.id.clone(),
                    name: "Product 1".to_string()
                },
                CartEvent::Cleared,
            ]
        );
    }
}

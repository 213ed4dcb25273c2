//! Catalog, cart and checkout domain logic for the GameGear storefront.
//!
//! This crate owns the in-memory state behind the storefront pages:
//!
//! - **Catalog**: the [`ProductStore`](catalog::ProductStore), listing queries and admin stats
//! - **Cart**: the [`CartStore`](cart::CartStore) with stock-capped quantities and totals
//! - **Checkout**: form validation and simulated order placement
//! - **Events**: change notifications for whatever layer renders the state
//!
//! # Example
//!
//! ```rust
//! use gamegear_commerce::prelude::*;
//!
//! let products = ProductStore::seeded(Currency::USD);
//! let keyboard = products.get_by_id(&ProductId::new("1")).unwrap().clone();
//!
//! let mut cart = CartStore::new(Currency::USD);
//! cart.add(&keyboard, 20);
//!
//! // Quantity is capped at the keyboard's stock of 15.
//! assert_eq!(cart.get(&keyboard.id).unwrap().quantity, 15);
//! println!("Total: {}", cart.total());
//! ```

pub mod error;
pub mod events;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::{CheckoutError, CommerceError};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CheckoutError, CommerceError};
    pub use crate::events::{SubscriptionId, Subscribers};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogEvent, CatalogQuery, CatalogStats, CategoryCount, NewProduct, NewProductInput,
        Product, ProductEdit, ProductStore, ALL_CATEGORIES,
    };

    // Cart
    pub use crate::cart::{CartEvent, CartItem, CartStore, CartSummary};

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutForm, OrderConfirmation, OrderLine, PaymentMethod,
    };
}

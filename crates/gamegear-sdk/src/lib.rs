//! # GameGear SDK
//!
//! Wires the catalog, cart and auth crates into one [`Storefront`] built
//! from a [`StorefrontConfig`].
//!
//! ## Quick Start
//!
//! ```rust
//! use gamegear_sdk::prelude::*;
//!
//! let mut shop = Storefront::new(StorefrontConfig::default(), MemoryStore::new());
//!
//! assert!(shop.add_to_cart(&ProductId::new("2"), 2));
//! assert_eq!(shop.cart().total().display(), "$159.98");
//!
//! let featured = shop.products().list_featured();
//! assert_eq!(featured.len(), 4);
//! ```
//!
//! ## Crates
//!
//! - [`gamegear_commerce`]: products, cart, checkout
//! - [`gamegear_auth`]: mock login, signup and one-time codes
//! - [`gamegear_cache`]: key-value storage for sessions and saved carts

mod config;
mod storefront;

pub mod prelude;

// Re-export the building blocks
pub use gamegear_auth;
pub use gamegear_cache;
pub use gamegear_commerce;

pub use config::{
    AuthSection, CartSection, ConfigError, StorageSection, StoreSection, StorefrontConfig,
    STORE_FILE_NAME,
};
pub use storefront::{Storefront, CART_KEY};

//! The storefront: every store the pages need, created in one place.

use crate::StorefrontConfig;
use gamegear_auth::AuthService;
use gamegear_cache::{Cache, CacheError, KeyValueStore};
use gamegear_commerce::cart::{CartItem, CartStore};
use gamegear_commerce::catalog::{CatalogQuery, CatalogStats, ProductStore};
use gamegear_commerce::checkout::{place_order, CheckoutError, CheckoutForm, OrderConfirmation};
use gamegear_commerce::ids::ProductId;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key for the saved cart.
pub const CART_KEY: &str = "cart";

/// Owns the product catalog, the cart and the auth service.
///
/// The key-value store is shared: auth keeps the session in it, and the
/// cart is saved to it when `[cart] persist` is on.
pub struct Storefront<S: KeyValueStore> {
    config: StorefrontConfig,
    cache: Cache<Arc<S>>,
    products: ProductStore,
    cart: CartStore,
    auth: AuthService<Arc<S>>,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Build a storefront with the seed catalog.
    ///
    /// A saved session is restored. A saved cart is restored only when cart
    /// persistence is enabled, and an unreadable one is discarded.
    pub fn new(config: StorefrontConfig, store: S) -> Self {
        let currency = config.store.currency;
        let store = Arc::new(store);
        let cache = Cache::new(Arc::clone(&store));

        let cart = if config.cart.persist {
            load_cart(&cache, currency)
        } else {
            CartStore::new(currency)
        };

        let mut auth = AuthService::new(Arc::clone(&store), config.auth.settings());
        auth.restore();

        info!(
            currency = %currency,
            cart_lines = cart.len(),
            signed_in = auth.is_authenticated(),
            "Storefront ready"
        );

        Self {
            products: ProductStore::seeded(currency),
            cart,
            auth,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn products(&self) -> &ProductStore {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ProductStore {
        &mut self.products
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn auth(&self) -> &AuthService<Arc<S>> {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthService<Arc<S>> {
        &mut self.auth
    }

    /// The shared key-value store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// The products page query with nothing selected.
    pub fn default_query(&self) -> CatalogQuery {
        CatalogQuery::storefront(self.config.store.max_price())
    }

    /// Dashboard figures using the configured low stock threshold.
    pub fn stats(&self) -> CatalogStats {
        self.products.stats(self.config.store.low_stock_threshold)
    }

    /// Add the live catalog product to the cart.
    ///
    /// Returns false if no product has this id. Quantity capping follows
    /// [`CartStore::add`].
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> bool {
        match self.products.get_by_id(id) {
            Some(product) => {
                self.cart.add(product, quantity);
                true
            }
            None => {
                debug!(product_id = %id, "Add to cart for unknown product");
                false
            }
        }
    }

    /// Place the order and empty the cart.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, CheckoutError> {
        let confirmation = place_order(form, &mut self.cart)?;
        if let Err(e) = self.save_cart() {
            warn!(error = %e, "Failed to save emptied cart");
        }
        Ok(confirmation)
    }

    /// Write the cart to storage. Does nothing unless persistence is on.
    pub fn save_cart(&self) -> Result<(), CacheError> {
        if !self.config.cart.persist {
            return Ok(());
        }
        if self.cart.is_empty() {
            self.cache.delete(CART_KEY)
        } else {
            self.cache.set(CART_KEY, &self.cart.items())
        }
    }
}

fn load_cart<S: KeyValueStore>(
    cache: &Cache<Arc<S>>,
    currency: gamegear_commerce::Currency,
) -> CartStore {
    match cache.get::<Vec<CartItem>>(CART_KEY) {
        Ok(Some(items)) => CartStore::from_items(currency, items),
        Ok(None) => CartStore::new(currency),
        Err(e) => {
            warn!(error = %e, "Discarding unreadable saved cart");
            if let Err(e) = cache.delete(CART_KEY) {
                warn!(error = %e, "Failed to delete saved cart");
            }
            CartStore::new(currency)
        }
    }
}

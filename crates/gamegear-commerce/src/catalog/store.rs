//! The product store: single source of truth for the catalog.

use crate::catalog::{
    seed_products, CatalogQuery, CatalogStats, NewProduct, Product, ALL_CATEGORIES,
};
use crate::events::{SubscriptionId, Subscribers};
use crate::ids::ProductId;
use crate::money::Currency;
use std::fmt;
use tracing::{debug, info, warn};

/// A catalog change, published after the store has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    Added { id: ProductId, name: String },
    Updated { id: ProductId, name: String },
    Removed { id: ProductId, name: String },
}

impl CatalogEvent {
    /// The product this event is about.
    pub fn product_id(&self) -> &ProductId {
        match self {
            CatalogEvent::Added { id, .. }
            | CatalogEvent::Updated { id, .. }
            | CatalogEvent::Removed { id, .. } => id,
        }
    }
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEvent::Added { name, .. } => write!(f, "Product \"{}\" has been added", name),
            CatalogEvent::Updated { name, .. } => {
                write!(f, "Product \"{}\" has been updated", name)
            }
            CatalogEvent::Removed { name, .. } => {
                write!(f, "Product \"{}\" has been deleted", name)
            }
        }
    }
}

/// In-memory product catalog.
///
/// Reads are linear scans over the list; there are no indexes to keep in
/// sync. Ids handed out by [`ProductStore::add`] are decimal strings that
/// count up from one past the highest numeric id already present.
#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    currency: Currency,
    next_id: u64,
    subscribers: Subscribers<CatalogEvent>,
}

impl ProductStore {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self::from_products(currency, Vec::new())
    }

    /// Create a catalog holding the seed products.
    pub fn seeded(currency: Currency) -> Self {
        Self::from_products(currency, seed_products(currency))
    }

    /// Create a catalog from existing records.
    ///
    /// Records whose id repeats an earlier record are dropped.
    pub fn from_products(currency: Currency, products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if unique.iter().any(|p| p.id == product.id) {
                warn!(product_id = %product.id, "Dropping product with duplicate id");
                continue;
            }
            unique.push(product);
        }

        let next_id = unique
            .iter()
            .filter_map(|p| p.id.as_number())
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Self {
            products: unique,
            currency,
            next_id,
            subscribers: Subscribers::new(),
        }
    }

    /// Currency every product price is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Register a callback for catalog changes.
    pub fn subscribe(&mut self, callback: impl Fn(&CatalogEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a catalog change callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Add a product, assigning it a fresh id. Returns the stored record.
    pub fn add(&mut self, new: NewProduct) -> Product {
        let id = self.allocate_id();
        let product = Product::from_new(id, new);
        self.products.push(product.clone());

        info!(product_id = %product.id, name = %product.name, "Product added");
        self.subscribers.publish(&CatalogEvent::Added {
            id: product.id.clone(),
            name: product.name.clone(),
        });
        product
    }

    /// Replace the record with the same id.
    ///
    /// Returns false, and changes nothing, if no record has that id.
    pub fn update(&mut self, product: Product) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) else {
            debug!(product_id = %product.id, "Update ignored, product not found");
            return false;
        };

        let event = CatalogEvent::Updated {
            id: product.id.clone(),
            name: product.name.clone(),
        };
        *slot = product;

        info!(product_id = %event.product_id(), "Product updated");
        self.subscribers.publish(&event);
        true
    }

    /// Delete the record with the given id. Returns it if it existed.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        let removed = self.products.remove(index);

        info!(product_id = %removed.id, "Product removed");
        self.subscribers.publish(&CatalogEvent::Removed {
            id: removed.id.clone(),
            name: removed.name.clone(),
        });
        Some(removed)
    }

    /// Look up a product by id.
    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in a category, or all products for [`ALL_CATEGORIES`].
    ///
    /// Matching is exact and case-sensitive.
    pub fn list_by_category(&self, category: &str) -> Vec<&Product> {
        if category == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products flagged for promotion.
    pub fn list_featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// The category tab list: [`ALL_CATEGORIES`] then each distinct category
    /// in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products matching a listing query.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product> {
        self.products.iter().filter(|p| query.matches(p)).collect()
    }

    /// The admin table filter: case-insensitive match on name or category.
    pub fn admin_search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Dashboard figures for the current catalog.
    pub fn stats(&self, low_stock_threshold: u32) -> CatalogStats {
        CatalogStats::compute(&self.products, low_stock_threshold)
    }

    fn allocate_id(&mut self) -> ProductId {
        loop {
            let id = ProductId::new(self.next_id.to_string());
            self.next_id = self.next_id.saturating_add(1);
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn new_pad() -> NewProduct {
        NewProduct {
            name: "XL Desk Mat".to_string(),
            description: "Full desk coverage".to_string(),
            price: Money::new(2499, Currency::USD),
            category: "Accessories".to_string(),
            image_url: "https://example.com/mat.jpg".to_string(),
            stock: 40,
            featured: false,
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = ProductStore::seeded(Currency::USD);
        assert_eq!(store.len(), 6);
        assert_eq!(
            store.get_by_id(&ProductId::new("1")).unwrap().name,
            "Pro Gaming Keyboard"
        );
    }

    #[test]
    fn test_add_then_get_round_trip() {
        let mut store = ProductStore::seeded(Currency::USD);
        let input = new_pad();
        let stored = store.add(input.clone());

        assert_eq!(stored.id.as_str(), "7");
        let fetched = store.get_by_id(&stored.id).unwrap();
        assert_eq!(fetched, &Product::from_new(stored.id.clone(), input));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = ProductStore::new(Currency::USD);
        let a = store.add(new_pad());
        let b = store.add(new_pad());
        store.remove(&b.id);
        let c = store.add(new_pad());

        assert_eq!(a.id.as_str(), "1");
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = ProductStore::seeded(Currency::USD);
        let mut mouse = store.get_by_id(&ProductId::new("2")).unwrap().clone();
        mouse.stock = 2;
        mouse.featured = false;

        assert!(store.update(mouse.clone()));
        assert_eq!(store.products()[1], mouse);
        assert_eq!(store.products()[0].name, "Pro Gaming Keyboard");
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = ProductStore::seeded(Currency::USD);
        let before = store.products().to_vec();
        let mut ghost = before[0].clone();
        ghost.id = ProductId::new("404");

        assert!(!store.update(ghost));
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_remove() {
        let mut store = ProductStore::seeded(Currency::USD);
        let removed = store.remove(&ProductId::new("4")).unwrap();
        assert_eq!(removed.name, "Gaming Mouse Pad");
        assert!(store.get_by_id(&ProductId::new("4")).is_none());
        assert!(store.remove(&ProductId::new("4")).is_none());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_list_by_category() {
        let store = ProductStore::seeded(Currency::USD);
        assert_eq!(store.list_by_category(ALL_CATEGORIES).len(), 6);

        let keyboards = store.list_by_category("Keyboards");
        assert_eq!(keyboards.len(), 1);
        assert!(keyboards.iter().all(|p| p.category == "Keyboards"));

        assert!(store.list_by_category("keyboards").is_empty());
    }

    #[test]
    fn test_list_featured() {
        let store = ProductStore::seeded(Currency::USD);
        let featured: Vec<&str> = store.list_featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2", "3", "6"]);
    }

    #[test]
    fn test_categories_tab_list() {
        let mut store = ProductStore::seeded(Currency::USD);
        let mut extra = new_pad();
        extra.category = "Mice".to_string();
        store.add(extra);

        assert_eq!(
            store.categories(),
            vec!["All", "Keyboards", "Mice", "Headsets", "Accessories", "Controllers", "Furniture"]
        );
    }

    #[test]
    fn test_admin_search() {
        let store = ProductStore::seeded(Currency::USD);
        assert_eq!(store.admin_search("").len(), 6);
        assert_eq!(store.admin_search("FURN").len(), 1);
        assert_eq!(store.admin_search("gaming").len(), 6);
        // Description is not searched by the admin filter.
        assert!(store.admin_search("lumbar").is_empty());
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let mut products = seed_products(Currency::USD);
        let mut dup = products[0].clone();
        dup.name = "Duplicate".to_string();
        products.push(dup);

        let store = ProductStore::from_products(Currency::USD, products);
        assert_eq!(store.len(), 6);
        assert_eq!(store.products()[0].name, "Pro Gaming Keyboard");
    }

    #[test]
    fn test_events_published() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ProductStore::seeded(Currency::USD);
        let sink = Rc::clone(&seen);
        store.subscribe(move |e| sink.borrow_mut().push(e.to_string()));

        let added = store.add(new_pad());
        store.update(added.clone());
        store.remove(&added.id);
        store.remove(&added.id);

        assert_eq!(
            *seen.borrow(),
            vec![
                "Product \"XL Desk Mat\" has been added",
                "Product \"XL Desk Mat\" has been updated",
                "Product \"XL Desk Mat\" has been deleted",
            ]
        );
    }
}

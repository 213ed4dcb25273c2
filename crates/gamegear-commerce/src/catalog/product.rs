//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, assigned by the store.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description shown on the detail page.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Free-text category label.
    pub category: String,
    /// Reference to an external image.
    pub image_url: String,
    /// Units available.
    pub stock: u32,
    /// Whether the product is promoted on the home page.
    pub featured: bool,
}

impl Product {
    /// Attach an id to a new product record.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            image_url: new.image_url,
            stock: new.stock,
            featured: new.featured,
        }
    }

    /// Check if at least one unit is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is strictly below the given threshold.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    /// Case-insensitive substring match on name or description.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// A product record that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub image_url: String,
    pub stock: u32,
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn new_mouse() -> NewProduct {
        NewProduct {
            name: "Ultra Gaming Mouse".to_string(),
            description: "High precision gaming mouse with adjustable DPI".to_string(),
            price: Money::new(7999, Currency::USD),
            category: "Mice".to_string(),
            image_url: "https://example.com/mouse.jpg".to_string(),
            stock: 3,
            featured: true,
        }
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let product = Product::from_new(ProductId::new("9"), new_mouse());
        assert_eq!(product.id.as_str(), "9");
        assert_eq!(product.name, "Ultra Gaming Mouse");
        assert_eq!(product.price.amount_cents, 7999);
        assert!(product.featured);
    }

    #[test]
    fn test_stock_checks() {
        let mut product = Product::from_new(ProductId::new("9"), new_mouse());
        assert!(product.is_in_stock());
        assert!(product.is_low_stock(5));
        assert!(!product.is_low_stock(3));

        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_matches_text() {
        let product = Product::from_new(ProductId::new("9"), new_mouse());
        assert!(product.matches_text("mouse"));
        assert!(product.matches_text("dpi"));
        assert!(!product.matches_text("keyboard"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let product = Product::from_new(ProductId::new("9"), new_mouse());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "9");
        assert!(json.get("imageUrl").is_some());
    }
}

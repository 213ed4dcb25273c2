//! Admin dashboard statistics.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Products with fewer units than this are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Number of products carrying one category label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
    /// Share of the whole catalog, 0-100.
    pub percentage: f64,
}

/// Aggregate figures for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogStats {
    pub total_products: usize,
    /// Sum of stock over all products.
    pub total_stock: u64,
    /// Products with stock strictly below the threshold.
    pub low_stock_products: usize,
    pub low_stock_threshold: u32,
    /// Per-category counts, in order of first appearance.
    pub categories: Vec<CategoryCount>,
}

impl CatalogStats {
    /// Compute statistics over a product list.
    pub fn compute(products: &[Product], low_stock_threshold: u32) -> Self {
        let total_products = products.len();
        let total_stock = products.iter().map(|p| u64::from(p.stock)).sum();
        let low_stock_products = products
            .iter()
            .filter(|p| p.is_low_stock(low_stock_threshold))
            .count();

        let mut categories: Vec<CategoryCount> = Vec::new();
        for product in products {
            match categories.iter_mut().find(|c| c.category == product.category) {
                Some(entry) => entry.count += 1,
                None => categories.push(CategoryCount {
                    category: product.category.clone(),
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }
        for entry in &mut categories {
            entry.percentage = entry.count as f64 / total_products as f64 * 100.0;
        }

        Self {
            total_products,
            total_stock,
            low_stock_products,
            low_stock_threshold,
            categories,
        }
    }

    /// Count for one category, zero if absent.
    pub fn count_for(&self, category: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;
    use crate::money::Currency;

    #[test]
    fn test_seed_stats() {
        let products = seed_products(Currency::USD);
        let stats = CatalogStats::compute(&products, DEFAULT_LOW_STOCK_THRESHOLD);

        assert_eq!(stats.total_products, 6);
        assert_eq!(stats.total_stock, 15 + 20 + 10 + 30 + 25 + 5);
        // The chair has exactly 5 units, which is not below the threshold.
        assert_eq!(stats.low_stock_products, 0);
        assert_eq!(stats.categories.len(), 6);
        assert_eq!(stats.categories[0].category, "Keyboards");
    }

    #[test]
    fn test_low_stock_is_strict() {
        let mut products = seed_products(Currency::USD);
        products[5].stock = 4;
        let stats = CatalogStats::compute(&products, 5);
        assert_eq!(stats.low_stock_products, 1);

        let stats = CatalogStats::compute(&products, 11);
        assert_eq!(stats.low_stock_products, 2);
    }

    #[test]
    fn test_category_shares() {
        let mut products = seed_products(Currency::USD);
        products[1].category = "Keyboards".to_string();
        let stats = CatalogStats::compute(&products, 5);

        assert_eq!(stats.count_for("Keyboards"), 2);
        assert_eq!(stats.count_for("Mice"), 0);
        let keyboards = &stats.categories[0];
        assert!((keyboards.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog() {
        let stats = CatalogStats::compute(&[], 5);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_stock, 0);
        assert!(stats.categories.is_empty());
    }
}

//! Storefront listing queries.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Reserved category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Filters behind the product listing page.
///
/// Every filter that is set must match. Text matching is case-insensitive
/// on name or description; category matching is exact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Search term, if any.
    pub text: Option<String>,
    /// Category label, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Inclusive price bounds.
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
}

impl CatalogQuery {
    /// A query that matches every product.
    pub fn new() -> Self {
        Self {
            text: None,
            category: ALL_CATEGORIES.to_string(),
            min_price: None,
            max_price: None,
        }
    }

    /// The listing page's initial state: all categories, priced from zero to `max_price`.
    pub fn storefront(max_price: Money) -> Self {
        Self::new().with_price_range(Some(Money::zero(max_price.currency)), Some(max_price))
    }

    /// Set the search term. A blank term clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Check whether the category filter is active.
    pub fn filters_category(&self) -> bool {
        !self.category.is_empty() && self.category != ALL_CATEGORIES
    }

    /// Check a single product against every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(text) = &self.text {
            if !product.matches_text(&text.to_lowercase()) {
                return false;
            }
        }
        if self.filters_category() && product.category != self.category {
            return false;
        }
        let cents = product.price.amount_cents;
        if self.min_price.is_some_and(|min| cents < min.amount_cents) {
            return false;
        }
        if self.max_price.is_some_and(|max| cents > max.amount_cents) {
            return false;
        }
        true
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;
    use crate::money::Currency;

    fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        products.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let products = seed_products(Currency::USD);
        let query = CatalogQuery::new();
        assert!(products.iter().all(|p| query.matches(p)));
    }

    #[test]
    fn test_text_is_case_insensitive_on_name_or_description() {
        let products = seed_products(Currency::USD);
        let query = CatalogQuery::new().with_text("RGB");
        assert_eq!(
            names(products.iter().filter(|p| query.matches(p))),
            vec!["Pro Gaming Keyboard", "Gaming Mouse Pad"]
        );
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let query = CatalogQuery::new().with_text("   ");
        assert_eq!(query.text, None);
    }

    #[test]
    fn test_category_is_exact() {
        let products = seed_products(Currency::USD);
        let query = CatalogQuery::new().with_category("mice");
        assert_eq!(products.iter().filter(|p| query.matches(p)).count(), 0);

        let query = CatalogQuery::new().with_category("Mice");
        assert_eq!(
            names(products.iter().filter(|p| query.matches(p))),
            vec!["Ultra Gaming Mouse"]
        );
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let products = seed_products(Currency::USD);
        let query = CatalogQuery::new().with_price_range(
            Some(Money::new(6999, Currency::USD)),
            Some(Money::new(12999, Currency::USD)),
        );
        assert_eq!(
            names(products.iter().filter(|p| query.matches(p))),
            vec!["Pro Gaming Keyboard", "Ultra Gaming Mouse", "Gaming Controller"]
        );
    }

    #[test]
    fn test_storefront_default_range() {
        let products = seed_products(Currency::USD);
        let query = CatalogQuery::storefront(Money::from_decimal(100.0, Currency::USD));
        assert!(!query.filters_category());
        assert_eq!(products.iter().filter(|p| query.matches(p)).count(), 3);
    }
}

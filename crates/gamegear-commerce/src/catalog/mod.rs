//! Product catalog module.
//!
//! Contains the product type, the product store, listing queries,
//! admin input validation and dashboard statistics.

mod input;
mod product;
mod query;
mod seed;
mod stats;
mod store;

pub use input::{NewProductInput, ProductEdit, PLACEHOLDER_IMAGE_URL};
pub use product::{NewProduct, Product};
pub use query::{CatalogQuery, ALL_CATEGORIES};
pub use seed::seed_products;
pub use stats::{CatalogStats, CategoryCount, DEFAULT_LOW_STOCK_THRESHOLD};
pub use store::{CatalogEvent, ProductStore};

//! Admin form input for creating and editing products.
//!
//! Form fields arrive as raw strings; validation turns them into typed
//! product records or a [`CommerceError`] naming the offending field.

use crate::catalog::{NewProduct, Product};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Image used when a new product is submitted without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=Gaming+Accessory";

/// The "add product" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProductInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
    pub stock: String,
    pub featured: bool,
}

impl NewProductInput {
    /// Validate the form and build a product record without an id.
    ///
    /// Name, price and category are required. A blank or unreadable stock
    /// count is treated as zero, and a blank image falls back to
    /// [`PLACEHOLDER_IMAGE_URL`].
    pub fn validate(&self, currency: Currency) -> Result<NewProduct, CommerceError> {
        let name = required("name", &self.name)?;
        let price_raw = required("price", &self.price)?;
        let category = required("category", &self.category)?;
        let price = Money::parse(price_raw, currency)?;

        let stock = self.stock.trim().parse::<u32>().unwrap_or(0);
        let image_url = match self.image_url.trim() {
            "" => PLACEHOLDER_IMAGE_URL.to_string(),
            url => url.to_string(),
        };

        Ok(NewProduct {
            name: name.to_string(),
            description: self.description.clone(),
            price,
            category: category.to_string(),
            image_url,
            stock,
            featured: self.featured,
        })
    }
}

/// The "edit product" form, prefilled from an existing record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductEdit {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
    pub stock: String,
    pub featured: bool,
}

impl ProductEdit {
    /// Prefill the form from the record being edited.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display_amount(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            stock: product.stock.to_string(),
            featured: product.featured,
        }
    }

    /// Validate the form and build the replacement for `current`.
    ///
    /// The id and currency come from `current`. Unlike the add form, the
    /// stock field must hold a non-negative whole number.
    pub fn apply(&self, current: &Product) -> Result<Product, CommerceError> {
        let name = required("name", &self.name)?;
        let price_raw = required("price", &self.price)?;
        let category = required("category", &self.category)?;
        let price = Money::parse(price_raw, current.price.currency)?;

        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| CommerceError::InvalidField {
                field: "stock",
                message: format!("'{}' is not a non-negative whole number", self.stock.trim()),
            })?;

        Ok(Product {
            id: current.id.clone(),
            name: name.to_string(),
            description: self.description.clone(),
            price,
            category: category.to_string(),
            image_url: self.image_url.clone(),
            stock,
            featured: self.featured,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, CommerceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CommerceError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

//! The catalog every fresh store starts from.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// (id, name, description, price in major units, category, image, stock, featured)
type SeedRow = (&'static str, &'static str, &'static str, f64, &'static str, &'static str, u32, bool);

const SEED: &[SeedRow] = &[
    (
        "1",
        "Pro Gaming Keyboard",
        "Mechanical RGB gaming keyboard with programmable keys",
        129.99,
        "Keyboards",
        "https://images.unsplash.com/photo-1618384887929-16ec33fab9ef?ixlib=rb-4.0.3",
        15,
        true,
    ),
    (
        "2",
        "Ultra Gaming Mouse",
        "High precision gaming mouse with adjustable DPI",
        79.99,
        "Mice",
        "https://images.unsplash.com/photo-1605773527852-c546a8584ea3?ixlib=rb-4.0.3",
        20,
        true,
    ),
    (
        "3",
        "Immersive Gaming Headset",
        "Surround sound headset with noise-cancelling microphone",
        149.99,
        "Headsets",
        "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?ixlib=rb-4.0.3",
        10,
        true,
    ),
    (
        "4",
        "Gaming Mouse Pad",
        "Extra large gaming mouse pad with RGB lighting",
        39.99,
        "Accessories",
        "https://images.unsplash.com/photo-1661266327927-04becc32fd7f?ixlib=rb-4.0.3",
        30,
        false,
    ),
    (
        "5",
        "Gaming Controller",
        "Ergonomic gaming controller with customizable buttons",
        69.99,
        "Controllers",
        "https://images.unsplash.com/photo-1600080972464-8e5f35f63d08?ixlib=rb-4.0.3",
        25,
        false,
    ),
    (
        "6",
        "Gaming Chair",
        "Comfortable gaming chair with lumbar support",
        299.99,
        "Furniture",
        "https://images.unsplash.com/photo-1598550476439-6847785fcea6?ixlib=rb-4.0.3",
        5,
        true,
    ),
];

/// Build the seed catalog priced in the given currency.
pub fn seed_products(currency: Currency) -> Vec<Product> {
    SEED.iter()
        .map(
            |&(id, name, description, price, category, image_url, stock, featured)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                price: Money::from_decimal(price, currency),
                category: category.to_string(),
                image_url: image_url.to_string(),
                stock,
                featured,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_prices_in_usd() {
        let products = seed_products(Currency::USD);
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].price, Money::new(12999, Currency::USD));
        assert_eq!(products[5].price, Money::new(29999, Currency::USD));
    }

    #[test]
    fn test_seed_prices_follow_currency_precision() {
        let products = seed_products(Currency::JPY);
        assert_eq!(products[0].price, Money::new(130, Currency::JPY));
        assert_eq!(products[0].price.display(), "\u{00a5}130");
        assert!(products.iter().all(|p| p.price.amount_cents <= 500));
    }
}

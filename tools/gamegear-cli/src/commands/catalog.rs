//! Catalog browsing commands.

use anyhow::{bail, Context as _, Result};
use gamegear_sdk::prelude::*;

use super::{ProductsArgs, ShowArgs};
use crate::context::Context;
use crate::output::stock_badge;

const PRODUCT_WIDTHS: [usize; 5] = [4, 28, 12, 10, 14];

/// Run the products command.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront()?;
    let currency = shop.products().currency();

    let mut query = shop.default_query();
    if let Some(text) = args.search {
        query = query.with_text(text);
    }
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    let min = match args.min {
        Some(raw) => Some(Money::parse(&raw, currency).context("Invalid --min price")?),
        None => query.min_price,
    };
    let max = match args.max {
        Some(raw) => Some(Money::parse(&raw, currency).context("Invalid --max price")?),
        None => query.max_price,
    };
    query = query.with_price_range(min, max);

    let found = shop.products().search(&query);
    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header("Products");
    if found.is_empty() {
        ctx.output.info("No products found. Try adjusting your search or filter criteria.");
        return Ok(());
    }
    print_products(&found, shop.config().store.low_stock_threshold, ctx);
    ctx.output.info("");
    ctx.output.info(&format!("Showing {} of {} product(s)", found.len(), shop.products().len()));

    Ok(())
}

/// Run the show command.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront()?;
    let id = ProductId::new(args.id);
    let Some(product) = shop.products().get_by_id(&id) else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv(
        "Stock",
        &stock_badge(product.stock, shop.config().store.low_stock_threshold),
    );
    if product.featured {
        ctx.output.kv("Featured", "yes");
    }
    ctx.output.kv("Image", &product.image_url);
    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }
    if let Some(line) = shop.cart().get(&id) {
        ctx.output.info(&format!("{} already in your cart", line.quantity));
    }

    Ok(())
}

/// Run the featured command.
pub fn featured(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront()?;
    let found = shop.products().list_featured();

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header("Featured Products");
    print_products(&found, shop.config().store.low_stock_threshold, ctx);
    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront()?;
    let categories = shop.products().categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        let count = shop.products().list_by_category(category).len();
        ctx.output.list_item(&format!("{} ({})", category, count));
    }
    Ok(())
}

/// Run the stats command.
pub fn stats(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront()?;
    if !shop.auth().is_admin() {
        bail!("Admin access required. Run `gamegear login` with an admin account.");
    }

    let stats = shop.stats();
    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("Total products", &stats.total_products.to_string());
    ctx.output.kv("Total stock", &stats.total_stock.to_string());
    ctx.output.kv(
        &format!("Low stock (< {})", stats.low_stock_threshold),
        &stats.low_stock_products.to_string(),
    );

    ctx.output.header("Category Distribution");
    for entry in &stats.categories {
        ctx.output.table_row(
            &[
                &entry.category,
                &entry.count.to_string(),
                &format!("{:.0}%", entry.percentage),
            ],
            &[16, 4, 5],
        );
    }

    let low: Vec<&Product> = shop
        .products()
        .products()
        .iter()
        .filter(|p| p.is_low_stock(stats.low_stock_threshold))
        .collect();
    if !low.is_empty() {
        ctx.output.header("Needs Restock");
        for product in low {
            ctx.output.warn(&format!("{} ({} left)", product.name, product.stock));
        }
    }

    Ok(())
}

fn print_products(products: &[&Product], low_stock_threshold: u32, ctx: &Context) {
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &PRODUCT_WIDTHS);
    ctx.output.table_rule(&PRODUCT_WIDTHS);

    for product in products {
        let name = if product.featured {
            format!("{} *", product.name)
        } else {
            product.name.clone()
        };
        let price = product.price.display();
        // Colored last, so escape codes never shift a padded column.
        let stock = stock_badge(product.stock, low_stock_threshold);

        ctx.output.table_row(
            &[product.id.as_str(), &name, &product.category, &price, &stock],
            &PRODUCT_WIDTHS,
        );
    }
}

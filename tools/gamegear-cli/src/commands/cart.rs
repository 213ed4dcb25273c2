//! Cart commands.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use gamegear_sdk::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;

const CART_WIDTHS: [usize; 4] = [28, 10, 4, 10];

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront()?;

    // Collect change messages the way the storefront shows notifications.
    let notices = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notices);
    shop.cart_mut()
        .subscribe(move |event: &CartEvent| sink.borrow_mut().push(event.to_string()));

    match args.command {
        Some(CartCommand::Show) | None => {
            show_cart(shop.cart(), ctx);
            return Ok(());
        }
        Some(CartCommand::Add { id, quantity }) => add(&mut shop, &id, quantity, ctx)?,
        Some(CartCommand::Set { id, quantity }) => {
            let id = ProductId::new(id);
            if shop.cart().get(&id).is_none() {
                bail!("Product '{}' is not in your cart", id);
            }
            shop.cart_mut().set_quantity(&id, quantity);
            if let Some(line) = shop.cart().get(&id) {
                if line.quantity < quantity {
                    ctx.output
                        .warn(&format!("Only {} of {} in stock", line.quantity, line.product.name));
                }
            }
        }
        Some(CartCommand::Remove { id }) => {
            let id = ProductId::new(id);
            if !shop.cart_mut().remove(&id) {
                bail!("Product '{}' is not in your cart", id);
            }
        }
        Some(CartCommand::Clear { yes }) => {
            if shop.cart().is_empty() {
                ctx.output.info("Your cart is already empty");
                return Ok(());
            }
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every item from your cart?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Cancelled");
                    return Ok(());
                }
            }
            shop.cart_mut().clear();
        }
    }

    shop.save_cart().context("Failed to save cart")?;

    for notice in notices.borrow().iter() {
        ctx.output.success(notice);
    }
    show_cart(shop.cart(), ctx);
    Ok(())
}

fn add(shop: &mut Storefront<FileStore>, id: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let id = ProductId::new(id);
    let before = shop.cart().get(&id).map_or(0, |line| line.quantity);

    if !shop.add_to_cart(&id, quantity) {
        bail!("Product '{}' not found", id);
    }

    let after = shop.cart().get(&id).map_or(0, |line| line.quantity);
    if after == 0 {
        bail!("Product '{}' is out of stock", id);
    }
    if after - before < quantity {
        ctx.output.warn(&format!(
            "Only {} in stock, your cart holds {}",
            shop.cart().get(&id).map_or(0, |line| line.product.stock),
            after
        ));
    }
    Ok(())
}

fn show_cart(cart: &CartStore, ctx: &Context) {
    let summary = cart.summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "summary": summary,
        }));
        return;
    }

    ctx.output.header("Your Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Run `gamegear products` to start shopping.");
        return;
    }

    ctx.output.table_row(&["PRODUCT", "PRICE", "QTY", "TOTAL"], &CART_WIDTHS);
    ctx.output.table_rule(&CART_WIDTHS);
    for line in cart.items() {
        let qty = if line.can_increment() {
            line.quantity.to_string()
        } else {
            format!("{}!", line.quantity)
        };
        ctx.output.table_row(
            &[
                &line.product.name,
                &line.product.price.display(),
                &qty,
                &line.line_total().display(),
            ],
            &CART_WIDTHS,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.item_count),
        &summary.subtotal.display(),
    );
    ctx.output.kv("Shipping", &summary.shipping_label());
    ctx.output.kv("Tax", &summary.tax_label());
    ctx.output.kv("Total", &summary.total.display());
}

//! Checkout command.

use anyhow::{Context as _, Result};
use gamegear_sdk::prelude::*;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront()?;

    let email = args
        .email
        .or_else(|| shop.auth().current_user().map(|u| u.email.clone()))
        .unwrap_or_default();
    let payment = if args.paypal {
        PaymentMethod::PayPal
    } else {
        PaymentMethod::card(
            args.card_number.unwrap_or_default(),
            args.card_expiry.unwrap_or_default(),
            args.card_cvc.unwrap_or_default(),
        )
    };
    let form = CheckoutForm {
        first_name: args.first_name.unwrap_or_default(),
        last_name: args.last_name.unwrap_or_default(),
        email,
        address: args.address.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        state: args.state.unwrap_or_default(),
        zip_code: args.zip.unwrap_or_default(),
        payment,
    };

    let order = match shop.checkout(&form) {
        Ok(order) => order,
        Err(CheckoutError::EmptyCart) => {
            ctx.output.info("Your cart is empty. Run `gamegear cart add <id>` first.");
            return Ok(());
        }
        Err(e) => return Err(e).context("Checkout failed"),
    };

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success("Order placed successfully!");
    ctx.output.header("Order Confirmation");
    ctx.output.kv("Order", order.order_id.as_str());
    ctx.output.kv("Name", &order.customer_name);
    ctx.output.kv("Email", &order.email);
    ctx.output.kv("Ship to", &order.shipping_address);
    ctx.output.kv("Payment", &order.payment_method);
    ctx.output.kv("Placed", &order.placed_at.format("%Y-%m-%d %H:%M UTC").to_string());
    for line in &order.lines {
        ctx.output.list_item(&format!(
            "{} x {} = {}",
            line.quantity,
            line.name,
            line.line_total.display()
        ));
    }
    ctx.output.kv("Total", &order.total.display());
    ctx.output.info("A confirmation email is on its way.");

    Ok(())
}
